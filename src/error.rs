//! Error types and result utilities for sample stream operations.

use thiserror::Error;

/// Convenience type alias for results that may contain a [`SampleStreamError`].
pub type SampleStreamResult<T> = Result<T, SampleStreamError>;

/// Error types that can occur during sample stream operations.
///
/// Every variant describes a contract violation. The operator and indexing
/// surfaces treat these as programmer errors and panic with the variant's
/// display message; the `try_` method variants return them as `Err` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleStreamError {
    /// Two streams were combined elementwise without matching lengths.
    ///
    /// A right operand of length 1 broadcasts and never produces this error.
    #[error("length mismatch: left stream holds {left} samples, right stream holds {right}")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// An index fell outside `[0, len)` after negative-index normalization.
    #[error("index {index} out of bounds for a stream of {len} samples")]
    IndexOutOfBounds {
        /// The index as originally supplied, before normalization.
        index: isize,
        /// Length of the stream that was indexed.
        len: usize,
    },

    /// A raw constructor was handed a null buffer with a nonzero length.
    #[error("null sample buffer with nonzero length {len}")]
    NullBuffer {
        /// The length that was claimed for the null buffer.
        len: usize,
    },
}
