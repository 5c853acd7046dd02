//! Ownership modes describing how a stream relates to its backing buffer.

use std::ptr::NonNull;

/// Release strategy invoked exactly once when a Take-mode stream drops.
///
/// The callback receives the buffer pointer and the element count it was
/// constructed with. [`SampleStream::from_vec`] installs a releaser that
/// reconstructs and drops the boxed slice it leaked; callers of
/// [`SampleStream::from_owned`] supply whatever matches their allocator.
///
/// [`SampleStream::from_vec`]: crate::SampleStream::from_vec
/// [`SampleStream::from_owned`]: crate::SampleStream::from_owned
pub type Releaser<T> = Box<dyn FnOnce(NonNull<T>, usize)>;

/// How a [`SampleStream`](crate::SampleStream) relates to its backing buffer.
///
/// The mode is selected by the constructor used and never changes for the
/// lifetime of the stream. The set is closed; storage code dispatches over it
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// Sole owner of a caller-provided buffer; a caller-supplied release
    /// strategy runs exactly once at end of life.
    Take,
    /// Raw view into memory owned elsewhere; never released by the stream.
    /// The stream must not outlive the referenced memory.
    Borrow,
    /// Sole owner of a freshly allocated duplicate of the source range.
    Copy,
    /// One participant in reference-counted ownership; the buffer is freed
    /// when the last shared holder drops.
    Shared,
}

impl Ownership {
    /// Returns true when the stream holds its buffer exclusively.
    pub const fn is_exclusive(&self) -> bool {
        matches!(self, Ownership::Take | Ownership::Copy)
    }

    /// Returns true when construction under this mode duplicates no data.
    pub const fn is_zero_copy(&self) -> bool {
        !matches!(self, Ownership::Copy)
    }
}
