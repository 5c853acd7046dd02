//! The elementwise algebra of sample streams.
//!
//! Every symbolic operator on [`SampleStream`](crate::SampleStream) is a thin
//! wrapper over two generic higher-order primitives:
//!
//! - [`transform`](crate::SampleStream::transform) - in-place unary map, also
//!   available as a binary map against a second stream;
//! - [`zip_with`](crate::SampleStream::zip_with) - clone the left operand and
//!   combine it elementwise with the right.
//!
//! ## Module Organization
//!
//! - [`transform`] - the higher-order primitives and their fallible variants
//! - `kernels` - the named elementwise functions backing each operator
//! - [`arithmetic`] - `+ - * / % ^ & |` in stream/stream, stream/scalar and
//!   scalar/stream form, compound assignment, and the unary operators
//! - [`shift`] - positional shifts, additive rotation, and concatenation
//!
//! ## Quick Start
//!
//! ```rust
//! use sample_stream::SampleStream;
//!
//! let mut stream = SampleStream::from_copy(&[0.1f64, 0.2, 0.3]);
//! stream *= 2.0;
//! assert_eq!(stream.as_slice(), &[0.2, 0.4, 0.6]);
//!
//! let offset = &stream + 1.0;
//! assert_eq!(offset.as_slice(), &[1.2, 1.4, 1.6]);
//! // The receiver of a non-mutating operator is left untouched.
//! assert_eq!(stream.as_slice(), &[0.2, 0.4, 0.6]);
//! ```

pub mod arithmetic;
pub(crate) mod kernels;
pub mod shift;
pub mod transform;
