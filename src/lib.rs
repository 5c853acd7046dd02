// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)]
// Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::let_unit_value)] // Avoids binding `()` to variables
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_safety_doc)] // Docs for `unsafe` functions
#![deny(missing_docs)] // Documentation is a must for release

//! # SampleStream
//!
//! A generic, fixed-length numeric buffer abstraction with an explicit
//! buffer-ownership model and a uniform elementwise algebra.
//!
//! ## Overview
//!
//! A [`SampleStream<T>`] wraps a contiguous block of homogeneous numeric
//! samples together with a description of who owns that memory and how it is
//! released. On top of that sit elementwise arithmetic and bitwise
//! operators, positional shifting and rotation, concatenation, and generic
//! mapping (`transform`, `zip_with`) - all generic over any [`Sample`]
//! element type.
//!
//! Decoders and other producers are expected to construct streams through
//! the ownership-mode constructors (typically [`SampleStream::from_copy`] or
//! [`SampleStream::from_vec`]) and consume them through the algebra; the
//! crate makes no assumption about how the bytes were produced.
//!
//! ## Ownership Modes
//!
//! Each stream operates under exactly one [`Ownership`] mode, fixed at
//! construction:
//!
//! - **Take** - sole owner of a caller-provided buffer; a caller-supplied
//!   releaser runs exactly once at end of life ([`SampleStream::from_owned`],
//!   [`SampleStream::from_vec`]).
//! - **Borrow** - raw zero-copy view into memory owned elsewhere
//!   ([`SampleStream::from_borrowed`]).
//! - **Copy** - owns a fresh duplicate of the source range
//!   ([`SampleStream::from_copy`]).
//! - **Shared** - participates in reference-counted ownership; the last
//!   holder frees the buffer ([`SampleStream::from_shared`]).
//!
//! ```rust
//! use std::sync::Arc;
//! use sample_stream::{Ownership, SampleStream};
//!
//! let buffer: Arc<[i32]> = Arc::from(vec![1, 2, 3]);
//! let shared = SampleStream::from_shared(Arc::clone(&buffer));
//! assert_eq!(shared.ownership(), Ownership::Shared);
//!
//! let copied = SampleStream::from_copy(&buffer);
//! assert_eq!(copied.ownership(), Ownership::Copy);
//! ```
//!
//! Streams are move-only: there is no implicit duplication, and
//! [`SampleStream::clone`] is the single deliberate deep-copy operation.
//!
//! ## Quick Start
//!
//! ```rust
//! use sample_stream::SampleStream;
//!
//! let mut samples = SampleStream::from_copy(&[0.1f64, 0.2, 0.3, 0.4]);
//!
//! // In-place algebra rewrites the stream's own buffer.
//! samples *= 2.0;
//! assert_eq!(samples.as_slice(), &[0.2, 0.4, 0.6, 0.8]);
//!
//! // Non-mutating operators clone the stream operand.
//! let louder = &samples + 1.0;
//! assert_eq!(louder.as_slice(), &[1.2, 1.4, 1.6, 1.8]);
//! assert_eq!(samples.as_slice(), &[0.2, 0.4, 0.6, 0.8]);
//!
//! // Negative indices address from the back.
//! assert_eq!(samples[-1], 0.8);
//! ```
//!
//! ## Generic Mapping
//!
//! Every symbolic operator is a thin wrapper over two higher-order
//! primitives, which are public and usable directly. A length-1 right
//! operand broadcasts against every element of the left:
//!
//! ```rust
//! use sample_stream::SampleStream;
//!
//! let wave = SampleStream::from_vec(vec![1.0f32, -1.0, 1.0]);
//! let gain = SampleStream::from_vec(vec![0.5f32]);
//! let scaled = SampleStream::zip_with(&wave, &gain, |a, b| a * b);
//! assert_eq!(scaled.as_slice(), &[0.5, -0.5, 0.5]);
//! ```
//!
//! ## Error Handling
//!
//! Contract violations - mismatched operand lengths, out-of-range indices,
//! null buffers with nonzero length - are programmer errors: the operator
//! and indexing surfaces fail fast with a panic. The `try_` method variants
//! surface the same conditions as [`SampleStreamError`] values for callers
//! who want to check first:
//!
//! ```rust
//! use sample_stream::{SampleStream, SampleStreamError};
//!
//! let mut a = SampleStream::from_vec(vec![1i32, 2, 3]);
//! let b = SampleStream::from_vec(vec![1i32, 2]);
//! let err = a.try_transform_with(|x, y| x + y, &b).unwrap_err();
//! assert_eq!(err, SampleStreamError::LengthMismatch { left: 3, right: 2 });
//! ```
//!
//! Numeric edge cases (division by zero, remainder by zero) are not
//! intercepted; they follow the element type's native behavior.
//!
//! ## Concurrency
//!
//! Streams are single-threaded values. Shared mode synchronizes reference
//! counting only, never element access; mutating a shared stream whose
//! buffer has other live holders detaches it onto an exclusive copy first.

mod error;
pub mod iterators;
pub mod operations;
mod ownership;
mod repr;
pub mod traits;

pub use crate::error::{SampleStreamError, SampleStreamResult};
pub use crate::ownership::{Ownership, Releaser};
pub use crate::repr::SampleStream;
pub use crate::traits::{BitSample, Sample};

/// Array of supported stream element types as string identifiers.
pub const SUPPORTED_DTYPES: [&str; 5] = ["i16", "i32", "i64", "f32", "f64"];
