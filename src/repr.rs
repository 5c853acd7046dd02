//! Core sample stream representation and storage model.
//!
//! This module provides the fundamental building block of the crate: a
//! fixed-length, contiguous buffer of numeric samples paired with an explicit
//! description of who owns that buffer and how it is released.
//!
//! # Architecture Overview
//!
//! - [`SampleStream<T>`] - the stream itself: storage plus a fixed length
//! - `Storage<T>` - internal enum with one variant per [`Ownership`] mode
//! - Generic over any type `T` that implements the [`Sample`] trait
//!
//! # Key Design Principles
//!
//! ## Explicit ownership
//! Each constructor selects exactly one ownership mode, fixed for the
//! stream's lifetime. `Take` and `Borrow` construction is zero-copy; only
//! `Copy` duplicates data; `Shared` joins reference-counted ownership.
//!
//! ## Move-only streams
//! A stream is never duplicated implicitly. [`SampleStream::clone`] is the
//! single, deliberate deep-copy operation and always produces an independent
//! Copy-mode stream.
//!
//! ## Fixed length
//! No operation resizes a stream in place. Concatenation allocates a new
//! stream; every other operation preserves `len()`.
//!
//! # Examples
//!
//! ```rust
//! use sample_stream::{Ownership, SampleStream};
//!
//! let stream = SampleStream::from_copy(&[0.1f64, 0.2, 0.3]);
//! assert_eq!(stream.len(), 3);
//! assert_eq!(stream.ownership(), Ownership::Copy);
//! assert_eq!(stream[-1], 0.3);
//!
//! let dup = stream.clone();
//! assert_eq!(dup, stream);
//! assert_ne!(dup.as_ptr(), stream.as_ptr());
//! ```
use std::fmt;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;
use std::slice;
use std::sync::Arc;

use crate::error::SampleStreamError;
use crate::ownership::{Ownership, Releaser};
use crate::traits::Sample;

/// Backing storage for a stream, one variant per ownership mode.
enum Storage<T> {
    /// Take mode: exclusive owner, released by the caller-supplied strategy.
    Taken {
        ptr: NonNull<T>,
        release: Option<Releaser<T>>,
    },
    /// Borrow mode: raw view into memory owned elsewhere, never released.
    Borrowed { ptr: NonNull<T> },
    /// Copy mode: exclusive owner of a fresh allocation.
    Copied(Box<[T]>),
    /// Shared mode: reference-counted participant, last holder frees.
    Shared(Arc<[T]>),
}

/// A fixed-length, contiguous buffer of numeric samples with an explicit
/// ownership mode.
///
/// The element type `T` is constrained by [`Sample`]; the arithmetic operator
/// algebra is available for every sample type, the bitwise algebra for
/// [`BitSample`](crate::BitSample) types only.
///
/// Streams are move-only. Pass them by reference or transfer them by move;
/// use [`clone`](SampleStream::clone) for a deliberate deep copy.
pub struct SampleStream<T: Sample> {
    storage: Storage<T>,
    len: usize,
}

impl<T: Sample> SampleStream<T> {
    /// Constructs a Take-mode stream over a caller-allocated buffer.
    ///
    /// The stream becomes the sole owner of `data` and invokes `release`
    /// exactly once when it is dropped, passing back the pointer and `len`.
    ///
    /// # Panics
    /// Panics if `data` is null while `len` is nonzero.
    ///
    /// # Safety
    /// `data` must point to `len` initialized elements of `T` (or be null
    /// when `len == 0`), must remain valid and unaliased until the releaser
    /// runs, and `release` must be the correct way to free that allocation.
    pub unsafe fn from_owned(data: *mut T, len: usize, release: Releaser<T>) -> Self {
        let ptr = Self::check_raw(data, len);
        Self {
            storage: Storage::Taken {
                ptr,
                release: Some(release),
            },
            len,
        }
    }

    /// Constructs a Borrow-mode stream viewing a buffer owned elsewhere.
    ///
    /// The stream stores the raw reference only and never releases it.
    ///
    /// # Panics
    /// Panics if `data` is null while `len` is nonzero.
    ///
    /// # Safety
    /// `data` must point to `len` initialized elements of `T` (or be null
    /// when `len == 0`) and the memory must stay valid, and not be accessed
    /// through any other path, for the stream's entire lifetime.
    pub unsafe fn from_borrowed(data: *mut T, len: usize) -> Self {
        let ptr = Self::check_raw(data, len);
        Self {
            storage: Storage::Borrowed { ptr },
            len,
        }
    }

    /// Constructs a Copy-mode stream by duplicating `data` into a fresh
    /// allocation owned exclusively by the stream.
    pub fn from_copy(data: &[T]) -> Self {
        Self {
            len: data.len(),
            storage: Storage::Copied(data.to_vec().into_boxed_slice()),
        }
    }

    /// Constructs a Shared-mode stream participating in reference-counted
    /// ownership of `buffer`.
    ///
    /// The stream never releases the buffer itself; the allocation is freed
    /// when the last shared holder drops.
    pub fn from_shared(buffer: Arc<[T]>) -> Self {
        Self {
            len: buffer.len(),
            storage: Storage::Shared(buffer),
        }
    }

    /// Consumes a vector and wraps it as a Take-mode stream.
    ///
    /// The installed releaser drops the boxed slice. Algebraic results and
    /// concatenation build their output through this constructor.
    pub fn from_vec(samples: Vec<T>) -> Self {
        let len = samples.len();
        let data = Box::into_raw(samples.into_boxed_slice());
        let release: Releaser<T> = Box::new(|ptr, len| {
            // SAFETY: reassembles the boxed slice leaked below.
            unsafe {
                drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                    ptr.as_ptr(),
                    len,
                )));
            }
        });
        // SAFETY: the pointer came from `Box::into_raw` above and the
        // releaser reconstructs that same allocation exactly once.
        unsafe { Self::from_owned(data.cast::<T>(), len, release) }
    }

    /// Constructs a zero-filled Take-mode stream of `len` samples.
    pub fn zeros(len: usize) -> Self {
        Self::from_vec(vec![T::zero(); len])
    }

    fn check_raw(data: *mut T, len: usize) -> NonNull<T> {
        match NonNull::new(data) {
            Some(ptr) => ptr,
            None if len == 0 => NonNull::dangling(),
            None => panic!("{}", SampleStreamError::NullBuffer { len }),
        }
    }

    /// Returns the number of samples in this stream.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of samples in this stream.
    ///
    /// Alias for [`len`](SampleStream::len).
    #[inline]
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Returns true when the stream holds no samples.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the total size of the sample data in bytes.
    #[inline]
    pub const fn byte_len(&self) -> usize {
        self.len * size_of::<T>()
    }

    /// Returns the ownership mode this stream currently operates under.
    ///
    /// A `Shared` stream that has been mutated while other holders were
    /// alive reports `Copy` afterwards, since mutation detaches it onto an
    /// exclusive buffer (see [`as_mut_slice`](SampleStream::as_mut_slice)).
    pub const fn ownership(&self) -> Ownership {
        match self.storage {
            Storage::Taken { .. } => Ownership::Take,
            Storage::Borrowed { .. } => Ownership::Borrow,
            Storage::Copied(_) => Ownership::Copy,
            Storage::Shared(_) => Ownership::Shared,
        }
    }

    /// Returns a raw pointer to the first sample.
    pub fn as_ptr(&self) -> *const T {
        match &self.storage {
            Storage::Taken { ptr, .. } | Storage::Borrowed { ptr } => ptr.as_ptr(),
            Storage::Copied(buffer) => buffer.as_ptr(),
            Storage::Shared(buffer) => buffer.as_ptr(),
        }
    }

    /// Returns the samples as an immutable slice.
    pub fn as_slice(&self) -> &[T] {
        match &self.storage {
            Storage::Taken { ptr, .. } | Storage::Borrowed { ptr } => {
                // SAFETY: construction guaranteed `ptr` addresses `len`
                // initialized elements for as long as the stream lives.
                unsafe { slice::from_raw_parts(ptr.as_ptr(), self.len) }
            }
            Storage::Copied(buffer) => buffer,
            Storage::Shared(buffer) => &buffer[..self.len],
        }
    }

    /// Returns the samples as a mutable slice.
    ///
    /// A `Shared` stream whose buffer has other live holders is detached
    /// onto an exclusive copy first, so mutation never observes or disturbs
    /// the other holders. A uniquely held shared buffer is mutated in place.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.promote();
        let len = self.len;
        match &mut self.storage {
            Storage::Taken { ptr, .. } | Storage::Borrowed { ptr } => {
                // SAFETY: same contract as `as_slice`, and both modes hand
                // the stream exclusive access for its lifetime.
                unsafe { slice::from_raw_parts_mut(ptr.as_ptr(), len) }
            }
            Storage::Copied(buffer) => &mut buffer[..],
            Storage::Shared(buffer) => match Arc::get_mut(buffer) {
                Some(samples) => &mut samples[..len],
                None => unreachable!("aliased shared buffers are detached by promote()"),
            },
        }
    }

    /// Returns the sample data as raw bytes in native-endian order.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }

    /// Detaches an aliased shared buffer onto an exclusive copy.
    fn promote(&mut self) {
        if let Storage::Shared(buffer) = &mut self.storage {
            if Arc::get_mut(buffer).is_none() {
                tracing::trace!(len = self.len, "detaching shared buffer before mutation");
                let detached = buffer[..self.len].to_vec().into_boxed_slice();
                self.storage = Storage::Copied(detached);
            }
        }
    }

    /// Returns a reference to the sample at `index`, or `None` when the
    /// index is out of bounds after negative-index normalization.
    pub fn get(&self, index: isize) -> Option<&T> {
        let idx = if index < 0 {
            index + self.len as isize
        } else {
            index
        };
        if idx < 0 || idx as usize >= self.len {
            return None;
        }
        Some(&self.as_slice()[idx as usize])
    }

    /// Normalizes a possibly negative index into `[0, len)`.
    ///
    /// Negative indices address from the back, Python style: `-1` is the
    /// last sample. Faults when the normalized index is out of range.
    fn normalize_index(&self, index: isize) -> usize {
        let idx = if index < 0 {
            index + self.len as isize
        } else {
            index
        };
        if idx < 0 || idx as usize >= self.len {
            panic!(
                "{}",
                SampleStreamError::IndexOutOfBounds {
                    index,
                    len: self.len
                }
            );
        }
        idx as usize
    }
}

impl<T: Sample> Drop for SampleStream<T> {
    fn drop(&mut self) {
        if let Storage::Taken { ptr, release } = &mut self.storage {
            if let Some(release) = release.take() {
                tracing::trace!(len = self.len, "releasing taken sample buffer");
                release(*ptr, self.len);
            }
        }
    }
}

impl<T: Sample> Clone for SampleStream<T> {
    /// Deliberate deep copy: an independent Copy-mode stream with
    /// elementwise-equal contents in a distinct backing buffer.
    fn clone(&self) -> Self {
        Self::from_copy(self.as_slice())
    }
}

impl<T: Sample> PartialEq for SampleStream<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.as_slice() == other.as_slice()
    }
}

impl<T: Sample> Index<isize> for SampleStream<T> {
    type Output = T;

    fn index(&self, index: isize) -> &T {
        let idx = self.normalize_index(index);
        &self.as_slice()[idx]
    }
}

impl<T: Sample> IndexMut<isize> for SampleStream<T> {
    fn index_mut(&mut self, index: isize) -> &mut T {
        let idx = self.normalize_index(index);
        &mut self.as_mut_slice()[idx]
    }
}

impl<T: Sample> fmt::Display for SampleStream<T> {
    /// Debugging representation: sample count, byte size, and the identity
    /// of the backing storage. Not part of any durable contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SampleStream({} Samples [{} Bytes] @ {:p})",
            self.len,
            self.byte_len(),
            self.as_ptr()
        )
    }
}

impl<T: Sample> fmt::Debug for SampleStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SampleStream")
            .field("dtype", &T::LABEL)
            .field("ownership", &self.ownership())
            .field("len", &self.len)
            .field("samples", &self.as_slice())
            .finish()
    }
}
