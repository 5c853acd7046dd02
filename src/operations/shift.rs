//! Positional shifts, additive rotation, and concatenation.
//!
//! Shifting moves whole elements within the buffer - it is not a bit-shift
//! of each value. Vacated positions are filled with the element type's zero.
//! The shift count follows a compatibility-critical reduction rule (see
//! [`shift_left`](SampleStream::shift_left)).
//!
//! `<<` and `>>` are overloaded twice, matching sequence semantics rather
//! than bit-shift semantics: with an integer count they produce a shifted
//! clone, and between two streams **both** spellings concatenate
//! left-then-right.

use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

use super::kernels;
use crate::repr::SampleStream;
use crate::traits::Sample;

impl<T: Sample> SampleStream<T> {
    /// Shifts all elements toward index 0 by `n` positions, zero-filling the
    /// vacated tail. In place; returns `&mut self` for chaining.
    ///
    /// The count is normalized before use, and the exact rule is part of the
    /// contract:
    /// - when `|n| >= len`, `n` is reduced to `n % len` (sign-preserving
    ///   remainder - not a true modular reduction);
    /// - `n == 0` after reduction is a no-op;
    /// - `n < 0` redirects into [`shift_right`](SampleStream::shift_right)
    ///   of `-n`.
    ///
    /// Empty streams are left untouched.
    ///
    /// ```rust
    /// use sample_stream::SampleStream;
    ///
    /// let mut stream = SampleStream::from_vec(vec![1i32, 2, 3, 4, 5]);
    /// stream.shift_left(2);
    /// assert_eq!(stream.as_slice(), &[3, 4, 5, 0, 0]);
    /// ```
    pub fn shift_left(&mut self, n: isize) -> &mut Self {
        let len = self.len();
        if len == 0 {
            return self;
        }
        let mut shift = n;
        if shift.unsigned_abs() >= len {
            shift %= len as isize;
        }
        if shift == 0 {
            return self;
        }
        if shift < 0 {
            return self.shift_right(-shift);
        }
        let shift = shift as usize;
        let samples = self.as_mut_slice();
        samples.copy_within(shift.., 0);
        for sample in &mut samples[len - shift..] {
            *sample = T::zero();
        }
        self
    }

    /// Shifts all elements away from index 0 by `n` positions, zero-filling
    /// the vacated head. Same count normalization as
    /// [`shift_left`](SampleStream::shift_left); negative `n` redirects into
    /// a left shift of `-n`.
    pub fn shift_right(&mut self, n: isize) -> &mut Self {
        let len = self.len();
        if len == 0 {
            return self;
        }
        let mut shift = n;
        if shift.unsigned_abs() >= len {
            shift %= len as isize;
        }
        if shift == 0 {
            return self;
        }
        if shift < 0 {
            return self.shift_left(-shift);
        }
        let shift = shift as usize;
        let samples = self.as_mut_slice();
        samples.copy_within(..len - shift, shift);
        for sample in &mut samples[..shift] {
            *sample = T::zero();
        }
        self
    }

    /// Rotates elements toward index 0 by `n` positions, in place.
    ///
    /// Defined as an additive composition, preserved exactly for
    /// compatibility: shift left by `n`, then add back (elementwise `+`) a
    /// clone that was shifted right by `len - n`. Elements falling off one
    /// end reappear at the other **added onto** whatever is there - a true
    /// rotation only because vacated slots are zero-filled. In particular,
    /// `rotate_left(0)` adds the unshifted clone and doubles every sample.
    pub fn rotate_left(&mut self, n: isize) -> &mut Self {
        let back = self.len() as isize - n;
        let mut carried = self.clone();
        carried.shift_right(back);
        self.shift_left(n);
        self.transform_with(kernels::add, &carried)
    }

    /// Rotates elements away from index 0 by `n` positions, in place.
    ///
    /// Mirror of [`rotate_left`](SampleStream::rotate_left): shift right by
    /// `n`, then add back a clone shifted left by `len - n`.
    pub fn rotate_right(&mut self, n: isize) -> &mut Self {
        let back = self.len() as isize - n;
        let mut carried = self.clone();
        carried.shift_left(back);
        self.shift_right(n);
        self.transform_with(kernels::add, &carried)
    }

    /// Concatenates two streams into a new Take-mode stream: `self`'s
    /// samples first, then `other`'s. Neither operand is modified.
    ///
    /// ```rust
    /// use sample_stream::SampleStream;
    ///
    /// let a = SampleStream::from_vec(vec![1i32, 2]);
    /// let b = SampleStream::from_vec(vec![3i32]);
    /// let joined = a.concat(&b);
    /// assert_eq!(joined.as_slice(), &[1, 2, 3]);
    /// assert_eq!(joined.size(), a.size() + b.size());
    /// ```
    pub fn concat(&self, other: &Self) -> Self {
        let mut joined = Vec::with_capacity(self.len() + other.len());
        joined.extend_from_slice(self.as_slice());
        joined.extend_from_slice(other.as_slice());
        Self::from_vec(joined)
    }
}

impl<T: Sample> Shl<isize> for &SampleStream<T> {
    type Output = SampleStream<T>;

    /// Left-shifted clone; the receiver is untouched.
    fn shl(self, n: isize) -> SampleStream<T> {
        let mut stream = self.clone();
        stream.shift_left(n);
        stream
    }
}

impl<T: Sample> Shr<isize> for &SampleStream<T> {
    type Output = SampleStream<T>;

    /// Right-shifted clone; the receiver is untouched.
    fn shr(self, n: isize) -> SampleStream<T> {
        let mut stream = self.clone();
        stream.shift_right(n);
        stream
    }
}

impl<T: Sample> ShlAssign<isize> for SampleStream<T> {
    fn shl_assign(&mut self, n: isize) {
        self.shift_left(n);
    }
}

impl<T: Sample> ShrAssign<isize> for SampleStream<T> {
    fn shr_assign(&mut self, n: isize) {
        self.shift_right(n);
    }
}

impl<T: Sample> Shr<&SampleStream<T>> for &SampleStream<T> {
    type Output = SampleStream<T>;

    /// Concatenation: `self` inserted before `rhs`.
    fn shr(self, rhs: &SampleStream<T>) -> SampleStream<T> {
        self.concat(rhs)
    }
}

impl<T: Sample> Shl<&SampleStream<T>> for &SampleStream<T> {
    type Output = SampleStream<T>;

    /// Concatenation, spelled the other way: still `self` before `rhs`.
    fn shl(self, rhs: &SampleStream<T>) -> SampleStream<T> {
        self.concat(rhs)
    }
}
