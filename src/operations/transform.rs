//! Generic higher-order primitives underlying the operator algebra.
//!
//! [`transform`](SampleStream::transform) rewrites a stream in place;
//! [`zip_with`](SampleStream::zip_with) combines two streams into a new one.
//! Every symbolic operator in this crate is expressible as one of these plus
//! a kernel from `operations::kernels`.
//!
//! Binary forms obey the broadcast rule: a right operand of length 1 is
//! applied against every element of the left operand. Any other length
//! mismatch is a contract violation - the plain methods panic, the `try_`
//! variants return [`SampleStreamError::LengthMismatch`].

use crate::error::{SampleStreamError, SampleStreamResult};
use crate::repr::SampleStream;
use crate::traits::Sample;

impl<T: Sample> SampleStream<T> {
    /// In-place unary map: applies `f` to every sample and stores the result
    /// where the sample was.
    ///
    /// ```rust
    /// use sample_stream::SampleStream;
    ///
    /// let mut stream = SampleStream::from_vec(vec![1.0f64, 2.0, 3.0]);
    /// stream.transform(|x| x * x);
    /// assert_eq!(stream.as_slice(), &[1.0, 4.0, 9.0]);
    /// ```
    pub fn transform<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(T) -> T,
    {
        for sample in self.as_mut_slice() {
            *sample = f(*sample);
        }
        self
    }

    /// In-place binary map against `other`, with broadcast.
    ///
    /// # Panics
    /// Panics when the lengths differ and `other` is not of length 1.
    pub fn transform_with<F>(&mut self, f: F, other: &Self) -> &mut Self
    where
        F: FnMut(T, T) -> T,
    {
        match self.try_transform_with(f, other) {
            Ok(stream) => stream,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible form of [`transform_with`](SampleStream::transform_with).
    pub fn try_transform_with<F>(&mut self, mut f: F, other: &Self) -> SampleStreamResult<&mut Self>
    where
        F: FnMut(T, T) -> T,
    {
        if other.len() == 1 {
            let broadcast = other[0];
            return Ok(self.transform(move |sample| f(sample, broadcast)));
        }
        if self.len() != other.len() {
            return Err(SampleStreamError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        let rhs = other.as_slice();
        for (sample, with) in self.as_mut_slice().iter_mut().zip(rhs) {
            *sample = f(*sample, *with);
        }
        Ok(self)
    }

    /// Cloning unary map: returns a transformed copy, leaving `self` intact.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        let mut stream = self.clone();
        stream.transform(f);
        stream
    }

    /// Combines two streams elementwise into a new stream.
    ///
    /// Clones `a`, then applies `f(a[i], b[i])` (or the broadcast
    /// `f(a[i], b[0])` when `b` has length 1) into the clone.
    ///
    /// ```rust
    /// use sample_stream::SampleStream;
    ///
    /// let a = SampleStream::from_vec(vec![1i32, 2, 3]);
    /// let b = SampleStream::from_vec(vec![10i32, 20, 30]);
    /// let sum = SampleStream::zip_with(&a, &b, |x, y| x + y);
    /// assert_eq!(sum.as_slice(), &[11, 22, 33]);
    /// ```
    ///
    /// # Panics
    /// Panics when the lengths differ and `b` is not of length 1.
    pub fn zip_with<F>(a: &Self, b: &Self, f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        match Self::try_zip_with(a, b, f) {
            Ok(stream) => stream,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible form of [`zip_with`](SampleStream::zip_with).
    pub fn try_zip_with<F>(a: &Self, b: &Self, f: F) -> SampleStreamResult<Self>
    where
        F: FnMut(T, T) -> T,
    {
        let mut stream = a.clone();
        stream.try_transform_with(f, b)?;
        Ok(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_rewrites_in_place() {
        let mut stream = SampleStream::from_vec(vec![1i32, 2, 3]);
        stream.transform(|x| x + 1);
        assert_eq!(stream.as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn test_transform_chains() {
        let mut stream = SampleStream::from_vec(vec![1.0f64, 2.0]);
        stream.transform(|x| x * 2.0).transform(|x| x - 1.0);
        assert_eq!(stream.as_slice(), &[1.0, 3.0]);
    }

    #[test]
    fn test_zip_with_matches_pointwise_application() {
        let a = SampleStream::from_vec(vec![1.0f64, 2.0, 3.0]);
        let b = SampleStream::from_vec(vec![0.5f64, 0.25, 0.125]);
        let combined = SampleStream::zip_with(&a, &b, |x, y| x * y + 1.0);
        for i in 0..3isize {
            assert_eq!(combined[i], a[i] * b[i] + 1.0);
        }
        // Operands are untouched.
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(b.as_slice(), &[0.5, 0.25, 0.125]);
    }

    #[test]
    fn test_length_one_right_operand_broadcasts() {
        let a = SampleStream::from_vec(vec![1i32, 2, 3, 4]);
        let b = SampleStream::from_vec(vec![10i32]);
        let combined = SampleStream::zip_with(&a, &b, |x, y| x + y);
        assert_eq!(combined.as_slice(), &[11, 12, 13, 14]);
    }

    #[test]
    fn test_broadcast_is_not_symmetric() {
        let a = SampleStream::from_vec(vec![1i32]);
        let b = SampleStream::from_vec(vec![10i32, 20]);
        // Left length 1 does not broadcast; right must match or be scalar-like.
        assert!(SampleStream::try_zip_with(&a, &b, |x, y| x + y).is_err());
    }

    #[test]
    fn test_try_transform_with_reports_mismatch() {
        let mut a = SampleStream::from_vec(vec![1i32, 2, 3]);
        let b = SampleStream::from_vec(vec![1i32, 2]);
        let err = a.try_transform_with(|x, y| x + y, &b).unwrap_err();
        assert_eq!(err, SampleStreamError::LengthMismatch { left: 3, right: 2 });
    }

    #[test]
    #[should_panic(expected = "length mismatch: left stream holds 3 samples, right stream holds 2")]
    fn test_mismatched_lengths_fault() {
        let a = SampleStream::from_vec(vec![1i32, 2, 3]);
        let b = SampleStream::from_vec(vec![1i32, 2]);
        let _ = SampleStream::zip_with(&a, &b, |x, y| x + y);
    }

    #[test]
    fn test_map_leaves_receiver_untouched() {
        let stream = SampleStream::from_vec(vec![1i16, 2, 3]);
        let doubled = stream.map(|x| x * 2);
        assert_eq!(doubled.as_slice(), &[2, 4, 6]);
        assert_eq!(stream.as_slice(), &[1, 2, 3]);
        assert_ne!(doubled.as_ptr(), stream.as_ptr());
    }

    #[test]
    fn test_empty_streams_combine_trivially() {
        let a = SampleStream::<f32>::from_vec(Vec::new());
        let b = SampleStream::<f32>::from_vec(Vec::new());
        let combined = SampleStream::zip_with(&a, &b, |x, y| x + y);
        assert!(combined.is_empty());
    }
}
