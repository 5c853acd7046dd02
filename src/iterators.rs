//! Iteration over sample streams.
//!
//! A stream exposes a lazy, finite, restartable forward sequence over its
//! buffer: call [`SampleStream::iter`] as many times as needed, or consume
//! `&stream` / `&mut stream` directly in a `for` loop. Iteration order is
//! buffer order, front to back.
//!
//! ```rust
//! use sample_stream::SampleStream;
//!
//! let stream = SampleStream::from_vec(vec![1i32, 2, 3]);
//! let total: i32 = stream.iter().sum();
//! assert_eq!(total, 6);
//!
//! // Restartable: a second pass observes the same sequence.
//! assert_eq!(stream.iter().count(), 3);
//! ```

use std::slice;

use crate::repr::SampleStream;
use crate::traits::Sample;

impl<T: Sample> SampleStream<T> {
    /// Returns an iterator over the samples in buffer order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over the samples in buffer order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<'a, T: Sample> IntoIterator for &'a SampleStream<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Sample> IntoIterator for &'a mut SampleStream<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_each_consumption() {
        let stream = SampleStream::from_vec(vec![0.5f64, 1.0, 1.5]);
        let mut collected = Vec::new();
        for sample in &stream {
            collected.push(*sample);
        }
        assert_eq!(collected, vec![0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_iteration_restarts_from_the_front() {
        let stream = SampleStream::from_vec(vec![1i32, 2, 3]);
        let first: Vec<i32> = stream.iter().copied().collect();
        let second: Vec<i32> = stream.iter().copied().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mutable_iteration_writes_through() {
        let mut stream = SampleStream::from_vec(vec![1i32, 2, 3]);
        for sample in &mut stream {
            *sample *= 10;
        }
        assert_eq!(stream.as_slice(), &[10, 20, 30]);
    }

    #[test]
    fn test_empty_stream_yields_nothing() {
        let stream = SampleStream::<i16>::from_vec(Vec::new());
        assert_eq!(stream.iter().next(), None);
    }
}
