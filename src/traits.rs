//! Core traits constraining the element types a stream can carry.

use bytemuck::NoUninit;
use num_traits::{Num, NumCast, PrimInt, Signed, ToBytes};

use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, RemAssign, SubAssign};

/// Core trait defining the interface for stream element types.
///
/// Provides a unified interface for the numeric formats a [`SampleStream`]
/// can carry, covering integer and floating-point samples. The arithmetic
/// operator surface of the crate is available for any `Sample`; the bitwise
/// surface additionally requires [`BitSample`].
///
/// The remainder operator follows the element type's native semantics:
/// floating remainder (fmod) for `f32`/`f64`, truncating remainder for the
/// integer types.
///
/// # Supported Types
/// - `i16`: 16-bit signed integer samples (most common for audio files)
/// - `i32`: 32-bit signed integer samples (high precision)
/// - `i64`: 64-bit signed integer samples
/// - `f32`: 32-bit floating-point samples (normalized -1.0 to 1.0)
/// - `f64`: 64-bit floating-point samples (highest precision)
///
/// [`SampleStream`]: crate::SampleStream
pub trait Sample:
    // Standard library traits
    Copy
    + Sized
    + Default
    + Display
    + Debug
    + Sync
    + Send
    + PartialEq
    + PartialOrd
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + DivAssign<Self>
    + RemAssign<Self>
    + 'static

    // External crate traits
    + NoUninit // bytemuck trait to ensure no uninitialized bytes
    + Num // num-traits trait for numeric operations (covers + - * / %)
    + Signed // num-traits trait for signed types, supplies negation
    + NumCast // num-traits trait for casting between numeric types
    + ToBytes // num-traits trait for byte conversion
{
    /// Label used for display and debugging purposes.
    const LABEL: &'static str;

    #[inline]
    /// Convert this sample into a byte vector in native-endian order.
    fn to_bytes(self) -> Vec<u8> {
        self.to_ne_bytes().as_ref().to_vec()
    }

    #[inline]
    /// Convert a slice of samples into a byte vector in native-endian order.
    fn slice_to_bytes(samples: &[Self]) -> Vec<u8> {
        Vec::from(bytemuck::cast_slice(samples))
    }
}

/// Marker trait for integral sample types that support the bitwise algebra.
///
/// `PrimInt` supplies `! ^ & |`, which gate the bitwise operator impls on
/// [`SampleStream`](crate::SampleStream). Floating-point samples deliberately
/// do not implement this trait.
pub trait BitSample: Sample + PrimInt {}

macro_rules! impl_sample {
    ($($t:ty),* $(,)?) => {
        $(impl Sample for $t {
            const LABEL: &'static str = stringify!($t);
        })*
    };
}

macro_rules! impl_bit_sample {
    ($($t:ty),* $(,)?) => {
        $(impl BitSample for $t {})*
    };
}

impl_sample!(i16, i32, i64, f32, f64);
impl_bit_sample!(i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    fn takes_sample<T: Sample>(value: T) -> T {
        value + T::one()
    }

    #[test]
    fn test_sample_impls_cover_supported_types() {
        assert_eq!(takes_sample(1i16), 2);
        assert_eq!(takes_sample(1i32), 2);
        assert_eq!(takes_sample(1i64), 2);
        assert_eq!(takes_sample(1.0f32), 2.0);
        assert_eq!(takes_sample(1.0f64), 2.0);
    }

    #[test]
    fn test_to_bytes_roundtrip() {
        let bytes = 0x1234i16.to_bytes();
        assert_eq!(bytes, 0x1234i16.to_ne_bytes().to_vec());

        let slice_bytes = i16::slice_to_bytes(&[1, 2, 3]);
        assert_eq!(slice_bytes.len(), 3 * size_of::<i16>());
    }

    #[test]
    fn test_label_reports_type_name() {
        assert!(f64::LABEL.contains("f64"));
    }
}
