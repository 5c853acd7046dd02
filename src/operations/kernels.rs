//! Named elementwise kernels backing the symbolic operators.
//!
//! Keeping these as ordinary functions lets the operator impls, the
//! higher-order primitives, and tests all name the same combining function.

use crate::traits::{BitSample, Sample};

#[inline]
pub(crate) fn add<T: Sample>(a: T, b: T) -> T {
    a + b
}

#[inline]
pub(crate) fn sub<T: Sample>(a: T, b: T) -> T {
    a - b
}

#[inline]
pub(crate) fn mul<T: Sample>(a: T, b: T) -> T {
    a * b
}

#[inline]
pub(crate) fn div<T: Sample>(a: T, b: T) -> T {
    a / b
}

/// Remainder with the element type's native semantics: fmod for floats,
/// truncating remainder for integers.
#[inline]
pub(crate) fn rem<T: Sample>(a: T, b: T) -> T {
    a % b
}

#[inline]
pub(crate) fn bit_xor<T: BitSample>(a: T, b: T) -> T {
    a ^ b
}

#[inline]
pub(crate) fn bit_and<T: BitSample>(a: T, b: T) -> T {
    a & b
}

#[inline]
pub(crate) fn bit_or<T: BitSample>(a: T, b: T) -> T {
    a | b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rem_uses_floating_remainder_for_floats() {
        assert_eq!(rem(5.5f64, 2.0), 1.5);
        assert_eq!(rem(-5.5f64, 2.0), -1.5);
    }

    #[test]
    fn test_rem_uses_truncating_remainder_for_integers() {
        assert_eq!(rem(7i32, 3), 1);
        assert_eq!(rem(-7i32, 3), -1);
    }

    #[test]
    fn test_bitwise_kernels() {
        assert_eq!(bit_xor(0b1100i32, 0b1010), 0b0110);
        assert_eq!(bit_and(0b1100i32, 0b1010), 0b1000);
        assert_eq!(bit_or(0b1100i32, 0b1010), 0b1110);
    }
}
