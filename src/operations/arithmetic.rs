//! Symbolic operator surface: elementwise arithmetic and bitwise algebra.
//!
//! Binary operators come in three forms, all derived from the primitives in
//! [`operations::transform`](super::transform):
//!
//! - `&stream OP &stream` - elementwise, equal lengths required, a length-1
//!   right operand broadcasts;
//! - `&stream OP scalar` - broadcast the scalar over a clone of the stream;
//! - `scalar OP &stream` - same, with the scalar on the left of the kernel
//!   (order matters for `- / %`).
//!
//! Compound assignment (`+= -= *= /= %= ^= &= |=`) rewrites the receiver's
//! buffer in place, in both stream and scalar form. Non-mutating forms
//! always clone the stream operand, so results are independently owned.
//!
//! Arithmetic is available for any [`Sample`]; `^ & |` and the complement
//! require [`BitSample`], which floating-point elements do not implement.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Neg, Not, Rem, RemAssign, Sub, SubAssign,
};

use super::kernels;
use crate::repr::SampleStream;
use crate::traits::{BitSample, Sample};

/// Implements one binary operator in stream/stream, stream/scalar, and both
/// compound-assignment forms, all delegating to a single kernel.
macro_rules! elementwise_binary_op {
    ($bound:ident, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $kernel:path) => {
        impl<T: $bound> $trait<&SampleStream<T>> for &SampleStream<T> {
            type Output = SampleStream<T>;

            fn $method(self, rhs: &SampleStream<T>) -> SampleStream<T> {
                SampleStream::zip_with(self, rhs, $kernel)
            }
        }

        impl<T: $bound> $trait<T> for &SampleStream<T> {
            type Output = SampleStream<T>;

            fn $method(self, rhs: T) -> SampleStream<T> {
                self.map(|sample| $kernel(sample, rhs))
            }
        }

        impl<T: $bound> $assign_trait<&SampleStream<T>> for SampleStream<T> {
            fn $assign_method(&mut self, rhs: &SampleStream<T>) {
                self.transform_with($kernel, rhs);
            }
        }

        impl<T: $bound> $assign_trait<T> for SampleStream<T> {
            fn $assign_method(&mut self, rhs: T) {
                self.transform(|sample| $kernel(sample, rhs));
            }
        }
    };
}

elementwise_binary_op!(Sample, Add, add, AddAssign, add_assign, kernels::add);
elementwise_binary_op!(Sample, Sub, sub, SubAssign, sub_assign, kernels::sub);
elementwise_binary_op!(Sample, Mul, mul, MulAssign, mul_assign, kernels::mul);
elementwise_binary_op!(Sample, Div, div, DivAssign, div_assign, kernels::div);
elementwise_binary_op!(Sample, Rem, rem, RemAssign, rem_assign, kernels::rem);
elementwise_binary_op!(
    BitSample,
    BitXor,
    bitxor,
    BitXorAssign,
    bitxor_assign,
    kernels::bit_xor
);
elementwise_binary_op!(
    BitSample,
    BitAnd,
    bitand,
    BitAndAssign,
    bitand_assign,
    kernels::bit_and
);
elementwise_binary_op!(
    BitSample,
    BitOr,
    bitor,
    BitOrAssign,
    bitor_assign,
    kernels::bit_or
);

/// Implements the scalar-on-the-left arithmetic forms for one concrete
/// sample type. These cannot be generic: the scalar is the `Self` type of a
/// std operator trait.
macro_rules! scalar_lhs_arithmetic {
    ($($t:ty),* $(,)?) => {$(
        impl Add<&SampleStream<$t>> for $t {
            type Output = SampleStream<$t>;

            fn add(self, rhs: &SampleStream<$t>) -> SampleStream<$t> {
                rhs.map(|sample| kernels::add(self, sample))
            }
        }

        impl Sub<&SampleStream<$t>> for $t {
            type Output = SampleStream<$t>;

            fn sub(self, rhs: &SampleStream<$t>) -> SampleStream<$t> {
                rhs.map(|sample| kernels::sub(self, sample))
            }
        }

        impl Mul<&SampleStream<$t>> for $t {
            type Output = SampleStream<$t>;

            fn mul(self, rhs: &SampleStream<$t>) -> SampleStream<$t> {
                rhs.map(|sample| kernels::mul(self, sample))
            }
        }

        impl Div<&SampleStream<$t>> for $t {
            type Output = SampleStream<$t>;

            fn div(self, rhs: &SampleStream<$t>) -> SampleStream<$t> {
                rhs.map(|sample| kernels::div(self, sample))
            }
        }

        impl Rem<&SampleStream<$t>> for $t {
            type Output = SampleStream<$t>;

            fn rem(self, rhs: &SampleStream<$t>) -> SampleStream<$t> {
                rhs.map(|sample| kernels::rem(self, sample))
            }
        }
    )*};
}

/// Implements the scalar-on-the-left bitwise forms for one concrete integral
/// sample type.
macro_rules! scalar_lhs_bitwise {
    ($($t:ty),* $(,)?) => {$(
        impl BitXor<&SampleStream<$t>> for $t {
            type Output = SampleStream<$t>;

            fn bitxor(self, rhs: &SampleStream<$t>) -> SampleStream<$t> {
                rhs.map(|sample| kernels::bit_xor(self, sample))
            }
        }

        impl BitAnd<&SampleStream<$t>> for $t {
            type Output = SampleStream<$t>;

            fn bitand(self, rhs: &SampleStream<$t>) -> SampleStream<$t> {
                rhs.map(|sample| kernels::bit_and(self, sample))
            }
        }

        impl BitOr<&SampleStream<$t>> for $t {
            type Output = SampleStream<$t>;

            fn bitor(self, rhs: &SampleStream<$t>) -> SampleStream<$t> {
                rhs.map(|sample| kernels::bit_or(self, sample))
            }
        }
    )*};
}

scalar_lhs_arithmetic!(i16, i32, i64, f32, f64);
scalar_lhs_bitwise!(i16, i32, i64);

impl<T: Sample> Neg for &SampleStream<T> {
    type Output = SampleStream<T>;

    /// Negated copy of the stream. The identity counterpart (C-family unary
    /// plus) is simply [`clone`](SampleStream::clone).
    fn neg(self) -> SampleStream<T> {
        self.map(|sample| -sample)
    }
}

impl<T: BitSample> Not for &SampleStream<T> {
    type Output = SampleStream<T>;

    /// Bitwise-complement copy of the stream.
    fn not(self) -> SampleStream<T> {
        self.map(|sample| !sample)
    }
}
