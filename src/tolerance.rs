//! # Tolerance Comparison
//!
//! [`fcompare`] treats two numbers as equal when their difference is within
//! machine epsilon, either absolutely or relative to the larger magnitude:
//!
//! ```text
//! |a - b| <= eps  ||  |a - b| < max(|a|, |b|) * eps
//! ```
//!
//! `eps` belongs to the common float type of the operands: `f32` for an
//! `f32` pair, `f64` as soon as one side is `f64`, and the float side's type
//! when the other side is an integer. Integer pairs are rejected at compile
//! time.
//!
//! ```
//! use nano_common::fcompare;
//!
//! assert!(fcompare(0.1 + 0.2, 0.3));
//! assert!(!fcompare(1.0, 1.1));
//! assert!(fcompare(3, 3.0f32));
//! ```
//!
//! ```compile_fail
//! use nano_common::fcompare;
//!
//! fcompare(1u32, 1u32);
//! ```
//!
//! A discarded result is a warning:
//!
//! ```compile_fail
//! #![deny(unused_must_use)]
//! nano_common::fcompare(1.0, 1.0);
//! ```

use core::ops::{Mul, Sub};

/// Floating type with a machine epsilon.
pub trait Tolerance: Copy + PartialOrd + Sub<Output = Self> + Mul<Output = Self> {
    const EPSILON: Self;

    fn magnitude(self) -> Self;
}

impl Tolerance for f32 {
    const EPSILON: Self = f32::EPSILON;

    #[inline(always)]
    fn magnitude(self) -> Self {
        self.abs()
    }
}

impl Tolerance for f64 {
    const EPSILON: Self = f64::EPSILON;

    #[inline(always)]
    fn magnitude(self) -> Self {
        self.abs()
    }
}

/// Promotion of an operand pair to their common float type.
pub trait CommonFloat<Rhs = Self> {
    type Output: Tolerance;

    fn promote(self, rhs: Rhs) -> (Self::Output, Self::Output);
}

macro_rules! impl_common_float {
    ($lhs:ty, $rhs:ty => $out:ty) => {
        impl CommonFloat<$rhs> for $lhs {
            type Output = $out;

            #[inline(always)]
            fn promote(self, rhs: $rhs) -> ($out, $out) {
                (self as $out, rhs as $out)
            }
        }
    };
    // integer on either side of a float
    ($float:ty; $($int:ty),* $(,)?) => {
        $(
            impl_common_float!($int, $float => $float);
            impl_common_float!($float, $int => $float);
        )*
    };
}

impl_common_float!(f32, f32 => f32);
impl_common_float!(f64, f64 => f64);
impl_common_float!(f32, f64 => f64);
impl_common_float!(f64, f32 => f64);
impl_common_float!(f32; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_common_float!(f64; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Approximate equality within the common type's machine epsilon.
///
/// NaN on either side compares unequal, as do two infinities.
#[must_use]
#[inline]
pub fn fcompare<A, B>(a: A, b: B) -> bool
where
    A: CommonFloat<B>,
{
    let (fa, fb) = a.promote(b);
    let t = <A::Output as Tolerance>::EPSILON;
    let dt = (fa - fb).magnitude();
    let (ma, mb) = (fa.magnitude(), fb.magnitude());
    let larger = if ma < mb { mb } else { ma };
    dt <= t || dt < larger * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_band() {
        assert!(fcompare(0.0, f64::EPSILON));
        assert!(fcompare(0.0, -f64::EPSILON));
        assert!(!fcompare(0.0, 3.0 * f64::EPSILON));
    }

    #[test]
    fn test_relative_band() {
        let big = 1.0e12_f64;
        assert!(fcompare(big, big + 1.0e-4));
        assert!(!fcompare(big, big + 1.0));
    }

    #[test]
    fn test_promotion() {
        assert!(fcompare(2u8, 2.0f64));
        assert!(fcompare(-7i64, -7.0f32));
        // 0.1f32 widened to f64 is not 0.1f64
        assert!(!fcompare(0.1f32, 0.1f64));
        assert!(fcompare(0.5f32, 0.5f64));
    }

    #[test]
    fn test_non_finite() {
        assert!(!fcompare(f64::NAN, f64::NAN));
        assert!(!fcompare(f64::NAN, 1.0));
        assert!(!fcompare(f64::INFINITY, f64::INFINITY));
    }
}
