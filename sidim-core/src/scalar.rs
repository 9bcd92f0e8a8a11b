//! Floating-point representation types.

use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A floating-point type usable as the representation of a [`Quantity`](crate::Quantity).
///
/// Implemented for `f32` and `f64`. With the `std` feature the float intrinsics of `std` are used; without it the
/// same operations come from `libm`.
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// Square root.
    fn sqrt(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// `self` with the sign of `sign`.
    fn copysign(self, sign: Self) -> Self;
    /// Widens (or copies) to `f64`.
    fn to_f64(self) -> f64;
    /// Converts from `f64`, rounding to nearest when narrowing.
    fn from_f64(value: f64) -> Self;
}

crate::macros::impl_scalar!(f32, libm::sqrtf, libm::fabsf, libm::copysignf);
crate::macros::impl_scalar!(f64, libm::sqrt, libm::fabs, libm::copysign);
