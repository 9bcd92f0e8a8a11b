//! Quantity type and its implementations.

use crate::algebra::{DimDiv, DimMul, DimPow, DimSqrt, Power, Product, Quotient, Root};
use crate::dimension::{Compatible, Dimension, Dimensionless};
use crate::math::ScalarLike;
use crate::scalar::Scalar;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::*;
use typenum::Integer;

/// A scalar stamped with a physical dimension.
///
/// `Quantity<T, D>` wraps a single `T` (the *representation*, `f32` or `f64`) together with phantom type information
/// about its dimension `D`. The stored scalar is always expressed in base SI units for `D`, whichever named unit was
/// used to build it: `5.0 * FOOT` stores `1.524`.
///
/// The wrapper is `#[repr(transparent)]`: a quantity has exactly the size and layout of its scalar, and every
/// dimension check happens during type checking.
///
/// # Examples
///
/// ```rust
/// use sidim_core::{Dim, Quantity};
/// use sidim_core::typenum::{P1, Z0};
///
/// type Length = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
///
/// let x = Quantity::<f64, Length>::new(5.0);
/// let y = Quantity::<f64, Length>::new(3.0);
/// let sum = x + y;
/// assert_eq!(sum.value(), 8.0);
/// ```
///
/// Adding quantities of different dimensions does not compile:
///
/// ```compile_fail
/// use sidim_core::{Dim, Quantity};
/// use sidim_core::typenum::{P1, Z0};
///
/// type Length = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
/// type Time = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
///
/// let _ = Quantity::<f64, Length>::new(1.0) + Quantity::<f64, Time>::new(1.0);
/// ```
#[repr(transparent)]
pub struct Quantity<T, D = Dimensionless>(T, PhantomData<D>);

impl<T: Scalar, D: Dimension> Quantity<T, D> {
    /// Creates a quantity from a scalar already expressed in base SI units.
    ///
    /// ```rust
    /// use sidim_core::Quantity;
    /// let ratio: Quantity<f64> = Quantity::new(0.25);
    /// assert_eq!(ratio.value(), 0.25);
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw base-SI scalar.
    ///
    /// Use [`in_unit`](Self::in_unit) to read the magnitude in a specific unit.
    #[inline]
    pub const fn value(self) -> T {
        self.0
    }

    /// Returns how many `unit`s fit in this quantity.
    ///
    /// `unit` is either a linear unit (another [`Quantity`] of the same dimension), giving `value / unit.value`, or
    /// an affine [`OffsetQuantity`](crate::OffsetQuantity), giving `value / unit.value - unit.offset`.
    ///
    /// ```rust
    /// use sidim_core::{Dim, Quantity};
    /// use sidim_core::typenum::{P1, Z0};
    ///
    /// type Length = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
    /// let foot = Quantity::<f64, Length>::new(0.3048);
    ///
    /// let d = Quantity::<f64, Length>::new(3.048);
    /// assert!((d.in_unit(foot) - 10.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn in_unit<U: UnitScale<T, D>>(self, unit: U) -> T {
        unit.express(self.0)
    }

    /// Changes the representation, keeping the dimension and the (converted) magnitude.
    ///
    /// ```rust
    /// use sidim_core::Quantity;
    /// let q: Quantity<f64> = Quantity::new(0.5);
    /// let narrow: Quantity<f32> = q.cast();
    /// assert_eq!(narrow.value(), 0.5_f32);
    /// ```
    #[inline]
    pub fn cast<U: Scalar>(self) -> Quantity<U, D> {
        Quantity::new(U::from_f64(self.0.to_f64()))
    }

    /// Shorthand for `cast::<f32>()`.
    #[inline]
    pub fn to_f32(self) -> Quantity<f32, D> {
        self.cast()
    }

    /// Raises the quantity to the integer power `E`.
    ///
    /// For `E >= 0` the scalar is `1` multiplied by `value` `E` times; for `E < 0` it is `1` divided by `value`
    /// `|E|` times. The dimension is every exponent scaled by `E`.
    ///
    /// ```rust
    /// use sidim_core::{Dim, Quantity};
    /// use sidim_core::typenum::{N1, P1, P2, Z0};
    ///
    /// type Length = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
    /// type Area = Dim<Z0, P2, Z0, Z0, Z0, Z0, Z0>;
    /// type Wavenumber = Dim<Z0, N1, Z0, Z0, Z0, Z0, Z0>;
    ///
    /// let side = Quantity::<f64, Length>::new(3.0);
    /// let area: Quantity<f64, Area> = side.powi::<P2>();
    /// assert_eq!(area.value(), 9.0);
    ///
    /// let k: Quantity<f64, Wavenumber> = Quantity::<f64, Length>::new(4.0).powi::<N1>();
    /// assert_eq!(k.value(), 0.25);
    /// ```
    #[inline]
    pub fn powi<E>(self) -> Quantity<T, Power<D, E>>
    where
        E: Integer,
        D: DimPow<E>,
    {
        let mut result = T::ONE;
        if E::I32 >= 0 {
            for _ in 0..E::I32 {
                result *= self.0;
            }
        } else {
            for _ in 0..E::I32.unsigned_abs() {
                result /= self.0;
            }
        }
        Quantity::new(result)
    }

    /// Square root; every exponent of `D` must be even.
    ///
    /// ```rust
    /// use sidim_core::{Dim, Quantity};
    /// use sidim_core::typenum::{P1, P2, Z0};
    ///
    /// type Length = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
    /// type Area = Dim<Z0, P2, Z0, Z0, Z0, Z0, Z0>;
    ///
    /// let side: Quantity<f64, Length> = Quantity::<f64, Area>::new(16.0).sqrt();
    /// assert_eq!(side.value(), 4.0);
    /// ```
    ///
    /// ```compile_fail
    /// use sidim_core::{Dim, Quantity};
    /// use sidim_core::typenum::{P3, Z0};
    ///
    /// type Volume = Dim<Z0, P3, Z0, Z0, Z0, Z0, Z0>;
    /// let _ = Quantity::<f64, Volume>::new(8.0).sqrt();
    /// ```
    #[inline]
    pub fn sqrt(self) -> Quantity<T, Root<D>>
    where
        D: DimSqrt,
    {
        Quantity::new(self.0.sqrt())
    }

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// This quantity with the sign of `sign`, which may be a bare `T` or a quantity of any dimension.
    #[inline]
    pub fn copysign<S: ScalarLike<Scalar = T>>(self, sign: S) -> Self {
        Self::new(self.0.copysign(sign.scalar()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Const helpers for building unit catalogs
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Quantity<f64, D> {
    /// Const multiplication of two quantities; the result dimension is checked like `*`.
    ///
    /// ```rust
    /// use sidim_core::{Dim, Quantity};
    /// use sidim_core::typenum::{P1, P2, Z0};
    ///
    /// const METRE: Quantity<f64, Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>> = Quantity::new(1.0);
    /// const HECTARE: Quantity<f64, Dim<Z0, P2, Z0, Z0, Z0, Z0, Z0>> = METRE.scaled(100.0).times(METRE.scaled(100.0));
    /// assert_eq!(HECTARE.value(), 10_000.0);
    /// ```
    #[inline]
    pub const fn times<Dr>(self, rhs: Quantity<f64, Dr>) -> Quantity<f64, Product<D, Dr>>
    where
        Dr: Dimension,
        D: DimMul<Dr>,
    {
        Quantity(self.0 * rhs.0, PhantomData)
    }

    /// Const division of two quantities; the result dimension is checked like `/`.
    #[inline]
    pub const fn per<Dr>(self, rhs: Quantity<f64, Dr>) -> Quantity<f64, Quotient<D, Dr>>
    where
        Dr: Dimension,
        D: DimDiv<Dr>,
    {
        Quantity(self.0 / rhs.0, PhantomData)
    }

    /// Const multiplication by a bare factor.
    #[inline]
    pub const fn scaled(self, factor: f64) -> Self {
        Quantity(self.0 * factor, PhantomData)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion targets
// ─────────────────────────────────────────────────────────────────────────────

/// Something a quantity of dimension `D` can be expressed in: a linear unit or an affine scale.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot express a quantity of dimension `{D}`",
    label = "not a unit of this dimension",
    note = "use a unit whose dimension matches the quantity being converted"
)]
pub trait UnitScale<T: Scalar, D: Dimension> {
    /// Converts a base-SI scalar into a magnitude in this unit.
    fn express(&self, base: T) -> T;
}

impl<T: Scalar, D: Dimension, Du: Compatible<D>> UnitScale<T, D> for Quantity<T, Du> {
    #[inline]
    fn express(&self, base: T) -> T {
        base / self.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Marker trait impls
// ─────────────────────────────────────────────────────────────────────────────

impl<T: Copy, D> Clone for Quantity<T, D> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, D> Copy for Quantity<T, D> {}

impl<T: Scalar, D: Dimension> Default for Quantity<T, D> {
    #[inline]
    fn default() -> Self {
        Self::new(T::ZERO)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<T: Scalar, Dl: Dimension, Dr: Compatible<Dl>> Add<Quantity<T, Dr>> for Quantity<T, Dl> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Quantity<T, Dr>) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<T: Scalar, Dl: Dimension, Dr: Compatible<Dl>> AddAssign<Quantity<T, Dr>> for Quantity<T, Dl> {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<T, Dr>) {
        self.0 += rhs.0;
    }
}

impl<T: Scalar, Dl: Dimension, Dr: Compatible<Dl>> Sub<Quantity<T, Dr>> for Quantity<T, Dl> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Quantity<T, Dr>) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<T: Scalar, Dl: Dimension, Dr: Compatible<Dl>> SubAssign<Quantity<T, Dr>> for Quantity<T, Dl> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<T, Dr>) {
        self.0 -= rhs.0;
    }
}

impl<T: Scalar, Dl, Dr> Mul<Quantity<T, Dr>> for Quantity<T, Dl>
where
    Dl: DimMul<Dr>,
    Dr: Dimension,
{
    type Output = Quantity<T, Product<Dl, Dr>>;
    #[inline]
    fn mul(self, rhs: Quantity<T, Dr>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<T: Scalar, Dl, Dr> Div<Quantity<T, Dr>> for Quantity<T, Dl>
where
    Dl: DimDiv<Dr>,
    Dr: Dimension,
{
    type Output = Quantity<T, Quotient<Dl, Dr>>;
    #[inline]
    fn div(self, rhs: Quantity<T, Dr>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

impl<T: Scalar, D: Dimension> Mul<T> for Quantity<T, D> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<T: Scalar, D: Dimension> MulAssign<T> for Quantity<T, D> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.0 *= rhs;
    }
}

impl<T: Scalar, D: Dimension> Div<T> for Quantity<T, D> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<T: Scalar, D: Dimension> DivAssign<T> for Quantity<T, D> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.0 /= rhs;
    }
}

impl<T: Scalar, D: Dimension> Neg for Quantity<T, D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

crate::macros::impl_primitive_ops!(f32, f64);

// ─────────────────────────────────────────────────────────────────────────────
// Comparisons (exact, no tolerance)
// ─────────────────────────────────────────────────────────────────────────────

impl<T: Scalar, Dl: Dimension, Dr: Compatible<Dl>> PartialEq<Quantity<T, Dr>> for Quantity<T, Dl> {
    #[inline]
    fn eq(&self, other: &Quantity<T, Dr>) -> bool {
        self.0 == other.0
    }
}

impl<T: Scalar, Dl: Dimension, Dr: Compatible<Dl>> PartialOrd<Quantity<T, Dr>> for Quantity<T, Dl> {
    #[inline]
    fn partial_cmp(&self, other: &Quantity<T, Dr>) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

impl<T: Scalar, D: Dimension> fmt::Display for Quantity<T, D> {
    /// Formats as `<value> <dimension>`, e.g. `9.81 s^-2·m`; dimensionless quantities print the value only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)?;
        if !D::VECTOR.is_dimensionless() {
            write!(f, " {}", D::VECTOR)?;
        }
        Ok(())
    }
}

impl<T: Scalar, D: Dimension> fmt::Debug for Quantity<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.0)
            .field("dimension", &format_args!("{}", D::VECTOR))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{Dim, DimensionVector};
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use typenum::{N1, N2, N3, N4, N5, N6, P1, P2, P3, P4, P5, P6, Z0};

    type TimeDim = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
    type LengthDim = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
    type Time = Quantity<f64, TimeDim>;
    type Length = Quantity<f64, LengthDim>;
    type Qt<T> = Quantity<f64, Dim<T, Z0, Z0, Z0, Z0, Z0, Z0>>;

    const T_TIME: Time = Quantity::new(0.1);

    /// Reference power by repeated scalar multiplication or division.
    fn reference_pow(x: f64, n: i32) -> f64 {
        let mut result = 1.0;
        if n >= 0 {
            for _ in 0..n {
                result *= x;
            }
        } else {
            for _ in 0..-n {
                result /= x;
            }
        }
        result
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Quantity core behavior
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn quantity_new_and_value() {
        let q = Length::new(42.0);
        assert_eq!(q.value(), 42.0);
    }

    #[test]
    fn quantity_has_scalar_layout() {
        assert_eq!(core::mem::size_of::<Length>(), core::mem::size_of::<f64>());
        assert_eq!(core::mem::size_of::<Quantity<f32, TimeDim>>(), core::mem::size_of::<f32>());
        assert_eq!(core::mem::align_of::<Length>(), core::mem::align_of::<f64>());
    }

    #[test]
    fn quantity_default_is_zero() {
        assert_eq!(Length::default().value(), 0.0);
    }

    #[test]
    fn quantity_abs_and_copysign() {
        assert_eq!(Length::new(-5.0).abs().value(), 5.0);
        assert_eq!(Length::new(5.0).copysign(Length::new(-1.0)).value(), -5.0);
        assert_eq!(Length::new(5.0).copysign(-1.0_f64).value(), -5.0);
        assert_eq!(Length::new(-5.0).copysign(Quantity::<f64, TimeDim>::new(2.0)).value(), 5.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Operator traits
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn operator_add_sub() {
        let t1 = Length::new(0.1);
        let t2 = Length::new(0.2);
        assert_eq!((t1 + t2).value(), 0.1 + 0.2);
        assert_eq!((t1 - t2).value(), 0.1 - 0.2);
    }

    #[test]
    fn operator_add_sub_assign() {
        let t1 = Length::new(0.1);
        let t2 = Length::new(0.2);

        let mut t = 1.0 * t1;
        t += 4.0 * t2;
        assert_eq!(t.value(), 0.1 + 4.0 * 0.2);

        let mut t = 1.0 * t1;
        t -= 4.0 * t2;
        assert_eq!(t.value(), 0.1 - 4.0 * 0.2);
    }

    #[test]
    fn operator_neg() {
        let q = Length::new(0.1);
        assert_eq!((-q).value(), -0.1);
        assert_eq!((-(-q)).value(), 0.1);
    }

    #[test]
    fn operator_scalar_mul_div() {
        let mut q = Qt::<P5>::new(2.0);
        assert_eq!((q * 3.0).value(), 6.0);
        assert_eq!((3.0 * q).value(), 6.0);
        assert_eq!((q / 4.0).value(), 0.5);
        q *= 3.0;
        assert_eq!(q.value(), 6.0);
        q /= 2.0;
        assert_eq!(q.value(), 3.0);
    }

    #[test]
    fn operator_quantity_mul_div_derive_dimension() {
        let q5 = Qt::<P5>::new(2.0);
        let q3 = Qt::<P3>::new(4.0);
        let product: Qt<typenum::P8> = q5 * q3;
        let quotient: Qt<P2> = q5 / q3;
        assert_eq!(product.value(), 8.0);
        assert_eq!(quotient.value(), 0.5);
    }

    #[test]
    fn scalar_divided_by_quantity_inverts_dimension() {
        let frequency: Quantity<f64, Dim<N1, Z0, Z0, Z0, Z0, Z0, Z0>> = 1.0 / Time::new(0.5);
        assert_eq!(frequency.value(), 2.0);
    }

    #[test]
    fn repeated_products_match_reference_powers() {
        let t1: Qt<P1> = T_TIME;
        let t2: Qt<P2> = T_TIME * T_TIME;
        let t3: Qt<P3> = T_TIME * T_TIME * T_TIME;
        let t4: Qt<P4> = T_TIME * T_TIME * T_TIME * T_TIME;
        let t5: Qt<P5> = T_TIME * T_TIME * T_TIME * T_TIME * T_TIME;
        let t6: Qt<P6> = T_TIME * T_TIME * T_TIME * T_TIME * T_TIME * T_TIME;

        assert_eq!(reference_pow(0.1, 1), t1.value());
        assert_eq!(reference_pow(0.1, 2), t2.value());
        assert_eq!(reference_pow(0.1, 3), t3.value());
        assert_eq!(reference_pow(0.1, 4), t4.value());
        assert_eq!(reference_pow(0.1, 5), t5.value());
        assert_eq!(reference_pow(0.1, 6), t6.value());
    }

    #[test]
    fn repeated_quotients_match_reference_powers() {
        let it1: Qt<N1> = 1.0 / T_TIME;
        let it2: Qt<N2> = (1.0 / T_TIME) / T_TIME;
        let it3: Qt<N3> = ((1.0 / T_TIME) / T_TIME) / T_TIME;
        let it4: Qt<N4> = (((1.0 / T_TIME) / T_TIME) / T_TIME) / T_TIME;
        let it5: Qt<N5> = ((((1.0 / T_TIME) / T_TIME) / T_TIME) / T_TIME) / T_TIME;
        let it6: Qt<N6> = (((((1.0 / T_TIME) / T_TIME) / T_TIME) / T_TIME) / T_TIME) / T_TIME;

        assert_eq!(reference_pow(0.1, -1), it1.value());
        assert_eq!(reference_pow(0.1, -2), it2.value());
        assert_eq!(reference_pow(0.1, -3), it3.value());
        assert_eq!(reference_pow(0.1, -4), it4.value());
        assert_eq!(reference_pow(0.1, -5), it5.value());
        assert_eq!(reference_pow(0.1, -6), it6.value());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // powi / sqrt
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn powi_zero_is_dimensionless_one() {
        let one: Quantity<f64> = Length::new(7.0).powi::<Z0>();
        assert_eq!(f64::from(one), 1.0);
    }

    #[test]
    fn sqrt_inverts_square() {
        let length = Length::new(1.524);
        let area = length.powi::<P2>();
        let back: Length = area.sqrt();
        assert_relative_eq!(back.value(), length.value(), max_relative = 1e-15);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Comparisons
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn comparison_operators() {
        let t1 = Length::new(0.1);
        let t2 = Length::new(0.2);

        assert!(t1 < t2);
        assert!(!(t1 > t2));
        assert!(t1 <= t2);
        assert!(!(t1 >= t2));
        assert!(t1 != t2);
        assert!(!(t1 == t2));
    }

    #[test]
    fn comparison_is_exact() {
        let sum = Length::new(0.1) + Length::new(0.2);
        assert!(sum != Length::new(0.3));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn in_unit_divides_by_unit_value() {
        let foot = Length::new(0.3048);
        assert_eq!(Length::new(0.6096).in_unit(foot), 0.6096 / 0.3048);
    }

    #[test]
    fn cast_changes_representation_only() {
        let q = Length::new(0.1);
        let narrow: Quantity<f32, LengthDim> = q.cast();
        assert_eq!(narrow.value(), 0.1_f32);
        let wide: Length = narrow.cast();
        assert_eq!(wide.value(), 0.1_f32 as f64);
        assert_eq!(q.to_f32().value(), 0.1_f32);
    }

    #[test]
    fn dimensionless_converts_to_scalar() {
        let ratio: Quantity<f64> = Length::new(3.0) / Length::new(4.0);
        let raw: f64 = ratio.into();
        assert_eq!(raw, 0.75);
        let back: Quantity<f64> = raw.into();
        assert_eq!(back.value(), 0.75);
    }

    #[test]
    fn const_helpers_derive_dimensions() {
        const METRE: Length = Quantity::new(1.0);
        const SECOND: Time = Quantity::new(1.0);
        const ACCEL: Quantity<f64, Dim<N2, P1, Z0, Z0, Z0, Z0, Z0>> =
            METRE.scaled(9.81).per(SECOND.times(SECOND));
        assert_eq!(ACCEL.value(), 9.81);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Formatting
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_dimensioned_quantity() {
        let v: Quantity<f64, Dim<N1, P1, Z0, Z0, Z0, Z0, Z0>> = Quantity::new(2.5);
        assert_eq!(format!("{}", v), "2.5 s^-1·m");
    }

    #[test]
    fn display_respects_precision() {
        assert_eq!(format!("{:.2}", Length::new(1.0 / 3.0)), "0.33 m");
    }

    #[test]
    fn display_dimensionless_quantity() {
        let q: Quantity<f64> = Quantity::new(42.0);
        assert_eq!(format!("{}", q), "42");
    }

    #[test]
    fn debug_shows_dimension() {
        let s = format!("{:?}", Time::new(1.5));
        assert_eq!(s, "Quantity { value: 1.5, dimension: s }");
    }

    #[test]
    fn vector_of_quantity_dimension() {
        assert_eq!(
            <Product<LengthDim, TimeDim>>::VECTOR,
            DimensionVector::new(1, 1, 0, 0, 0, 0, 0)
        );
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_powi_matches_reference_for_all_small_exponents(x in -1e3..1e3f64) {
            let q = Time::new(x);
            prop_assert_eq!(q.powi::<N6>().value(), reference_pow(x, -6));
            prop_assert_eq!(q.powi::<N5>().value(), reference_pow(x, -5));
            prop_assert_eq!(q.powi::<N4>().value(), reference_pow(x, -4));
            prop_assert_eq!(q.powi::<N3>().value(), reference_pow(x, -3));
            prop_assert_eq!(q.powi::<N2>().value(), reference_pow(x, -2));
            prop_assert_eq!(q.powi::<N1>().value(), reference_pow(x, -1));
            prop_assert_eq!(q.powi::<Z0>().value(), 1.0);
            prop_assert_eq!(q.powi::<P1>().value(), reference_pow(x, 1));
            prop_assert_eq!(q.powi::<P2>().value(), reference_pow(x, 2));
            prop_assert_eq!(q.powi::<P3>().value(), reference_pow(x, 3));
            prop_assert_eq!(q.powi::<P4>().value(), reference_pow(x, 4));
            prop_assert_eq!(q.powi::<P5>().value(), reference_pow(x, 5));
            prop_assert_eq!(q.powi::<P6>().value(), reference_pow(x, 6));
        }

        #[test]
        fn prop_arithmetic_is_bit_identical(a in -1e6..1e6f64, b in -1e6..1e6f64, k in -1e6..1e6f64) {
            let qa = Length::new(a);
            let qb = Length::new(b);
            prop_assert_eq!((qa + qb).value(), a + b);
            prop_assert_eq!((qa - qb).value(), a - b);
            prop_assert_eq!((qa * Time::new(b)).value(), a * b);
            prop_assert_eq!((qa / Time::new(b)).value(), a / b);
            prop_assert_eq!((qa * k).value(), a * k);
            prop_assert_eq!((k * qa).value(), k * a);
            prop_assert_eq!((qa / k).value(), a / k);
        }

        #[test]
        fn prop_sqrt_of_square(a in 1e-6..1e6f64) {
            let q = Length::new(a);
            prop_assert!((q.powi::<P2>().sqrt().value() - a).abs() <= a * 1e-15);
        }
    }
}
