//! Quantities whose dimension is only known at run time.
//!
//! [`DynQuantity`] carries a [`DimensionVector`] next to its scalar. It is the escape hatch for values whose
//! dimension comes from data (a parsed file, a user-chosen unit) rather than from the program's types. Every
//! operation that would be a compile error on [`Quantity`] is a `checked_*` method here returning
//! [`DimensionError`]; a successful check can hand the value back to the static world with `TryFrom`.
//!
//! `*`, `/` and [`DynQuantity::powi`] mirror the static operators and panic if a dimension exponent overflows `i32`;
//! [`DynQuantity::checked_mul`], [`DynQuantity::checked_div`] and [`DynQuantity::checked_powi`] report
//! [`DimensionError::ExponentOverflow`] instead.
//!
//! Unit conversion here is linear only: [`DynQuantity::checked_in_unit`] divides by a unit's base-SI scalar. Affine
//! scales such as Celsius exist only as [`OffsetQuantity`](crate::OffsetQuantity) values in the static API, so read
//! an erased temperature in an offset unit by converting it back with `TryFrom` first:
//!
//! ```rust
//! use sidim_core::dims::Temperature;
//! use sidim_core::{DynQuantity, OffsetQuantity, Quantity};
//!
//! const KELVIN: Quantity<f64, Temperature> = Quantity::new(1.0);
//! const CELSIUS: OffsetQuantity<f64, Temperature> = OffsetQuantity::new(1.0, 273.15);
//!
//! let erased: DynQuantity<f64> = (300.0 * KELVIN).into();
//! assert_eq!(erased.checked_in_unit(KELVIN.into()), Ok(300.0));
//! let t = Quantity::<f64, Temperature>::try_from(erased).unwrap();
//! assert!((t.in_unit(CELSIUS) - 26.85).abs() < 1e-12);
//! ```
//!
//! ```rust
//! use sidim_core::{Dim, DimensionError, DynQuantity, Quantity};
//! use sidim_core::typenum::{N1, P1, Z0};
//!
//! type Speed = Dim<N1, P1, Z0, Z0, Z0, Z0, Z0>;
//! type Length = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
//!
//! let v: DynQuantity<f64> = Quantity::<f64, Speed>::new(3.0).into();
//! assert!(Quantity::<f64, Speed>::try_from(v).is_ok());
//! assert!(matches!(
//!     Quantity::<f64, Length>::try_from(v),
//!     Err(DimensionError::Mismatch { .. })
//! ));
//! ```

use crate::dimension::{Dimension, DimensionVector};
use crate::quantity::Quantity;
use crate::scalar::Scalar;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Div, Mul, Neg};

/// Failure of a run-time dimension check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DimensionError {
    /// The operands' dimensions differ.
    #[error("dimensions do not match: expected {expected}, found {found}")]
    Mismatch {
        /// Dimension required by the operation (the left operand or the target type).
        expected: DimensionVector,
        /// Dimension actually supplied.
        found: DimensionVector,
    },

    /// Square root requested on a dimension with an odd exponent.
    #[error("dimension {0} is not sqrt-able")]
    NotSqrtable(DimensionVector),

    /// A derived dimension exponent does not fit in `i32`.
    #[error("dimension exponent overflow")]
    ExponentOverflow,
}

/// Unwraps a derived dimension, logging when it overflowed.
fn ensure_in_range(derived: Option<DimensionVector>) -> Result<DimensionVector, DimensionError> {
    derived.ok_or_else(|| {
        log::debug!("dimension exponent overflow");
        DimensionError::ExponentOverflow
    })
}

/// Returns an error (and logs it) unless `found` matches `expected`.
fn ensure_compatible(expected: DimensionVector, found: DimensionVector) -> Result<(), DimensionError> {
    if expected.is_compatible(found) {
        return Ok(());
    }
    log::debug!("dimension mismatch: expected {}, found {}", expected, found);
    Err(DimensionError::Mismatch { expected, found })
}

/// A scalar in base SI units tagged with a run-time dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynQuantity<T> {
    value: T,
    dimension: DimensionVector,
}

impl<T: Scalar> DynQuantity<T> {
    /// Creates a tagged value; `value` must already be in base SI units for `dimension`.
    #[inline]
    pub const fn new(value: T, dimension: DimensionVector) -> Self {
        Self { value, dimension }
    }

    /// A bare number.
    #[inline]
    pub const fn dimensionless(value: T) -> Self {
        Self::new(value, DimensionVector::DIMENSIONLESS)
    }

    /// The base-SI scalar.
    #[inline]
    pub const fn value(&self) -> T {
        self.value
    }

    /// The run-time dimension.
    #[inline]
    pub const fn dimension(&self) -> DimensionVector {
        self.dimension
    }

    /// `self + rhs`, or a mismatch error.
    pub fn checked_add(self, rhs: Self) -> Result<Self, DimensionError> {
        ensure_compatible(self.dimension, rhs.dimension)?;
        Ok(Self::new(self.value + rhs.value, self.dimension))
    }

    /// `self - rhs`, or a mismatch error.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, DimensionError> {
        ensure_compatible(self.dimension, rhs.dimension)?;
        Ok(Self::new(self.value - rhs.value, self.dimension))
    }

    /// Exact comparison of the scalars, or a mismatch error. The inner `None` means one side is NaN.
    pub fn checked_cmp(&self, rhs: &Self) -> Result<Option<Ordering>, DimensionError> {
        ensure_compatible(self.dimension, rhs.dimension)?;
        Ok(self.value.partial_cmp(&rhs.value))
    }

    /// How many `unit`s fit in this value, or a mismatch error.
    pub fn checked_in_unit(self, unit: Self) -> Result<T, DimensionError> {
        ensure_compatible(unit.dimension, self.dimension)?;
        Ok(self.value / unit.value)
    }

    /// Square root, failing when any exponent is odd.
    pub fn sqrt(self) -> Result<Self, DimensionError> {
        match self.dimension.sqrt() {
            Some(dimension) => Ok(Self::new(self.value.sqrt(), dimension)),
            None => {
                log::debug!("square root of non-sqrt-able dimension {}", self.dimension);
                Err(DimensionError::NotSqrtable(self.dimension))
            }
        }
    }

    /// `self * rhs`, or an overflow error if a combined exponent leaves the `i32` range.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, DimensionError> {
        let dimension = ensure_in_range(self.dimension.checked_product(rhs.dimension))?;
        Ok(Self::new(self.value * rhs.value, dimension))
    }

    /// `self / rhs`, or an overflow error if a combined exponent leaves the `i32` range.
    pub fn checked_div(self, rhs: Self) -> Result<Self, DimensionError> {
        let dimension = ensure_in_range(self.dimension.checked_quotient(rhs.dimension))?;
        Ok(Self::new(self.value / rhs.value, dimension))
    }

    /// Integer power computed like [`Quantity::powi`], or an overflow error if a scaled exponent leaves the `i32`
    /// range.
    pub fn checked_powi(self, n: i32) -> Result<Self, DimensionError> {
        let dimension = ensure_in_range(self.dimension.checked_powi(n))?;
        let mut result = T::ONE;
        if n >= 0 {
            for _ in 0..n {
                result *= self.value;
            }
        } else {
            for _ in 0..n.unsigned_abs() {
                result /= self.value;
            }
        }
        Ok(Self::new(result, dimension))
    }

    /// Integer power, computed like [`Quantity::powi`].
    ///
    /// # Panics
    ///
    /// Panics if a scaled exponent overflows `i32`. Use [`checked_powi`](Self::checked_powi) for untrusted input.
    pub fn powi(self, n: i32) -> Self {
        match self.checked_powi(n) {
            Ok(q) => q,
            Err(_) => panic!("dimension exponent overflow in powi"),
        }
    }
}

impl<T: Scalar, D: Dimension> From<Quantity<T, D>> for DynQuantity<T> {
    #[inline]
    fn from(q: Quantity<T, D>) -> Self {
        Self::new(q.value(), D::VECTOR)
    }
}

impl<T: Scalar, D: Dimension> TryFrom<DynQuantity<T>> for Quantity<T, D> {
    type Error = DimensionError;

    fn try_from(q: DynQuantity<T>) -> Result<Self, Self::Error> {
        ensure_compatible(D::VECTOR, q.dimension)?;
        Ok(Quantity::new(q.value))
    }
}

/// # Panics
///
/// Panics if a combined exponent overflows `i32`; see [`DynQuantity::checked_mul`].
impl<T: Scalar> Mul for DynQuantity<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.value * rhs.value, self.dimension.product(rhs.dimension))
    }
}

/// # Panics
///
/// Panics if a combined exponent overflows `i32`; see [`DynQuantity::checked_div`].
impl<T: Scalar> Div for DynQuantity<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.value / rhs.value, self.dimension.quotient(rhs.dimension))
    }
}

impl<T: Scalar> Mul<T> for DynQuantity<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.value * rhs, self.dimension)
    }
}

impl<T: Scalar> Div<T> for DynQuantity<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.value / rhs, self.dimension)
    }
}

impl<T: Scalar> Neg for DynQuantity<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value, self.dimension)
    }
}

impl<T: Scalar> fmt::Display for DynQuantity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        if !self.dimension.is_dimensionless() {
            write!(f, " {}", self.dimension)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dim;
    use proptest::prelude::*;
    use typenum::{N1, N2, P1, P2, Z0};

    type LengthDim = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
    type TimeDim = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
    type AccelDim = Dim<N2, P1, Z0, Z0, Z0, Z0, Z0>;

    fn length(v: f64) -> DynQuantity<f64> {
        Quantity::<f64, LengthDim>::new(v).into()
    }

    fn time(v: f64) -> DynQuantity<f64> {
        Quantity::<f64, TimeDim>::new(v).into()
    }

    #[test]
    fn erase_keeps_value_and_dimension() {
        let d = length(2.0);
        assert_eq!(d.value(), 2.0);
        assert_eq!(d.dimension(), LengthDim::VECTOR);
    }

    #[test]
    fn recover_checks_dimension() {
        let accel = length(9.81) / (time(1.0) * time(1.0));
        let q = Quantity::<f64, AccelDim>::try_from(accel).unwrap();
        assert_eq!(q.value(), 9.81);

        let err = Quantity::<f64, LengthDim>::try_from(accel).unwrap_err();
        assert_eq!(
            err,
            DimensionError::Mismatch {
                expected: LengthDim::VECTOR,
                found: AccelDim::VECTOR,
            }
        );
    }

    #[test]
    fn checked_add_and_sub() {
        assert_eq!(length(1.0).checked_add(length(2.0)).unwrap().value(), 3.0);
        assert_eq!(length(1.0).checked_sub(length(2.0)).unwrap().value(), -1.0);
        assert!(length(1.0).checked_add(time(2.0)).is_err());
        assert!(length(1.0).checked_sub(time(2.0)).is_err());
    }

    #[test]
    fn checked_cmp() {
        assert_eq!(length(0.1).checked_cmp(&length(0.2)), Ok(Some(Ordering::Less)));
        assert_eq!(length(f64::NAN).checked_cmp(&length(0.2)), Ok(None));
        assert!(length(0.1).checked_cmp(&time(0.2)).is_err());
    }

    #[test]
    fn checked_in_unit() {
        let foot = length(0.3048);
        assert_eq!(length(0.6096).checked_in_unit(foot), Ok(0.6096 / 0.3048));
        assert!(time(1.0).checked_in_unit(foot).is_err());
    }

    #[test]
    fn sqrt_requires_even_exponents() {
        let area = length(3.0) * length(3.0);
        let side = area.sqrt().unwrap();
        assert_eq!(side.value(), 3.0);
        assert_eq!(side.dimension(), LengthDim::VECTOR);

        assert_eq!(
            length(4.0).sqrt(),
            Err(DimensionError::NotSqrtable(LengthDim::VECTOR))
        );
    }

    #[test]
    fn powi_matches_static() {
        let q = Quantity::<f64, LengthDim>::new(0.3);
        let d: DynQuantity<f64> = q.into();
        assert_eq!(d.powi(-2), DynQuantity::from(q.powi::<N2>()));
        assert_eq!(d.powi(2), DynQuantity::from(q.powi::<P2>()));
        assert_eq!(d.powi(-1), DynQuantity::from(q.powi::<N1>()));
        assert_eq!(d.powi(0), DynQuantity::dimensionless(1.0));
    }

    fn seconds_to_the(n: i32) -> DynQuantity<f64> {
        DynQuantity::new(1.0, DimensionVector::new(n, 0, 0, 0, 0, 0, 0))
    }

    #[test]
    fn checked_mul_and_div_report_exponent_overflow() {
        let huge = seconds_to_the(i32::MAX);
        assert_eq!(huge.checked_mul(seconds_to_the(1)), Err(DimensionError::ExponentOverflow));
        assert_eq!(seconds_to_the(-i32::MAX).checked_div(seconds_to_the(2)), Err(DimensionError::ExponentOverflow));
        assert_eq!(huge.checked_div(seconds_to_the(1)), Ok(seconds_to_the(i32::MAX - 1)));

        let accel = length(9.81).checked_div(time(1.0)).and_then(|v| v.checked_div(time(1.0)));
        assert_eq!(accel, Ok(length(9.81) / (time(1.0) * time(1.0))));
    }

    #[test]
    fn checked_powi_reports_exponent_overflow() {
        let wide = DynQuantity::new(2.0, DimensionVector::new(0, 1 << 20, 0, 0, 0, 0, 0));
        assert_eq!(wide.checked_powi(1 << 12), Err(DimensionError::ExponentOverflow));
        assert_eq!(seconds_to_the(-1).checked_powi(i32::MIN), Err(DimensionError::ExponentOverflow));
        assert_eq!(length(0.3).checked_powi(-2), Ok(length(0.3).powi(-2)));
    }

    #[test]
    #[should_panic(expected = "dimension exponent overflow in product")]
    fn mul_operator_panics_on_exponent_overflow() {
        let _ = seconds_to_the(i32::MAX) * seconds_to_the(1);
    }

    #[test]
    #[should_panic(expected = "dimension exponent overflow in powi")]
    fn powi_panics_on_exponent_overflow() {
        let wide = DynQuantity::new(1.0, DimensionVector::new(0, 1 << 20, 0, 0, 0, 0, 0));
        let _ = wide.powi(1 << 12);
    }

    #[test]
    fn scalar_ops_and_neg() {
        let d = length(2.0);
        assert_eq!((d * 3.0).value(), 6.0);
        assert_eq!((d / 4.0).value(), 0.5);
        assert_eq!((-d).value(), -2.0);
        assert_eq!((-d).dimension(), d.dimension());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", length(2.0) / time(4.0)), "0.5 s^-1·m");
        assert_eq!(format!("{}", DynQuantity::dimensionless(3.0_f64)), "3");
    }

    #[test]
    fn error_messages() {
        let err = DimensionError::Mismatch {
            expected: LengthDim::VECTOR,
            found: TimeDim::VECTOR,
        };
        assert_eq!(err.to_string(), "dimensions do not match: expected m, found s");
        assert_eq!(
            DimensionError::NotSqrtable(LengthDim::VECTOR).to_string(),
            "dimension m is not sqrt-able"
        );
        assert_eq!(DimensionError::ExponentOverflow.to_string(), "dimension exponent overflow");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    fn vector() -> impl Strategy<Value = DimensionVector> {
        prop::array::uniform7(-6i32..=6).prop_map(DimensionVector::from_array)
    }

    proptest! {
        #[test]
        fn prop_mul_div_combine_dimensions(
            a in -1e3..1e3f64, b in 1e-3..1e3f64, da in vector(), db in vector()
        ) {
            let x = DynQuantity::new(a, da);
            let y = DynQuantity::new(b, db);
            prop_assert_eq!(x * y, DynQuantity::new(a * b, da.product(db)));
            prop_assert_eq!(x / y, DynQuantity::new(a / b, da.quotient(db)));
            prop_assert_eq!(x.checked_mul(y), Ok(x * y));
            prop_assert_eq!(x.checked_div(y), Ok(x / y));
        }

        #[test]
        fn prop_add_succeeds_iff_compatible(a in -1e3..1e3f64, da in vector(), db in vector()) {
            let result = DynQuantity::new(a, da).checked_add(DynQuantity::new(a, db));
            prop_assert_eq!(result.is_ok(), da == db);
        }

        #[test]
        fn prop_static_and_dynamic_agree(a in -1e3..1e3f64, b in 1e-3..1e3f64) {
            let qa = Quantity::<f64, AccelDim>::new(a);
            let qb = Quantity::<f64, TimeDim>::new(b);
            let stat: DynQuantity<f64> = (qa * qb).into();
            let dynamic = DynQuantity::from(qa) * DynQuantity::from(qb);
            prop_assert_eq!(stat, dynamic);
            let stat: DynQuantity<f64> = (qa / qb).into();
            let dynamic = DynQuantity::from(qa) / DynQuantity::from(qb);
            prop_assert_eq!(stat, dynamic);
        }
    }
}
