//! Affine units: a scale plus a zero-point offset.

use crate::dimension::{Compatible, Dimension, Dimensionless};
use crate::quantity::{Quantity, UnitScale};
use crate::scalar::Scalar;
use core::fmt;
use core::marker::PhantomData;

/// A unit whose zero does not coincide with the base unit's zero, such as degrees Celsius or Fahrenheit.
///
/// `value` is the size of one step in base SI units and `offset` is where the scale's zero lies, measured in steps.
/// An offset unit is only a conversion target: the sole arithmetic it supports is being applied to a magnitude
/// (`k * unit`), which produces an ordinary [`Quantity`].
///
/// ```rust
/// use sidim_core::{Dim, OffsetQuantity, Quantity};
/// use sidim_core::typenum::{P1, Z0};
///
/// type Temperature = Dim<Z0, Z0, Z0, Z0, P1, Z0, Z0>;
/// const CELSIUS: OffsetQuantity<f64, Temperature> = OffsetQuantity::new(1.0, 273.15);
///
/// let boiling: Quantity<f64, Temperature> = 100.0 * CELSIUS;
/// assert!((boiling.value() - 373.15).abs() < 1e-12);
/// assert!((boiling.in_unit(CELSIUS) - 100.0).abs() < 1e-12);
/// ```
///
/// Offset units cannot be added together:
///
/// ```compile_fail
/// use sidim_core::{Dim, OffsetQuantity};
/// use sidim_core::typenum::{P1, Z0};
///
/// type Temperature = Dim<Z0, Z0, Z0, Z0, P1, Z0, Z0>;
/// const CELSIUS: OffsetQuantity<f64, Temperature> = OffsetQuantity::new(1.0, 273.15);
/// let _ = CELSIUS + CELSIUS;
/// ```
pub struct OffsetQuantity<T, D = Dimensionless> {
    value: T,
    offset: T,
    _dim: PhantomData<D>,
}

impl<T: Scalar, D: Dimension> OffsetQuantity<T, D> {
    /// Creates an affine unit with step `value` (in base SI units) and zero point `offset` (in steps).
    #[inline]
    pub const fn new(value: T, offset: T) -> Self {
        Self {
            value,
            offset,
            _dim: PhantomData,
        }
    }

    /// Size of one step in base SI units.
    #[inline]
    pub const fn value(&self) -> T {
        self.value
    }

    /// Zero point, in steps.
    #[inline]
    pub const fn offset(&self) -> T {
        self.offset
    }

    /// The quantity read as `magnitude` on this scale: `(magnitude + offset) * value`.
    ///
    /// This is what `magnitude * unit` evaluates to.
    #[inline]
    pub fn at(self, magnitude: T) -> Quantity<T, D> {
        Quantity::new((magnitude + self.offset) * self.value)
    }

    /// Changes the representation of both fields.
    #[inline]
    pub fn cast<U: Scalar>(self) -> OffsetQuantity<U, D> {
        OffsetQuantity::new(U::from_f64(self.value.to_f64()), U::from_f64(self.offset.to_f64()))
    }
}

impl<T: Scalar, D: Dimension, Du: Compatible<D>> UnitScale<T, D> for OffsetQuantity<T, Du> {
    #[inline]
    fn express(&self, base: T) -> T {
        base / self.value - self.offset
    }
}

impl<T: Copy, D> Clone for OffsetQuantity<T, D> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, D> Copy for OffsetQuantity<T, D> {}

impl<T: Scalar, D: Dimension> fmt::Debug for OffsetQuantity<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OffsetQuantity")
            .field("value", &self.value)
            .field("offset", &self.offset)
            .field("dimension", &format_args!("{}", D::VECTOR))
            .finish()
    }
}
