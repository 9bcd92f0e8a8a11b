//! Free-function forms of the scalar utilities.
//!
//! These accept bare floats and quantities alike, so generic numeric code can call `abs(x)` without caring whether
//! `x` carries a dimension.

use crate::algebra::{DimPow, DimSqrt, Power, Root};
use crate::dimension::Dimension;
use crate::quantity::Quantity;
use crate::scalar::Scalar;
use typenum::Integer;

/// A bare float or a quantity: anything whose single stored scalar can be read and overwritten.
pub trait ScalarLike: Copy {
    /// The underlying float type.
    type Scalar: Scalar;

    /// Reads the stored scalar (base SI for quantities).
    fn scalar(self) -> Self::Scalar;

    /// Overwrites the stored scalar, leaving the dimension untouched.
    fn assign(&mut self, value: Self::Scalar);
}

impl<T: Scalar, D: Dimension> ScalarLike for Quantity<T, D> {
    type Scalar = T;

    #[inline]
    fn scalar(self) -> T {
        self.value()
    }

    #[inline]
    fn assign(&mut self, value: T) {
        *self = Quantity::new(value);
    }
}

/// The stored scalar of `x`.
#[inline]
pub fn scalar<X: ScalarLike>(x: X) -> X::Scalar {
    x.scalar()
}

/// Overwrites the stored scalar of `x` with `value`.
#[inline]
pub fn assign<X: ScalarLike>(x: &mut X, value: X::Scalar) {
    x.assign(value);
}

/// Absolute value, keeping the dimension.
///
/// ```rust
/// use sidim_core::{abs, Quantity};
/// assert_eq!(abs(-2.0_f64), 2.0);
/// assert_eq!(abs(Quantity::<f64>::new(-2.0)).value(), 2.0);
/// ```
#[inline]
pub fn abs<X: ScalarLike>(x: X) -> X {
    let mut out = x;
    out.assign(x.scalar().abs());
    out
}

/// `x` with the sign of `sign`, keeping the dimension of `x`.
///
/// The sign source may be a bare float or a quantity of any dimension, as long as the representation matches.
///
/// ```rust
/// use sidim_core::{copysign, Dim, Quantity};
/// use sidim_core::typenum::{P1, Z0};
///
/// type Length = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
/// let q = Quantity::<f64, Length>::new(3.0);
/// assert_eq!(copysign(q, -1.0_f64).value(), -3.0);
/// ```
#[inline]
pub fn copysign<X, S>(x: X, sign: S) -> X
where
    X: ScalarLike,
    S: ScalarLike<Scalar = X::Scalar>,
{
    let mut out = x;
    out.assign(x.scalar().copysign(sign.scalar()));
    out
}

/// Square root of a quantity whose dimension has only even exponents.
#[inline]
pub fn sqrt<T: Scalar, D: DimSqrt>(q: Quantity<T, D>) -> Quantity<T, Root<D>> {
    q.sqrt()
}

/// Integer power `E` of a quantity. See [`Quantity::powi`].
///
/// ```rust
/// use sidim_core::{pow, Dim, Quantity};
/// use sidim_core::typenum::{P1, P3, Z0};
///
/// type Length = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
/// let volume = pow::<P3, _, _>(Quantity::<f64, Length>::new(2.0));
/// assert_eq!(volume.value(), 8.0);
/// ```
#[inline]
pub fn pow<E, T, D>(q: Quantity<T, D>) -> Quantity<T, Power<D, E>>
where
    E: Integer,
    T: Scalar,
    D: DimPow<E>,
{
    q.powi::<E>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dim;
    use typenum::{N2, P1, P2, Z0};

    type LengthDim = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
    type TimeDim = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
    type Length = Quantity<f64, LengthDim>;

    #[test]
    fn scalar_reads_base_value() {
        assert_eq!(scalar(Length::new(1.5)), 1.5);
        assert_eq!(scalar(1.5_f32), 1.5);
    }

    #[test]
    fn assign_overwrites_scalar() {
        let mut q = Length::new(1.0);
        assign(&mut q, 4.0);
        assert_eq!(q.value(), 4.0);

        let mut x = 1.0_f64;
        assign(&mut x, 4.0);
        assert_eq!(x, 4.0);
    }

    #[test]
    fn abs_and_copysign_on_both_kinds() {
        assert_eq!(abs(-3.0_f32), 3.0);
        assert_eq!(abs(Length::new(-3.0)), Length::new(3.0));
        assert_eq!(copysign(3.0_f64, -1.0), -3.0);
        assert_eq!(copysign(Length::new(3.0), Length::new(-0.0)), Length::new(-3.0));
    }

    #[test]
    fn copysign_takes_sign_from_any_scalar_like() {
        assert_eq!(copysign(Length::new(3.0), -1.0_f64), Length::new(-3.0));
        assert_eq!(copysign(Length::new(-3.0), 0.0_f64), Length::new(3.0));
        assert_eq!(copysign(Length::new(3.0), Quantity::<f64, TimeDim>::new(-2.0)), Length::new(-3.0));
        assert_eq!(copysign(-2.0_f64, Length::new(5.0)), 2.0);
    }

    #[test]
    fn free_pow_and_sqrt() {
        let q = Length::new(3.0);
        let squared: Quantity<f64, Dim<Z0, P2, Z0, Z0, Z0, Z0, Z0>> = pow::<P2, _, _>(q);
        assert_eq!(squared.value(), 9.0);
        assert_eq!(sqrt(squared), q);
        assert_eq!(pow::<N2, _, _>(q).value(), 1.0 / 3.0 / 3.0);
    }
}
