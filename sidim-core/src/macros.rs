//! Macros for implementing the representation trait and the scalar-on-the-left operators.

/// Implements [`Scalar`](crate::Scalar) for a primitive float, using `std` when available and `libm` otherwise.
macro_rules! impl_scalar {
    ($t:ty, $sqrt:path, $fabs:path, $copysign:path) => {
        impl $crate::Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn sqrt(self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::sqrt(self)
                }
                #[cfg(not(feature = "std"))]
                {
                    $sqrt(self)
                }
            }

            #[inline]
            fn abs(self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::abs(self)
                }
                #[cfg(not(feature = "std"))]
                {
                    $fabs(self)
                }
            }

            #[inline]
            fn copysign(self, sign: Self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::copysign(self, sign)
                }
                #[cfg(not(feature = "std"))]
                {
                    $copysign(self, sign)
                }
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    };
}

/// Implements the operators whose left operand is a bare primitive float, which coherence only allows for concrete
/// types: `k * q`, `k / q`, `k * offset_unit`, and the conversions between a bare float and a dimensionless quantity.
macro_rules! impl_primitive_ops {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<D: $crate::Dimension> ::core::ops::Mul<$crate::Quantity<$t, D>> for $t {
                type Output = $crate::Quantity<$t, D>;
                #[inline]
                fn mul(self, rhs: $crate::Quantity<$t, D>) -> Self::Output {
                    $crate::Quantity::new(self * rhs.value())
                }
            }

            impl<D> ::core::ops::Div<$crate::Quantity<$t, D>> for $t
            where
                D: $crate::Dimension,
                $crate::Dimensionless: $crate::DimDiv<D>,
            {
                type Output = $crate::Quantity<$t, $crate::Inverse<D>>;
                #[inline]
                fn div(self, rhs: $crate::Quantity<$t, D>) -> Self::Output {
                    $crate::Quantity::new(self / rhs.value())
                }
            }

            impl<D: $crate::Dimension> ::core::ops::Mul<$crate::OffsetQuantity<$t, D>> for $t {
                type Output = $crate::Quantity<$t, D>;
                #[inline]
                fn mul(self, rhs: $crate::OffsetQuantity<$t, D>) -> Self::Output {
                    rhs.at(self)
                }
            }

            impl From<$crate::Quantity<$t, $crate::Dimensionless>> for $t {
                #[inline]
                fn from(ratio: $crate::Quantity<$t, $crate::Dimensionless>) -> Self {
                    ratio.value()
                }
            }

            impl From<$t> for $crate::Quantity<$t, $crate::Dimensionless> {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::new(value)
                }
            }

            impl $crate::ScalarLike for $t {
                type Scalar = $t;
                #[inline]
                fn scalar(self) -> $t {
                    self
                }
                #[inline]
                fn assign(&mut self, value: $t) {
                    *self = value;
                }
            }
        )+
    };
}

pub(crate) use impl_primitive_ops;
pub(crate) use impl_scalar;
