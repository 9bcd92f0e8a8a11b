//! Dimension derivation rules.
//!
//! Pure type-level functions from input dimensions to the output dimension of `*`, `/`, integer powers and square
//! roots. They are evaluated by trait resolution and leave nothing behind at run time.
//!
//! | rule                | result                              |
//! |---------------------|-------------------------------------|
//! | [`Product<A, B>`]   | elementwise `A + B`                 |
//! | [`Quotient<A, B>`]  | elementwise `A - B`                 |
//! | [`Power<D, E>`]     | elementwise `D * E`                 |
//! | [`Root<D>`]         | elementwise `D / 2` (all even only) |
//! | [`Inverse<D>`]      | elementwise `-D`                    |

use crate::dimension::{Dim, Dimension, Dimensionless, Sqrtable};
use core::ops::{Add, Mul, Sub};
use typenum::{Diff, Integer, PartialDiv, PartialQuot, Prod, Sum, P2};

/// Output dimension of multiplying a quantity of dimension `Self` by one of dimension `Rhs`.
pub trait DimMul<Rhs: Dimension>: Dimension {
    /// Elementwise sum of the exponents.
    type Output: Dimension;
}

/// Output dimension of dividing a quantity of dimension `Self` by one of dimension `Rhs`.
pub trait DimDiv<Rhs: Dimension>: Dimension {
    /// Elementwise difference of the exponents.
    type Output: Dimension;
}

/// Output dimension of raising a quantity of dimension `Self` to the integer power `E`.
pub trait DimPow<E: Integer>: Dimension {
    /// Exponents scaled by `E`.
    type Output: Dimension;
}

/// Output dimension of the square root of a quantity of dimension `Self`.
///
/// Only implemented for [`Sqrtable`] dimensions.
pub trait DimSqrt: Sqrtable {
    /// Exponents halved.
    type Output: Dimension;
}

/// Dimension of `A * B`.
pub type Product<A, B> = <A as DimMul<B>>::Output;
/// Dimension of `A / B`.
pub type Quotient<A, B> = <A as DimDiv<B>>::Output;
/// Dimension of `D` raised to `E`.
pub type Power<D, E> = <D as DimPow<E>>::Output;
/// Dimension of the square root of `D`.
pub type Root<D> = <D as DimSqrt>::Output;
/// Dimension of `1 / D`.
pub type Inverse<D> = Quotient<Dimensionless, D>;

/// Implements a rule that combines two dimensions component by component with a `typenum` operator.
macro_rules! elementwise_rule {
    ($rule:ident, $op:ident, $out:ident) => {
        impl<Tl, Ll, Ml, Il, Kl, Nl, Jl, Tr, Lr, Mr, Ir, Kr, Nr, Jr>
            $rule<Dim<Tr, Lr, Mr, Ir, Kr, Nr, Jr>> for Dim<Tl, Ll, Ml, Il, Kl, Nl, Jl>
        where
            Dim<Tl, Ll, Ml, Il, Kl, Nl, Jl>: Dimension,
            Dim<Tr, Lr, Mr, Ir, Kr, Nr, Jr>: Dimension,
            Tl: $op<Tr>,
            Ll: $op<Lr>,
            Ml: $op<Mr>,
            Il: $op<Ir>,
            Kl: $op<Kr>,
            Nl: $op<Nr>,
            Jl: $op<Jr>,
            Dim<
                $out<Tl, Tr>,
                $out<Ll, Lr>,
                $out<Ml, Mr>,
                $out<Il, Ir>,
                $out<Kl, Kr>,
                $out<Nl, Nr>,
                $out<Jl, Jr>,
            >: Dimension,
        {
            type Output = Dim<
                $out<Tl, Tr>,
                $out<Ll, Lr>,
                $out<Ml, Mr>,
                $out<Il, Ir>,
                $out<Kl, Kr>,
                $out<Nl, Nr>,
                $out<Jl, Jr>,
            >;
        }
    };
}

elementwise_rule!(DimMul, Add, Sum);
elementwise_rule!(DimDiv, Sub, Diff);

impl<E, T, L, M, I, K, N, J> DimPow<E> for Dim<T, L, M, I, K, N, J>
where
    E: Integer,
    Dim<T, L, M, I, K, N, J>: Dimension,
    T: Mul<E>,
    L: Mul<E>,
    M: Mul<E>,
    I: Mul<E>,
    K: Mul<E>,
    N: Mul<E>,
    J: Mul<E>,
    Dim<Prod<T, E>, Prod<L, E>, Prod<M, E>, Prod<I, E>, Prod<K, E>, Prod<N, E>, Prod<J, E>>: Dimension,
{
    type Output = Dim<Prod<T, E>, Prod<L, E>, Prod<M, E>, Prod<I, E>, Prod<K, E>, Prod<N, E>, Prod<J, E>>;
}

impl<T, L, M, I, K, N, J> DimSqrt for Dim<T, L, M, I, K, N, J>
where
    Dim<T, L, M, I, K, N, J>: Sqrtable,
    T: PartialDiv<P2>,
    L: PartialDiv<P2>,
    M: PartialDiv<P2>,
    I: PartialDiv<P2>,
    K: PartialDiv<P2>,
    N: PartialDiv<P2>,
    J: PartialDiv<P2>,
    Dim<
        PartialQuot<T, P2>,
        PartialQuot<L, P2>,
        PartialQuot<M, P2>,
        PartialQuot<I, P2>,
        PartialQuot<K, P2>,
        PartialQuot<N, P2>,
        PartialQuot<J, P2>,
    >: Dimension,
{
    type Output = Dim<
        PartialQuot<T, P2>,
        PartialQuot<L, P2>,
        PartialQuot<M, P2>,
        PartialQuot<I, P2>,
        PartialQuot<K, P2>,
        PartialQuot<N, P2>,
        PartialQuot<J, P2>,
    >;
}
