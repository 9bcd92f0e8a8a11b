//! Core type system for dimensionally checked physical quantities.
//!
//! `sidim-core` provides a minimal, zero-cost dimensional-analysis model:
//!
//! - A *dimension* is a type [`Dim`] whose seven parameters are `typenum` integers: the SI base exponents of time,
//!   length, mass, current, temperature, amount of substance and luminous intensity.
//! - A value tagged with a dimension is a [`Quantity<T, D>`], backed by a single float `T` (`f32` or `f64`) that is
//!   always in base SI units.
//! - Multiplying, dividing, raising to integer powers and taking square roots derive the result dimension at compile
//!   time ([`Product`], [`Quotient`], [`Power`], [`Root`]).
//! - Adding, subtracting, comparing and converting require identical dimensions ([`Compatible`]).
//!
//! Most users should depend on `sidim` (the facade crate), which adds a catalog of named units and quantity aliases.
//!
//! # What this crate solves
//!
//! - Compile-time rejection of dimensionally inconsistent expressions.
//! - Zero runtime overhead: a `Quantity<f64, D>` has exactly the layout of an `f64`.
//! - Affine (offset) scales such as degrees Celsius, at the conversion boundary.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic, tolerant comparison or unit-name parsing.
//! - Fractional exponents beyond the square root.
//! - Integer scalars: `k * q` and `q * k` take `k` of the quantity's float type, so `2 * METRE` does not compile.
//!
//! # Quick start
//!
//! ```rust
//! use sidim_core::dims::{Length, Time};
//! use sidim_core::{Quantity, Quotient};
//!
//! const METRE: Quantity<f64, Length> = Quantity::new(1.0);
//! const SECOND: Quantity<f64, Time> = Quantity::new(1.0);
//!
//! let distance = 100.0 * METRE;
//! let elapsed = 9.58 * SECOND;
//! let speed: Quantity<f64, Quotient<Length, Time>> = distance / elapsed;
//! assert!((speed.in_unit(METRE / SECOND) - 10.438).abs() < 1e-3);
//! ```
//!
//! Mixing dimensions is a compile error:
//!
//! ```compile_fail
//! use sidim_core::dims::{Length, Time};
//! use sidim_core::Quantity;
//!
//! let l = Quantity::<f64, Length>::new(1.0);
//! let t = Quantity::<f64, Time>::new(1.0);
//! let _ = l < t;
//! ```
//!
//! So is mixing representations:
//!
//! ```compile_fail
//! use sidim_core::dims::Length;
//! use sidim_core::Quantity;
//!
//! let _ = Quantity::<f64, Length>::new(1.0) + Quantity::<f32, Length>::new(1.0);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `sidim-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! sidim-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` float intrinsics and `std::error::Error` for [`DimensionError`].
//!
//! # Panics and errors
//!
//! Static operations never return `Result`: a dimension error is a type error. They do not panic on their own, but
//! they follow IEEE-754 behavior (NaN and infinities propagate). The only run-time errors are the
//! [`DimensionError`]s of the [`dynamic`] module. Run-time dimension exponents are `i32`; the `*`, `/` and `powi`
//! forms on [`DynQuantity`] and [`DimensionVector`] panic if one overflows, and their `checked_*` counterparts
//! return `None` or [`DimensionError::ExponentOverflow`] instead.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

mod algebra;
mod dimension;
mod macros;
mod math;
mod offset;
mod quantity;
mod scalar;

pub mod dynamic;

pub use typenum;

pub use algebra::{DimDiv, DimMul, DimPow, DimSqrt, Inverse, Power, Product, Quotient, Root};
pub use dimension::{Compatible, Dim, Dimension, DimensionVector, Dimensionless, Sqrtable};
pub use dynamic::{DimensionError, DynQuantity};
pub use math::{abs, assign, copysign, pow, scalar, sqrt, ScalarLike};
pub use offset::OffsetQuantity;
pub use quantity::{Quantity, UnitScale};
pub use scalar::Scalar;

/// The seven base dimensions.
pub mod dims {
    use crate::dimension::Dim;
    use typenum::{P1, Z0};

    pub use crate::dimension::Dimensionless;

    /// Time (second).
    pub type Time = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
    /// Length (metre).
    pub type Length = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
    /// Mass (kilogram).
    pub type Mass = Dim<Z0, Z0, P1, Z0, Z0, Z0, Z0>;
    /// Electric current (ampere).
    pub type Current = Dim<Z0, Z0, Z0, P1, Z0, Z0, Z0>;
    /// Thermodynamic temperature (kelvin).
    pub type Temperature = Dim<Z0, Z0, Z0, Z0, P1, Z0, Z0>;
    /// Amount of substance (mole).
    pub type Amount = Dim<Z0, Z0, Z0, Z0, Z0, P1, Z0>;
    /// Luminous intensity (candela).
    pub type Luminosity = Dim<Z0, Z0, Z0, Z0, Z0, Z0, P1>;
}
