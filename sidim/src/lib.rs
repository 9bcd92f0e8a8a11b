//! Compile-time dimensional analysis for SI quantities.
//!
//! `sidim` is the user-facing crate in this workspace. It re-exports the full API from `sidim-core` plus a catalog of
//! named units ([`units`]), quantity-kind aliases ([`quantities`]) and short symbols ([`sym`]).
//!
//! The core idea is: a value is always a `Quantity<T, D>`, where `T` is `f32` or `f64` and `D` is the vector of
//! seven SI base exponents, tracked at the type level. The stored number is always in base SI units, so any two
//! quantities of the same dimension can be added or compared directly, and every product or quotient gets its
//! dimension computed by the compiler.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can’t add metres to seconds).
//! - Derives the dimension of `*`, `/`, integer powers and square roots at compile time.
//! - Converts to any unit of the same dimension with [`Quantity::in_unit`], including affine scales.
//!
//! # What this crate does not try to solve
//!
//! - Tolerant comparison: `==` is exact float equality.
//! - Parsing unit names, or printing quantities in anything but base SI.
//! - Implicit widening between `f32` and `f64` quantities; use [`Quantity::cast`].
//! - Integer scalars. The left operand of `k * unit` must have the quantity's representation type, so write
//!   `2.0 * METRE` rather than `2 * METRE`, and convert integer counts explicitly (`n as f64 * METRE`).
//!
//! # Quick start
//!
//! Build quantities from units and read them back in any compatible unit:
//!
//! ```rust
//! use sidim::quantities::{Length, Speed, Time};
//! use sidim::{FOOT, KILOMETRE_PER_HOUR, METRE, SECOND};
//!
//! let d: Length = 100.0 * FOOT;
//! let t: Time = 4.0 * SECOND;
//! let v: Speed = d / t;
//! assert!((v.in_unit(METRE / SECOND) - 7.62).abs() < 1e-12);
//! assert!((v.in_unit(KILOMETRE_PER_HOUR) - 27.432).abs() < 1e-9);
//! ```
//!
//! Temperatures on offset scales:
//!
//! ```rust
//! use sidim::{CELSIUS, FAHRENHEIT, KELVIN};
//!
//! let t = 25.0 * CELSIUS;
//! assert!((t.in_unit(KELVIN) - 298.15).abs() < 1e-12);
//! assert!((t.in_unit(FAHRENHEIT) - 77.0).abs() < 1e-9);
//! ```
//!
//! # Incorrect usage (type errors)
//!
//! Adding different dimensions:
//!
//! ```compile_fail
//! use sidim::{METRE, SECOND};
//!
//! let _ = 1.0 * METRE + 1.0 * SECOND;
//! ```
//!
//! Subtracting different dimensions:
//!
//! ```compile_fail
//! use sidim::{METRE, SECOND};
//!
//! let _ = 1.0 * METRE - 1.0 * SECOND;
//! ```
//!
//! Compound assignment across dimensions:
//!
//! ```compile_fail
//! use sidim::{METRE, SECOND};
//!
//! let mut x = 1.0 * METRE;
//! x += 1.0 * SECOND;
//! ```
//!
//! ```compile_fail
//! use sidim::{METRE, SECOND};
//!
//! let mut x = 1.0 * METRE;
//! x -= 1.0 * SECOND;
//! ```
//!
//! Comparing different dimensions:
//!
//! ```compile_fail
//! use sidim::{METRE, SECOND};
//!
//! let _ = 1.0 * METRE < 1.0 * SECOND;
//! ```
//!
//! ```compile_fail
//! use sidim::{METRE, SECOND};
//!
//! let _ = 1.0 * METRE == 1.0 * SECOND;
//! ```
//!
//! Turning a dimensioned quantity into a bare number:
//!
//! ```compile_fail
//! use sidim::METRE;
//!
//! let _: f64 = (2.0 * METRE).into();
//! ```
//!
//! Assigning one quantity kind to another:
//!
//! ```compile_fail
//! use sidim::quantities::Pressure;
//! use sidim::NEWTON;
//!
//! let _: Pressure = 1.0 * NEWTON;
//! ```
//!
//! Square root of a quantity with an odd exponent:
//!
//! ```compile_fail
//! use sidim::METRE;
//!
//! let _ = (2.0 * METRE).sqrt();
//! ```
//!
//! Converting into a unit of another dimension:
//!
//! ```compile_fail
//! use sidim::{METRE, SECOND};
//!
//! let _ = (1.0 * METRE).in_unit(SECOND);
//! ```
//!
//! ```compile_fail
//! use sidim::{CELSIUS, METRE};
//!
//! let _ = (2.0 * METRE).in_unit(CELSIUS);
//! ```
//!
//! Scaling a unit by an integer:
//!
//! ```compile_fail
//! use sidim::METRE;
//!
//! let _ = 2 * METRE;
//! ```
//!
//! Mixing `f32` and `f64` quantities:
//!
//! ```compile_fail
//! use sidim::METRE;
//!
//! let _ = 2.0 * METRE + (2.0 * METRE).to_f32();
//! ```
//!
//! # Modules
//!
//! - `sidim::units` (SI base and derived units, metric and customary units, offset temperature scales), also
//!   re-exported at the crate root
//! - `sidim::quantities` (`Length`, `Speed`, `Pressure`, … generic over the representation)
//! - `sidim::sym` (`m`, `s`, `kg`, `N`, `psi`, `degC`, …)
//! - `sidim::dynamic` (values whose dimension is only known at run time)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `sidim-core`.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! sidim = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Dimension errors are type errors. Arithmetic and conversions are plain float computations; they do not panic on
//! their own, but they follow IEEE-754 behavior (NaN and infinities propagate according to the underlying
//! operation). Run-time checked operations live in [`dynamic`] and return [`DimensionError`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use sidim_core::*;

pub mod quantities;
pub mod sym;
pub mod units;

pub use units::*;
