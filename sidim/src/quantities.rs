//! Named quantity kinds.
//!
//! Each alias fixes the dimension and leaves the representation open, defaulting to `f64`:
//!
//! ```rust
//! use sidim::quantities::{Length, Speed, Time};
//! use sidim::units::{METRE, SECOND};
//!
//! let d: Length = 100.0 * METRE;
//! let t: Time = 20.0 * SECOND;
//! let v: Speed = d / t;
//! assert_eq!(v.value(), 5.0);
//!
//! let narrow: Speed<f32> = v.to_f32();
//! assert_eq!(narrow.value(), 5.0_f32);
//! ```
//!
//! Angles are dimensionless, so an [`Angle`] and a [`Dimensionless`] ratio are the same type.

use sidim_core::typenum::{N1, N2, N3, P1, P2, P3, Z0};
use sidim_core::{dims, Dim, Quantity};

/// Time.
pub type Time<T = f64> = Quantity<T, dims::Time>;
/// Length.
pub type Length<T = f64> = Quantity<T, dims::Length>;
/// Mass.
pub type Mass<T = f64> = Quantity<T, dims::Mass>;
/// Electric current.
pub type Current<T = f64> = Quantity<T, dims::Current>;
/// Thermodynamic temperature.
pub type Temperature<T = f64> = Quantity<T, dims::Temperature>;
/// Amount of substance.
pub type Amount<T = f64> = Quantity<T, dims::Amount>;
/// Luminous intensity.
pub type Luminosity<T = f64> = Quantity<T, dims::Luminosity>;

/// Pure number.
pub type Dimensionless<T = f64> = Quantity<T, dims::Dimensionless>;
/// Plane angle (radians are dimensionless).
pub type Angle<T = f64> = Quantity<T, dims::Dimensionless>;

/// Length per time.
pub type Speed<T = f64> = Quantity<T, Dim<N1, P1, Z0, Z0, Z0, Z0, Z0>>;
/// Length per time squared.
pub type Acceleration<T = f64> = Quantity<T, Dim<N2, P1, Z0, Z0, Z0, Z0, Z0>>;
/// Mass times acceleration.
pub type Force<T = f64> = Quantity<T, Dim<N2, P1, P1, Z0, Z0, Z0, Z0>>;
/// Force times length.
pub type Energy<T = f64> = Quantity<T, Dim<N2, P2, P1, Z0, Z0, Z0, Z0>>;
/// Energy per time.
pub type Power<T = f64> = Quantity<T, Dim<N3, P2, P1, Z0, Z0, Z0, Z0>>;
/// Length cubed.
pub type Volume<T = f64> = Quantity<T, Dim<Z0, P3, Z0, Z0, Z0, Z0, Z0>>;
/// Force per area.
pub type Pressure<T = f64> = Quantity<T, Dim<N2, N1, P1, Z0, Z0, Z0, Z0>>;
/// Force times lever arm; dimensionally the same as [`Energy`].
pub type Torque<T = f64> = Quantity<T, Dim<N2, P2, P1, Z0, Z0, Z0, Z0>>;
/// Length squared.
pub type Area<T = f64> = Quantity<T, Dim<Z0, P2, Z0, Z0, Z0, Z0, Z0>>;
/// Angle per time.
pub type AngularRate<T = f64> = Quantity<T, Dim<N1, Z0, Z0, Z0, Z0, Z0, Z0>>;
/// Angle per time squared.
pub type AngularAcceleration<T = f64> = Quantity<T, Dim<N2, Z0, Z0, Z0, Z0, Z0, Z0>>;
/// Cycles per time.
pub type Frequency<T = f64> = Quantity<T, Dim<N1, Z0, Z0, Z0, Z0, Z0, Z0>>;
/// Mass per time.
pub type MassFlowRate<T = f64> = Quantity<T, Dim<N1, Z0, P1, Z0, Z0, Z0, Z0>>;
/// Mass times length squared.
pub type MomentOfInertia<T = f64> = Quantity<T, Dim<Z0, P2, P1, Z0, Z0, Z0, Z0>>;
/// Mass per volume.
pub type Density<T = f64> = Quantity<T, Dim<Z0, N3, P1, Z0, Z0, Z0, Z0>>;

/// Current times time.
pub type Charge<T = f64> = Quantity<T, Dim<P1, Z0, Z0, P1, Z0, Z0, Z0>>;
/// Power per current.
pub type Voltage<T = f64> = Quantity<T, Dim<N3, P2, P1, N1, Z0, Z0, Z0>>;
/// Charge per voltage.
pub type Capacitance<T = f64> = Quantity<T, Dim<sidim_core::typenum::P4, N2, N1, P2, Z0, Z0, Z0>>;
/// Voltage per current.
pub type Resistance<T = f64> = Quantity<T, Dim<N3, P2, P1, N2, Z0, Z0, Z0>>;
