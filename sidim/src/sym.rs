//! Short unit symbols for terse expressions.
//!
//! ```rust
//! use sidim::sym::*;
//!
//! let g = 9.80665 * m / (s * s);
//! let weight = 75.0 * kg * g;
//! assert!((weight.in_unit(N) - 735.49875).abs() < 1e-9);
//! ```
#![allow(non_upper_case_globals)]

use crate::quantities::*;
use crate::units;
use crate::OffsetQuantity;
use sidim_core::dims;

/// Second.
pub const s: Time = units::SECOND;
/// Metre.
pub const m: Length = units::METRE;
/// Kilogram.
pub const kg: Mass = units::KILOGRAM;
/// Ampere.
pub const A: Current = units::AMPERE;
/// Kelvin.
pub const K: Temperature = units::KELVIN;
/// Mole.
pub const mol: Amount = units::MOLE;
/// Candela.
pub const cd: Luminosity = units::CANDELA;

/// Radian.
pub const rad: Angle = units::RADIAN;
/// Hertz.
pub const Hz: Frequency = units::HERTZ;
/// Newton.
pub const N: Force = units::NEWTON;
/// Pascal.
pub const Pa: Pressure = units::PASCAL;
/// Joule.
pub const J: Energy = units::JOULE;
/// Watt.
pub const W: Power = units::WATT;
/// Kilowatt.
pub const kW: Power = units::KILOWATT;
/// Kilowatt hour.
pub const kWh: Energy = units::KILOWATT_HOUR;

/// Coulomb.
pub const C: Charge = units::COULOMB;
/// Volt.
pub const V: Voltage = units::VOLT;
/// Farad.
pub const F: Capacitance = units::FARAD;
/// Ohm.
pub const ohm: Resistance = units::OHM;

/// Millimetre.
pub const mm: Length = units::MILLIMETRE;
/// Kilometre.
pub const km: Length = units::KILOMETRE;
/// Degrees Celsius.
pub const degC: OffsetQuantity<f64, dims::Temperature> = units::CELSIUS;
/// Kilogram per second.
pub const kgps: MassFlowRate = units::KILOGRAM_PER_SECOND;
/// Kilogram per cubic metre.
pub const kgpm3: Density = units::KILOGRAM_PER_METRE3;

/// Square metre.
pub const m2: Area = units::METRE2;
/// Litre.
pub const L: Volume = units::LITRE;

/// Degree.
pub const deg: Angle = units::DEGREE;
/// Degree per second.
pub const degps: AngularRate = units::DEGREE_PER_SECOND;
/// Radian per second.
pub const radps: AngularRate = units::RADIAN_PER_SECOND;
/// Revolution per second.
pub const rps: AngularRate = units::REVOLUTION_PER_SECOND;
/// Revolution per minute.
pub const rpm: AngularRate = units::REVOLUTION_PER_MINUTE;

/// Kilogram square metre.
pub const kgm2: MomentOfInertia = units::KILOGRAM_METRE2;

/// Nautical mile.
pub const nmi: Length = units::NAUTICAL_MILE;
/// Foot.
pub const ft: Length = units::FOOT;
/// Mile.
pub const mi: Length = units::MILE;
/// Yard.
pub const yd: Length = units::YARD;
/// Pound.
pub const lb: Mass = units::POUND;
/// Pound-force.
pub const lbf: Force = units::POUND_FORCE;
/// US gallon.
pub const gal: Volume = units::GALLON;
/// US quart.
pub const qt: Volume = units::QUART;
/// Knot.
pub const kt: Speed = units::KNOT;
/// Pound-force per square inch.
pub const psi: Pressure = units::POUND_PER_SQUARE_INCH;
/// Foot per second.
pub const fps: Speed = units::FOOT_PER_SECOND;
/// Degrees Fahrenheit.
pub const degF: OffsetQuantity<f64, dims::Temperature> = units::FAHRENHEIT;
/// Pound per hour.
pub const pph: MassFlowRate = units::POUND_PER_HOUR;
