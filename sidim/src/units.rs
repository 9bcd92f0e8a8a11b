//! Catalog of named units.
//!
//! Every constant is an `f64` quantity holding the size of one unit in base SI units, so a measurement is built by
//! scaling a unit and read back with [`Quantity::in_unit`](crate::Quantity::in_unit):
//!
//! ```rust
//! use sidim::units::{FOOT, METRE};
//!
//! let height = 6.0 * FOOT;
//! assert!((height.value() - 1.8288).abs() < 1e-12);
//! assert!((height.in_unit(METRE) - 1.8288).abs() < 1e-12);
//! ```
//!
//! Derived units are computed from the base units with the const helpers [`times`](crate::Quantity::times),
//! [`per`](crate::Quantity::per) and [`scaled`](crate::Quantity::scaled). Their dimensions are therefore checked
//! against the declared quantity kind when the catalog itself is compiled.
//!
//! Notes on definitions used here:
//!
//! - The international **foot** is exactly `0.3048 m` and the **inch** exactly `25.4 mm`.
//! - **Pound** (`0.453592 kg`) and **pound-force** (`4.448222 N`) use rounded conversion factors.
//! - **Gallon** is the US liquid gallon; [`IMPERIAL_GALLON`] is the UK one.
//! - [`CELSIUS`] and [`FAHRENHEIT`] are affine scales and only act at the conversion boundary.

use crate::quantities::*;
use crate::OffsetQuantity;
use core::f64::consts::PI;
use sidim_core::dims;

// ─────────────────────────────────────────────────────────────────────────────
// SI base units
// ─────────────────────────────────────────────────────────────────────────────

/// Second (SI base unit of time).
pub const SECOND: Time = Time::new(1.0);
/// Metre (SI base unit of length).
pub const METRE: Length = Length::new(1.0);
/// Kilogram (SI base unit of mass).
pub const KILOGRAM: Mass = Mass::new(1.0);
/// Ampere (SI base unit of electric current).
pub const AMPERE: Current = Current::new(1.0);
/// Kelvin (SI base unit of temperature).
pub const KELVIN: Temperature = Temperature::new(1.0);
/// Mole (SI base unit of amount of substance).
pub const MOLE: Amount = Amount::new(1.0);
/// Candela (SI base unit of luminous intensity).
pub const CANDELA: Luminosity = Luminosity::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Unitless
// ─────────────────────────────────────────────────────────────────────────────

/// The number one.
pub const ONE: Dimensionless = Dimensionless::new(1.0);
/// Radian.
pub const RADIAN: Angle = Angle::new(1.0);
/// Degree (`π / 180 rad`).
pub const DEGREE: Angle = Angle::new(PI / 180.0);
/// One full turn (`2π rad`).
pub const REVOLUTION: Angle = Angle::new(2.0 * PI);

/// Degrees Celsius: kelvin steps with the zero at `273.15 K`.
pub const CELSIUS: OffsetQuantity<f64, dims::Temperature> = OffsetQuantity::new(1.0, 273.15);

// ─────────────────────────────────────────────────────────────────────────────
// Metric and derived SI units
// ─────────────────────────────────────────────────────────────────────────────

/// Minute.
pub const MINUTE: Time = SECOND.scaled(60.0);
/// Hour.
pub const HOUR: Time = MINUTE.scaled(60.0);

/// Kilometre.
pub const KILOMETRE: Length = METRE.scaled(1000.0);
/// Millimetre.
pub const MILLIMETRE: Length = METRE.scaled(1.0e-3);
/// Centimetre.
pub const CENTIMETRE: Length = METRE.scaled(1.0e-2);
/// Decimetre.
pub const DECIMETRE: Length = METRE.scaled(0.1);

/// Newton.
pub const NEWTON: Force = KILOGRAM.times(METRE).per(SECOND.times(SECOND));
/// Newton metre.
pub const NEWTON_METRE: Torque = NEWTON.times(METRE);
/// Pascal.
pub const PASCAL: Pressure = NEWTON.per(METRE.times(METRE));
/// Metre per second.
pub const METRE_PER_SECOND: Speed = METRE.per(SECOND);
/// Kilometre per hour.
pub const KILOMETRE_PER_HOUR: Speed = KILOMETRE.per(HOUR);
/// Metre per second squared.
pub const METRE_PER_SECOND2: Acceleration = METRE.per(SECOND.times(SECOND));
/// Joule.
pub const JOULE: Energy = NEWTON.times(METRE);
/// Watt.
pub const WATT: Power = JOULE.per(SECOND);
/// Kilowatt.
pub const KILOWATT: Power = WATT.scaled(1000.0);
/// Watt hour.
pub const WATT_HOUR: Energy = WATT.times(HOUR);
/// Kilowatt hour.
pub const KILOWATT_HOUR: Energy = KILOWATT.times(HOUR);
/// Volt.
pub const VOLT: Voltage = WATT.per(AMPERE);
/// Hertz.
pub const HERTZ: Frequency = ONE.per(SECOND);
/// Coulomb.
pub const COULOMB: Charge = SECOND.times(AMPERE);
/// Farad.
pub const FARAD: Capacitance = COULOMB.per(VOLT);
/// Ohm.
pub const OHM: Resistance = VOLT.per(AMPERE);
/// Gram.
pub const GRAM: Mass = KILOGRAM.scaled(1.0e-3);
/// Kilogram per second.
pub const KILOGRAM_PER_SECOND: MassFlowRate = KILOGRAM.per(SECOND);
/// Kilogram square metre.
pub const KILOGRAM_METRE2: MomentOfInertia = KILOGRAM.times(METRE).times(METRE);

/// Litre (one cubic decimetre).
pub const LITRE: Volume = DECIMETRE.times(DECIMETRE).times(DECIMETRE);
/// Square metre.
pub const METRE2: Area = METRE.times(METRE);
/// Square centimetre.
pub const CENTIMETRE2: Area = CENTIMETRE.times(CENTIMETRE);
/// Cubic metre.
pub const METRE3: Volume = METRE.times(METRE).times(METRE);
/// Radian per second.
pub const RADIAN_PER_SECOND: AngularRate = RADIAN.per(SECOND);
/// Radian per second squared.
pub const RADIAN_PER_SECOND2: AngularAcceleration = RADIAN.per(SECOND.times(SECOND));
/// Degree per second.
pub const DEGREE_PER_SECOND: AngularRate = DEGREE.per(SECOND);
/// Kilogram per cubic metre.
pub const KILOGRAM_PER_METRE3: Density = KILOGRAM.per(METRE3);
/// Revolution per second.
pub const REVOLUTION_PER_SECOND: AngularRate = REVOLUTION.per(SECOND);
/// Revolution per minute.
pub const REVOLUTION_PER_MINUTE: AngularRate = REVOLUTION.per(MINUTE);

// ─────────────────────────────────────────────────────────────────────────────
// International (imperial and US customary) units
// ─────────────────────────────────────────────────────────────────────────────

/// International foot.
pub const FOOT: Length = METRE.scaled(0.3048);
/// International inch.
pub const INCH: Length = MILLIMETRE.scaled(25.4);
/// International nautical mile.
pub const NAUTICAL_MILE: Length = METRE.scaled(1852.0);
/// Yard (3 ft).
pub const YARD: Length = FOOT.scaled(3.0);
/// Statute mile (5280 ft).
pub const MILE: Length = FOOT.scaled(5280.0);

/// Avoirdupois pound.
pub const POUND: Mass = KILOGRAM.scaled(0.453592);
/// Pound-force.
pub const POUND_FORCE: Force = NEWTON.scaled(4.448222);
/// Degree Rankine as an interval (`5/9 K`).
pub const RANKINE: Temperature = KELVIN.scaled(5.0 / 9.0);
/// Knot (one nautical mile per hour).
pub const KNOT: Speed = NAUTICAL_MILE.per(HOUR);
/// US liquid gallon.
pub const GALLON: Volume = LITRE.scaled(3.785411784);
/// Imperial gallon.
pub const IMPERIAL_GALLON: Volume = LITRE.scaled(4.54609);
/// US liquid quart.
pub const QUART: Volume = LITRE.scaled(0.946352946);

/// Degrees Fahrenheit: Rankine steps with the zero at `459.67 °R`.
pub const FAHRENHEIT: OffsetQuantity<f64, dims::Temperature> = OffsetQuantity::new(RANKINE.value(), 459.67);

/// Pound-force per square inch.
pub const POUND_PER_SQUARE_INCH: Pressure = POUND_FORCE.per(INCH.times(INCH));
/// Foot-pound (torque).
pub const FOOT_POUNDS: Torque = FOOT.times(POUND_FORCE);
/// Foot per second.
pub const FOOT_PER_SECOND: Speed = FOOT.per(SECOND);
/// Pound per second.
pub const POUND_PER_SECOND: MassFlowRate = POUND.per(SECOND);
/// Pound per hour.
pub const POUND_PER_HOUR: MassFlowRate = POUND.per(HOUR);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn base_units_are_one() {
        for v in [
            SECOND.value(),
            METRE.value(),
            KILOGRAM.value(),
            AMPERE.value(),
            KELVIN.value(),
            MOLE.value(),
            CANDELA.value(),
        ] {
            assert_eq!(v, 1.0);
        }
    }

    #[test]
    fn derived_si_units_are_coherent() {
        assert_eq!(NEWTON.value(), 1.0);
        assert_eq!(JOULE.value(), 1.0);
        assert_eq!(WATT.value(), 1.0);
        assert_eq!(VOLT.value(), 1.0);
        assert_eq!(OHM.value(), 1.0);
        assert_eq!(FARAD.value(), 1.0);
        assert_eq!(HERTZ.value(), 1.0);
    }

    #[test]
    fn time_and_energy_ladders() {
        assert_eq!(HOUR.value(), 3600.0);
        assert_eq!(KILOWATT_HOUR.value(), 3.6e6);
        assert_eq!(KILOWATT_HOUR.in_unit(WATT_HOUR), 1000.0);
    }

    #[test]
    fn customary_lengths() {
        assert_relative_eq!(INCH.value(), 0.0254, max_relative = 1e-15);
        assert_relative_eq!(MILE.in_unit(YARD), 1760.0, max_relative = 1e-12);
        assert_relative_eq!(FOOT.in_unit(INCH), 12.0, max_relative = 1e-12);
    }

    #[test]
    fn volumes() {
        assert_relative_eq!(LITRE.value(), 1.0e-3, max_relative = 1e-12);
        assert_relative_eq!(GALLON.in_unit(QUART), 4.0, max_relative = 1e-9);
    }

    #[test]
    fn angles() {
        assert_relative_eq!(REVOLUTION.in_unit(DEGREE), 360.0, max_relative = 1e-12);
        assert_relative_eq!(REVOLUTION_PER_MINUTE.in_unit(RADIAN_PER_SECOND), 2.0 * PI / 60.0);
    }

    #[test]
    fn fahrenheit_step_is_rankine() {
        assert_eq!(FAHRENHEIT.value(), RANKINE.value());
        assert_eq!(FAHRENHEIT.offset(), 459.67);
    }

    #[test]
    fn psi_in_pascal() {
        assert_relative_eq!(POUND_PER_SQUARE_INCH.in_unit(PASCAL), 6894.757, max_relative = 1e-6);
    }
}
