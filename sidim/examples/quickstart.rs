//! Minimal end-to-end example: derive a pressure, read it in several units, and convert a temperature.

use sidim::quantities::{Area, Force, Pressure, Temperature};
use sidim::{CELSIUS, FAHRENHEIT, INCH, KELVIN, PASCAL, POUND_FORCE, POUND_PER_SQUARE_INCH};

fn main() {
    let force: Force = 200.0 * POUND_FORCE;
    let area: Area = (2.0 * INCH) * (3.0 * INCH);
    let pressure: Pressure = force / area;

    println!("pressure = {:.1}", pressure);
    println!("         = {:.3} psi", pressure.in_unit(POUND_PER_SQUARE_INCH));
    println!("         = {:.1} Pa", pressure.in_unit(PASCAL));
    assert!((pressure.in_unit(POUND_PER_SQUARE_INCH) - 200.0 / 6.0).abs() < 1e-9);

    let room: Temperature = 21.0 * CELSIUS;
    println!("room     = {:.2} K = {:.1} °F", room.in_unit(KELVIN), room.in_unit(FAHRENHEIT));
    assert!((room.in_unit(FAHRENHEIT) - 69.8).abs() < 1e-9);
}
