//! SI unit labels and display formatting.
//!
//! Every quantity is kept in SI base units internally:
//! - Mass: kilogram (kg)
//! - Length: meter (m)
//! - Velocity: meter per second (m/s)
//! - Acceleration: meter per second squared (m/s²)
//! - Energy: joule (J)

use crate::config::DISPLAY_DECIMALS;

pub const KILOGRAM: &str = "kg";
pub const METER: &str = "m";
pub const METER_PER_SECOND: &str = "m/s";
pub const METER_PER_SECOND_SQUARED: &str = "m/s²";
pub const JOULE: &str = "J";

/// Round for display only. Stored values keep full precision.
pub fn format_value(value: f64) -> String {
    format!("{:.*}", DISPLAY_DECIMALS, value)
}

/// `490.50 J` style rendering of a value with its unit.
pub fn format_quantity(value: f64, unit: &str) -> String {
    format!("{} {}", format_value(value), unit)
}
