// simulation/inputs.rs
// Input fields, their validation rules and the last-valid input set

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::energy::DerivedEnergies;
use crate::config;
use crate::units;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    Mass,
    Height,
    Velocity,
    Gravity,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Mass, Field::Height, Field::Velocity, Field::Gravity];

    /// Key used in durable settings storage.
    pub fn key(self) -> &'static str {
        match self {
            Field::Mass => "mass",
            Field::Height => "height",
            Field::Velocity => "velocity",
            Field::Gravity => "gravity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Mass => "Mass",
            Field::Height => "Height",
            Field::Velocity => "Velocity",
            Field::Gravity => "Gravity",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Field::Mass => units::KILOGRAM,
            Field::Height => units::METER,
            Field::Velocity => units::METER_PER_SECOND,
            Field::Gravity => units::METER_PER_SECOND_SQUARED,
        }
    }

    pub fn default_value(self) -> f64 {
        match self {
            Field::Mass => config::DEFAULT_MASS,
            Field::Height => config::DEFAULT_HEIGHT,
            Field::Velocity => config::DEFAULT_VELOCITY,
            Field::Gravity => config::DEFAULT_GRAVITY,
        }
    }

    /// Gravity must be strictly positive, everything else non-negative.
    pub fn accepts(self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self {
            Field::Gravity => value > 0.0,
            _ => value >= 0.0,
        }
    }

    fn range_reason(self) -> &'static str {
        match self {
            Field::Gravity => "must be greater than zero",
            _ => "must not be negative",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mass" | "m" => Ok(Field::Mass),
            "height" | "h" => Ok(Field::Height),
            "velocity" | "v" => Ok(Field::Velocity),
            "gravity" | "g" => Ok(Field::Gravity),
            _ => Err(format!("Unknown field: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Invalid input for {field}: {value:?} {reason}")]
    InvalidInput {
        field: Field,
        value: String,
        reason: &'static str,
    },
}

/// Parse raw field text into a value the field accepts.
pub fn parse_field_value(field: Field, raw: &str) -> Result<f64, InputError> {
    let invalid = |reason| InputError::InvalidInput {
        field,
        value: raw.to_string(),
        reason,
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid("is empty"));
    }
    let value: f64 = trimmed.parse().map_err(|_| invalid("is not a number"))?;
    if !value.is_finite() {
        return Err(invalid("is not a finite number"));
    }
    if !field.accepts(value) {
        return Err(invalid(field.range_reason()));
    }
    Ok(value)
}

/// Last valid value of every field. All members always satisfy `Field::accepts`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInputs {
    pub mass: f64,
    pub height: f64,
    pub velocity: f64,
    pub gravity: f64,
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            mass: config::DEFAULT_MASS,
            height: config::DEFAULT_HEIGHT,
            velocity: config::DEFAULT_VELOCITY,
            gravity: config::DEFAULT_GRAVITY,
        }
    }
}

impl SimulationInputs {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Mass => self.mass,
            Field::Height => self.height,
            Field::Velocity => self.velocity,
            Field::Gravity => self.gravity,
        }
    }

    pub fn set(&mut self, field: Field, value: f64) {
        match field {
            Field::Mass => self.mass = value,
            Field::Height => self.height = value,
            Field::Velocity => self.velocity = value,
            Field::Gravity => self.gravity = value,
        }
    }

    /// Every field in range and the derived energies representable.
    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|f| f.accepts(self.get(*f)))
            && DerivedEnergies::from_inputs(self).is_finite()
    }

    /// Parse `raw` and store it in `field`. Leaves `self` untouched when the text is
    /// rejected or when the new value would push an energy past `f64::MAX`.
    pub fn apply_text(&mut self, field: Field, raw: &str) -> Result<f64, InputError> {
        let value = parse_field_value(field, raw)?;
        let mut candidate = *self;
        candidate.set(field, value);
        if !DerivedEnergies::from_inputs(&candidate).is_finite() {
            return Err(InputError::InvalidInput {
                field,
                value: raw.to_string(),
                reason: "makes the energy overflow",
            });
        }
        *self = candidate;
        Ok(value)
    }
}

/// Validity of each field's current text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationState {
    errors: [Option<String>; 4],
}

impl ValidationState {
    fn slot(field: Field) -> usize {
        match field {
            Field::Mass => 0,
            Field::Height => 1,
            Field::Velocity => 2,
            Field::Gravity => 3,
        }
    }

    pub fn is_valid(&self, field: Field) -> bool {
        self.errors[Self::slot(field)].is_none()
    }

    pub fn all_valid(&self) -> bool {
        self.errors.iter().all(Option::is_none)
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors[Self::slot(field)].as_deref()
    }

    pub fn mark_valid(&mut self, field: Field) {
        self.errors[Self::slot(field)] = None;
    }

    pub fn mark_invalid(&mut self, field: Field, message: impl Into<String>) {
        self.errors[Self::slot(field)] = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.errors = Default::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityPreset {
    Earth,
    Moon,
    Mars,
    Jupiter,
}

impl GravityPreset {
    pub const ALL: [GravityPreset; 4] = [
        GravityPreset::Earth,
        GravityPreset::Moon,
        GravityPreset::Mars,
        GravityPreset::Jupiter,
    ];

    pub fn gravity(self) -> f64 {
        match self {
            GravityPreset::Earth => config::GRAVITY_EARTH,
            GravityPreset::Moon => config::GRAVITY_MOON,
            GravityPreset::Mars => config::GRAVITY_MARS,
            GravityPreset::Jupiter => config::GRAVITY_JUPITER,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GravityPreset::Earth => "earth",
            GravityPreset::Moon => "moon",
            GravityPreset::Mars => "mars",
            GravityPreset::Jupiter => "jupiter",
        }
    }
}

impl FromStr for GravityPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        GravityPreset::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| format!("Unknown gravity preset: {}", s))
    }
}

/// Text shown in a field for a stored value: `5` rather than `5.0`.
pub fn display_text(value: f64) -> String {
    format!("{}", value)
}
