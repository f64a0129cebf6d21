// simulation/energy.rs
// Closed-form mechanical energy of a point mass

use serde::{Deserialize, Serialize};

use super::inputs::SimulationInputs;

/// PE = m * g * h
pub fn potential_energy(mass: f64, gravity: f64, height: f64) -> f64 {
    mass * gravity * height
}

/// KE = 0.5 * m * v^2
pub fn kinetic_energy(mass: f64, velocity: f64) -> f64 {
    0.5 * mass * velocity * velocity
}

/// Energies derived from one set of inputs. Never stored as a source of truth:
/// always rebuilt from `SimulationInputs`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedEnergies {
    pub potential: f64,
    pub kinetic: f64,
    pub total: f64,
}

impl DerivedEnergies {
    pub fn from_inputs(inputs: &SimulationInputs) -> Self {
        let potential = potential_energy(inputs.mass, inputs.gravity, inputs.height);
        let kinetic = kinetic_energy(inputs.mass, inputs.velocity);
        Self {
            potential,
            kinetic,
            total: potential + kinetic,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.potential.is_finite() && self.kinetic.is_finite() && self.total.is_finite()
    }
}
