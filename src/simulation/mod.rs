// simulation/mod.rs
// Re-exports and module declarations for simulation submodules

pub mod energy;
pub mod inputs;
pub mod run_state;
pub mod simulator;
pub mod snapshot;

pub use energy::{kinetic_energy, potential_energy, DerivedEnergies};
pub use inputs::{Field, GravityPreset, InputError, SimulationInputs, ValidationState};
pub use run_state::RunState;
pub use simulator::{EnergySimulator, Notice};
pub use snapshot::{Snapshot, SnapshotError, SnapshotStore};
