// simulation/snapshot.rs
// Named, explicitly captured copies of the simulation inputs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use super::inputs::SimulationInputs;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnapshotError {
    #[error("No saved simulation named '{0}'")]
    NoSnapshot(String),
    #[error("Snapshot name must not be empty")]
    InvalidName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub name: String,
    pub inputs: SimulationInputs,
    /// Seconds since the unix epoch at capture time
    #[serde(default)]
    pub saved_at: u64,
}

impl Snapshot {
    pub fn capture(name: &str, inputs: &SimulationInputs) -> Self {
        let saved_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            name: name.to_string(),
            inputs: *inputs,
            saved_at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotStore {
    #[serde(default)]
    slots: BTreeMap<String, Snapshot>,
}

fn validate_name(name: &str) -> Result<&str, SnapshotError> {
    let name = name.trim();
    if name.is_empty() {
        Err(SnapshotError::InvalidName)
    } else {
        Ok(name)
    }
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture `inputs` under `name`, replacing any earlier snapshot of that name.
    pub fn save(&mut self, name: &str, inputs: &SimulationInputs) -> Result<&Snapshot, SnapshotError> {
        let name = validate_name(name)?;
        let snapshot = Snapshot::capture(name, inputs);
        self.slots.insert(name.to_string(), snapshot);
        self.slots
            .get(name)
            .ok_or_else(|| SnapshotError::NoSnapshot(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Result<&Snapshot, SnapshotError> {
        let name = validate_name(name)?;
        self.slots
            .get(name)
            .ok_or_else(|| SnapshotError::NoSnapshot(name.to_string()))
    }

    pub fn remove(&mut self, name: &str) -> Result<Snapshot, SnapshotError> {
        let name = validate_name(name)?;
        self.slots
            .remove(name)
            .ok_or_else(|| SnapshotError::NoSnapshot(name.to_string()))
    }

    pub fn names(&self) -> Vec<String> {
        self.slots.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Insert every snapshot of `other`, overwriting on name clashes.
    /// Snapshots whose inputs are out of range are skipped. Returns how many were taken.
    pub fn merge(&mut self, other: SnapshotStore) -> usize {
        let mut taken = 0;
        for (name, mut snapshot) in other.slots {
            let name = match validate_name(&name) {
                Ok(name) => name.to_string(),
                Err(_) => continue,
            };
            if !snapshot.inputs.is_valid() {
                continue;
            }
            snapshot.name = name.clone();
            self.slots.insert(name, snapshot);
            taken += 1;
        }
        taken
    }
}
