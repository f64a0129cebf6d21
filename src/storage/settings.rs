// storage/settings.rs
// Mirrors simulation inputs into a SettingsStore and seeds them back on startup

use log::{debug, warn};

use super::{SettingsStore, StorageError};
use crate::simulation::inputs::{display_text, Field, SimulationInputs};

/// Result of reading persisted settings at startup.
#[derive(Debug)]
pub struct LoadedSettings {
    pub inputs: SimulationInputs,
    /// Fields that were found in storage and accepted
    pub restored: Vec<Field>,
    /// First read failure, if the store could not be read
    pub error: Option<StorageError>,
}

/// Read every field key. Missing, unparsable or out-of-range values fall back
/// to the field default; a read failure does too and is reported, never fatal.
pub fn load_persisted_inputs<S: SettingsStore + ?Sized>(store: &S) -> LoadedSettings {
    let mut inputs = SimulationInputs::default();
    let mut restored = Vec::new();
    let mut error = None;

    for field in Field::ALL {
        match store.get(field.key()) {
            Ok(Some(raw)) => match inputs.apply_text(field, &raw) {
                Ok(_) => restored.push(field),
                Err(e) => warn!("Ignoring persisted {}: {}", field, e),
            },
            Ok(None) => debug!("No persisted value for {}", field),
            Err(e) => {
                warn!("Failed to read persisted {}: {}", field, e);
                if error.is_none() {
                    error = Some(e);
                }
            }
        }
    }

    LoadedSettings {
        inputs,
        restored,
        error,
    }
}

/// Write one field's text under its key.
pub fn persist_field<S: SettingsStore + ?Sized>(
    store: &mut S,
    field: Field,
    text: &str,
) -> Result<(), StorageError> {
    store.set(field.key(), text.trim())
}

/// Write all four fields; stops at the first failure.
pub fn persist_inputs<S: SettingsStore + ?Sized>(
    store: &mut S,
    inputs: &SimulationInputs,
) -> Result<(), StorageError> {
    for field in Field::ALL {
        persist_field(store, field, &display_text(inputs.get(field)))?;
    }
    Ok(())
}
