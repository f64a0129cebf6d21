// simulation/simulator.rs
// EnergySimulator: owns inputs, validation, run state, snapshots and the chart series

use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::time::Instant;

use super::energy::DerivedEnergies;
use super::inputs::{
    display_text, Field, GravityPreset, InputError, SimulationInputs, ValidationState,
};
use super::run_state::{LiveUpdateController, RunState};
use super::snapshot::{SnapshotError, SnapshotStore};
use crate::config;
use crate::io::{self, ExportError};
use crate::plotting::export::export_series;
use crate::plotting::{EnergySample, EnergySeries, ExportFormat};
use crate::storage::{
    load_persisted_inputs, persist_field, persist_inputs, SettingsStore, StorageError,
};

/// Outcome of the last action worth telling the user about. Never blocks anything.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    StorageUnavailable(String),
    StorageReadFailed(String),
    NoSnapshot(String),
    SnapshotSaved(String),
    SnapshotLoaded(String),
    SnapshotDeleted(String),
    SnapshotsExported(String),
    SnapshotsImported(usize),
    ChartExported(String),
    ExportFailed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::StorageUnavailable(e) => {
                write!(f, "Settings could not be saved ({}); changes kept in memory only", e)
            }
            Notice::StorageReadFailed(e) => {
                write!(f, "Saved settings could not be read ({}); using defaults", e)
            }
            Notice::NoSnapshot(name) => write!(f, "No saved simulation named '{}'", name),
            Notice::SnapshotSaved(name) => write!(f, "Simulation saved as '{}'", name),
            Notice::SnapshotLoaded(name) => write!(f, "Simulation '{}' loaded", name),
            Notice::SnapshotDeleted(name) => write!(f, "Simulation '{}' deleted", name),
            Notice::SnapshotsExported(path) => write!(f, "Saved simulations written to {}", path),
            Notice::SnapshotsImported(n) => write!(f, "Imported {} saved simulation(s)", n),
            Notice::ChartExported(path) => write!(f, "Chart data written to {}", path),
            Notice::ExportFailed(e) => write!(f, "Export failed: {}", e),
        }
    }
}

pub struct EnergySimulator<S: SettingsStore> {
    inputs: SimulationInputs,
    texts: BTreeMap<Field, String>,
    validation: ValidationState,
    live: LiveUpdateController,
    /// Energies currently on screen; frozen while paused
    displayed: DerivedEnergies,
    series: EnergySeries,
    snapshots: SnapshotStore,
    store: S,
    notice: Option<Notice>,
    started: Instant,
}

impl<S: SettingsStore> EnergySimulator<S> {
    pub fn new(store: S) -> Self {
        Self::with_chart_capacity(store, config::CHART_HISTORY_SAMPLES)
    }

    /// Seed inputs from `store`, falling back to defaults for anything missing or bad.
    pub fn with_chart_capacity(store: S, chart_capacity: usize) -> Self {
        let loaded = load_persisted_inputs(&store);
        let notice = loaded
            .error
            .map(|e| Notice::StorageReadFailed(e.to_string()));
        info!(
            "Starting with mass={} height={} velocity={} gravity={} ({} restored from storage)",
            loaded.inputs.mass,
            loaded.inputs.height,
            loaded.inputs.velocity,
            loaded.inputs.gravity,
            loaded.restored.len()
        );

        let mut sim = Self {
            inputs: loaded.inputs,
            texts: BTreeMap::new(),
            validation: ValidationState::default(),
            live: LiveUpdateController::new(),
            displayed: DerivedEnergies::default(),
            series: EnergySeries::new(chart_capacity),
            snapshots: SnapshotStore::new(),
            store,
            notice,
            started: Instant::now(),
        };
        sim.sync_texts();
        sim.recompute();
        sim
    }

    // ====================
    // Accessors
    // ====================

    pub fn inputs(&self) -> &SimulationInputs {
        &self.inputs
    }

    /// Text currently shown in a field. May differ from the stored value after a rejected edit.
    pub fn field_text(&self, field: Field) -> &str {
        self.texts.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn validation(&self) -> &ValidationState {
        &self.validation
    }

    pub fn run_state(&self) -> RunState {
        self.live.state()
    }

    /// What the results panel shows.
    pub fn displayed_energies(&self) -> DerivedEnergies {
        self.displayed
    }

    /// Energies of the current inputs regardless of pause.
    pub fn live_energies(&self) -> DerivedEnergies {
        DerivedEnergies::from_inputs(&self.inputs)
    }

    pub fn series(&self) -> &EnergySeries {
        &self.series
    }

    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ====================
    // Input State Holder
    // ====================

    pub fn set_field(&mut self, field: Field, raw: &str) -> Result<f64, InputError> {
        self.notice = None;
        self.texts.insert(field, raw.to_string());

        let value = match self.inputs.apply_text(field, raw) {
            Ok(value) => value,
            Err(e) => {
                debug!("Rejected edit: {}", e);
                self.validation
                    .mark_invalid(field, config::INVALID_INPUT_MESSAGE);
                return Err(e);
            }
        };

        self.validation.mark_valid(field);
        if let Err(e) = persist_field(&mut self.store, field, raw) {
            self.storage_failed(e);
        }
        self.refresh();
        Ok(value)
    }

    pub fn set_gravity_preset(&mut self, preset: GravityPreset) -> Result<f64, InputError> {
        self.set_field(Field::Gravity, &display_text(preset.gravity()))
    }

    pub fn reset(&mut self) {
        self.notice = None;
        self.inputs = SimulationInputs::default();
        self.validation.clear();
        self.sync_texts();
        if let Err(e) = persist_inputs(&mut self.store, &self.inputs) {
            self.storage_failed(e);
        }
        self.refresh();
    }

    // ====================
    // Live-Update Controller
    // ====================

    pub fn pause(&mut self) {
        self.notice = None;
        if self.live.pause() {
            info!("Live updates paused");
        }
    }

    pub fn resume(&mut self) {
        self.notice = None;
        if self.live.resume() {
            info!("Live updates resumed");
            self.recompute();
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.live.state() {
            RunState::Running => self.pause(),
            RunState::Paused => self.resume(),
        }
    }

    // ====================
    // Snapshot Store
    // ====================

    pub fn save(&mut self) -> Result<(), SnapshotError> {
        self.save_as(config::DEFAULT_SNAPSHOT_SLOT)
    }

    pub fn load(&mut self) -> Result<(), SnapshotError> {
        self.load_named(config::DEFAULT_SNAPSHOT_SLOT)
    }

    /// Capture the last valid inputs. Fields holding rejected text are not captured.
    pub fn save_as(&mut self, name: &str) -> Result<(), SnapshotError> {
        self.notice = None;
        if !self.validation.all_valid() {
            warn!("Saving last valid inputs; some fields hold invalid text");
        }
        let saved = self.snapshots.save(name, &self.inputs)?;
        info!("Saved simulation '{}'", saved.name);
        self.notice = Some(Notice::SnapshotSaved(saved.name.clone()));
        Ok(())
    }

    pub fn load_named(&mut self, name: &str) -> Result<(), SnapshotError> {
        self.notice = None;
        let snapshot = match self.snapshots.get(name) {
            Ok(snapshot) => snapshot.clone(),
            Err(e) => {
                if let SnapshotError::NoSnapshot(missing) = &e {
                    self.notice = Some(Notice::NoSnapshot(missing.clone()));
                }
                return Err(e);
            }
        };

        self.inputs = snapshot.inputs;
        self.validation.clear();
        self.sync_texts();
        if let Err(e) = persist_inputs(&mut self.store, &self.inputs) {
            self.storage_failed(e);
        }
        self.refresh();
        info!("Loaded simulation '{}'", snapshot.name);
        if self.notice.is_none() {
            self.notice = Some(Notice::SnapshotLoaded(snapshot.name));
        }
        Ok(())
    }

    pub fn delete_snapshot(&mut self, name: &str) -> Result<(), SnapshotError> {
        self.notice = None;
        match self.snapshots.remove(name) {
            Ok(removed) => {
                self.notice = Some(Notice::SnapshotDeleted(removed.name));
                Ok(())
            }
            Err(e) => {
                if let SnapshotError::NoSnapshot(missing) = &e {
                    self.notice = Some(Notice::NoSnapshot(missing.clone()));
                }
                Err(e)
            }
        }
    }

    pub fn export_snapshots<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ExportError> {
        let path = path.as_ref();
        let result = io::save_snapshots(path, &self.snapshots);
        self.notice = Some(match &result {
            Ok(()) => Notice::SnapshotsExported(path.display().to_string()),
            Err(e) => Notice::ExportFailed(e.to_string()),
        });
        result
    }

    /// Merge snapshots from a file into the store. Returns how many were taken.
    pub fn import_snapshots<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, ExportError> {
        match io::load_snapshots(path) {
            Ok(other) => {
                let taken = self.snapshots.merge(other);
                self.notice = Some(Notice::SnapshotsImported(taken));
                Ok(taken)
            }
            Err(e) => {
                self.notice = Some(Notice::ExportFailed(e.to_string()));
                Err(e)
            }
        }
    }

    // ====================
    // Chart
    // ====================

    pub fn export_chart<P: AsRef<Path>>(
        &mut self,
        path: P,
        format: ExportFormat,
    ) -> Result<(), ExportError> {
        let path = path.as_ref();
        let result = export_series(&self.series, path, format);
        self.notice = Some(match &result {
            Ok(()) => Notice::ChartExported(path.display().to_string()),
            Err(e) => Notice::ExportFailed(e.to_string()),
        });
        result
    }

    // ====================
    // Internals
    // ====================

    fn sync_texts(&mut self) {
        for field in Field::ALL {
            self.texts
                .insert(field, display_text(self.inputs.get(field)));
        }
    }

    fn storage_failed(&mut self, e: StorageError) {
        warn!("Settings storage unavailable: {}", e);
        self.notice = Some(Notice::StorageUnavailable(e.to_string()));
    }

    /// Push the current inputs through to the display unless paused.
    fn refresh(&mut self) {
        if self.live.is_running() {
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        self.displayed = DerivedEnergies::from_inputs(&self.inputs);
        let timestamp = self.started.elapsed().as_secs_f64();
        self.series.push(EnergySample::new(timestamp, &self.displayed));
        debug!(
            "Recomputed PE={} KE={} total={}",
            self.displayed.potential, self.displayed.kinetic, self.displayed.total
        );
    }
}
