use log::{info, warn};
use std::io;
use std::path::Path;

use crate::init_config::AppConfig;
use crate::io::ExportError;
use crate::simulation::EnergySimulator;
use crate::storage::{FileStore, MemoryStore, SettingsStore};

pub mod command_loop;

use command_loop::{run_session, ChartSize};

/// Build the simulator described by `config` and drive it from stdin until quit.
pub fn run(config: AppConfig) -> io::Result<()> {
    let store: Box<dyn SettingsStore> = if config.storage.memory_only {
        info!("Settings kept in memory only");
        Box::new(MemoryStore::new())
    } else {
        let path = config.storage.settings_path();
        info!("Settings persisted to {}", path.display());
        Box::new(FileStore::new(path))
    };

    let mut sim = EnergySimulator::with_chart_capacity(store, config.chart.capacity());

    if let Some(path) = &config.storage.snapshot_path {
        restore_snapshots(&mut sim, path);
    }

    let chart = ChartSize {
        width: config.chart.width(),
        height: config.chart.height(),
    };
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let processed = run_session(&mut sim, stdin.lock(), &mut stdout, chart)?;
    info!("Session ended after {} command(s)", processed);

    if let Some(path) = &config.storage.snapshot_path {
        if let Err(e) = write_back_snapshots(&mut sim, path) {
            warn!("Failed to write saved simulations: {}", e);
        }
    }
    Ok(())
}

/// Merge the saved simulations in `path` into `sim`. A missing file is a first run.
pub fn restore_snapshots<S: SettingsStore>(sim: &mut EnergySimulator<S>, path: &Path) {
    if !path.exists() {
        return;
    }
    match sim.import_snapshots(path) {
        Ok(n) => info!("Loaded {} saved simulation(s) from {}", n, path.display()),
        Err(e) => warn!("Failed to read saved simulations: {}", e),
    }
}

/// Write every saved simulation back to `path`. An empty store is written too so
/// that deletions survive a restart.
pub fn write_back_snapshots<S: SettingsStore>(
    sim: &mut EnergySimulator<S>,
    path: &Path,
) -> Result<(), ExportError> {
    sim.export_snapshots(path)?;
    info!(
        "Wrote {} saved simulation(s) to {}",
        sim.snapshots().len(),
        path.display()
    );
    Ok(())
}
