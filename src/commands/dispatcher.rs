use log::debug;

use super::{SimCommand, HELP};
use crate::config::DEFAULT_SNAPSHOT_SLOT;
use crate::simulation::EnergySimulator;
use crate::storage::SettingsStore;

/// What the front end should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// State may have changed; redraw the panel
    Render,
    /// Print this text instead of redrawing
    Message(String),
    Quit,
}

/// Process a single `SimCommand` against the simulator.
/// Rejected edits and missing snapshots are reflected in the simulator's
/// validation state and notice, so they still produce `Outcome::Render`.
pub fn process_command<S: SettingsStore>(cmd: SimCommand, sim: &mut EnergySimulator<S>) -> Outcome {
    match cmd {
        SimCommand::SetField { field, value } => {
            if let Err(e) = sim.set_field(field, &value) {
                debug!("{}", e);
            }
        }
        SimCommand::SetGravityPreset { preset } => {
            if let Err(e) = sim.set_gravity_preset(preset) {
                debug!("{}", e);
            }
        }
        SimCommand::Reset => sim.reset(),
        SimCommand::Pause => sim.pause(),
        SimCommand::Resume => sim.resume(),
        SimCommand::TogglePause => sim.toggle_pause(),
        SimCommand::Save { name } => {
            let name = name.as_deref().unwrap_or(DEFAULT_SNAPSHOT_SLOT);
            if let Err(e) = sim.save_as(name) {
                return Outcome::Message(e.to_string());
            }
        }
        SimCommand::Load { name } => {
            let name = name.as_deref().unwrap_or(DEFAULT_SNAPSHOT_SLOT);
            if let Err(e) = sim.load_named(name) {
                debug!("{}", e);
            }
        }
        SimCommand::DeleteSnapshot { name } => {
            if let Err(e) = sim.delete_snapshot(&name) {
                debug!("{}", e);
            }
        }
        SimCommand::ListSnapshots => {
            let names = sim.snapshots().names();
            let text = if names.is_empty() {
                "No saved simulations".to_string()
            } else {
                format!("Saved simulations: {}", names.join(", "))
            };
            return Outcome::Message(text);
        }
        SimCommand::ExportSnapshots { path } => {
            if let Err(e) = sim.export_snapshots(&path) {
                debug!("{}", e);
            }
        }
        SimCommand::ImportSnapshots { path } => {
            if let Err(e) = sim.import_snapshots(&path) {
                debug!("{}", e);
            }
        }
        SimCommand::ExportChart { path, format } => {
            if let Err(e) = sim.export_chart(&path, format) {
                debug!("{}", e);
            }
        }
        SimCommand::Show => {}
        SimCommand::Help => return Outcome::Message(HELP.to_string()),
        SimCommand::Quit => return Outcome::Quit,
    }
    Outcome::Render
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse_command;
    use crate::simulation::{Field, Notice};
    use crate::storage::MemoryStore;

    fn run(sim: &mut EnergySimulator<MemoryStore>, line: &str) -> Outcome {
        let cmd = parse_command(line).unwrap();
        process_command(cmd, sim)
    }

    #[test]
    fn console_session_drives_the_simulator() {
        let store = MemoryStore::new();
        let mut sim = EnergySimulator::new(store.clone());

        assert_eq!(run(&mut sim, "mass 5"), Outcome::Render);
        run(&mut sim, "save");
        run(&mut sim, "mass 3");
        run(&mut sim, "load");
        assert_eq!(sim.field_text(Field::Mass), "5");
        assert_eq!(store.get("mass").unwrap().as_deref(), Some("5"));

        run(&mut sim, "pause");
        run(&mut sim, "velocity 5");
        assert_eq!(sim.displayed_energies().kinetic, 0.0);
        run(&mut sim, "toggle");
        assert_eq!(sim.displayed_energies().kinetic, 62.5);

        run(&mut sim, "gravity moon");
        assert_eq!(sim.inputs().gravity, 1.62);

        assert_eq!(run(&mut sim, "quit"), Outcome::Quit);
    }

    #[test]
    fn listing_and_errors_come_back_as_messages() {
        let mut sim = EnergySimulator::new(MemoryStore::new());
        assert_eq!(
            run(&mut sim, "snapshots"),
            Outcome::Message("No saved simulations".into())
        );
        run(&mut sim, "save moon");
        run(&mut sim, "save");
        assert_eq!(
            run(&mut sim, "snapshots"),
            Outcome::Message("Saved simulations: default, moon".into())
        );
        assert!(matches!(run(&mut sim, "help"), Outcome::Message(m) if m.contains("export-chart")));
    }

    #[test]
    fn invalid_edit_still_renders() {
        let mut sim = EnergySimulator::new(MemoryStore::new());
        assert_eq!(run(&mut sim, "mass -5"), Outcome::Render);
        assert!(!sim.validation().is_valid(Field::Mass));
    }

    #[test]
    fn chart_export_writes_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.csv");
        let mut sim = EnergySimulator::new(MemoryStore::new());
        run(&mut sim, "velocity 4");
        let line = format!("export-chart {}", path.display());
        run(&mut sim, &line);
        let csv = std::fs::read_to_string(&path).unwrap();
        assert_eq!(csv.lines().count(), 1 + sim.series().len());
    }

    #[test]
    fn snapshot_files_move_between_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.json");

        let mut first = EnergySimulator::new(MemoryStore::new());
        run(&mut first, "gravity moon");
        run(&mut first, "save moon");
        let export = format!("export-snapshots {}", path.display());
        assert_eq!(run(&mut first, &export), Outcome::Render);
        assert!(matches!(first.notice(), Some(Notice::SnapshotsExported(_))));

        let mut second = EnergySimulator::new(MemoryStore::new());
        let import = format!("import-snapshots {}", path.display());
        assert_eq!(run(&mut second, &import), Outcome::Render);
        assert_eq!(second.notice(), Some(&Notice::SnapshotsImported(1)));
        run(&mut second, "load moon");
        assert_eq!(second.inputs().gravity, 1.62);
        assert_eq!(
            run(&mut second, "list"),
            Outcome::Message("Saved simulations: moon".into())
        );
    }

    #[test]
    fn importing_a_missing_file_reports_a_notice() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = EnergySimulator::new(MemoryStore::new());
        let line = format!("import-snapshots {}", dir.path().join("absent.json").display());
        assert_eq!(run(&mut sim, &line), Outcome::Render);
        assert!(matches!(sim.notice(), Some(Notice::ExportFailed(_))));
        assert!(sim.snapshots().is_empty());
    }

    #[test]
    fn show_only_redraws() {
        let mut sim = EnergySimulator::new(MemoryStore::new());
        let before = sim.series().len();
        assert_eq!(run(&mut sim, "show"), Outcome::Render);
        assert_eq!(sim.series().len(), before);
    }
}
