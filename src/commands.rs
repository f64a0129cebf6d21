// commands.rs
// Console commands: one line of user input maps to one SimCommand

use std::path::PathBuf;
use thiserror::Error;

use crate::plotting::ExportFormat;
use crate::simulation::{Field, GravityPreset};

pub mod dispatcher;

pub use dispatcher::{process_command, Outcome};

/// A single user action. Every variant corresponds to one control of the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum SimCommand {
    SetField { field: Field, value: String },
    SetGravityPreset { preset: GravityPreset },
    Reset,
    Pause,
    Resume,
    TogglePause,
    Save { name: Option<String> },
    Load { name: Option<String> },
    DeleteSnapshot { name: String },
    ListSnapshots,
    ExportSnapshots { path: PathBuf },
    ImportSnapshots { path: PathBuf },
    ExportChart { path: PathBuf, format: ExportFormat },
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("{0}")]
    UnknownField(String),
    #[error("{0}")]
    UnknownFormat(String),
}

pub const HELP: &str = "\
Commands:
  mass|height|velocity|gravity <value>   edit a field (gravity also takes earth, moon, mars, jupiter)
  set <field> <value>                    same as above
  reset                                  restore mass=1 height=1 velocity=0 gravity=9.81
  pause | resume | toggle                freeze or unfreeze the results
  save [name] | load [name]              store or restore a simulation (default slot when no name)
  delete <name> | snapshots              remove or list saved simulations
  export-snapshots <path>                write saved simulations to a JSON file
  import-snapshots <path>                merge saved simulations from a JSON file
  export-chart <path> [csv|tsv|json]     write the chart samples
  show | help | quit";

fn field_command(field: Field, value: &str) -> SimCommand {
    if field == Field::Gravity {
        if let Ok(preset) = value.parse::<GravityPreset>() {
            return SimCommand::SetGravityPreset { preset };
        }
    }
    SimCommand::SetField {
        field,
        value: value.to_string(),
    }
}

fn optional_name(rest: &str) -> Option<String> {
    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    what: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, what })
    } else {
        Ok(rest)
    }
}

/// Format named explicitly, else taken from the file extension, else CSV.
fn chart_export(rest: &str) -> Result<SimCommand, CommandError> {
    let rest = required(rest, "export-chart", "a file path")?;
    let mut parts = rest.rsplitn(2, char::is_whitespace);
    let last = parts.next().unwrap_or_default();
    let head = parts.next().map(str::trim_end);

    let (path, format) = match head {
        Some(path) if !path.is_empty() => {
            let format = last.parse::<ExportFormat>().map_err(CommandError::UnknownFormat)?;
            (PathBuf::from(path), format)
        }
        _ => {
            let path = PathBuf::from(last);
            let format = path
                .extension()
                .and_then(|e| e.to_str())
                .and_then(|e| e.parse::<ExportFormat>().ok())
                .unwrap_or(ExportFormat::CSV);
            (path, format)
        }
    };
    Ok(SimCommand::ExportChart { path, format })
}

pub fn parse_command(line: &str) -> Result<SimCommand, CommandError> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    if head.is_empty() {
        return Err(CommandError::Empty);
    }

    let command = match head.to_ascii_lowercase().as_str() {
        "mass" | "height" | "velocity" | "gravity" => {
            let field = head.parse::<Field>().map_err(CommandError::UnknownField)?;
            field_command(field, required(rest, "field edit", "a value")?)
        }
        "set" => {
            let rest = required(rest, "set", "a field and a value")?;
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let field = field.parse::<Field>().map_err(CommandError::UnknownField)?;
            field_command(field, required(value.trim(), "set", "a value")?)
        }
        "reset" => SimCommand::Reset,
        "pause" => SimCommand::Pause,
        "resume" => SimCommand::Resume,
        "toggle" => SimCommand::TogglePause,
        "save" => SimCommand::Save {
            name: optional_name(rest),
        },
        "load" => SimCommand::Load {
            name: optional_name(rest),
        },
        "delete" => SimCommand::DeleteSnapshot {
            name: required(rest, "delete", "a snapshot name")?.to_string(),
        },
        "snapshots" | "list" => SimCommand::ListSnapshots,
        "export-snapshots" => SimCommand::ExportSnapshots {
            path: PathBuf::from(required(rest, "export-snapshots", "a file path")?),
        },
        "import-snapshots" => SimCommand::ImportSnapshots {
            path: PathBuf::from(required(rest, "import-snapshots", "a file path")?),
        },
        "export-chart" => chart_export(rest)?,
        "show" => SimCommand::Show,
        "help" | "?" => SimCommand::Help,
        "quit" | "exit" | "q" => SimCommand::Quit,
        _ => return Err(CommandError::Unknown(head.to_string())),
    };
    Ok(command)
}
