use serde::Serialize;
use std::ffi::OsString;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::simulation::snapshot::SnapshotStore;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// `settings.json` -> `settings.json.tmp`
pub fn tmp_path_for(path: &Path) -> PathBuf {
    let os: OsString = match path.extension() {
        Some(ext) => {
            let mut os = ext.to_os_string();
            os.push(".tmp");
            os
        }
        None => OsString::from("tmp"),
    };
    path.with_extension(os)
}

/// Write `contents` to a temporary sibling and rename it over `path`.
pub fn write_atomically<P: AsRef<Path>>(path: P, contents: &[u8]) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let tmp_path = tmp_path_for(path);
    {
        let file = std::fs::File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(contents)?;
        writer.flush()?;
    }
    std::fs::rename(&tmp_path, path)
}

pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), ExportError> {
    let bytes = serde_json::to_vec_pretty(value)?;
    write_atomically(path, &bytes)?;
    Ok(())
}

pub fn save_snapshots<P: AsRef<Path>>(path: P, store: &SnapshotStore) -> Result<(), ExportError> {
    write_json(path, store)
}

pub fn load_snapshots<P: AsRef<Path>>(path: P) -> Result<SnapshotStore, ExportError> {
    let data = std::fs::read(path.as_ref())?;
    Ok(serde_json::from_slice(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::inputs::SimulationInputs;

    #[test]
    fn tmp_path_keeps_extension() {
        assert_eq!(
            tmp_path_for(Path::new("dir/settings.json")),
            PathBuf::from("dir/settings.json.tmp")
        );
        assert_eq!(tmp_path_for(Path::new("plain")), PathBuf::from("plain.tmp"));
    }

    #[test]
    fn snapshots_survive_a_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("snapshots.json");

        let mut store = SnapshotStore::new();
        let moon = SimulationInputs {
            mass: 2.0,
            height: 3.0,
            velocity: 0.5,
            gravity: 1.62,
        };
        store.save("moon", &moon).unwrap();
        store.save("default", &SimulationInputs::default()).unwrap();

        save_snapshots(&path, &store).unwrap();
        assert!(!tmp_path_for(&path).exists(), "temp file should be renamed away");

        let loaded = load_snapshots(&path).unwrap();
        assert_eq!(loaded.names(), vec!["default".to_string(), "moon".to_string()]);
        assert_eq!(loaded.get("moon").unwrap().inputs, moon);
    }

    #[test]
    fn loading_a_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_snapshots(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
