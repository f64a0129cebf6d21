// storage/mod.rs
// Durable key-value settings storage and the adapter that mirrors inputs into it

use thiserror::Error;

pub mod file;
pub mod memory;
pub mod settings;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use settings::{load_persisted_inputs, persist_field, persist_inputs};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage format error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// String key-value storage, the shape of a browser's local storage.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: SettingsStore + ?Sized> SettingsStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
