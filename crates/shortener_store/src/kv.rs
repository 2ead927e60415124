use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use app_logging::app_debug;

use crate::{AtomicFileWriter, StoreError};

/// A durable string slot per key. Writes replace the previous value wholesale.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Keeps each key in its own `{key}.json` file under one directory.
pub struct FileStore {
    dir: PathBuf,
    writer: AtomicFileWriter,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            writer: AtomicFileWriter::new(dir.clone()),
            dir,
        }
    }

    fn filename(key: &str) -> String {
        format!("{key}.json")
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.dir.join(Self::filename(key));
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                app_debug!("No stored value at {:?}", path);
                Ok(None)
            }
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.writer.write(&Self::filename(key), value)?;
        app_debug!("Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }
}

/// In-memory store, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let slots = self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut slots = self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
