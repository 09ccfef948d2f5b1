//! Local store adapter: a durable string key-value store.
//!
//! Absence of a key is a valid steady state (fresh install), never an error.
//! Writes are synchronous and atomic relative to the caller; a read always
//! observes the last completed write.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::errors::QuoteError;

pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, or `None` if it was never written.
    fn load(&self, key: &str) -> Result<Option<String>, QuoteError>;

    /// Durably write `value` under `key`. Last write wins.
    fn save(&self, key: &str, value: &str) -> Result<(), QuoteError>;
}

// Lets tests share one store across a simulated restart.
impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn load(&self, key: &str) -> Result<Option<String>, QuoteError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), QuoteError> {
        (**self).save(key, value)
    }
}

/// Ephemeral in-process store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, QuoteError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| QuoteError::Storage(format!("store lock poisoned: {e}")))?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), QuoteError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| QuoteError::Storage(format!("store lock poisoned: {e}")))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Durable file-per-key store rooted at a directory. Survives process restart.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, QuoteError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, QuoteError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), QuoteError> {
        // Write-then-rename so a reader never observes a partial write.
        let tmp = self.root.join(format!("{key}.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, self.path_for(key))?;
        Ok(())
    }
}
