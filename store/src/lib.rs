//! [`KeyValueStore`] implementations.
//!
//! - [`JsonFileStore`]: one JSON object of strings on disk, replaced
//!   atomically on every commit
//! - [`MemoryStore`]: process-local, for tests and throwaway sessions

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use cubist_core::{KeyValueStore, StoreError};
use cubist_utils::{atomic_write, recover_bak_file};
use tracing::{debug, info};

/// Reads only see committed values. `set`s are staged in `pending` and
/// merged in once the file write succeeds.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
    pending: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`, reading it if it exists.
    ///
    /// A missing file is an empty store; it is created on the first commit.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if recover_bak_file(&path) {
            info!(path = %path.display(), "Restored store from backup");
        }
        let values = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|source| {
                StoreError::Corrupt {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Read { path, source }),
        };
        debug!(path = %path.display(), keys = values.len(), "Opened store");
        Ok(Self {
            path,
            values,
            pending: BTreeMap::new(),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when there are `set`s not yet committed.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        if self.values.get(key) == Some(&value) {
            self.pending.remove(key);
        } else {
            self.pending.insert(key.to_string(), value);
        }
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        if self.pending.is_empty() && self.path.exists() {
            return Ok(());
        }
        let mut merged = self.values.clone();
        merged.extend(self.pending.iter().map(|(k, v)| (k.clone(), v.clone())));
        let bytes = serde_json::to_vec_pretty(&merged).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        atomic_write(&self.path, &bytes).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        self.values = merged;
        self.pending.clear();
        debug!(path = %self.path.display(), keys = self.values.len(), "Committed store");
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
    commits: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of commits so far.
    #[must_use]
    pub fn commits(&self) -> usize {
        self.commits
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        self.commits += 1;
        Ok(())
    }
}
