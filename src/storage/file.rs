//! YAML-file-backed storage
//!
//! The whole mapping is read once on open and rewritten on every `set`.

use super::{Storage, StorageError, StorageResult};
use crate::config::paths;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Persistent storage kept in a single YAML mapping file
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the storage file at `path`
    ///
    /// A missing file is treated as empty storage and is only created on
    /// the first write.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();

        let entries = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|source| StorageError::Read {
                path: path.clone(),
                source,
            })?;
            if contents.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_yaml::from_str(&contents).map_err(|source| StorageError::Parse {
                    path: path.clone(),
                    source,
                })?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!("Opened storage {} ({} entries)", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    /// Open the storage file in the platform data directory
    pub fn open_default() -> StorageResult<Self> {
        Self::open(paths::storage_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            paths::ensure_dir(parent).map_err(|source| StorageError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        let yaml = serde_yaml::to_string(&self.entries)?;
        std::fs::write(&self.path, yaml).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.save()
    }
}
