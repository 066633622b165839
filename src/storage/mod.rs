// Override sources for the configuration store
//
// Persistent key/value storage and URL query parameters. Both are plain
// string-keyed lookups; the configuration store decides what the strings mean.

pub mod file;
pub mod memory;
pub mod query;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use query::QueryParams;

use std::path::PathBuf;

/// Storage errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to read storage file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write storage file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed storage file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize storage: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Persistent string-keyed storage
#[cfg_attr(test, mockall::automock)]
pub trait Storage {
    /// Stored value for `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// Read-only URL query parameters
#[cfg_attr(test, mockall::automock)]
pub trait QuerySource {
    /// Value of the query parameter `name`, if present
    fn get(&self, name: &str) -> Option<String>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

impl<Q: QuerySource + ?Sized> QuerySource for Box<Q> {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}
