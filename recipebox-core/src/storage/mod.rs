//! Key-value persistence for store snapshots.
//!
//! The store only needs a string-keyed blob store with synchronous reads and
//! writes. Two adapters are provided:
//! - [`FileStore`]: one `<key>.json` file per key in a data directory
//! - [`MemoryStore`]: an in-process map, for tests and ephemeral sessions

mod file;
mod key;
mod memory;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use file::FileStore;
pub use key::StorageKey;
pub use memory::MemoryStore;

/// A synchronous string-keyed blob store.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, or `Ok(None)` if there is none.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Errors that can occur while reading or writing stored snapshots.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Storage backend error: {0}")]
    Backend(String),
}
