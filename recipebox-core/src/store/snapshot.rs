//! JSON snapshots of the persisted collections.
//!
//! A snapshot is the whole collection as a JSON array. Timestamps are written
//! as RFC 3339 strings and parsed back into `DateTime<Utc>`, so values written
//! by other clients in the `2024-01-15T00:00:00.000Z` form load as well.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::storage::StorageKey;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to encode {key} snapshot: {source}")]
    Encode {
        key: StorageKey,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to decode {key} snapshot: {source}")]
    Decode {
        key: StorageKey,
        #[source]
        source: serde_json::Error,
    },
}

pub fn encode<T: Serialize>(key: StorageKey, items: &[T]) -> Result<String, SnapshotError> {
    serde_json::to_string(items).map_err(|source| SnapshotError::Encode { key, source })
}

pub fn decode<T: DeserializeOwned>(key: StorageKey, raw: &str) -> Result<Vec<T>, SnapshotError> {
    serde_json::from_str(raw).map_err(|source| SnapshotError::Decode { key, source })
}
