//! Domain-typed repositories over the key-value store.
//!
//! Each repository is a zero-sized struct whose associated functions take a
//! `&Store`, so handlers can share one store handle across all of them.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;
use crate::Store;

pub mod contact_repo;
pub mod profile_repo;

pub use contact_repo::ContactRepo;
pub use profile_repo::ProfileRepo;

/// Load and decode the record at `key`.
///
/// A value that does not decode as `T` is reported as
/// [`StoreError::Corrupt`] rather than partially read.
async fn load_record<T: DeserializeOwned>(store: &Store, key: &str) -> Result<Option<T>, StoreError> {
    match store.kv().get(key).await? {
        Some(value) => decode(key, value).map(Some),
        None => Ok(None),
    }
}

/// Encode `record` and write it at `key`, replacing any previous value.
async fn save_record<T: Serialize>(store: &Store, key: &str, record: &T) -> Result<(), StoreError> {
    let value = serde_json::to_value(record)?;
    store.kv().set(key, value).await
}

fn decode<T: DeserializeOwned>(key: &str, value: serde_json::Value) -> Result<T, StoreError> {
    serde_json::from_value(value).map_err(|source| StoreError::Corrupt {
        key: key.to_string(),
        source,
    })
}
