//! Schema-agnostic key-value storage.
//!
//! Keys are opaque strings and values are arbitrary JSON documents. Domain
//! invariants live in the repositories; backends only guarantee that each
//! mutation is applied atomically and durably (where the backend is durable).

mod file;
mod memory;

use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreError;

pub use file::FileKvStore;
pub use memory::MemoryKvStore;

/// Point and prefix access to a key-value store.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Short backend name, e.g. `"file"`.
    fn backend(&self) -> &'static str;

    /// Backing file, for backends that persist to one.
    fn location(&self) -> Option<&Path> {
        None
    }

    /// Current value at `key`, or `None` if no record exists.
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Insert or overwrite the value at `key`.
    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Remove the record at `key`. Deleting an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Every value whose key starts with `prefix`, in unspecified order.
    async fn scan_prefix(&self, prefix: &str) -> Result<Vec<Value>, StoreError>;
}
