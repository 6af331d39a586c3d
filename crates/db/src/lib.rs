//! Persistence layer: key-value backends and the domain repositories built
//! on top of them.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::OwnedMutexGuard;

pub mod error;
pub mod kv;
pub mod locks;
pub mod models;
pub mod repositories;

use error::StoreError;
use kv::{FileKvStore, KvStore, MemoryKvStore};
use locks::KeyLocks;

/// Key probed by [`health_check`]. Never written.
const HEALTH_PROBE_KEY: &str = "__health_probe__";

/// Shared handle to a key-value backend plus the lock table that
/// repositories use to serialize read-modify-write updates.
///
/// Cheaply cloneable.
#[derive(Clone)]
pub struct Store {
    kv: Arc<dyn KvStore>,
    locks: Arc<KeyLocks>,
}

impl Store {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self {
            kv,
            locks: Arc::new(KeyLocks::new()),
        }
    }

    /// The underlying backend.
    pub fn kv(&self) -> &dyn KvStore {
        self.kv.as_ref()
    }

    /// Exclusive section for `key`; hold the guard across load-mutate-store.
    pub async fn lock_key(&self, key: &str) -> OwnedMutexGuard<()> {
        self.locks.lock(key).await
    }
}

/// Open a durable store backed by the JSON document at `path`.
pub async fn open_file_store(path: impl AsRef<Path>) -> Result<Store, StoreError> {
    let kv = FileKvStore::open(path).await?;
    Ok(Store::new(Arc::new(kv)))
}

/// Create a non-durable in-memory store.
pub fn in_memory_store() -> Store {
    Store::new(Arc::new(MemoryKvStore::new()))
}

/// Verify the backend answers reads.
pub async fn health_check(store: &Store) -> Result<(), StoreError> {
    store.kv().get(HEALTH_PROBE_KEY).await.map(|_| ())
}
