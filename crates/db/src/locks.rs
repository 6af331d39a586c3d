//! Per-key exclusive sections for read-modify-write updates.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Table of async mutexes keyed by store key.
///
/// Holding the guard returned by [`KeyLocks::lock`] excludes every other
/// holder of the same key; different keys never contend. Entries nobody
/// holds or waits on are pruned on the next call.
#[derive(Default)]
pub struct KeyLocks {
    table: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl KeyLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `key`.
    pub async fn lock(&self, key: &str) -> OwnedMutexGuard<()> {
        let entry = {
            let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
            // Every clone of an entry is made under this lock, so a count of
            // one means no guard or waiter references it.
            table.retain(|_, m| Arc::strong_count(m) > 1);
            Arc::clone(table.entry(key.to_string()).or_default())
        };
        entry.lock_owned().await
    }

    /// Number of keys currently tracked.
    pub fn tracked(&self) -> usize {
        self.table.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}
