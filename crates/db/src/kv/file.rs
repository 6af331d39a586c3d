use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use super::KvStore;
use crate::error::StoreError;

/// Attempts made to read the backing file at open time.
const LOAD_ATTEMPTS: u32 = 3;

/// Delay between load attempts.
const LOAD_BACKOFF: Duration = Duration::from_millis(50);

type Document = BTreeMap<String, Value>;

/// Key-value store persisted as one JSON document on disk.
///
/// The whole mapping is held in memory. Each mutation writes the next
/// snapshot to a temp file beside the target and renames it into place
/// while the writer lock is held, so readers only ever see committed
/// snapshots and a crash leaves either the old or the new file.
///
/// The store assumes it is the only writer of its file.
pub struct FileKvStore {
    path: PathBuf,
    data: RwLock<Document>,
}

impl FileKvStore {
    /// Open the store at `path`, creating an empty document if absent.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        let data = match load(&path).await? {
            Some(data) => data,
            None => {
                let empty = Document::new();
                write_snapshot(&path, &empty).await?;
                tracing::info!(path = %path.display(), "Initialized empty key-value store");
                empty
            }
        };

        tracing::debug!(path = %path.display(), keys = data.len(), "Key-value store opened");

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }
}

#[async_trait]
impl KvStore for FileKvStore {
    fn backend(&self) -> &'static str {
        "file"
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.data.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut data = self.data.write().await;
        let previous = data.insert(key.to_string(), value);

        if let Err(e) = write_snapshot(&self.path, &data).await {
            match previous {
                Some(old) => data.insert(key.to_string(), old),
                None => data.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut data = self.data.write().await;
        let Some(previous) = data.remove(key) else {
            return Ok(());
        };

        if let Err(e) = write_snapshot(&self.path, &data).await {
            data.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }

    async fn scan_prefix(&self, prefix: &str) -> Result<Vec<Value>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(_, v)| v.clone())
            .collect())
    }
}

/// Read and parse the backing file. `None` if it does not exist.
///
/// Transient read errors are retried; a file that reads but fails to parse
/// is not.
async fn load(path: &Path) -> Result<Option<Document>, StoreError> {
    let mut attempt = 1;
    let raw = loop {
        match tokio::fs::read_to_string(path).await {
            Ok(raw) => break raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) if attempt < LOAD_ATTEMPTS => {
                tracing::warn!(path = %path.display(), attempt, error = %e, "Retrying store load");
                tokio::time::sleep(LOAD_BACKOFF * attempt).await;
                attempt += 1;
            }
            Err(e) => return Err(StoreError::io(path, e)),
        }
    };

    if raw.trim().is_empty() {
        return Ok(Some(Document::new()));
    }
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Durably replace the file at `path` with `data`.
async fn write_snapshot(path: &Path, data: &Document) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(data)?;
    let temp_path = path.with_extension(format!("{}.tmp", uuid::Uuid::new_v4().simple()));

    if let Err(e) = write_then_rename(&temp_path, path, &payload).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(StoreError::io(path, e));
    }
    Ok(())
}

async fn write_then_rename(temp_path: &Path, path: &Path, payload: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(temp_path).await?;
    file.write_all(payload).await?;
    file.sync_all().await?;
    tokio::fs::rename(temp_path, path).await
}
