//! JSON-document file store backend.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{KeyValueStore, Result, StoreError};

/// A store persisted as one flat JSON object on disk.
///
/// The whole document is read once on [`FileStore::open`] and rewritten on
/// every mutation. Reads are served from memory. Concurrent mutations on the
/// same handle are serialized by the internal lock; two handles opened on the
/// same path will overwrite each other, exactly as two tabs sharing local
/// storage would.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open a store at `path`, creating an empty one if the file is missing.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let value: serde_json::Value = serde_json::from_slice(&bytes)?;
                let object = value.as_object().ok_or_else(|| StoreError::MalformedDocument {
                    path: path.clone(),
                    reason: "top-level value is not an object".to_string(),
                })?;
                let mut map = HashMap::with_capacity(object.len());
                for (key, value) in object {
                    let value = value.as_str().ok_or_else(|| StoreError::MalformedDocument {
                        path: path.clone(),
                        reason: format!("value under '{key}' is not a string"),
                    })?;
                    map.insert(key.clone(), value.to_string());
                }
                map
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!("Opened file store at {:?} ({} entries)", path, entries.len());
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Rewrite the whole document from the in-memory map.
    async fn persist(&self, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        let document = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&self.path, document).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        if entries.remove(key).is_some() {
            self.persist(&entries).await?;
        }
        Ok(())
    }
}
