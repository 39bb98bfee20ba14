//! File-based storage backend implementation

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::traits::ByteStore;

/// Filesystem-backed byte store
///
/// Each key maps to `<root>/<key>.json`. Namespaces become directories, so
/// `workouts/2024-03` lands at `<root>/workouts/2024-03.json`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at the given directory
    ///
    /// The directory is created lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Ensure the parent directory of a path exists
    ///
    /// Two callers racing to create the same partition directory is fine:
    /// losing the race reports `AlreadyExists`, which is the outcome we
    /// wanted anyway.
    async fn ensure_parent(&self, path: &Path) -> StorageResult<()> {
        let Some(parent) = path.parent() else {
            return Ok(());
        };
        match fs::create_dir_all(parent).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}

#[async_trait]
impl ByteStore for FileStore {
    async fn exists(&self, key: &str) -> StorageResult<bool> {
        Ok(fs::try_exists(self.path_for(key)).await?)
    }

    async fn read_all(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn write_all(&self, key: &str, bytes: &[u8]) -> StorageResult<()> {
        let path = self.path_for(key);
        self.ensure_parent(&path).await?;
        debug!(key, bytes = bytes.len(), "writing storage key");
        fs::write(&path, bytes).await?;
        Ok(())
    }

    async fn list(&self, namespace: &str) -> StorageResult<Vec<String>> {
        let dir = self.root.join(namespace);
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::Io(e)),
        };

        let mut keys = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            if let Some(name) = name.to_str() {
                if let Some(stem) = name.strip_suffix(".json") {
                    keys.push(format!("{namespace}/{stem}"));
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}
