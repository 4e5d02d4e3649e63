//! File-based collection storage implementation.
//!
//! Stores the whole collection as a JSON array at a single path.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::item::Item;
use crate::store::collection::CollectionStore;
use crate::store::error::{StorageError, StorageResult};

/// File-based implementation of `CollectionStore`.
#[derive(Debug, Clone)]
pub struct FileCollectionStore {
    path: PathBuf,
}

impl FileCollectionStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> StorageResult<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::file_io(parent, e)),
            _ => Ok(()),
        }
    }

    async fn reset(&self) -> StorageResult<Vec<Item>> {
        self.save(&[]).await?;
        Ok(Vec::new())
    }
}

#[async_trait]
impl CollectionStore for FileCollectionStore {
    async fn ensure(&self) -> StorageResult<()> {
        let exists = fs::try_exists(&self.path)
            .await
            .map_err(|e| StorageError::file_io(&self.path, e))?;
        if exists {
            return Ok(());
        }

        self.ensure_parent_dir().await?;
        self.save(&[]).await?;
        tracing::info!(path = %self.path.display(), "created empty item store");
        Ok(())
    }

    async fn load(&self) -> StorageResult<Vec<Item>> {
        let contents = match fs::read(&self.path).await {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "item store missing, recreating");
                self.ensure_parent_dir().await?;
                return self.reset().await;
            }
            Err(e) => return Err(StorageError::file_io(&self.path, e)),
        };

        match serde_json::from_slice::<Vec<Item>>(&contents) {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "item store is unreadable, resetting to an empty collection"
                );
                self.reset().await
            }
        }
    }

    async fn save(&self, items: &[Item]) -> StorageResult<()> {
        let content = serde_json::to_string_pretty(items)
            .map_err(|e| StorageError::serialization(e.to_string()))?;

        super::atomic_write_file(&super::temp_path(&self.path), &self.path, content.as_bytes())
            .await?;

        tracing::debug!(path = %self.path.display(), items = items.len(), "saved item store");
        Ok(())
    }
}
