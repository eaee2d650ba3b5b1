use super::memory::{MemoryStore, Snapshot};
use super::store::ContentStore;
use crate::types::{About, Item, ItemDraft, ItemPatch, UserRecord, error::ApiError};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Content store persisted as a JSON snapshot file. Documents are held in
/// memory and the full snapshot is rewritten after every mutation, which is
/// plenty for a single-admin portfolio site.
pub struct JsonFileStore {
    inner: MemoryStore,
    path: PathBuf,
}

impl JsonFileStore {
    /// Load the snapshot at `path`, or start empty if the file does not
    /// exist yet. The parent directory is created if needed.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, ApiError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ApiError::Storage(format!("Failed to create data dir: {}", e)))?;
        }

        let snapshot = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| ApiError::Storage(format!("Corrupt data file: {}", e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Snapshot::default(),
            Err(e) => {
                return Err(ApiError::Storage(format!("Failed to read data file: {}", e)));
            }
        };

        tracing::info!("Loaded content store from {}", path.display());

        Ok(Self {
            inner: MemoryStore::from_snapshot(snapshot),
            path,
        })
    }

    async fn flush(&self) -> Result<(), ApiError> {
        let snapshot = self.inner.snapshot().await;
        let json = serde_json::to_vec_pretty(&snapshot)
            .map_err(|e| ApiError::Storage(format!("Failed to serialize snapshot: {}", e)))?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| ApiError::Storage(format!("Failed to write data file: {}", e)))?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl ContentStore for JsonFileStore {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        self.inner.list_items().await
    }

    async fn create_item(&self, draft: ItemDraft) -> Result<Item, ApiError> {
        let item = self.inner.create_item(draft).await?;
        self.flush().await?;
        Ok(item)
    }

    async fn update_item(&self, id: Uuid, patch: ItemPatch) -> Result<Item, ApiError> {
        let item = self.inner.update_item(id, patch).await?;
        self.flush().await?;
        Ok(item)
    }

    async fn delete_item(&self, id: Uuid) -> Result<(), ApiError> {
        self.inner.delete_item(id).await?;
        self.flush().await?;
        Ok(())
    }

    async fn get_about(&self) -> Result<Option<About>, ApiError> {
        self.inner.get_about().await
    }

    async fn upsert_about(
        &self,
        content: String,
        image: Option<String>,
    ) -> Result<About, ApiError> {
        let about = self.inner.upsert_about(content, image).await?;
        self.flush().await?;
        Ok(about)
    }

    async fn insert_user(&self, user: UserRecord) -> Result<(), ApiError> {
        self.inner.insert_user(user).await?;
        self.flush().await?;
        Ok(())
    }

    async fn find_user(&self, username: &str) -> Result<Option<UserRecord>, ApiError> {
        self.inner.find_user(username).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_snapshot_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");

        {
            let store = JsonFileStore::open(&path).await.unwrap();
            store
                .create_item(ItemDraft {
                    category: Some("paintings".to_string()),
                    images: vec!["/uploads/a.jpg".to_string()],
                    ..Default::default()
                })
                .await
                .unwrap();
            store
                .upsert_about("bio".to_string(), None)
                .await
                .unwrap();
        }

        let reopened = JsonFileStore::open(&path).await.unwrap();
        let items = reopened.list_items().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category.as_deref(), Some("paintings"));
        assert_eq!(
            reopened.get_about().await.unwrap().unwrap().content,
            "bio"
        );
    }

    #[tokio::test]
    async fn test_open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("fresh.json")).await.unwrap();

        assert!(store.list_items().await.unwrap().is_empty());
        assert!(store.get_about().await.unwrap().is_none());
    }
}
