use super::store::ContentStore;
use crate::types::{About, Item, ItemDraft, ItemPatch, UserRecord, error::ApiError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Full document state held by the in-memory backend. Also the on-disk
/// snapshot format used by the JSON file backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub users: Vec<UserRecord>,
    pub items: Vec<Item>,
    pub about: Option<About>,
}

/// In-memory content store for testing/development
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<Snapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            state: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// Clone of the current document state, used by persisting backends
    pub async fn snapshot(&self) -> Snapshot {
        self.state.read().await.clone()
    }

    fn derive_short_image(images: &[String]) -> Option<String> {
        images.first().cloned()
    }
}

#[async_trait::async_trait]
impl ContentStore for MemoryStore {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        let state = self.state.read().await;
        Ok(state.items.clone())
    }

    async fn create_item(&self, draft: ItemDraft) -> Result<Item, ApiError> {
        if draft.images.is_empty() {
            return Err(ApiError::Validation("No files uploaded".to_string()));
        }

        let item = Item {
            id: Uuid::new_v4(),
            category: draft.category,
            short_image: Self::derive_short_image(&draft.images),
            images: draft.images,
            page: draft.page,
            title: draft.title,
            description: draft.description,
            keywords: draft.keywords,
            created_at: chrono::Utc::now(),
        };

        let mut state = self.state.write().await;
        state.items.push(item.clone());

        Ok(item)
    }

    async fn update_item(&self, id: Uuid, patch: ItemPatch) -> Result<Item, ApiError> {
        let mut state = self.state.write().await;

        let item = state
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ApiError::NotFound("Item".to_string()))?;

        if let Some(category) = patch.category {
            item.category = Some(category);
        }
        if let Some(images) = patch.images {
            item.short_image = Self::derive_short_image(&images);
            item.images = images;
        }
        if let Some(page) = patch.page {
            item.page = Some(page);
        }
        if let Some(title) = patch.title {
            item.title = Some(title);
        }
        if let Some(description) = patch.description {
            item.description = Some(description);
        }
        if let Some(keywords) = patch.keywords {
            item.keywords = Some(keywords);
        }

        Ok(item.clone())
    }

    async fn delete_item(&self, id: Uuid) -> Result<(), ApiError> {
        let mut state = self.state.write().await;

        let before = state.items.len();
        state.items.retain(|item| item.id != id);

        if state.items.len() == before {
            return Err(ApiError::NotFound("Item".to_string()));
        }

        Ok(())
    }

    async fn get_about(&self) -> Result<Option<About>, ApiError> {
        let state = self.state.read().await;
        Ok(state.about.clone())
    }

    async fn upsert_about(
        &self,
        content: String,
        image: Option<String>,
    ) -> Result<About, ApiError> {
        let mut state = self.state.write().await;

        let about = match state.about.take() {
            Some(existing) => About {
                content,
                // A missing image on update leaves the stored one in place
                image: image.or(existing.image),
            },
            None => About { content, image },
        };

        state.about = Some(about.clone());

        Ok(about)
    }

    async fn insert_user(&self, user: UserRecord) -> Result<(), ApiError> {
        let mut state = self.state.write().await;

        if state.users.iter().any(|u| u.username == user.username) {
            return Err(ApiError::DuplicateUser);
        }

        state.users.push(user);

        Ok(())
    }

    async fn find_user(&self, username: &str) -> Result<Option<UserRecord>, ApiError> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.username == username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_images(images: &[&str]) -> ItemDraft {
        ItemDraft {
            images: images.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_item_derives_short_image() {
        let store = MemoryStore::new();

        let item = store
            .create_item(draft_with_images(&["/uploads/a.jpg", "/uploads/b.jpg"]))
            .await
            .unwrap();

        assert_eq!(item.short_image.as_deref(), Some("/uploads/a.jpg"));
        assert_eq!(item.images.len(), 2);
    }

    #[tokio::test]
    async fn test_create_item_rejects_empty_images() {
        let store = MemoryStore::new();

        assert!(matches!(
            store.create_item(ItemDraft::default()).await,
            Err(ApiError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_update_item_rederives_short_image() {
        let store = MemoryStore::new();
        let item = store
            .create_item(draft_with_images(&["/uploads/a.jpg"]))
            .await
            .unwrap();

        let patch = ItemPatch {
            images: Some(vec![
                "/uploads/c.jpg".to_string(),
                "/uploads/d.jpg".to_string(),
            ]),
            ..Default::default()
        };
        let updated = store.update_item(item.id, patch).await.unwrap();

        assert_eq!(updated.short_image.as_deref(), Some("/uploads/c.jpg"));
    }

    #[tokio::test]
    async fn test_update_item_without_images_keeps_short_image() {
        let store = MemoryStore::new();
        let item = store
            .create_item(draft_with_images(&["/uploads/a.jpg"]))
            .await
            .unwrap();

        let patch = ItemPatch {
            category: Some("prints".to_string()),
            ..Default::default()
        };
        let updated = store.update_item(item.id, patch).await.unwrap();

        assert_eq!(updated.category.as_deref(), Some("prints"));
        assert_eq!(updated.short_image.as_deref(), Some("/uploads/a.jpg"));
    }

    #[tokio::test]
    async fn test_delete_unknown_item_is_not_found() {
        let store = MemoryStore::new();

        assert!(matches!(
            store.delete_item(Uuid::new_v4()).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_items_preserves_insertion_order() {
        let store = MemoryStore::new();
        let first = store
            .create_item(draft_with_images(&["/uploads/a.jpg"]))
            .await
            .unwrap();
        let second = store
            .create_item(draft_with_images(&["/uploads/b.jpg"]))
            .await
            .unwrap();

        let items = store.list_items().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, first.id);
        assert_eq!(items[1].id, second.id);
    }

    #[tokio::test]
    async fn test_upsert_about_preserves_image() {
        let store = MemoryStore::new();

        store
            .upsert_about("hello".to_string(), Some("/uploads/me.jpg".to_string()))
            .await
            .unwrap();
        let about = store.upsert_about("updated".to_string(), None).await.unwrap();

        assert_eq!(about.content, "updated");
        assert_eq!(about.image.as_deref(), Some("/uploads/me.jpg"));
    }

    #[tokio::test]
    async fn test_insert_duplicate_user() {
        let store = MemoryStore::new();
        let user = UserRecord {
            username: "admin".to_string(),
            password_hash: "hash".to_string(),
        };

        store.insert_user(user.clone()).await.unwrap();

        assert!(matches!(
            store.insert_user(user).await,
            Err(ApiError::DuplicateUser)
        ));
    }
}
