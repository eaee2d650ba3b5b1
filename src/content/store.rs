use crate::types::{About, Item, ItemDraft, ItemPatch, UserRecord, error::ApiError};
use uuid::Uuid;

/// Content store trait - implement this for different persistence backends.
/// Covers the item/about documents plus the credential records, which share
/// a backend in this deployment.
#[async_trait::async_trait]
pub trait ContentStore: Send + Sync {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError>;
    async fn create_item(&self, draft: ItemDraft) -> Result<Item, ApiError>;
    async fn update_item(&self, id: Uuid, patch: ItemPatch) -> Result<Item, ApiError>;
    async fn delete_item(&self, id: Uuid) -> Result<(), ApiError>;

    async fn get_about(&self) -> Result<Option<About>, ApiError>;
    async fn upsert_about(
        &self,
        content: String,
        image: Option<String>,
    ) -> Result<About, ApiError>;

    async fn insert_user(&self, user: UserRecord) -> Result<(), ApiError>;
    async fn find_user(&self, username: &str) -> Result<Option<UserRecord>, ApiError>;
}
