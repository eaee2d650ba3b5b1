use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A portfolio "work" item. `short_image` is always derived from the first
/// entry of `images`, both at creation and whenever `images` is replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Fields accepted when creating an item. Image references come from the
/// upload store, already resolved to `/uploads/...` paths.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub category: Option<String>,
    pub images: Vec<String>,
    pub page: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
}

/// Partial update for an item. `None` fields are left untouched; a `Some`
/// images list replaces the sequence and re-derives `short_image`.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub category: Option<String>,
    pub images: Option<Vec<String>>,
    pub page: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
}

/// Singleton about-page document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Stored user credentials. The hash is bcrypt, never the raw secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
}

/// JSON body for /api/register and /api/login
#[derive(Debug, Deserialize)]
pub struct CredentialsPayload {
    pub username: String,
    pub password: String,
}

/// Authenticated identity passed through request extensions
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub username: String,
}
