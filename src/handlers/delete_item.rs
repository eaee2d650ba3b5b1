use super::update_item::parse_item_id;
use crate::{
    app_state::AppState,
    types::{AuthContext, error::ApiError},
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

/// DELETE /api/items/{id} - Remove an item
///
/// Does not cascade to the referenced uploads; orphaned binaries are an
/// accepted leak.
pub async fn delete_item(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_item_id(&id)?;
    tracing::info!("DELETE item {} by {}", id, auth.username);

    app_state.content.delete_item(id).await?;

    Ok(Json(json!({ "message": "Item deleted" })))
}
