use crate::{app_state::AppState, types::{Item, error::ApiError}};
use axum::{Json, extract::State};

/// GET /api/items - List all items, insertion order, no pagination
pub async fn list_items(State(app_state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    tracing::info!("LIST items");

    let items = app_state.content.list_items().await?;

    Ok(Json(items))
}
