use crate::{
    app_state::AppState,
    types::{About, error::ApiError},
};
use axum::{Json, extract::State};

/// GET /api/about - Fetch the singleton about document, `null` if never set
pub async fn get_about(
    State(app_state): State<AppState>,
) -> Result<Json<Option<About>>, ApiError> {
    tracing::info!("GET about");

    let about = app_state.content.get_about().await?;

    Ok(Json(about))
}
