use super::form::collect_form;
use crate::{
    app_state::AppState,
    types::{AuthContext, error::ApiError},
};
use axum::{
    Extension, Json,
    extract::{Multipart, State},
    response::{IntoResponse, Response},
};

/// PUT /api/about - Upsert the about document
///
/// Creates the singleton on first call. A request without an image part
/// leaves any previously stored image untouched.
pub async fn put_about(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    tracing::info!("PUT about by {}", auth.username);

    let mut form = collect_form(multipart).await?;

    let content = form
        .take_field("content")
        .ok_or_else(|| ApiError::Validation("Missing content field".to_string()))?;

    let (image, mirror) = match form.files.pop() {
        Some(file) => {
            let stored = app_state.uploads.store(&file.filename, file.data).await?;
            (Some(stored.reference), stored.mirror)
        }
        None => (None, crate::uploads::MirrorStatus::NotConfigured),
    };

    let about = app_state.content.upsert_about(content, image).await?;

    Ok(([("x-upload-mirror", mirror.as_str())], Json(about)).into_response())
}
