use super::form::collect_form;
use crate::{
    app_state::AppState,
    types::{AuthContext, ItemPatch, error::ApiError},
    uploads::MirrorStatus,
};
use axum::{
    Extension, Json,
    extract::{Multipart, Path, State},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// PUT /api/items/{id} - Partial update from a multipart form
///
/// Only supplied fields are replaced. When new files are present they
/// replace the whole image sequence and `shortImage` is re-derived from the
/// new first image.
pub async fn update_item(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let id = parse_item_id(&id)?;
    tracing::info!("UPDATE item {} by {}", id, auth.username);

    let mut form = collect_form(multipart).await?;

    let mut images = Vec::with_capacity(form.files.len());
    let mut mirror = MirrorStatus::NotConfigured;

    for file in form.files.drain(..) {
        let stored = app_state.uploads.store(&file.filename, file.data).await?;
        mirror = mirror.combine(stored.mirror);
        images.push(stored.reference);
    }

    let patch = ItemPatch {
        category: form.take_field("category"),
        images: if images.is_empty() { None } else { Some(images) },
        page: form.take_field("page"),
        title: form.take_field("title"),
        description: form.take_field("description"),
        keywords: form.take_field("keywords"),
    };

    let item = app_state.content.update_item(id, patch).await?;

    Ok(([("x-upload-mirror", mirror.as_str())], Json(item)).into_response())
}

pub(super) fn parse_item_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::Validation(format!("Invalid item id: {}", raw)))
}
