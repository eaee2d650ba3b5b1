use super::form::collect_form;
use crate::{
    app_state::AppState,
    types::{AuthContext, ItemDraft, error::ApiError},
    uploads::MirrorStatus,
};
use axum::{
    Extension, Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// POST /api/items - Create an item from a multipart form
///
/// File parts are stored through the upload store; the resulting local
/// references become the item's image sequence. The worst mirror outcome
/// across all files is reported in the `x-upload-mirror` header.
pub async fn create_item(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    tracing::info!("CREATE item by {}", auth.username);

    let mut form = collect_form(multipart).await?;

    if form.files.is_empty() {
        return Err(ApiError::Validation("No files uploaded".to_string()));
    }

    let mut images = Vec::with_capacity(form.files.len());
    let mut mirror = MirrorStatus::NotConfigured;

    for file in form.files.drain(..) {
        let stored = app_state.uploads.store(&file.filename, file.data).await?;
        mirror = mirror.combine(stored.mirror);
        images.push(stored.reference);
    }

    let draft = ItemDraft {
        category: form.take_field("category"),
        images,
        page: form.take_field("page"),
        title: form.take_field("title"),
        description: form.take_field("description"),
        keywords: form.take_field("keywords"),
    };

    let item = app_state.content.create_item(draft).await?;

    Ok((
        StatusCode::CREATED,
        [("x-upload-mirror", mirror.as_str())],
        Json(item),
    )
        .into_response())
}
