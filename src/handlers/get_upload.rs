use crate::{app_state::AppState, types::error::ApiError};
use axum::{
    body::Body,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET /uploads/{name} - Stream a stored binary back to the client
pub async fn get_upload(
    Path(name): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Response, ApiError> {
    tracing::info!("GET upload: {}", name);

    let (stream, size) = app_state.uploads.open(&name).await?;

    Ok((
        StatusCode::OK,
        [
            ("content-type", content_type_for(&name).to_string()),
            ("content-length", size.to_string()),
        ],
        Body::from_stream(stream),
    )
        .into_response())
}

fn content_type_for(name: &str) -> &'static str {
    match name.rsplit('.').next().map(|ext| ext.to_ascii_lowercase()) {
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "gif" => "image/gif",
        Some(ext) if ext == "webp" => "image/webp",
        Some(ext) if ext == "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
