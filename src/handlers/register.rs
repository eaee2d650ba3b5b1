use crate::{
    app_state::AppState,
    types::{CredentialsPayload, error::ApiError},
};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// POST /api/register - Create a user with a bcrypt-hashed password
pub async fn register(
    State(app_state): State<AppState>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<Response, ApiError> {
    if payload.username.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation(
            "Username and password are required".to_string(),
        ));
    }

    tracing::info!("REGISTER user {}", payload.username);

    app_state
        .auth
        .register(
            app_state.content.as_ref(),
            &payload.username,
            &payload.password,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully" })),
    )
        .into_response())
}
