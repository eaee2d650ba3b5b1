use crate::{
    app_state::AppState,
    types::{CredentialsPayload, error::ApiError},
};
use axum::{Json, extract::State};
use serde_json::{Value, json};

/// POST /api/login - Verify credentials and issue a bearer token
///
/// Unknown usernames and wrong passwords produce the identical generic
/// failure, leaking nothing about which one was wrong.
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<Json<Value>, ApiError> {
    tracing::info!("LOGIN attempt for {}", payload.username);

    let token = app_state
        .auth
        .login(
            app_state.content.as_ref(),
            &payload.username,
            &payload.password,
        )
        .await?;

    Ok(Json(json!({ "success": true, "token": token })))
}
