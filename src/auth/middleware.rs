use crate::{
    app_state::AppState,
    types::{AuthContext, error::ApiError},
};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Bearer token authentication middleware
///
/// Gates the mutating item/about routes. Extracts the `Authorization: Bearer`
/// header, verifies signature and expiry, and injects AuthContext into
/// request extensions for downstream handlers. Missing, malformed and
/// expired tokens all produce the same Unauthorized response.
pub async fn require_auth(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    let token = match token {
        Some(t) => t,
        None => return ApiError::Unauthorized.into_response(),
    };

    let claims = match app_state.auth.authenticate(token) {
        Ok(claims) => claims,
        Err(e) => return e.into_response(),
    };

    request.extensions_mut().insert(AuthContext {
        username: claims.sub,
    });

    next.run(request).await
}
