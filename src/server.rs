use crate::{app_state::AppState, auth, handlers};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

/// Large enough for a ten-image gallery submission
const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Create the application router with all routes and middleware
///
/// This function is used by both main.rs and integration tests to ensure
/// the same server configuration is used in both production and tests.
pub fn create_app(app_state: AppState) -> Router {
    use handlers::{
        create_item, delete_item, get_about, get_upload, list_items, login, not_found, put_about,
        register, update_item,
    };

    // Every mutating item/about route sits behind the bearer token check
    let protected = Router::new()
        .route("/api/items", post(create_item))
        .route("/api/items/{id}", put(update_item).delete(delete_item))
        .route("/api/about", put(put_about))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth::require_auth,
        ));

    Router::new()
        .route("/api/items", get(list_items))
        .route("/api/about", get(get_about))
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/uploads/{name}", get(get_upload))
        .merge(protected)
        .fallback(not_found)
        .with_state(app_state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
