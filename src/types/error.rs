use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// API error responses, rendered as JSON `{"message": ...}` bodies
#[derive(Debug, Clone)]
pub enum ApiError {
    Validation(String),
    DuplicateUser,
    InvalidCredentials,
    Unauthorized,
    NotFound(String),
    Storage(String),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::DuplicateUser => StatusCode::BAD_REQUEST,
            // The original admin panel reports login failures as 400, not 401
            ApiError::InvalidCredentials => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::DuplicateUser => "User already exists".to_string(),
            ApiError::InvalidCredentials => "Invalid credentials".to_string(),
            ApiError::Unauthorized => "Unauthorized".to_string(),
            ApiError::NotFound(what) => format!("{} not found", what),
            ApiError::Storage(msg) => format!("Internal error: {}", msg),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
