mod middleware;
mod service;

pub use middleware::require_auth;
pub use service::{AuthService, Claims};
