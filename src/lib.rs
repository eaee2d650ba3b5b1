// Library exports for integration tests
pub mod app_state;
pub mod auth;
pub mod config;
pub mod content;
pub mod handlers;
pub mod server;
pub mod types;
pub mod uploads;

// Re-export commonly used types
pub use app_state::AppState;
pub use auth::AuthService;
pub use config::{Config, S3MirrorConfig};
pub use content::{ContentStore, JsonFileStore, MemoryStore};
pub use types::error::ApiError;
pub use uploads::{LocalUploads, MirrorStatus, S3Mirror, UploadStore};

// Re-export server creation function
pub use server::create_app;
