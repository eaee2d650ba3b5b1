use crate::{auth::AuthService, content::ContentStore, uploads::UploadStore};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentStore>,
    pub uploads: Arc<UploadStore>,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(content: Arc<dyn ContentStore>, uploads: Arc<UploadStore>, auth: AuthService) -> Self {
        Self {
            content,
            uploads,
            auth,
        }
    }
}
