use folio_server::{
    AppState, AuthService, ContentStore, LocalUploads, MemoryStore, UploadStore, create_app,
};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Test server handle that automatically shuts down on drop
///
/// This starts a real HTTP server on a random port for integration testing.
/// The server uses the actual production code via create_app(), backed by an
/// in-memory content store and a temporary upload directory.
pub struct TestServer {
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    #[allow(dead_code)] // Keep handle alive to prevent task abort
    handle: JoinHandle<()>,
    #[allow(dead_code)] // Keep the upload dir alive for the server's lifetime
    upload_dir: tempfile::TempDir,
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestServer {
    /// Start a test server with in-memory storage and return an HTTP client
    pub async fn start() -> Self {
        let upload_dir = tempfile::tempdir().unwrap();

        let content: Arc<dyn ContentStore> = Arc::new(MemoryStore::new());
        let local = LocalUploads::create(upload_dir.path()).await.unwrap();
        let uploads = Arc::new(UploadStore::new(local, None));

        // Low bcrypt cost keeps the auth-heavy tests fast
        let auth = AuthService::with_cost("test-secret".to_string(), 4);

        let app_state = AppState::new(content, uploads, auth);

        // Use the ACTUAL production create_app function
        let app = create_app(app_state);

        // Bind to a random available port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        // Give the server a moment to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestServer {
            shutdown_tx: Some(shutdown_tx),
            handle,
            upload_dir,
            client: reqwest::Client::new(),
            base_url: format!("http://{}", addr),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Register a user and log in, returning a valid bearer token
    pub async fn register_and_login(&self, username: &str, password: &str) -> String {
        let response = self
            .client
            .post(self.url("/api/register"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 201);

        let response = self
            .client
            .post(self.url("/api/login"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let body: serde_json::Value = response.json().await.unwrap();
        body["token"].as_str().unwrap().to_string()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Signal shutdown (ignore errors if already shut down)
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
