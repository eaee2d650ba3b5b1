mod app_state;
mod auth;
mod config;
mod content;
mod handlers;
mod server;
mod types;
mod uploads;

use app_state::AppState;
use auth::AuthService;
use clap::Parser;
use config::Config;
use content::{ContentStore, JsonFileStore};
use std::sync::Arc;
use uploads::{LocalUploads, S3Mirror, UploadStore};

// Server configuration
const HOST: &str = "0.0.0.0";
const PORT: u16 = 5000;

// Development fallback, override via JWT_SECRET in any real deployment
const DEFAULT_JWT_SECRET: &str = "folio-dev-secret";

/// folio-server: portfolio content-management API with JWT auth and
/// mirrored file uploads
#[derive(Parser, Debug)]
#[command(name = "folio-server")]
#[command(about = "API server for a portfolio/admin site", long_about = None)]
struct Cli {
    /// Path to the configuration file (optional)
    #[arg(short, long, env = "CONFIG_PATH")]
    config: Option<String>,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = PORT)]
    port: u16,

    /// Secret used to sign bearer tokens
    #[arg(long, env = "JWT_SECRET", default_value = DEFAULT_JWT_SECRET, hide_env_values = true)]
    jwt_secret: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Load configuration, falling back to defaults when no file is given
    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(cfg) => {
                tracing::info!("Loaded configuration from {}", path);
                cfg
            }
            Err(e) => {
                tracing::error!("Failed to load config file '{}': {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            tracing::info!("No config file given, using defaults");
            Config::default()
        }
    };

    if cli.jwt_secret == DEFAULT_JWT_SECRET {
        tracing::warn!("Running with the built-in development JWT secret");
    }

    // Upload directory must be writable before anything else
    let local = match LocalUploads::create(config.upload_dir()).await {
        Ok(local) => local,
        Err(e) => {
            tracing::error!("✗ {}", e);
            std::process::exit(1);
        }
    };

    // Optional S3 mirror; a missing or unreachable mirror never blocks
    // startup, it just downgrades uploads to local-only
    let mirror = match &config.s3_mirror {
        Some(mirror_config) => {
            tracing::info!("Initializing S3 mirror: {}", mirror_config.bucket);
            match S3Mirror::new(
                mirror_config.bucket.clone(),
                mirror_config.region.clone(),
                mirror_config.endpoint.clone(),
                mirror_config.force_path_style,
                mirror_config.access_key_id.clone(),
                mirror_config.secret_access_key.clone(),
            )
            .await
            {
                Ok(mirror) => {
                    match mirror.head_bucket().await {
                        Ok(()) => tracing::info!(
                            "✓ S3 mirror '{}' initialized successfully",
                            mirror_config.bucket
                        ),
                        Err(e) => tracing::warn!(
                            "S3 mirror '{}' configured but not reachable yet: {}",
                            mirror_config.bucket,
                            e
                        ),
                    }
                    Some(mirror)
                }
                Err(e) => {
                    tracing::error!(
                        "✗ Failed to initialize S3 mirror '{}': {}",
                        mirror_config.bucket,
                        e
                    );
                    None
                }
            }
        }
        None => None,
    };

    let uploads = Arc::new(UploadStore::new(local, mirror));

    // Content store persisted as a JSON snapshot
    let content: Arc<dyn ContentStore> = match JsonFileStore::open(config.data_file()).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!("✗ Failed to open content store: {}", e);
            std::process::exit(1);
        }
    };

    let auth = AuthService::new(cli.jwt_secret.clone());

    // Create shared app state and build the router
    let app_state = AppState::new(content, uploads, auth);
    let app = server::create_app(app_state);

    // Start server
    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!(
        "Portfolio API server listening on {}",
        listener.local_addr().unwrap()
    );
    tracing::info!("Serving uploads from {}", config.upload_dir());

    axum::serve(listener, app).await.unwrap();
}
