//! Family Tree Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use familytree_api::AppState;
use familytree_core::config::AppConfig;
use familytree_core::error::AppError;
use familytree_core::traits::storage::PhotoStore;
use familytree_database::DatabasePool;
use familytree_database::repositories::member::MemberRepository;
use familytree_service::MemberService;
use familytree_storage::LocalPhotoStore;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `config/` and the environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("FAMILYTREE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Family Tree v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database ─────────────────────────────────────────
    tracing::info!("Connecting to database...");
    let db = DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    familytree_database::migration::run_migrations(db.pool()).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Photo storage ────────────────────────────────────
    tracing::info!(
        "Initializing photo store at '{}'...",
        config.storage.upload_dir
    );
    let photo_store: Arc<dyn PhotoStore> = Arc::new(
        LocalPhotoStore::new(&config.storage.upload_dir, &config.storage.public_prefix).await?,
    );

    // ── Step 3: Services ─────────────────────────────────────────
    let member_repo = Arc::new(MemberRepository::new(db.pool().clone()));
    let member_service = Arc::new(MemberService::new(
        Arc::clone(&member_repo),
        Arc::clone(&photo_store),
    ));

    // ── Step 4: HTTP server ──────────────────────────────────────
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        config: Arc::new(config),
        db_pool: db.pool().clone(),
        photo_store,
        member_service,
    };
    let app = familytree_api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    // ── Step 5: Release the database ─────────────────────────────
    if tokio::time::timeout(grace, db.close()).await.is_err() {
        tracing::warn!("Database pool did not close within {:?}", grace);
    }

    tracing::info!("Family Tree server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
