//! # eateryd — eatery daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load `.env`, then configuration (config file, env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use eatery_adapter_http_axum::router::{self, RouterConfig};
use eatery_adapter_http_axum::state::AppState;
use eatery_adapter_http_axum::uploads::UploadStore;
use eatery_adapter_storage_sqlite_sqlx::{
    Config as DatabaseConfig, SqliteContactRepository, SqliteMenuItemRepository,
    SqliteReservationRepository, SqliteReviewRepository,
};
use eatery_app::services::contact_service::ContactService;
use eatery_app::services::menu_service::MenuService;
use eatery_app::services::reservation_service::ReservationService;
use eatery_app::services::review_service::ReviewService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is normal.
    let _ = dotenvy::dotenv();

    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DatabaseConfig {
        database_url: config.database_url(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let menu_repo = SqliteMenuItemRepository::new(pool.clone());
    let reservation_repo = SqliteReservationRepository::new(pool.clone());
    let contact_repo = SqliteContactRepository::new(pool.clone());
    let review_repo = SqliteReviewRepository::new(pool);

    // HTTP
    let state = AppState::new(
        MenuService::new(menu_repo),
        ReservationService::new(reservation_repo),
        ContactService::new(contact_repo),
        ReviewService::new(review_repo),
        UploadStore::new(&config.storage.public_dir),
    );
    let app = router::build(
        state,
        &RouterConfig {
            allowed_origins: config.cors.allowed_origins.clone(),
        },
    );

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        addr = %bind_addr,
        public_dir = %config.storage.public_dir.display(),
        "eateryd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("eateryd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
