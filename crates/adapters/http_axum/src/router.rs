//! Axum router assembly.

use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use eatery_app::ports::{
    ContactRepository, MenuItemRepository, ReservationRepository, ReviewRepository,
};

use crate::state::AppState;

/// Router settings that do not belong to the application state.
#[derive(Debug, Clone, Default)]
pub struct RouterConfig {
    /// Origins allowed to call the API from a browser, with credentials.
    pub allowed_origins: Vec<String>,
}

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and the admin pages under `/admin`. Any
/// other path is looked up in the public directory, which is where uploaded
/// images end up. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<MR, RR, CR, VR>(state: AppState<MR, RR, CR, VR>, config: &RouterConfig) -> Router
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let public_dir = ServeDir::new(state.uploads.public_dir());

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .nest("/admin", crate::dashboard::routes())
        .fallback_service(public_dir)
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(%origin, error = %err, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}

async fn health_check() -> &'static str {
    "OK"
}
