//! HTTP server - router assembly and serve loop

use axum::routing::{delete, get, post};
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::api::{self, ApiState};
use crate::config::ServerConfig;
use crate::store::ActivityStore;

/// Build the router with all routes
pub fn router(state: Arc<ApiState>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(api::root))
        .route("/activities", get(api::list_activities))
        .route("/activities/:name/signup", post(api::signup_for_activity))
        .route(
            "/activities/:name/unregister",
            delete(api::unregister_from_activity),
        )
        .route("/health", get(api::health))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Seed the store from `config` and serve until Ctrl+C
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let catalog = config.load_catalog()?;
    let store = ActivityStore::new(catalog, config.capacity_policy());
    info!("Loaded {} activities", store.len());

    let state = Arc::new(ApiState::new(store));
    let app = router(state, &config.static_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Activity server listening on http://{}", addr);
    info!("  - Activities: http://{}/activities", addr);
    info!("  - Front page: http://{}{}", addr, api::INDEX_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Activity server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler, keep serving rather than stop immediately
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining requests");
}
