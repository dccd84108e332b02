/// Civic issue dashboard backend: acquisition, fallback and aggregation
mod clients;
mod config;
mod domain;
mod errors;
mod handlers;
mod presentation;
mod routes;
mod services;
mod sources;
mod store;
mod utils;

use crate::clients::BackendClient;
use crate::config::AppConfig;
use crate::handlers::AppState;
use crate::routes::build_router;
use crate::services::Controller;
use crate::sources::DataSource;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let config = AppConfig::from_env()?;
    info!(
        backend = %config.backend_url,
        timeout_secs = config.request_timeout.as_secs(),
        mode = ?config.initial_mode,
        "Configuration loaded successfully"
    );

    let backend = Arc::new(BackendClient::new(
        config.backend_url.clone(),
        config.request_timeout,
    )?);

    match backend.health().await {
        Ok(health) => info!(
            status = %health.status,
            service = health.service.as_deref().unwrap_or("unknown"),
            "Classification backend reachable"
        ),
        Err(e) => warn!(
            backend = backend.base_url(),
            error = %e,
            "Classification backend not reachable at startup"
        ),
    }

    let source = DataSource::new(backend, config.request_timeout)
        .with_recomputed_stats(config.recompute_live_stats);
    let controller = Arc::new(Controller::new(source, config.initial_mode));

    // Initial load
    let snapshot = controller.refresh().await;
    info!(
        mode = ?snapshot.mode,
        issues = snapshot.issues.len(),
        "Initial load complete"
    );

    let app = build_router(AppState { controller });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("civic_pulse listening on {}", config.bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
