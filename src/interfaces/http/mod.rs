//! HTTP API over the prediction engine.
//!
//! Routes are thin: validation happens in `dto`, and every prediction goes
//! through the shared `PredictionEngine` held in `AppState`.

pub mod dto;
pub mod error;
pub mod handlers;

pub use error::ApiError;
pub use handlers::AppState;

use axum::Router;
use axum::routing::{get, post};
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/health", get(handlers::health))
        .route("/api/teams", get(handlers::teams))
        .route("/api/debug_input", get(handlers::debug_input))
        .route("/api/predict", post(handlers::predict))
        .route("/api/predict_v2", post(handlers::predict_v2))
        .route("/api/simulate", post(handlers::simulate))
        .route("/metrics", get(handlers::metrics))
        .with_state(state)
}

/// Serves the API on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("ScoreSight API listening on http://{}", addr);
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl+C
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
