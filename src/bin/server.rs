//! ScoreSight Server - match prediction HTTP API
//!
//! Loads trained artifacts once at startup and serves predictions until
//! Ctrl+C. Missing artifacts are not fatal: predictions fall back to the
//! deterministic heuristic.
//!
//! # Usage
//! ```sh
//! SCORESIGHT_ARTIFACTS_DIR=./artifacts cargo run --bin server
//! ```
//!
//! # Environment Variables
//! - `SCORESIGHT_ARTIFACTS_DIR` - Artifact directory override
//! - `SCORESIGHT_PROJECT_ROOT` - Root searched for `artifacts/` (default: .)
//! - `SCORESIGHT_BIND_ADDRESS` / `SCORESIGHT_PORT` - Listener (default: 127.0.0.1:8000)
//! - `OBSERVABILITY_ENABLED` - Enable metrics reporting (default: true)
//! - `OBSERVABILITY_INTERVAL` - Interval in seconds between metric outputs (default: 60)

use anyhow::{Context, Result};
use scoresight::application::ml::{ModelArtifacts, PredictionEngine};
use scoresight::config::Config;
use scoresight::infrastructure::observability::{Metrics, MetricsReporter};
use scoresight::interfaces::http::{self, AppState};
use std::sync::Arc;
use tracing::{Level, info, warn};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("ScoreSight Server {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: Artifacts={:?}, Root={:?}, Listen={}",
        config.artifacts.artifacts_dir,
        config.artifacts.project_root,
        config.server.socket_address()
    );

    let artifacts = Arc::new(ModelArtifacts::discover(&config.artifacts.locator()));
    if artifacts.uses_fallback() {
        warn!("No trained models loaded; serving heuristic predictions");
    }

    let metrics = Metrics::new().context("Failed to create metrics registry")?;
    metrics.record_load(artifacts.report());

    if config.observability.enabled {
        let reporter = MetricsReporter::new(
            artifacts.clone(),
            metrics.clone(),
            config.observability.interval_seconds,
        );

        tokio::spawn(async move {
            reporter.run().await;
        });

        info!(
            "Metrics reporter started (interval: {}s)",
            config.observability.interval_seconds
        );
    } else {
        info!("Metrics reporting disabled.");
    }

    let state = AppState::new(PredictionEngine::new(artifacts), metrics);
    let address = config.server.socket_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    http::serve(listener, state, http::shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped.");
    Ok(())
}
