//! Push-based metrics reporter
//!
//! Periodically outputs a metrics snapshot as structured JSON to stdout.

use crate::application::ml::ModelArtifacts;
use crate::infrastructure::observability::metrics::Metrics;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Metrics snapshot for JSON output
#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub timestamp: String,
    pub uptime_seconds: u64,
    pub version: String,
    pub artifacts: ArtifactSnapshot,
    pub predictions: PredictionSnapshot,
}

#[derive(Serialize)]
pub struct ArtifactSnapshot {
    pub base: String,
    pub classifier: String,
    pub regressor: String,
    pub scaler: String,
    pub teams: usize,
    pub features: usize,
}

#[derive(Serialize)]
pub struct PredictionSnapshot {
    pub model: u64,
    pub partial: u64,
    pub fallback: u64,
}

/// Outputs metrics as structured JSON logs on a configurable interval.
pub struct MetricsReporter {
    artifacts: Arc<ModelArtifacts>,
    metrics: Metrics,
    start_time: Instant,
    interval: Duration,
}

impl MetricsReporter {
    pub fn new(artifacts: Arc<ModelArtifacts>, metrics: Metrics, interval_seconds: u64) -> Self {
        Self {
            artifacts,
            metrics,
            start_time: Instant::now(),
            interval: Duration::from_secs(interval_seconds.max(1)),
        }
    }

    /// Run the reporter in a loop, outputting metrics periodically
    pub async fn run(self) {
        info!(
            "MetricsReporter: Starting push-based metrics (interval: {:?})",
            self.interval
        );

        loop {
            tokio::time::sleep(self.interval).await;

            let snapshot = self.collect_snapshot();
            match serde_json::to_string(&snapshot) {
                Ok(json) => {
                    // Prefixed so log shippers can filter it out
                    println!("METRICS_JSON:{}", json);
                    info!(
                        "Predictions: model={} partial={} fallback={} | Uptime: {}s",
                        snapshot.predictions.model,
                        snapshot.predictions.partial,
                        snapshot.predictions.fallback,
                        snapshot.uptime_seconds
                    );
                }
                Err(e) => warn!("Failed to serialize metrics: {}", e),
            }
        }
    }

    fn collect_snapshot(&self) -> MetricsSnapshot {
        let uptime = self.start_time.elapsed().as_secs();
        self.metrics.uptime_seconds.set(uptime as f64);

        let report = self.artifacts.report();
        MetricsSnapshot {
            timestamp: chrono::Utc::now().to_rfc3339(),
            uptime_seconds: uptime,
            version: env!("CARGO_PKG_VERSION").to_string(),
            artifacts: ArtifactSnapshot {
                base: report.base.display().to_string(),
                classifier: report.classifier.to_string(),
                regressor: report.regressor.to_string(),
                scaler: report.scaler.to_string(),
                teams: self.artifacts.teams().len(),
                features: self.artifacts.features().len(),
            },
            predictions: PredictionSnapshot {
                model: self.metrics.predictions_for("model"),
                partial: self.metrics.predictions_for("partial"),
                fallback: self.metrics.predictions_for("fallback"),
            },
        }
    }
}
