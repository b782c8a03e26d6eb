//! Prometheus metrics definitions for ScoreSight
//!
//! All metrics use the `scoresight_` prefix.

use crate::application::ml::{LoadReport, PredictionTrace};
use prometheus::{
    CounterVec, Gauge, GaugeVec, Histogram, HistogramOpts, Opts, Registry, TextEncoder,
    core::{AtomicF64, GenericGauge, GenericGaugeVec},
};
use std::sync::Arc;

/// Prometheus metrics for the prediction service
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    /// Predictions served, by branch (model / partial / fallback)
    pub predictions_total: CounterVec,
    /// Failures absorbed while predicting, by kind
    pub degradations_total: CounterVec,
    /// Artifact availability (0=absent, 1=loaded)
    pub artifact_loaded: GenericGaugeVec<AtomicF64>,
    /// Wall time of one prediction in seconds
    pub prediction_latency_seconds: Histogram,
    /// Fixtures processed by season simulations
    pub simulated_fixtures_total: CounterVec,
    /// Uptime in seconds
    pub uptime_seconds: GenericGauge<AtomicF64>,
}

impl Metrics {
    /// Create a new Metrics instance with all gauges and counters registered
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let predictions_total = CounterVec::new(
            Opts::new("scoresight_predictions_total", "Predictions served by branch"),
            &["branch"],
        )?;
        registry.register(Box::new(predictions_total.clone()))?;

        let degradations_total = CounterVec::new(
            Opts::new(
                "scoresight_degradations_total",
                "Inference failures absorbed into degraded results",
            ),
            &["kind"],
        )?;
        registry.register(Box::new(degradations_total.clone()))?;

        let artifact_loaded = GaugeVec::new(
            Opts::new(
                "scoresight_artifact_loaded",
                "Trained artifact availability (0=absent, 1=loaded)",
            ),
            &["artifact"],
        )?;
        registry.register(Box::new(artifact_loaded.clone()))?;

        let prediction_latency_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "scoresight_prediction_latency_seconds",
                "Prediction latency in seconds",
            )
            .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5]),
        )?;
        registry.register(Box::new(prediction_latency_seconds.clone()))?;

        let simulated_fixtures_total = CounterVec::new(
            Opts::new(
                "scoresight_simulated_fixtures_total",
                "Fixtures predicted by season simulations",
            ),
            &["source"],
        )?;
        registry.register(Box::new(simulated_fixtures_total.clone()))?;

        let uptime_seconds = Gauge::with_opts(Opts::new(
            "scoresight_uptime_seconds",
            "Server uptime in seconds",
        ))?;
        registry.register(Box::new(uptime_seconds.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            predictions_total,
            degradations_total,
            artifact_loaded,
            prediction_latency_seconds,
            simulated_fixtures_total,
            uptime_seconds,
        })
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder
            .encode_to_string(&metric_families)
            .unwrap_or_default()
    }

    /// Publish which artifacts the loader found
    pub fn record_load(&self, report: &LoadReport) {
        for (name, status) in [
            ("classifier", &report.classifier),
            ("regressor", &report.regressor),
            ("scaler", &report.scaler),
        ] {
            let value = if status.is_loaded() { 1.0 } else { 0.0 };
            self.artifact_loaded.with_label_values(&[name]).set(value);
        }
    }

    /// Count one served prediction and anything it degraded on
    pub fn record_prediction(&self, trace: &PredictionTrace, latency: f64) {
        self.predictions_total
            .with_label_values(&[trace.branch.as_str()])
            .inc();
        for degradation in &trace.degradations {
            self.degradations_total
                .with_label_values(&[degradation.as_str()])
                .inc();
        }
        self.prediction_latency_seconds.observe(latency);
    }

    pub fn inc_simulated(&self, source: &str, fixtures: usize) {
        self.simulated_fixtures_total
            .with_label_values(&[source])
            .inc_by(fixtures as f64);
    }

    /// Total predictions for one branch
    pub fn predictions_for(&self, branch: &str) -> u64 {
        self.predictions_total.with_label_values(&[branch]).get() as u64
    }
}
