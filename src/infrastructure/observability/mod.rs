//! Observability for ScoreSight
//!
//! Prometheus counters are scraped from `GET /metrics`; the reporter also
//! pushes a periodic JSON snapshot to stdout for log-based collectors.

pub mod metrics;
pub mod reporter;

pub use metrics::Metrics;
pub use reporter::MetricsReporter;
