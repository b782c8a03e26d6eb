// Artifact directory resolution and JSON reads
pub mod artifact_store;
// CSV fixture lists for season simulation
pub mod fixtures_csv;
// Prometheus metrics and the JSON snapshot reporter
pub mod observability;

pub use artifact_store::{ArtifactLocator, ArtifactStore};
