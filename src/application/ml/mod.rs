// Artifact capability traits
pub mod predictor;

// Concrete artifact models
pub mod linear_predictor;
pub mod scaler;
pub mod smartcore_predictor;

// Loading and shared model state
pub mod artifacts;

// Per-request inference
pub mod engine;
pub mod fallback;

pub use artifacts::{ArtifactStatus, LoadReport, ModelArtifacts};
pub use engine::{Degradation, PredictionBranch, PredictionEngine, PredictionTrace};
