// Domain-specific error types
pub mod errors;

// Request payload and raw match statistics
pub mod match_stats;

// Metadata shipped with the trained artifacts
pub mod metadata;

// Feature synthesis
pub mod ml;

// Prediction output and scoring helpers
pub mod prediction;

// League table built from simulated fixtures
pub mod standings;
