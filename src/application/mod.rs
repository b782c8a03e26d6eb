// Model loading and inference
pub mod ml;

// Bulk season simulation
pub mod simulation;
