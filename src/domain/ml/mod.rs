// Feature-name registry and the request-time vector builder
pub mod feature_registry;

pub use feature_registry::{FeatureVector, build_vector, resolve_feature};
