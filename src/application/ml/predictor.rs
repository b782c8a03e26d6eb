use crate::domain::errors::InferenceError;
use crate::domain::ml::FeatureVector;

/// Interface for trained match-outcome classifiers
pub trait OutcomeClassifier: Send + Sync {
    /// Hard prediction: the single most likely outcome label
    fn predict(&self, row: &FeatureVector) -> Result<String, InferenceError>;

    /// Per-class probabilities, in the model's class order.
    /// Models without probability output keep the default.
    fn predict_proba(&self, _row: &FeatureVector) -> Result<Vec<f64>, InferenceError> {
        Err(InferenceError::Unsupported {
            model: self.name().to_string(),
            capability: "predict_proba",
        })
    }

    /// Whether `predict_proba` is implemented
    fn supports_probability(&self) -> bool {
        false
    }

    fn name(&self) -> &str;
}

/// Interface for trained goal-differential regressors
pub trait GoalDiffRegressor: Send + Sync {
    /// Predicted home goals minus away goals
    fn predict(&self, row: &FeatureVector) -> Result<f64, InferenceError>;

    fn name(&self) -> &str;
}

/// Interface for fitted feature scalers
pub trait FeatureScaler: Send + Sync {
    fn transform(&self, row: &FeatureVector) -> Result<FeatureVector, InferenceError>;

    fn name(&self) -> &str;
}

/// Fails with `DimensionMismatch` unless `row` has `expected` columns
pub(crate) fn check_dimension(row: &FeatureVector, expected: usize) -> Result<(), InferenceError> {
    if row.len() == expected {
        Ok(())
    } else {
        Err(InferenceError::DimensionMismatch {
            expected,
            actual: row.len(),
        })
    }
}
