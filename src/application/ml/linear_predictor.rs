//! Linear models exported as plain coefficient tables.
//!
//! These cover artifacts produced by logistic / linear regression training
//! runs, where only the fitted weights need to travel.

use super::predictor::{GoalDiffRegressor, OutcomeClassifier, check_dimension};
use crate::domain::errors::InferenceError;
use crate::domain::ml::FeatureVector;
use crate::domain::prediction::{argmax, stable_softmax};
use serde::{Deserialize, Serialize};

fn dot(weights: &[f64], row: &FeatureVector) -> f64 {
    weights
        .iter()
        .zip(row.as_slice())
        .map(|(w, x)| w * f64::from(*x))
        .sum()
}

/// Multinomial logistic model: one weight row and intercept per class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftmaxOutcomeClassifier {
    pub classes: Vec<String>,
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

impl SoftmaxOutcomeClassifier {
    /// Checks that every class has a weight row of equal width and an intercept
    pub fn validate(&self) -> Result<(), String> {
        if self.classes.is_empty() {
            return Err("no classes".to_string());
        }
        if self.coefficients.len() != self.classes.len() {
            return Err(format!(
                "{} classes but {} coefficient rows",
                self.classes.len(),
                self.coefficients.len()
            ));
        }
        if self.intercepts.len() != self.classes.len() {
            return Err(format!(
                "{} classes but {} intercepts",
                self.classes.len(),
                self.intercepts.len()
            ));
        }
        let width = self.n_features();
        if self.coefficients.iter().any(|row| row.len() != width) {
            return Err("coefficient rows differ in width".to_string());
        }
        Ok(())
    }

    pub fn n_features(&self) -> usize {
        self.coefficients.first().map(Vec::len).unwrap_or(0)
    }

    fn logits(&self, row: &FeatureVector) -> Result<Vec<f64>, InferenceError> {
        check_dimension(row, self.n_features())?;
        Ok(self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(weights, b)| dot(weights, row) + b)
            .collect())
    }
}

impl OutcomeClassifier for SoftmaxOutcomeClassifier {
    fn predict(&self, row: &FeatureVector) -> Result<String, InferenceError> {
        let logits = self.logits(row)?;
        let best = argmax(&logits).ok_or_else(|| InferenceError::Model {
            reason: "Model has no classes".to_string(),
        })?;
        self.classes
            .get(best)
            .cloned()
            .ok_or_else(|| InferenceError::Model {
                reason: format!(
                    "No class label for output {} ({} labels)",
                    best,
                    self.classes.len()
                ),
            })
    }

    fn predict_proba(&self, row: &FeatureVector) -> Result<Vec<f64>, InferenceError> {
        Ok(stable_softmax(&self.logits(row)?))
    }

    fn supports_probability(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "Softmax Classifier"
    }
}

/// Ordinary linear regression on the feature row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGoalDiffRegressor {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl GoalDiffRegressor for LinearGoalDiffRegressor {
    fn predict(&self, row: &FeatureVector) -> Result<f64, InferenceError> {
        check_dimension(row, self.coefficients.len())?;
        Ok(dot(&self.coefficients, row) + self.intercept)
    }

    fn name(&self) -> &str {
        "Linear Regressor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> SoftmaxOutcomeClassifier {
        SoftmaxOutcomeClassifier {
            classes: vec!["H".into(), "D".into(), "A".into()],
            coefficients: vec![vec![1.0, -1.0], vec![0.0, 0.0], vec![-1.0, 1.0]],
            intercepts: vec![0.0, 0.5, 0.0],
        }
    }

    #[test]
    fn test_softmax_probabilities_follow_logits() {
        let clf = classifier();
        assert!(clf.validate().is_ok());

        let row = FeatureVector::new(vec![2.0, 0.0]);
        let probs = clf.predict_proba(&row).unwrap();
        assert_eq!(probs.len(), 3);
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(probs[0] > probs[1] && probs[1] > probs[2]);
        assert_eq!(clf.predict(&row).unwrap(), "H");
    }

    #[test]
    fn test_intercept_decides_level_match() {
        let row = FeatureVector::new(vec![1.0, 1.0]);
        assert_eq!(classifier().predict(&row).unwrap(), "D");
    }

    #[test]
    fn test_validate_rejects_ragged_weights() {
        let mut clf = classifier();
        clf.coefficients[1] = vec![0.0];
        assert!(clf.validate().is_err());

        let mut clf = classifier();
        clf.intercepts.pop();
        assert!(clf.validate().is_err());
    }

    #[test]
    fn test_missing_class_label_is_a_model_error() {
        let mut clf = classifier();
        clf.classes.truncate(1);

        // Logits favour "D", which has no label left
        let err = clf.predict(&FeatureVector::new(vec![1.0, 1.0])).unwrap_err();
        assert!(matches!(err, InferenceError::Model { .. }));
    }

    #[test]
    fn test_linear_regressor() {
        let reg = LinearGoalDiffRegressor {
            coefficients: vec![0.5, -0.5],
            intercept: 0.25,
        };
        let diff = reg.predict(&FeatureVector::new(vec![3.0, 1.0])).unwrap();
        assert!((diff - 1.25).abs() < 1e-9);
        assert!(reg.predict(&FeatureVector::new(vec![3.0])).is_err());
    }
}
