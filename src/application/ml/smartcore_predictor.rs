use super::predictor::{GoalDiffRegressor, OutcomeClassifier, check_dimension};
use crate::domain::errors::InferenceError;
use crate::domain::ml::FeatureVector;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;

type ForestClassifier = RandomForestClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>>;
type ForestRegressor = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

fn to_matrix(rows: &[Vec<f64>]) -> Result<DenseMatrix<f64>, InferenceError> {
    DenseMatrix::from_2d_vec(&rows.to_vec()).map_err(|e| InferenceError::Model {
        reason: format!("Matrix creation failed: {}", e),
    })
}

fn row_matrix(row: &FeatureVector) -> Result<DenseMatrix<f64>, InferenceError> {
    to_matrix(&[row.to_f64()])
}

/// SmartCore random forest over outcome labels.
///
/// Class codes are indices into `classes`. The forest only yields hard
/// predictions, so this classifier has no probability capability.
#[derive(Serialize, Deserialize)]
pub struct RandomForestOutcomeClassifier {
    classes: Vec<String>,
    n_features: usize,
    model: ForestClassifier,
}

impl RandomForestOutcomeClassifier {
    /// Fits a forest on `rows`, encoding each target as its index in `classes`
    pub fn fit(
        rows: &[Vec<f64>],
        targets: &[String],
        classes: Vec<String>,
    ) -> Result<Self, InferenceError> {
        let n_features = rows.first().map(Vec::len).unwrap_or(0);
        let codes = targets
            .iter()
            .map(|t| {
                classes
                    .iter()
                    .position(|c| c == t)
                    .map(|i| i as i32)
                    .ok_or_else(|| InferenceError::Model {
                        reason: format!("Unknown class label in training data: {}", t),
                    })
            })
            .collect::<Result<Vec<i32>, _>>()?;

        let x = to_matrix(rows)?;
        let model = ForestClassifier::fit(&x, &codes, RandomForestClassifierParameters::default())
            .map_err(|e| InferenceError::Model {
                reason: format!("Training failed: {}", e),
            })?;

        Ok(Self {
            classes,
            n_features,
            model,
        })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl OutcomeClassifier for RandomForestOutcomeClassifier {
    fn predict(&self, row: &FeatureVector) -> Result<String, InferenceError> {
        check_dimension(row, self.n_features)?;
        let input = row_matrix(row)?;

        let predictions = self.model.predict(&input).map_err(|e| InferenceError::Model {
            reason: format!("Prediction failed: {}", e),
        })?;
        let code = predictions.first().ok_or_else(|| InferenceError::Model {
            reason: "No prediction returned".to_string(),
        })?;

        usize::try_from(*code)
            .ok()
            .and_then(|i| self.classes.get(i))
            .cloned()
            .ok_or_else(|| InferenceError::Model {
                reason: format!("Class code {} has no label", code),
            })
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest Classifier"
    }
}

/// SmartCore random forest over goal differentials
#[derive(Serialize, Deserialize)]
pub struct RandomForestGoalDiffRegressor {
    n_features: usize,
    model: ForestRegressor,
}

impl RandomForestGoalDiffRegressor {
    pub fn fit(rows: &[Vec<f64>], targets: &[f64], n_trees: usize) -> Result<Self, InferenceError> {
        let n_features = rows.first().map(Vec::len).unwrap_or(0);
        let x = to_matrix(rows)?;
        let params = RandomForestRegressorParameters::default()
            .with_n_trees(n_trees)
            .with_max_depth(8)
            .with_min_samples_split(2);
        let model = ForestRegressor::fit(&x, &targets.to_vec(), params).map_err(|e| {
            InferenceError::Model {
                reason: format!("Training failed: {}", e),
            }
        })?;

        Ok(Self { n_features, model })
    }
}

impl GoalDiffRegressor for RandomForestGoalDiffRegressor {
    fn predict(&self, row: &FeatureVector) -> Result<f64, InferenceError> {
        check_dimension(row, self.n_features)?;
        let input = row_matrix(row)?;

        match self.model.predict(&input) {
            Ok(predictions) => predictions.first().copied().ok_or_else(|| InferenceError::Model {
                reason: "No prediction returned".to_string(),
            }),
            Err(e) => Err(InferenceError::Model {
                reason: format!("Prediction failed: {}", e),
            }),
        }
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest Regressor"
    }
}
