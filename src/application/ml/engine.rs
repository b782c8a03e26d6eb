use super::artifacts::ModelArtifacts;
use super::fallback::heuristic_prediction;
use super::predictor::{GoalDiffRegressor, OutcomeClassifier};
use crate::domain::match_stats::MatchPayload;
use crate::domain::ml::{FeatureVector, build_vector};
use crate::domain::prediction::{PredictionResult, SuggestedScore, label_probabilities};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Which path produced a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionBranch {
    /// Classifier and regressor both ran
    Model,
    /// Only one of classifier / regressor is loaded
    Partial,
    /// Neither is loaded; closed-form heuristic
    Fallback,
}

impl PredictionBranch {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionBranch::Model => "model",
            PredictionBranch::Partial => "partial",
            PredictionBranch::Fallback => "fallback",
        }
    }
}

impl fmt::Display for PredictionBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure absorbed while serving a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degradation {
    /// Scaler rejected the row; the unscaled row was used
    ScalerFailed,
    /// No probability output; probabilities came from the hard prediction
    HardPrediction,
    /// Classifier failed outright; no outcome reported
    ClassifierFailed,
    /// Regressor failed; goal difference reported as 0.0
    RegressorFailed,
}

impl Degradation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Degradation::ScalerFailed => "scaler_failed",
            Degradation::HardPrediction => "hard_prediction",
            Degradation::ClassifierFailed => "classifier_failed",
            Degradation::RegressorFailed => "regressor_failed",
        }
    }
}

/// Prediction plus how it was obtained
#[derive(Debug, Clone)]
pub struct PredictionTrace {
    pub result: PredictionResult,
    pub branch: PredictionBranch,
    pub degradations: Vec<Degradation>,
}

/// Serves predictions from a shared, immutable set of artifacts.
///
/// Cloning is cheap; every clone reads the same artifacts. No call ever
/// fails: artifact problems degrade the result instead.
#[derive(Clone)]
pub struct PredictionEngine {
    artifacts: Arc<ModelArtifacts>,
}

impl PredictionEngine {
    pub fn new(artifacts: Arc<ModelArtifacts>) -> Self {
        Self { artifacts }
    }

    pub fn artifacts(&self) -> &ModelArtifacts {
        &self.artifacts
    }

    pub fn teams(&self) -> &[String] {
        self.artifacts.teams()
    }

    pub fn features(&self) -> &[String] {
        self.artifacts.features()
    }

    pub fn class_labels(&self) -> Vec<String> {
        self.artifacts.class_labels()
    }

    /// Model input for `payload`, scaled when a scaler is loaded
    pub fn feature_vector(&self, payload: &MatchPayload) -> (FeatureVector, Option<Degradation>) {
        let row = build_vector(payload, self.artifacts.features());
        match self.artifacts.scaler() {
            Some(scaler) => match scaler.transform(&row) {
                Ok(scaled) => (scaled, None),
                Err(e) => {
                    debug!("Scaler failed, using unscaled features: {}", e);
                    (row, Some(Degradation::ScalerFailed))
                }
            },
            None => (row, None),
        }
    }

    pub fn predict(&self, payload: &MatchPayload) -> PredictionResult {
        self.predict_traced(payload).result
    }

    pub fn predict_traced(&self, payload: &MatchPayload) -> PredictionTrace {
        let artifacts = &self.artifacts;
        let classifier = artifacts.classifier();
        let regressor = artifacts.regressor();

        if classifier.is_none() && regressor.is_none() {
            debug!(
                "No trained models loaded, heuristic prediction for {} vs {}",
                payload.home_team, payload.away_team
            );
            return PredictionTrace {
                result: heuristic_prediction(artifacts.metadata(), payload),
                branch: PredictionBranch::Fallback,
                degradations: Vec::new(),
            };
        }

        let mut degradations = Vec::new();
        let (row, scaler_issue) = self.feature_vector(payload);
        degradations.extend(scaler_issue);

        let mut result = PredictionResult::default();

        if let Some(clf) = classifier {
            let labels = artifacts.class_labels();
            match classify(clf, &row, &labels, &mut degradations) {
                Some(probs) => {
                    let (outcome, probabilities) = label_probabilities(&labels, &probs);
                    result.outcome = outcome;
                    result.probabilities = probabilities;
                }
                None => degradations.push(Degradation::ClassifierFailed),
            }
        }

        if let Some(reg) = regressor {
            let goal_diff = regress(reg, &row, &mut degradations);
            result.goal_diff = Some(goal_diff);
            result.suggested_score = SuggestedScore::from_goal_diff(goal_diff);
        }

        let branch = if classifier.is_some() && regressor.is_some() {
            PredictionBranch::Model
        } else {
            PredictionBranch::Partial
        };
        debug!(
            "{} vs {}: {} branch, {} degradation(s)",
            payload.home_team,
            payload.away_team,
            branch,
            degradations.len()
        );

        PredictionTrace {
            result,
            branch,
            degradations,
        }
    }
}

/// Class probabilities in label order, from `predict_proba` when available,
/// otherwise 1.0 for the hard prediction and 0.0 elsewhere.
fn classify(
    clf: &dyn OutcomeClassifier,
    row: &FeatureVector,
    labels: &[String],
    degradations: &mut Vec<Degradation>,
) -> Option<Vec<f64>> {
    if clf.supports_probability() {
        match clf.predict_proba(row) {
            Ok(probs) => return Some(probs),
            Err(e) => debug!("{} predict_proba failed: {}", clf.name(), e),
        }
    }

    match clf.predict(row) {
        Ok(predicted) => {
            degradations.push(Degradation::HardPrediction);
            Some(
                labels
                    .iter()
                    .map(|label| if *label == predicted { 1.0 } else { 0.0 })
                    .collect(),
            )
        }
        Err(e) => {
            debug!("{} predict failed: {}", clf.name(), e);
            None
        }
    }
}

fn regress(
    reg: &dyn GoalDiffRegressor,
    row: &FeatureVector,
    degradations: &mut Vec<Degradation>,
) -> f64 {
    reg.predict(row).unwrap_or_else(|e| {
        debug!("{} predict failed, goal difference 0.0: {}", reg.name(), e);
        degradations.push(Degradation::RegressorFailed);
        0.0
    })
}
