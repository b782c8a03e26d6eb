//! Loading of model metadata and the three optional trained artifacts.
//!
//! Loading never fails as a whole: each artifact is read independently and
//! any problem leaves just that artifact absent, recorded in a [`LoadReport`].
//! The resulting [`ModelArtifacts`] is built once and shared read-only.

use super::linear_predictor::{LinearGoalDiffRegressor, SoftmaxOutcomeClassifier};
use super::predictor::{FeatureScaler, GoalDiffRegressor, OutcomeClassifier};
use super::scaler::StandardFeatureScaler;
use super::smartcore_predictor::{RandomForestGoalDiffRegressor, RandomForestOutcomeClassifier};
use crate::domain::errors::ArtifactError;
use crate::domain::metadata::ModelMetadata;
use crate::infrastructure::artifact_store::{
    ArtifactLocator, ArtifactStore, CLASSIFIER_FILE, REGRESSOR_FILE, SCALER_FILE,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Serialized classifier, tagged by `kind`
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    RandomForest(RandomForestOutcomeClassifier),
    Softmax(SoftmaxOutcomeClassifier),
}

/// Serialized regressor, tagged by `kind`
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegressorArtifact {
    RandomForest(RandomForestGoalDiffRegressor),
    Linear(LinearGoalDiffRegressor),
}

/// Serialized scaler, tagged by `kind`
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerArtifact {
    Standard(StandardFeatureScaler),
}

fn invalid(path: &Path, reason: String) -> ArtifactError {
    ArtifactError::Invalid {
        path: path.to_path_buf(),
        reason,
    }
}

impl ClassifierArtifact {
    fn into_model(self, path: &Path) -> Result<Box<dyn OutcomeClassifier>, ArtifactError> {
        match self {
            ClassifierArtifact::RandomForest(model) => Ok(Box::new(model)),
            ClassifierArtifact::Softmax(model) => {
                model.validate().map_err(|reason| invalid(path, reason))?;
                Ok(Box::new(model))
            }
        }
    }
}

impl RegressorArtifact {
    fn into_model(self, _path: &Path) -> Result<Box<dyn GoalDiffRegressor>, ArtifactError> {
        match self {
            RegressorArtifact::RandomForest(model) => Ok(Box::new(model)),
            RegressorArtifact::Linear(model) => Ok(Box::new(model)),
        }
    }
}

impl ScalerArtifact {
    fn into_model(self, path: &Path) -> Result<Box<dyn FeatureScaler>, ArtifactError> {
        match self {
            ScalerArtifact::Standard(scaler) => {
                scaler.validate().map_err(|reason| invalid(path, reason))?;
                Ok(Box::new(scaler))
            }
        }
    }
}

/// What happened when one artifact was loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactStatus {
    Loaded { model: String },
    Missing,
    Failed { reason: String },
}

impl ArtifactStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ArtifactStatus::Loaded { .. })
    }
}

impl fmt::Display for ArtifactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactStatus::Loaded { model } => write!(f, "loaded ({})", model),
            ArtifactStatus::Missing => write!(f, "not found"),
            ArtifactStatus::Failed { reason } => write!(f, "error: {}", reason),
        }
    }
}

/// Outcome of a full load, kept for health checks and diagnostics
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub base: PathBuf,
    pub metadata: ArtifactStatus,
    pub classifier: ArtifactStatus,
    pub regressor: ArtifactStatus,
    pub scaler: ArtifactStatus,
}

impl LoadReport {
    fn empty(base: PathBuf) -> Self {
        Self {
            base,
            metadata: ArtifactStatus::Missing,
            classifier: ArtifactStatus::Missing,
            regressor: ArtifactStatus::Missing,
            scaler: ArtifactStatus::Missing,
        }
    }
}

/// Immutable model state shared by every prediction request
pub struct ModelArtifacts {
    metadata: ModelMetadata,
    classifier: Option<Box<dyn OutcomeClassifier>>,
    regressor: Option<Box<dyn GoalDiffRegressor>>,
    scaler: Option<Box<dyn FeatureScaler>>,
    report: LoadReport,
}

/// Display name of a loaded model, for status lines
trait ModelName {
    fn model_name(&self) -> String;
}

impl ModelName for dyn OutcomeClassifier {
    fn model_name(&self) -> String {
        self.name().to_string()
    }
}

impl ModelName for dyn GoalDiffRegressor {
    fn model_name(&self) -> String {
        self.name().to_string()
    }
}

impl ModelName for dyn FeatureScaler {
    fn model_name(&self) -> String {
        self.name().to_string()
    }
}

/// Reads one artifact, logging a status line. Errors stay local to the artifact.
fn load_one<A, M: ModelName + ?Sized>(
    store: &ArtifactStore,
    file_name: &str,
    label: &str,
    optional: bool,
    into_model: impl FnOnce(A, &Path) -> Result<Box<M>, ArtifactError>,
) -> (Option<Box<M>>, ArtifactStatus)
where
    A: serde::de::DeserializeOwned,
{
    let path = store.path_of(file_name);
    let loaded = store
        .read_json::<A>(file_name)
        .and_then(|artifact| into_model(artifact, &path));

    match loaded {
        Ok(model) => {
            let name = model.model_name();
            info!("Loaded {} ({}) from {:?}", label, name, path);
            (Some(model), ArtifactStatus::Loaded { model: name })
        }
        Err(ArtifactError::NotFound { .. }) => {
            if optional {
                info!("{} not found at {:?} (optional)", label, path);
            } else {
                warn!("{} not found at {:?}", label, path);
            }
            (None, ArtifactStatus::Missing)
        }
        Err(e) => {
            error!("Error loading {}: {}", label, e);
            (
                None,
                ArtifactStatus::Failed {
                    reason: e.to_string(),
                },
            )
        }
    }
}

impl ModelArtifacts {
    /// Loads metadata and artifacts from `store`. Never fails.
    pub fn load(store: &ArtifactStore) -> Self {
        let mut report = LoadReport::empty(store.base().to_path_buf());

        let metadata = match store.load_metadata() {
            Ok((metadata, path)) => {
                info!("Loaded model metadata from {:?}", path);
                report.metadata = ArtifactStatus::Loaded {
                    model: "model_meta".to_string(),
                };
                metadata
            }
            Err(ArtifactError::NotFound { path }) => {
                warn!("Model metadata not found at {:?}, using defaults", path);
                ModelMetadata::default()
            }
            Err(e) => {
                error!("Error loading model metadata: {}", e);
                report.metadata = ArtifactStatus::Failed {
                    reason: e.to_string(),
                };
                ModelMetadata::default()
            }
        };

        let (classifier, status) = load_one(
            store,
            CLASSIFIER_FILE,
            "Classifier",
            false,
            ClassifierArtifact::into_model,
        );
        report.classifier = status;

        let (regressor, status) = load_one(
            store,
            REGRESSOR_FILE,
            "Regressor",
            false,
            RegressorArtifact::into_model,
        );
        report.regressor = status;

        let (scaler, status) = load_one(
            store,
            SCALER_FILE,
            "Scaler",
            true,
            ScalerArtifact::into_model,
        );
        report.scaler = status;

        Self {
            metadata,
            classifier,
            regressor,
            scaler,
            report,
        }
    }

    /// Resolves the artifact directory through `locator`, then loads
    pub fn discover(locator: &ArtifactLocator) -> Self {
        let store = ArtifactStore::open(locator);
        info!("Artifact directory: {:?}", store.base());
        Self::load(&store)
    }

    /// Loads from exactly `base`, without directory search
    pub fn load_dir(base: impl Into<PathBuf>) -> Self {
        Self::load(&ArtifactStore::at(base))
    }

    /// In-memory artifacts, used when models are built in process
    pub fn in_memory(metadata: ModelMetadata) -> Self {
        Self {
            metadata,
            classifier: None,
            regressor: None,
            scaler: None,
            report: LoadReport::empty(PathBuf::new()),
        }
    }

    pub fn with_classifier(mut self, classifier: Box<dyn OutcomeClassifier>) -> Self {
        self.report.classifier = ArtifactStatus::Loaded {
            model: classifier.name().to_string(),
        };
        self.classifier = Some(classifier);
        self
    }

    pub fn with_regressor(mut self, regressor: Box<dyn GoalDiffRegressor>) -> Self {
        self.report.regressor = ArtifactStatus::Loaded {
            model: regressor.name().to_string(),
        };
        self.regressor = Some(regressor);
        self
    }

    pub fn with_scaler(mut self, scaler: Box<dyn FeatureScaler>) -> Self {
        self.report.scaler = ArtifactStatus::Loaded {
            model: scaler.name().to_string(),
        };
        self.scaler = Some(scaler);
        self
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    pub fn teams(&self) -> &[String] {
        self.metadata.teams()
    }

    pub fn features(&self) -> &[String] {
        self.metadata.features()
    }

    pub fn class_labels(&self) -> Vec<String> {
        self.metadata.class_labels()
    }

    pub fn classifier(&self) -> Option<&dyn OutcomeClassifier> {
        self.classifier.as_deref()
    }

    pub fn regressor(&self) -> Option<&dyn GoalDiffRegressor> {
        self.regressor.as_deref()
    }

    pub fn scaler(&self) -> Option<&dyn FeatureScaler> {
        self.scaler.as_deref()
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// True when neither model is available and predictions use the heuristic
    pub fn uses_fallback(&self) -> bool {
        self.classifier.is_none() && self.regressor.is_none()
    }
}
