//! Filesystem access for model metadata and trained artifacts.

use crate::domain::errors::ArtifactError;
use crate::domain::metadata::ModelMetadata;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub const METADATA_FILE: &str = "model_meta.json";
pub const CLASSIFIER_FILE: &str = "match_outcome_classifier.json";
pub const REGRESSOR_FILE: &str = "goal_diff_regressor.json";
pub const SCALER_FILE: &str = "feature_scaler.json";

const ARTIFACTS_DIR: &str = "artifacts";
const FALLBACK_PARENT_DIR: &str = "backend";

/// Decides which directory the artifacts are read from.
///
/// Search order: explicit override, `<root>/artifacts`, then
/// `<root>/backend/artifacts`. The last candidate is returned even when it
/// does not exist; reads from it then simply find nothing.
#[derive(Debug, Clone)]
pub struct ArtifactLocator {
    override_dir: Option<PathBuf>,
    project_root: PathBuf,
}

impl ArtifactLocator {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            override_dir: None,
            project_root: project_root.into(),
        }
    }

    pub fn with_override(mut self, dir: Option<PathBuf>) -> Self {
        self.override_dir = dir;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn primary_dir(&self) -> PathBuf {
        self.project_root.join(ARTIFACTS_DIR)
    }

    fn fallback_dir(&self) -> PathBuf {
        self.project_root.join(FALLBACK_PARENT_DIR).join(ARTIFACTS_DIR)
    }

    pub fn resolve(&self) -> PathBuf {
        if let Some(dir) = &self.override_dir {
            return dir.clone();
        }
        let primary = self.primary_dir();
        if primary.exists() {
            primary
        } else {
            self.fallback_dir()
        }
    }

    /// Metadata location used when the resolved directory has none
    pub fn legacy_metadata_path(&self) -> PathBuf {
        self.primary_dir().join(METADATA_FILE)
    }
}

/// Read-only view over a resolved artifact directory
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    base: PathBuf,
    legacy_metadata: Option<PathBuf>,
}

impl ArtifactStore {
    pub fn open(locator: &ArtifactLocator) -> Self {
        Self {
            base: locator.resolve(),
            legacy_metadata: Some(locator.legacy_metadata_path()),
        }
    }

    /// Store rooted at `base` with no legacy metadata lookup
    pub fn at(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            legacy_metadata: None,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.base.join(file_name)
    }

    fn read_path<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
        if !path.exists() {
            return Err(ArtifactError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let file = File::open(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            ArtifactError::Deserialize {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// Deserializes `<base>/<file_name>`
    pub fn read_json<T: DeserializeOwned>(&self, file_name: &str) -> Result<T, ArtifactError> {
        Self::read_path(&self.path_of(file_name))
    }

    /// Reads `model_meta.json`, trying the legacy location when the base
    /// directory has none.
    pub fn load_metadata(&self) -> Result<(ModelMetadata, PathBuf), ArtifactError> {
        let primary = self.path_of(METADATA_FILE);
        let path = match &self.legacy_metadata {
            Some(legacy) if !primary.exists() && legacy.exists() => legacy.clone(),
            _ => primary,
        };
        let metadata = Self::read_path(&path)?;
        Ok((metadata, path))
    }
}
