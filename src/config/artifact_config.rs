//! Where trained artifacts are looked up.

use crate::infrastructure::artifact_store::ArtifactLocator;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ArtifactEnvConfig {
    /// Explicit artifact directory; skips discovery when set
    pub artifacts_dir: Option<PathBuf>,
    pub project_root: PathBuf,
}

impl Default for ArtifactEnvConfig {
    fn default() -> Self {
        Self {
            artifacts_dir: None,
            project_root: PathBuf::from("."),
        }
    }
}

impl ArtifactEnvConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            artifacts_dir: lookup("SCORESIGHT_ARTIFACTS_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            project_root: lookup("SCORESIGHT_PROJECT_ROOT")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    pub fn locator(&self) -> ArtifactLocator {
        ArtifactLocator::new(self.project_root.clone()).with_override(self.artifacts_dir.clone())
    }
}
