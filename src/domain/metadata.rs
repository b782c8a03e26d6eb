use serde::{Deserialize, Serialize};

/// Outcome labels used when the metadata file does not declare any
pub const DEFAULT_CLASS_LABELS: [&str; 3] = ["H", "D", "A"];

/// Model metadata shipped next to the trained artifacts.
///
/// Every key is optional; missing keys fall back through the accessors, so an
/// absent metadata file behaves like `ModelMetadata::default()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    teams: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    class_labels: Option<Vec<String>>,
}

impl ModelMetadata {
    pub fn new(teams: Vec<String>, features: Vec<String>, class_labels: Vec<String>) -> Self {
        Self {
            teams: Some(teams),
            features: Some(features),
            class_labels: Some(class_labels),
        }
    }

    pub fn with_teams(mut self, teams: Vec<String>) -> Self {
        self.teams = Some(teams);
        self
    }

    pub fn with_features(mut self, features: Vec<String>) -> Self {
        self.features = Some(features);
        self
    }

    pub fn with_class_labels(mut self, class_labels: Vec<String>) -> Self {
        self.class_labels = Some(class_labels);
        self
    }

    pub fn teams(&self) -> &[String] {
        self.teams.as_deref().unwrap_or_default()
    }

    /// Feature names in model column order
    pub fn features(&self) -> &[String] {
        self.features.as_deref().unwrap_or_default()
    }

    pub fn class_labels(&self) -> Vec<String> {
        match &self.class_labels {
            Some(labels) => labels.clone(),
            None => DEFAULT_CLASS_LABELS.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Position of `team` in the team list, 0 when unknown.
    /// A name listed twice resolves to its last position.
    pub fn team_index(&self, team: &str) -> usize {
        self.teams()
            .iter()
            .rposition(|t| t == team)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_metadata_defaults() {
        let meta = ModelMetadata::default();
        assert!(meta.teams().is_empty());
        assert!(meta.features().is_empty());
        assert_eq!(meta.class_labels(), vec!["H", "D", "A"]);
    }

    #[test]
    fn test_partial_metadata_file() {
        let meta: ModelMetadata =
            serde_json::from_str(r#"{"teams": ["Arsenal", "Chelsea"]}"#).unwrap();

        assert_eq!(meta.teams(), ["Arsenal", "Chelsea"]);
        assert!(meta.features().is_empty());
        assert_eq!(meta.class_labels().len(), 3);
    }

    #[test]
    fn test_team_index_unknown_team_is_zero() {
        let meta = ModelMetadata::default()
            .with_teams(vec!["Arsenal".into(), "Chelsea".into(), "Everton".into()]);

        assert_eq!(meta.team_index("Everton"), 2);
        assert_eq!(meta.team_index("Wrexham"), 0);
        assert_eq!(ModelMetadata::default().team_index("Arsenal"), 0);
    }

    #[test]
    fn test_duplicated_team_takes_last_position() {
        let meta =
            ModelMetadata::default().with_teams(vec!["Leeds".into(), "Hull".into(), "Leeds".into()]);

        assert_eq!(meta.team_index("Leeds"), 2);
        assert_eq!(meta.team_index("Hull"), 1);
    }

    #[test]
    fn test_declared_labels_override_default() {
        let meta = ModelMetadata::default()
            .with_class_labels(vec!["A".into(), "D".into(), "H".into()]);
        assert_eq!(meta.class_labels(), vec!["A", "D", "H"]);
    }
}
