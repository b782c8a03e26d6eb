use scoresight::application::ml::artifacts::{ClassifierArtifact, RegressorArtifact};
use scoresight::application::ml::smartcore_predictor::{
    RandomForestGoalDiffRegressor, RandomForestOutcomeClassifier,
};
use scoresight::application::ml::{
    ArtifactStatus, Degradation, ModelArtifacts, PredictionBranch, PredictionEngine,
};
use scoresight::domain::match_stats::{MatchPayload, MatchStat};
use scoresight::infrastructure::artifact_store::{
    ArtifactLocator, CLASSIFIER_FILE, METADATA_FILE, REGRESSOR_FILE, SCALER_FILE,
};
use std::fs;
use std::path::Path;
use std::sync::Arc;

fn write_json(dir: &Path, file: &str, body: &str) {
    fs::write(dir.join(file), body).expect("write artifact");
}

/// Shot counts decide the result: clear home dominance is "H", the mirror is
/// "A", level shots are "D".
fn shot_training_set() -> (Vec<Vec<f64>>, Vec<String>, Vec<f64>) {
    let mut rows = Vec::new();
    let mut labels = Vec::new();
    let mut diffs = Vec::new();
    for dominant in 12..20 {
        for weak in 0..5 {
            rows.push(vec![dominant as f64, weak as f64]);
            labels.push("H".to_string());
            diffs.push((dominant - weak) as f64 / 5.0);

            rows.push(vec![weak as f64, dominant as f64]);
            labels.push("A".to_string());
            diffs.push((weak - dominant) as f64 / 5.0);
        }
    }
    for level in 6..11 {
        rows.push(vec![level as f64, level as f64]);
        labels.push("D".to_string());
        diffs.push(0.0);
    }
    (rows, labels, diffs)
}

#[test]
fn test_linear_artifacts_give_exact_probabilities() {
    let dir = tempfile::tempdir().unwrap();
    write_json(
        dir.path(),
        METADATA_FILE,
        r#"{"teams": ["Arsenal", "Chelsea"], "features": ["H_goals_last3_mean", "A_goals_last3_mean"]}"#,
    );
    write_json(
        dir.path(),
        SCALER_FILE,
        r#"{"kind": "standard", "mean": [1.0, 1.0], "scale": [1.0, 0.0]}"#,
    );
    write_json(
        dir.path(),
        CLASSIFIER_FILE,
        r#"{
            "kind": "softmax",
            "classes": ["H", "D", "A"],
            "coefficients": [[1.0, 0.0], [0.0, 0.0], [-1.0, 0.0]],
            "intercepts": [0.0, 0.0, 0.0]
        }"#,
    );
    write_json(
        dir.path(),
        REGRESSOR_FILE,
        r#"{"kind": "linear", "coefficients": [0.5, 0.0], "intercept": 0.25}"#,
    );

    let engine = PredictionEngine::new(Arc::new(ModelArtifacts::load_dir(dir.path())));
    let payload = MatchPayload::new("Arsenal", "Chelsea")
        .with_stat(MatchStat::HalfTimeHomeGoals, 3)
        .with_stat(MatchStat::HalfTimeAwayGoals, 1);

    let trace = engine.predict_traced(&payload);
    assert_eq!(trace.branch, PredictionBranch::Model);
    assert!(trace.degradations.is_empty());

    // scaled row is [2.0, 0.0], logits [2, 0, -2]
    let result = trace.result;
    assert_eq!(result.outcome.as_deref(), Some("H"));
    assert_eq!(result.probability_of("H"), Some(0.8668));
    assert_eq!(result.probability_of("D"), Some(0.1173));
    assert_eq!(result.probability_of("A"), Some(0.0159));

    // 2.0 * 0.5 + 0.25 = 1.25, rounds to 1
    assert!((result.goal_diff.unwrap() - 1.25).abs() < 1e-9);
    assert_eq!(
        (result.suggested_score.home, result.suggested_score.away),
        (2, 1)
    );
}

#[test]
fn test_random_forest_artifacts_round_trip_through_disk() {
    let (rows, labels, diffs) = shot_training_set();
    let classes = vec!["H".to_string(), "D".to_string(), "A".to_string()];
    let classifier = RandomForestOutcomeClassifier::fit(&rows, &labels, classes).unwrap();
    let regressor = RandomForestGoalDiffRegressor::fit(&rows, &diffs, 25).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let artifacts_dir = dir.path().join("artifacts");
    fs::create_dir_all(&artifacts_dir).unwrap();
    write_json(
        &artifacts_dir,
        METADATA_FILE,
        r#"{"features": ["H_shots_last5_mean", "A_shots_last5_mean"]}"#,
    );
    write_json(
        &artifacts_dir,
        CLASSIFIER_FILE,
        &serde_json::to_string(&ClassifierArtifact::RandomForest(classifier)).unwrap(),
    );
    write_json(
        &artifacts_dir,
        REGRESSOR_FILE,
        &serde_json::to_string(&RegressorArtifact::RandomForest(regressor)).unwrap(),
    );

    // Discovered through the project root, not an explicit override
    let artifacts = ModelArtifacts::discover(&ArtifactLocator::new(dir.path()));
    assert!(artifacts.report().classifier.is_loaded());
    assert!(artifacts.report().regressor.is_loaded());
    assert_eq!(artifacts.report().scaler, ArtifactStatus::Missing);

    let engine = PredictionEngine::new(Arc::new(artifacts));
    let payload = MatchPayload::new("Leeds", "Wolves")
        .with_stat(MatchStat::HomeShots, 18)
        .with_stat(MatchStat::AwayShots, 2);

    let trace = engine.predict_traced(&payload);
    assert_eq!(trace.branch, PredictionBranch::Model);
    // Forests only vote, so the winning label carries all the mass
    assert!(trace.degradations.contains(&Degradation::HardPrediction));

    let result = trace.result;
    assert_eq!(result.outcome.as_deref(), Some("H"));
    assert_eq!(result.probability_of("H"), Some(1.0));
    assert_eq!(result.probability_sum(), 1.0);
    assert!(result.goal_diff.unwrap() > 1.5);
    assert!(result.suggested_score.home > result.suggested_score.away);
}

#[test]
fn test_wrong_width_model_degrades_instead_of_failing() {
    let dir = tempfile::tempdir().unwrap();
    // Three features in metadata, but the regressor was trained on one
    write_json(
        dir.path(),
        METADATA_FILE,
        r#"{"features": ["H_goals_last3", "A_goals_last3", "H_red_last5"]}"#,
    );
    write_json(
        dir.path(),
        REGRESSOR_FILE,
        r#"{"kind": "linear", "coefficients": [1.0], "intercept": 0.0}"#,
    );

    let engine = PredictionEngine::new(Arc::new(ModelArtifacts::load_dir(dir.path())));
    let trace = engine.predict_traced(&MatchPayload::new("Burnley", "Fulham"));

    assert_eq!(trace.branch, PredictionBranch::Partial);
    assert_eq!(trace.degradations, vec![Degradation::RegressorFailed]);
    assert_eq!(trace.result.goal_diff, Some(0.0));
    assert!(trace.result.outcome.is_none());
    assert!(trace.result.probabilities.is_empty());
    assert_eq!(
        (
            trace.result.suggested_score.home,
            trace.result.suggested_score.away
        ),
        (1, 1)
    );
}

#[test]
fn test_missing_directory_serves_heuristic() {
    let dir = tempfile::tempdir().unwrap();
    let locator = ArtifactLocator::new(dir.path()).with_override(Some(dir.path().join("nope")));
    let engine = PredictionEngine::new(Arc::new(ModelArtifacts::discover(&locator)));

    let payload = MatchPayload::new("A", "B").with_stat(MatchStat::HalfTimeAwayGoals, 3);
    let trace = engine.predict_traced(&payload);

    assert_eq!(trace.branch, PredictionBranch::Fallback);
    // -3 * 0.25 = -0.75, rounds to a one-goal away win
    assert_eq!(trace.result.goal_diff, Some(-0.75));
    assert_eq!(trace.result.outcome.as_deref(), Some("A"));
    assert_eq!(
        (
            trace.result.suggested_score.home,
            trace.result.suggested_score.away
        ),
        (1, 2)
    );
}
