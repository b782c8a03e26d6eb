//! Deterministic prediction used when no trained model is loaded.
//!
//! The heuristic favours the team listed later in the metadata team list only
//! slightly, and the half-time score strongly. It keeps the API usable and
//! explainable before any artifact has been trained.

use crate::domain::match_stats::MatchPayload;
use crate::domain::metadata::ModelMetadata;
use crate::domain::prediction::{
    PredictionResult, SuggestedScore, label_probabilities, round_to, stable_softmax,
};

/// Goal-difference weight per position of team-list distance
pub const TEAM_INDEX_WEIGHT: f64 = 0.05;
/// Goal-difference weight per half-time goal of margin
pub const HALF_TIME_WEIGHT: f64 = 0.25;
/// Bound on the heuristic goal difference, both directions
pub const MAX_GOAL_DIFF: f64 = 3.0;

/// Clamped heuristic goal difference, before rounding
pub fn heuristic_goal_diff(metadata: &ModelMetadata, payload: &MatchPayload) -> f64 {
    let home_index = metadata.team_index(&payload.home_team) as f64;
    let away_index = metadata.team_index(&payload.away_team) as f64;
    let margin = payload.stats.half_time_margin() as f64;

    let base = (home_index - away_index) * TEAM_INDEX_WEIGHT + margin * HALF_TIME_WEIGHT;
    base.clamp(-MAX_GOAL_DIFF, MAX_GOAL_DIFF)
}

pub fn heuristic_prediction(metadata: &ModelMetadata, payload: &MatchPayload) -> PredictionResult {
    let goal_diff = heuristic_goal_diff(metadata, payload);
    let probs = stable_softmax(&[goal_diff, 0.0, -goal_diff]);
    let (outcome, probabilities) = label_probabilities(&metadata.class_labels(), &probs);

    PredictionResult {
        outcome,
        probabilities,
        goal_diff: Some(round_to(goal_diff, 2)),
        suggested_score: SuggestedScore::from_goal_diff(goal_diff),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::match_stats::MatchStat;

    fn payload(home_goals: i64, away_goals: i64) -> MatchPayload {
        MatchPayload::new("A", "B")
            .with_stat(MatchStat::HalfTimeHomeGoals, home_goals)
            .with_stat(MatchStat::HalfTimeAwayGoals, away_goals)
    }

    #[test]
    fn test_half_time_lead_with_empty_team_list() {
        let result = heuristic_prediction(&ModelMetadata::default(), &payload(1, 0));

        assert_eq!(result.goal_diff, Some(0.25));
        assert_eq!(result.suggested_score, SuggestedScore::new(1, 1));
        assert_eq!(result.outcome.as_deref(), Some("H"));
    }

    #[test]
    fn test_three_goal_lead_rounds_up() {
        let result = heuristic_prediction(&ModelMetadata::default(), &payload(3, 0));

        assert_eq!(result.goal_diff, Some(0.75));
        assert_eq!(result.suggested_score, SuggestedScore::new(2, 1));
    }

    #[test]
    fn test_goal_diff_is_clamped() {
        let result = heuristic_prediction(&ModelMetadata::default(), &payload(0, 20));

        assert_eq!(result.goal_diff, Some(-3.0));
        assert_eq!(result.outcome.as_deref(), Some("A"));
        assert_eq!(result.suggested_score, SuggestedScore::new(1, 4));
    }

    #[test]
    fn test_team_positions_shift_goal_diff() {
        let teams: Vec<String> = (0..20).map(|i| format!("Team {}", i)).collect();
        let metadata = ModelMetadata::default().with_teams(teams);
        let fixture = MatchPayload::new("Team 19", "Team 3");

        let diff = heuristic_goal_diff(&metadata, &fixture);
        assert!((diff - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_level_match_is_uniform_and_picks_first_label() {
        let result = heuristic_prediction(&ModelMetadata::default(), &payload(1, 1));

        assert!(result.probabilities.iter().all(|p| p.prob == 0.3333));
        assert_eq!(result.outcome.as_deref(), Some("H"));
        assert_eq!(result.goal_diff, Some(0.0));
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        for (h, a) in [(0, 0), (2, 1), (0, 3), (5, 0), (1, 4)] {
            let result = heuristic_prediction(&ModelMetadata::default(), &payload(h, a));
            assert_eq!(result.probabilities.len(), 3);
            assert!((result.probability_sum() - 1.0).abs() <= 0.001);
        }
    }
}
