//! Request validation and response shapes for the HTTP API.

use crate::domain::errors::ValidationError;
use crate::domain::match_stats::{MatchPayload, MatchStat};
use crate::domain::prediction::{PredictionResult, round_to};
use crate::domain::standings::StandingRow;
use serde::Serialize;
use serde_json::{Map, Value};

/// Which spelling of the team keys a route consults first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamKeys {
    /// `HomeTeam`/`AwayTeam`, then `home_team`/`away_team`
    PascalFirst,
    /// `home_team`/`away_team`, then `HomeTeam`/`AwayTeam`
    SnakeFirst,
}

impl TeamKeys {
    fn home(self) -> (&'static str, &'static str) {
        match self {
            TeamKeys::PascalFirst => ("HomeTeam", "home_team"),
            TeamKeys::SnakeFirst => ("home_team", "HomeTeam"),
        }
    }

    fn away(self) -> (&'static str, &'static str) {
        match self {
            TeamKeys::PascalFirst => ("AwayTeam", "away_team"),
            TeamKeys::SnakeFirst => ("away_team", "AwayTeam"),
        }
    }
}

/// Builds a validated `MatchPayload` from a decoded JSON object.
///
/// This is the only place request bodies become payloads. Team names must be
/// non-blank strings; a missing, null or blank name under the preferred key
/// falls back to the other spelling. Stats accept integers, integral floats
/// and numeric strings; absent or null stats are 0.
pub fn match_payload_from_json(
    body: &Value,
    keys: TeamKeys,
) -> Result<MatchPayload, ValidationError> {
    let empty = Map::new();
    let fields = body.as_object().unwrap_or(&empty);

    let home_team = team_field(fields, keys.home())?;
    let away_team = team_field(fields, keys.away())?;

    let mut payload = MatchPayload::new(home_team, away_team);
    for stat in MatchStat::ALL {
        if let Some(value) = fields.get(stat.code()) {
            payload.stats.set(stat, stat_value(stat.code(), value)?);
        }
    }
    Ok(payload)
}

fn is_unset(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(name)) => name.trim().is_empty(),
        Some(_) => false,
    }
}

fn team_field(
    fields: &Map<String, Value>,
    (field, alias): (&'static str, &'static str),
) -> Result<String, ValidationError> {
    let preferred = fields.get(field);
    let value = match fields.get(alias) {
        Some(other) if is_unset(preferred) && !other.is_null() => Some(other),
        _ => preferred,
    };

    match value {
        None | Some(Value::Null) => Err(ValidationError::MissingField { field }),
        Some(Value::String(name)) if !name.trim().is_empty() => Ok(name.trim().to_string()),
        Some(_) => Err(ValidationError::InvalidTeam { field }),
    }
}

fn stat_value(field: &'static str, value: &Value) -> Result<i64, ValidationError> {
    let invalid = || ValidationError::InvalidStat {
        field,
        value: value.to_string(),
    };

    match value {
        Value::Null => Ok(0),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(i),
            None => match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
                _ => Err(invalid()),
            },
        },
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeProbabilities {
    pub home_win: f64,
    pub draw: f64,
    pub away_win: f64,
}

/// Presentation-friendly prediction returned by `/api/predict_v2`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictV2Response {
    pub outcome: &'static str,
    pub probabilities: OutcomeProbabilities,
    pub home_goals: u32,
    pub away_goals: u32,
    pub home_points: u32,
    pub away_points: u32,
    pub goal_difference: f64,
}

impl From<&PredictionResult> for PredictV2Response {
    fn from(result: &PredictionResult) -> Self {
        let (outcome, home_points, away_points) = match result.outcome.as_deref() {
            Some("H") => ("Home Win", 3, 0),
            Some("A") => ("Away Win", 0, 3),
            _ => ("Draw", 1, 1),
        };

        Self {
            outcome,
            probabilities: OutcomeProbabilities {
                home_win: result.probability_of("H").unwrap_or(0.0),
                draw: result.probability_of("D").unwrap_or(0.0),
                away_win: result.probability_of("A").unwrap_or(0.0),
            },
            home_goals: result.suggested_score.home,
            away_goals: result.suggested_score.away,
            home_points,
            away_points,
            goal_difference: result.goal_diff.map(|gd| round_to(gd, 2)).unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TeamsResponse {
    pub teams: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DebugInputResponse {
    pub features: Vec<String>,
    pub sample_vector: Vec<f32>,
}

#[derive(Debug, Serialize)]
pub struct ArtifactFlags {
    pub classifier: bool,
    pub regressor: bool,
    pub scaler: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: &'static str,
    pub version: &'static str,
    pub artifacts: ArtifactFlags,
}

#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    pub standings: Vec<StandingRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prediction::{ClassProbability, SuggestedScore};
    use serde_json::json;

    fn parse(body: Value) -> Result<MatchPayload, ValidationError> {
        match_payload_from_json(&body, TeamKeys::PascalFirst)
    }

    #[test]
    fn test_pascal_case_payload() {
        let payload = parse(json!({
            "HomeTeam": "Arsenal",
            "AwayTeam": "Chelsea",
            "HTHG": 2,
            "HS": "11",
            "AR": null,
            "Referee": "M Oliver"
        }))
        .unwrap();

        assert_eq!(payload.home_team, "Arsenal");
        assert_eq!(payload.stat(MatchStat::HalfTimeHomeGoals), 2);
        assert_eq!(payload.stat(MatchStat::HomeShots), 11);
        assert_eq!(payload.stat(MatchStat::AwayRedCards), 0);
    }

    #[test]
    fn test_missing_and_null_stats_default_to_zero() {
        let payload = parse(json!({
            "HomeTeam": "Chelsea",
            "AwayTeam": "Brighton",
            "HTHG": 2,
            "HS": null
        }))
        .unwrap();

        assert_eq!(payload.stat(MatchStat::HalfTimeHomeGoals), 2);
        assert_eq!(payload.stat(MatchStat::HomeShots), 0);
        assert_eq!(payload.stat(MatchStat::AwayRedCards), 0);
    }

    #[test]
    fn test_snake_case_team_aliases() {
        let payload = parse(json!({"home_team": "Leeds", "away_team": "Wolves"})).unwrap();
        assert_eq!(payload.away_team, "Wolves");
    }

    #[test]
    fn test_team_key_precedence() {
        let body = json!({
            "HomeTeam": "Leeds",
            "home_team": "Fulham",
            "AwayTeam": "Wolves",
            "away_team": "Everton"
        });

        let pascal = match_payload_from_json(&body, TeamKeys::PascalFirst).unwrap();
        assert_eq!((pascal.home_team.as_str(), pascal.away_team.as_str()), ("Leeds", "Wolves"));

        let snake = match_payload_from_json(&body, TeamKeys::SnakeFirst).unwrap();
        assert_eq!((snake.home_team.as_str(), snake.away_team.as_str()), ("Fulham", "Everton"));
    }

    #[test]
    fn test_blank_preferred_team_falls_back_to_other_key() {
        let payload = match_payload_from_json(
            &json!({"home_team": "", "HomeTeam": "Leeds", "away_team": "Wolves"}),
            TeamKeys::SnakeFirst,
        )
        .unwrap();
        assert_eq!(payload.home_team, "Leeds");
    }

    #[test]
    fn test_blank_team_is_rejected() {
        let err = parse(json!({"HomeTeam": "  ", "AwayTeam": "Wolves"})).unwrap_err();
        assert_eq!(err, ValidationError::InvalidTeam { field: "HomeTeam" });

        let err = match_payload_from_json(
            &json!({"home_team": "Leeds", "away_team": " "}),
            TeamKeys::SnakeFirst,
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidTeam { field: "away_team" });
    }

    #[test]
    fn test_missing_team_is_rejected() {
        let err = parse(json!({"HomeTeam": "Leeds"})).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "AwayTeam" });

        let err = match_payload_from_json(&json!([1, 2]), TeamKeys::PascalFirst).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "HomeTeam" });
    }

    #[test]
    fn test_non_string_team_is_rejected() {
        let err = parse(json!({"HomeTeam": 7, "AwayTeam": "Spurs"})).unwrap_err();
        assert_eq!(err, ValidationError::InvalidTeam { field: "HomeTeam" });
    }

    #[test]
    fn test_non_integer_stat_is_rejected() {
        let err = parse(json!({
            "HomeTeam": "Leeds",
            "AwayTeam": "Wolves",
            "HC": 2.5
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "HC must be an integer, got 2.5");

        let err = parse(json!({
            "HomeTeam": "Leeds",
            "AwayTeam": "Wolves",
            "HY": "lots"
        }))
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidStat { field: "HY", .. }));
    }

    #[test]
    fn test_integral_float_is_accepted() {
        let payload = parse(json!({
            "HomeTeam": "Leeds",
            "AwayTeam": "Wolves",
            "HF": 12.0
        }))
        .unwrap();
        assert_eq!(payload.stat(MatchStat::HomeFouls), 12);
    }

    #[test]
    fn test_v2_view_of_away_win() {
        let result = PredictionResult {
            outcome: Some("A".to_string()),
            probabilities: vec![
                ClassProbability {
                    label: "H".to_string(),
                    prob: 0.2,
                },
                ClassProbability {
                    label: "A".to_string(),
                    prob: 0.8,
                },
            ],
            goal_diff: Some(-1.256),
            suggested_score: SuggestedScore::new(1, 2),
        };

        let view = PredictV2Response::from(&result);
        assert_eq!(view.outcome, "Away Win");
        assert_eq!((view.home_points, view.away_points), (0, 3));
        assert_eq!(view.probabilities.draw, 0.0);
        assert_eq!(view.probabilities.away_win, 0.8);
        assert_eq!((view.home_goals, view.away_goals), (1, 2));
        assert_eq!(view.goal_difference, -1.26);
    }

    #[test]
    fn test_v2_view_of_empty_result_is_a_draw() {
        let view = PredictV2Response::from(&PredictionResult::default());
        assert_eq!(view.outcome, "Draw");
        assert_eq!((view.home_points, view.away_points), (1, 1));
        assert_eq!(view.goal_difference, 0.0);
        assert_eq!((view.home_goals, view.away_goals), (0, 0));
    }
}
