//! Season simulation: predict every fixture and fold the suggested
//! scorelines into a league table.

use crate::application::ml::PredictionEngine;
use crate::domain::match_stats::MatchPayload;
use crate::domain::prediction::SuggestedScore;
use crate::domain::standings::{Fixture, LeagueTable, StandingRow};
use rayon::prelude::*;
use tracing::info;

/// Predicts each fixture from team names alone and returns the final table
pub fn simulate_season(engine: &PredictionEngine, fixtures: &[Fixture]) -> Vec<StandingRow> {
    // Predictions are independent; only the table fold is ordered.
    let scores: Vec<SuggestedScore> = fixtures
        .par_iter()
        .map(|fixture| {
            let payload = MatchPayload::new(&fixture.home_team, &fixture.away_team);
            engine.predict(&payload).suggested_score
        })
        .collect();

    let mut table = LeagueTable::new();
    for (fixture, score) in fixtures.iter().zip(&scores) {
        table.record_result(
            &fixture.home_team,
            &fixture.away_team,
            score.home,
            score.away,
        );
    }

    info!(
        "Simulated {} fixtures across {} teams",
        fixtures.len(),
        table.len()
    );
    table.standings()
}
