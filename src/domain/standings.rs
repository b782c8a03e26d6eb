use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A fixture to simulate: team names only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub home_team: String,
    pub away_team: String,
}

impl Fixture {
    pub fn new(home_team: impl Into<String>, away_team: impl Into<String>) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
        }
    }
}

/// One team's line in a league table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub team: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: u32,
    pub gf: u32,
    pub ga: u32,
}

impl StandingRow {
    fn new(team: &str) -> Self {
        Self {
            team: team.to_string(),
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            points: 0,
            gf: 0,
            ga: 0,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.gf) - i64::from(self.ga)
    }

    fn record(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.gf += scored;
        self.ga += conceded;
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => {
                self.wins += 1;
                self.points += 3;
            }
            std::cmp::Ordering::Equal => {
                self.draws += 1;
                self.points += 1;
            }
            std::cmp::Ordering::Less => self.losses += 1,
        }
    }
}

/// League table keeping teams in first-seen order
#[derive(Debug, Clone, Default)]
pub struct LeagueTable {
    rows: Vec<StandingRow>,
    index: HashMap<String, usize>,
}

impl LeagueTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn row_mut(&mut self, team: &str) -> &mut StandingRow {
        let idx = match self.index.get(team) {
            Some(&idx) => idx,
            None => {
                self.rows.push(StandingRow::new(team));
                self.index.insert(team.to_string(), self.rows.len() - 1);
                self.rows.len() - 1
            }
        };
        &mut self.rows[idx]
    }

    pub fn record_result(&mut self, home: &str, away: &str, home_goals: u32, away_goals: u32) {
        self.row_mut(home).record(home_goals, away_goals);
        self.row_mut(away).record(away_goals, home_goals);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows by points then goal difference, both descending.
    /// Ties keep first-seen order.
    pub fn standings(&self) -> Vec<StandingRow> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| {
            (b.points, b.goal_difference()).cmp(&(a.points, a.goal_difference()))
        });
        rows
    }
}
