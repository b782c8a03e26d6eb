//! Per-request match input: the two team names plus the 14 raw statistics
//! a client may supply. Statistics not supplied read as zero.
//!
//! Requests are decoded and validated in `interfaces::http::dto`; this module
//! only holds the validated shape.

use serde::Serialize;
use std::fmt;

/// One of the 14 raw statistics carried by a match payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStat {
    HalfTimeHomeGoals,
    HalfTimeAwayGoals,
    HomeShots,
    AwayShots,
    HomeShotsOnTarget,
    AwayShotsOnTarget,
    HomeFouls,
    AwayFouls,
    HomeCorners,
    AwayCorners,
    HomeYellowCards,
    AwayYellowCards,
    HomeRedCards,
    AwayRedCards,
}

impl MatchStat {
    pub const ALL: [MatchStat; 14] = [
        MatchStat::HalfTimeHomeGoals,
        MatchStat::HalfTimeAwayGoals,
        MatchStat::HomeShots,
        MatchStat::AwayShots,
        MatchStat::HomeShotsOnTarget,
        MatchStat::AwayShotsOnTarget,
        MatchStat::HomeFouls,
        MatchStat::AwayFouls,
        MatchStat::HomeCorners,
        MatchStat::AwayCorners,
        MatchStat::HomeYellowCards,
        MatchStat::AwayYellowCards,
        MatchStat::HomeRedCards,
        MatchStat::AwayRedCards,
    ];

    /// Column code used on the wire and in CSV exports
    pub fn code(&self) -> &'static str {
        match self {
            MatchStat::HalfTimeHomeGoals => "HTHG",
            MatchStat::HalfTimeAwayGoals => "HTAG",
            MatchStat::HomeShots => "HS",
            MatchStat::AwayShots => "AS",
            MatchStat::HomeShotsOnTarget => "HST",
            MatchStat::AwayShotsOnTarget => "AST",
            MatchStat::HomeFouls => "HF",
            MatchStat::AwayFouls => "AF",
            MatchStat::HomeCorners => "HC",
            MatchStat::AwayCorners => "AC",
            MatchStat::HomeYellowCards => "HY",
            MatchStat::AwayYellowCards => "AY",
            MatchStat::HomeRedCards => "HR",
            MatchStat::AwayRedCards => "AR",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stat| stat.code() == code)
    }
}

impl fmt::Display for MatchStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Raw current-match statistics, keyed by their wire codes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchStats {
    #[serde(rename = "HTHG")]
    pub half_time_home_goals: i64,
    #[serde(rename = "HTAG")]
    pub half_time_away_goals: i64,
    #[serde(rename = "HS")]
    pub home_shots: i64,
    #[serde(rename = "AS")]
    pub away_shots: i64,
    #[serde(rename = "HST")]
    pub home_shots_on_target: i64,
    #[serde(rename = "AST")]
    pub away_shots_on_target: i64,
    #[serde(rename = "HF")]
    pub home_fouls: i64,
    #[serde(rename = "AF")]
    pub away_fouls: i64,
    #[serde(rename = "HC")]
    pub home_corners: i64,
    #[serde(rename = "AC")]
    pub away_corners: i64,
    #[serde(rename = "HY")]
    pub home_yellow_cards: i64,
    #[serde(rename = "AY")]
    pub away_yellow_cards: i64,
    #[serde(rename = "HR")]
    pub home_red_cards: i64,
    #[serde(rename = "AR")]
    pub away_red_cards: i64,
}

impl MatchStats {
    pub fn get(&self, stat: MatchStat) -> i64 {
        match stat {
            MatchStat::HalfTimeHomeGoals => self.half_time_home_goals,
            MatchStat::HalfTimeAwayGoals => self.half_time_away_goals,
            MatchStat::HomeShots => self.home_shots,
            MatchStat::AwayShots => self.away_shots,
            MatchStat::HomeShotsOnTarget => self.home_shots_on_target,
            MatchStat::AwayShotsOnTarget => self.away_shots_on_target,
            MatchStat::HomeFouls => self.home_fouls,
            MatchStat::AwayFouls => self.away_fouls,
            MatchStat::HomeCorners => self.home_corners,
            MatchStat::AwayCorners => self.away_corners,
            MatchStat::HomeYellowCards => self.home_yellow_cards,
            MatchStat::AwayYellowCards => self.away_yellow_cards,
            MatchStat::HomeRedCards => self.home_red_cards,
            MatchStat::AwayRedCards => self.away_red_cards,
        }
    }

    pub fn set(&mut self, stat: MatchStat, value: i64) {
        let slot = match stat {
            MatchStat::HalfTimeHomeGoals => &mut self.half_time_home_goals,
            MatchStat::HalfTimeAwayGoals => &mut self.half_time_away_goals,
            MatchStat::HomeShots => &mut self.home_shots,
            MatchStat::AwayShots => &mut self.away_shots,
            MatchStat::HomeShotsOnTarget => &mut self.home_shots_on_target,
            MatchStat::AwayShotsOnTarget => &mut self.away_shots_on_target,
            MatchStat::HomeFouls => &mut self.home_fouls,
            MatchStat::AwayFouls => &mut self.away_fouls,
            MatchStat::HomeCorners => &mut self.home_corners,
            MatchStat::AwayCorners => &mut self.away_corners,
            MatchStat::HomeYellowCards => &mut self.home_yellow_cards,
            MatchStat::AwayYellowCards => &mut self.away_yellow_cards,
            MatchStat::HomeRedCards => &mut self.home_red_cards,
            MatchStat::AwayRedCards => &mut self.away_red_cards,
        };
        *slot = value;
    }

    /// Half-time goal difference from the home side's perspective
    pub fn half_time_margin(&self) -> i64 {
        self.half_time_home_goals - self.half_time_away_goals
    }
}

/// A fixture to predict, with non-blank team names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchPayload {
    #[serde(rename = "HomeTeam")]
    pub home_team: String,
    #[serde(rename = "AwayTeam")]
    pub away_team: String,
    #[serde(flatten)]
    pub stats: MatchStats,
}

impl MatchPayload {
    pub fn new(home_team: impl Into<String>, away_team: impl Into<String>) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
            stats: MatchStats::default(),
        }
    }

    pub fn with_stat(mut self, stat: MatchStat, value: i64) -> Self {
        self.stats.set(stat, value);
        self
    }

    pub fn stat(&self, stat: MatchStat) -> i64 {
        self.stats.get(stat)
    }
}
