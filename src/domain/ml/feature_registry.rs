use crate::domain::match_stats::{MatchPayload, MatchStat};

/// Rolling window a trained feature was computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollingWindow {
    Last3,
    Last5,
}

/// A known rolling-average feature and the current-match stat standing in for it.
///
/// Historical averages are not available at serve time, so both windows of a
/// (side, stat) pair read the same raw value from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturePattern {
    pub pattern: &'static str,
    pub window: RollingWindow,
    pub source: MatchStat,
}

const fn pattern(pattern: &'static str, window: RollingWindow, source: MatchStat) -> FeaturePattern {
    FeaturePattern {
        pattern,
        window,
        source,
    }
}

/// Substring patterns in match priority order.
/// The first pattern contained in a feature name decides its source column.
pub const FEATURE_PATTERNS: [FeaturePattern; 28] = [
    // Home, last 3
    pattern("H_goals_last3", RollingWindow::Last3, MatchStat::HalfTimeHomeGoals),
    pattern("H_shots_last3", RollingWindow::Last3, MatchStat::HomeShots),
    pattern("H_sot_last3", RollingWindow::Last3, MatchStat::HomeShotsOnTarget),
    pattern("H_fouls_last3", RollingWindow::Last3, MatchStat::HomeFouls),
    pattern("H_corners_last3", RollingWindow::Last3, MatchStat::HomeCorners),
    pattern("H_yellow_last3", RollingWindow::Last3, MatchStat::HomeYellowCards),
    pattern("H_red_last3", RollingWindow::Last3, MatchStat::HomeRedCards),
    // Away, last 3
    pattern("A_goals_last3", RollingWindow::Last3, MatchStat::HalfTimeAwayGoals),
    pattern("A_shots_last3", RollingWindow::Last3, MatchStat::AwayShots),
    pattern("A_sot_last3", RollingWindow::Last3, MatchStat::AwayShotsOnTarget),
    pattern("A_fouls_last3", RollingWindow::Last3, MatchStat::AwayFouls),
    pattern("A_corners_last3", RollingWindow::Last3, MatchStat::AwayCorners),
    pattern("A_yellow_last3", RollingWindow::Last3, MatchStat::AwayYellowCards),
    pattern("A_red_last3", RollingWindow::Last3, MatchStat::AwayRedCards),
    // Home, last 5
    pattern("H_goals_last5", RollingWindow::Last5, MatchStat::HalfTimeHomeGoals),
    pattern("H_shots_last5", RollingWindow::Last5, MatchStat::HomeShots),
    pattern("H_sot_last5", RollingWindow::Last5, MatchStat::HomeShotsOnTarget),
    pattern("H_fouls_last5", RollingWindow::Last5, MatchStat::HomeFouls),
    pattern("H_corners_last5", RollingWindow::Last5, MatchStat::HomeCorners),
    pattern("H_yellow_last5", RollingWindow::Last5, MatchStat::HomeYellowCards),
    pattern("H_red_last5", RollingWindow::Last5, MatchStat::HomeRedCards),
    // Away, last 5
    pattern("A_goals_last5", RollingWindow::Last5, MatchStat::HalfTimeAwayGoals),
    pattern("A_shots_last5", RollingWindow::Last5, MatchStat::AwayShots),
    pattern("A_sot_last5", RollingWindow::Last5, MatchStat::AwayShotsOnTarget),
    pattern("A_fouls_last5", RollingWindow::Last5, MatchStat::AwayFouls),
    pattern("A_corners_last5", RollingWindow::Last5, MatchStat::AwayCorners),
    pattern("A_yellow_last5", RollingWindow::Last5, MatchStat::AwayYellowCards),
    pattern("A_red_last5", RollingWindow::Last5, MatchStat::AwayRedCards),
];

/// Finds the pattern a feature name resolves to, if any
pub fn resolve_feature(name: &str) -> Option<&'static FeaturePattern> {
    FEATURE_PATTERNS.iter().find(|p| name.contains(p.pattern))
}

/// Single-row model input, columns ordered like the metadata feature list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector {
    values: Vec<f32>,
}

impl FeatureVector {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Row shape as `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (1, self.values.len())
    }

    /// Widened copy for models trained on f64 matrices
    pub fn to_f64(&self) -> Vec<f64> {
        self.values.iter().map(|v| f64::from(*v)).collect()
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.values
    }
}

/// Builds the model input row for `payload`.
///
/// Unknown feature names read as 0.0; the output always has one column per
/// entry of `features`.
pub fn build_vector<S: AsRef<str>>(payload: &MatchPayload, features: &[S]) -> FeatureVector {
    let values = features
        .iter()
        .map(|name| match resolve_feature(name.as_ref()) {
            Some(p) => payload.stat(p.source) as f32,
            None => 0.0,
        })
        .collect();
    FeatureVector::new(values)
}
