use serde::{Deserialize, Serialize};

/// Probability assigned to one outcome label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProbability {
    pub label: String,
    pub prob: f64,
}

/// Human-presentable scoreline consistent with a goal differential
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedScore {
    pub home: u32,
    pub away: u32,
}

impl SuggestedScore {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Maps a continuous goal differential onto a scoreline.
    ///
    /// The differential is rounded half-to-even; the losing side (or both
    /// sides on a draw) always scores one.
    pub fn from_goal_diff(goal_diff: f64) -> Self {
        let diff = goal_diff.round_ties_even() as i64;
        let margin = diff.unsigned_abs().min(u32::MAX as u64 - 1) as u32;
        match diff.signum() {
            0 => Self::new(1, 1),
            1 => Self::new(1 + margin, 1),
            _ => Self::new(1, 1 + margin),
        }
    }
}

/// Output of the prediction engine for a single fixture
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub outcome: Option<String>,
    pub probabilities: Vec<ClassProbability>,
    pub goal_diff: Option<f64>,
    pub suggested_score: SuggestedScore,
}

impl PredictionResult {
    pub fn probability_of(&self, label: &str) -> Option<f64> {
        self.probabilities
            .iter()
            .find(|p| p.label == label)
            .map(|p| p.prob)
    }

    pub fn probability_sum(&self) -> f64 {
        self.probabilities.iter().map(|p| p.prob).sum()
    }
}

/// Rounds to `decimals` places, ties to even
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Index of the first maximum, `None` for an empty slice
pub fn argmax(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| match best {
            Some((_, b)) if v <= b => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}

/// Softmax with the maximum logit subtracted before exponentiating
pub fn stable_softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}

/// Pairs labels with probabilities (4 decimals) and picks the argmax label.
///
/// Extra entries on either side are dropped; the argmax is taken over the
/// unrounded values so rounding never changes the outcome.
pub fn label_probabilities(
    labels: &[String],
    probs: &[f64],
) -> (Option<String>, Vec<ClassProbability>) {
    let paired = labels.len().min(probs.len());
    let probabilities = labels
        .iter()
        .zip(probs)
        .map(|(label, p)| ClassProbability {
            label: label.clone(),
            prob: round_to(*p, 4),
        })
        .collect();
    let outcome = argmax(&probs[..paired]).map(|i| labels[i].clone());
    (outcome, probabilities)
}
