use serde::{Deserialize, Serialize};

use super::Combination;

/// Per-feature contributions to a candidate score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub frequency: f64,
    pub consecutive: f64,
    pub sum_range: f64,
    pub distribution: f64,
    pub balanced_range: f64,
    pub low_cluster: f64,
    pub pair_affinity: f64,
    pub triplet_affinity: f64,
    pub critical: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.frequency
            + self.consecutive
            + self.sum_range
            + self.distribution
            + self.balanced_range
            + self.low_cluster
            + self.pair_affinity
            + self.triplet_affinity
            + self.critical
    }
}

/// A generated combination with its score. Higher is better; the score is a
/// relative ranking signal with no upper bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub combination: Combination,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}
