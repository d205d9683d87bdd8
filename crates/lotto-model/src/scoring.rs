//! ScoringEngine: additive composite score of a combination.

use lotto_core::constants::PICK_SIZE;
use lotto_core::models::{Candidate, Combination, PatternKind, ScoreBreakdown};

use crate::features::PatternFeatures;
use crate::state::ModelState;

/// Low-cluster term multiplier.
pub const LOW_CLUSTER_SCALE: f64 = 10.0;

/// Bonus per critical number present.
pub const CRITICAL_NUMBER_BONUS: f64 = 10.0;

pub struct ScoringEngine<'a> {
    state: &'a ModelState,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(state: &'a ModelState) -> Self {
        Self { state }
    }

    /// Score `combination`. The total is unbounded and never normalised.
    pub fn calculate_score(&self, combination: &Combination) -> Candidate {
        let weights = &self.state.weights;
        let features = PatternFeatures::of(combination);
        let pattern = |kind: PatternKind| weights.pattern(kind);

        let mut breakdown = ScoreBreakdown {
            frequency: combination.iter().map(|n| weights.combined(n)).sum(),
            ..Default::default()
        };
        if let Some(w) = pattern(PatternKind::Consecutive) {
            breakdown.consecutive = features.consecutive_pairs as f64 * w;
        }
        if let Some(w) = pattern(PatternKind::SumRange) {
            if features.in_sum_range() {
                breakdown.sum_range = w;
            }
        }
        if let Some(w) = pattern(PatternKind::Distribution) {
            breakdown.distribution = features.distribution_score() * w;
        }
        if let Some(w) = pattern(PatternKind::BalancedRange) {
            breakdown.balanced_range = features.min_range_count() as f64 * w;
        }
        if let Some(w) = pattern(PatternKind::LowCluster) {
            breakdown.low_cluster = features.low as f64 / PICK_SIZE as f64 * w * LOW_CLUSTER_SCALE;
        }
        breakdown.pair_affinity = self.state.affinity.pair_score(combination);
        breakdown.triplet_affinity = self.state.affinity.triplet_score(combination);
        breakdown.critical = combination
            .iter()
            .filter(|n| self.state.signals.is_critical(*n))
            .count() as f64
            * CRITICAL_NUMBER_BONUS;

        Candidate {
            combination: *combination,
            score: breakdown.total(),
            breakdown,
        }
    }

    pub fn score_all(&self, combinations: &[Combination]) -> Vec<Candidate> {
        combinations.iter().map(|c| self.calculate_score(c)).collect()
    }
}

/// Highest-scoring candidate; the first one wins a tie.
pub fn best_candidate(candidates: Vec<Candidate>) -> Option<Candidate> {
    candidates.into_iter().fold(None, |best, candidate| match best {
        Some(b) if b.score >= candidate.score => Some(b),
        _ => Some(candidate),
    })
}

/// Sort best first. Stable, so equal scores keep generation order.
pub fn rank_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
}
