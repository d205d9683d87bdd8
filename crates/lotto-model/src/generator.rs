//! CandidateGenerator: weighted sampling without replacement, filtered
//! against the uniqueness window of the target series.

use std::collections::HashSet;

use lotto_core::config::GenerationConfig;
use lotto_core::constants::{MAX_NUMBER, MIN_NUMBER, PICK_SIZE, POOL_SIZE};
use lotto_core::models::Combination;
use lotto_uniqueness::SignatureWindow;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::ModelState;
use crate::weights::slot;

/// Accepted candidates of one generation call, in acceptance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePool {
    pub candidates: Vec<Combination>,
    pub attempts: usize,
    pub rejected_invalid: usize,
    pub rejected_duplicate: usize,
}

impl CandidatePool {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

pub struct CandidateGenerator<'a> {
    state: &'a ModelState,
    config: &'a GenerationConfig,
}

impl<'a> CandidateGenerator<'a> {
    pub fn new(state: &'a ModelState, config: &'a GenerationConfig) -> Self {
        Self { state, config }
    }

    /// Sampling weight of every number, indexed by `number - 1`.
    pub fn sampling_weights(&self) -> [f64; POOL_SIZE] {
        let mut weights = [0.0; POOL_SIZE];
        for number in MIN_NUMBER..=MAX_NUMBER {
            let mut w = self.state.weights.combined(number);
            if self.state.hybrid.contains(number) {
                w *= self.config.hybrid_boost;
            }
            if self.state.signals.is_critical(number) {
                w *= self.config.critical_boost;
            }
            if let Some(temporal) = self.state.signals.temporal(number) {
                w *= temporal;
            }
            weights[slot(number)] = w;
        }
        weights
    }

    /// One 14-number draw over `weights` (see [`Self::sampling_weights`]).
    /// `None` only if the draw failed to produce a well-formed combination.
    pub fn generate_weighted_candidate<R: Rng>(
        &self,
        weights: &[f64; POOL_SIZE],
        rng: &mut R,
    ) -> Option<Combination> {
        let numbers = weighted_sample_without_replacement(weights, PICK_SIZE, rng);
        Combination::new(&numbers).ok()
    }

    /// Draw until `pool_size` candidates absent from `window` are accepted or
    /// `max_attempts` draws have been made.
    pub fn generate_candidates<R: Rng>(
        &self,
        window: &SignatureWindow,
        rng: &mut R,
    ) -> CandidatePool {
        let weights = self.sampling_weights();
        let mut pool = CandidatePool::default();

        while pool.attempts < self.config.max_attempts && pool.len() < self.config.pool_size {
            pool.attempts += 1;
            match self.generate_weighted_candidate(&weights, rng) {
                Some(candidate) if window.is_unique(&candidate) => pool.candidates.push(candidate),
                Some(_) => pool.rejected_duplicate += 1,
                None => pool.rejected_invalid += 1,
            }
        }

        debug!(
            accepted = pool.len(),
            attempts = pool.attempts,
            rejected_invalid = pool.rejected_invalid,
            rejected_duplicate = pool.rejected_duplicate,
            "candidate generation finished"
        );
        pool
    }
}

/// Roulette-wheel draw of `count` distinct numbers.
///
/// Each pick builds a cumulative array over the unused numbers, draws in
/// `[0, total)` and binary-searches it. A non-positive or non-finite total
/// falls back to a uniform pick among the unused numbers.
pub fn weighted_sample_without_replacement<R: Rng>(
    weights: &[f64; POOL_SIZE],
    count: usize,
    rng: &mut R,
) -> Vec<u8> {
    let mut available: Vec<u8> = (MIN_NUMBER..=MAX_NUMBER).collect();
    let mut picked = Vec::with_capacity(count);
    let mut cumulative = Vec::with_capacity(POOL_SIZE);

    while picked.len() < count && !available.is_empty() {
        cumulative.clear();
        let mut total = 0.0;
        for &n in &available {
            let w = weights[slot(n)];
            if w.is_finite() && w > 0.0 {
                total += w;
            }
            cumulative.push(total);
        }

        let index = if total.is_finite() && total > 0.0 {
            let draw = rng.gen_range(0.0..total);
            cumulative
                .partition_point(|&c| c <= draw)
                .min(available.len() - 1)
        } else {
            rng.gen_range(0..available.len())
        };
        picked.push(available.remove(index));
    }

    picked
}

/// Candidates with duplicates removed, first occurrence kept.
pub fn dedup_candidates(candidates: &[Combination]) -> Vec<Combination> {
    let mut seen = HashSet::with_capacity(candidates.len());
    candidates
        .iter()
        .filter(|c| seen.insert(c.mask()))
        .copied()
        .collect()
}
