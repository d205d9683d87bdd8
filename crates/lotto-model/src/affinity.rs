//! AffinityTracker: learned pair and triplet co-occurrence scores.
//!
//! Keys are canonicalised (ascending) and packed five bits per number, so a
//! pair fits in 10 bits and a triplet in 15.

use std::collections::HashMap;

use lotto_core::constants::PAIRS_PER_COMBINATION;
use lotto_core::models::Combination;
use serde::{Deserialize, Serialize};

/// Multiplier applied to the mean pair affinity when scoring.
pub const PAIR_SCORE_SCALE: f64 = 25.0;

/// Multiplier applied to the mean matched-triplet affinity when scoring.
pub const TRIPLET_SCORE_SCALE: f64 = 35.0;

/// Packed key of the unordered pair `{a, b}`.
pub fn pair_key(a: u8, b: u8) -> u16 {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    (u16::from(lo) << 5) | u16::from(hi)
}

/// Packed key of the unordered triplet `{a, b, c}`.
pub fn triplet_key(a: u8, b: u8, c: u8) -> u16 {
    let mut t = [a, b, c];
    t.sort_unstable();
    (u16::from(t[0]) << 10) | (u16::from(t[1]) << 5) | u16::from(t[2])
}

/// All 91 pair keys of a combination.
pub fn pair_keys(combination: &Combination) -> impl Iterator<Item = u16> + '_ {
    let numbers = combination.numbers();
    (0..numbers.len()).flat_map(move |i| {
        (i + 1..numbers.len()).map(move |j| pair_key(numbers[i], numbers[j]))
    })
}

/// All 364 triplet keys of a combination.
pub fn triplet_keys(combination: &Combination) -> impl Iterator<Item = u16> + '_ {
    let numbers = combination.numbers();
    let n = numbers.len();
    (0..n).flat_map(move |i| {
        (i + 1..n).flat_map(move |j| {
            (j + 1..n).map(move |k| triplet_key(numbers[i], numbers[j], numbers[k]))
        })
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AffinityTracker {
    pairs: HashMap<u16, f64>,
    triplets: HashMap<u16, f64>,
}

impl AffinityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pair(&self, a: u8, b: u8) -> Option<f64> {
        self.pairs.get(&pair_key(a, b)).copied()
    }

    pub fn triplet(&self, a: u8, b: u8, c: u8) -> Option<f64> {
        self.triplets.get(&triplet_key(a, b, c)).copied()
    }

    pub fn add_pair_key(&mut self, key: u16, delta: f64) {
        *self.pairs.entry(key).or_insert(0.0) += delta;
    }

    pub fn add_triplet_key(&mut self, key: u16, delta: f64) {
        *self.triplets.entry(key).or_insert(0.0) += delta;
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn triplet_count(&self) -> usize {
        self.triplets.len()
    }

    /// Sum of known pair affinities over the 91 pairs of `combination`,
    /// averaged over all 91 pairs and scaled.
    pub fn pair_score(&self, combination: &Combination) -> f64 {
        let total: f64 = pair_keys(combination)
            .filter_map(|key| self.pairs.get(&key))
            .sum();
        total / PAIRS_PER_COMBINATION as f64 * PAIR_SCORE_SCALE
    }

    /// Mean affinity of the triplets of `combination` that are known, scaled.
    /// Zero when none are known.
    pub fn triplet_score(&self, combination: &Combination) -> f64 {
        let (total, matched) = triplet_keys(combination)
            .filter_map(|key| self.triplets.get(&key))
            .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
        if matched == 0 {
            return 0.0;
        }
        total / matched as f64 * TRIPLET_SCORE_SCALE
    }
}
