//! WeightStore: per-number frequency/position weights and named pattern weights.

use std::collections::BTreeMap;

use lotto_core::config::LearningConfig;
use lotto_core::constants::{MAX_NUMBER, MIN_NUMBER, POOL_SIZE};
use lotto_core::models::PatternKind;
use serde::{Deserialize, Serialize};

/// Neutral starting weight for every number.
pub const NEUTRAL_WEIGHT: f64 = 1.0;

/// Seed values for the base pattern weights.
pub const BASE_PATTERN_WEIGHTS: [(PatternKind, f64); 4] = [
    (PatternKind::Consecutive, 1.0),
    (PatternKind::SumRange, 1.5),
    (PatternKind::Distribution, 1.2),
    (PatternKind::PairAffinity, 1.0),
];

/// Index of `number` in the per-number arrays.
pub(crate) fn slot(number: u8) -> usize {
    usize::from(number - MIN_NUMBER)
}

/// Scalar learned state. Frequency and position weights stay inside
/// `[floor, ceiling]` after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightStore {
    frequency: [f64; POOL_SIZE],
    position: [f64; POOL_SIZE],
    patterns: BTreeMap<PatternKind, f64>,
    floor: f64,
    ceiling: f64,
}

impl WeightStore {
    pub fn new(config: &LearningConfig) -> Self {
        let mut store = Self {
            frequency: [NEUTRAL_WEIGHT; POOL_SIZE],
            position: [NEUTRAL_WEIGHT; POOL_SIZE],
            patterns: BTreeMap::new(),
            floor: config.weight_floor,
            ceiling: config.weight_ceiling,
        };
        store.initialize();
        store
    }

    /// Reset every number to neutral and reseed the base pattern weights.
    pub fn initialize(&mut self) {
        self.frequency = [NEUTRAL_WEIGHT; POOL_SIZE];
        self.position = [NEUTRAL_WEIGHT; POOL_SIZE];
        self.patterns = BASE_PATTERN_WEIGHTS.into_iter().collect();
    }

    pub fn frequency(&self, number: u8) -> f64 {
        self.frequency[slot(number)]
    }

    pub fn position(&self, number: u8) -> f64 {
        self.position[slot(number)]
    }

    /// Frequency × position weight.
    pub fn combined(&self, number: u8) -> f64 {
        self.frequency(number) * self.position(number)
    }

    /// `None` until the pattern has been seeded or learned.
    pub fn pattern(&self, kind: PatternKind) -> Option<f64> {
        self.patterns.get(&kind).copied()
    }

    pub fn patterns(&self) -> &BTreeMap<PatternKind, f64> {
        &self.patterns
    }

    /// Iterate `(number, frequency weight)` in ascending number order.
    pub fn frequencies(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        (MIN_NUMBER..=MAX_NUMBER).map(|n| (n, self.frequency(n)))
    }

    pub fn scale_frequency(&mut self, number: u8, factor: f64) {
        let slot = slot(number);
        self.frequency[slot] = self.clamp(self.frequency[slot] * factor);
    }

    pub fn add_position(&mut self, number: u8, delta: f64) {
        let slot = slot(number);
        self.position[slot] = self.clamp(self.position[slot] + delta);
    }

    /// Increment a pattern weight, creating it at zero on first use.
    pub fn add_pattern(&mut self, kind: PatternKind, delta: f64) {
        *self.patterns.entry(kind).or_insert(0.0) += delta;
    }

    fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.floor, self.ceiling)
    }
}
