//! Signals refreshed by outcome feedback: critical numbers, temporal
//! recency multipliers, and avoidance counters.

use std::collections::{BTreeMap, BTreeSet};

use lotto_core::constants::{MAX_NUMBER, MIN_NUMBER, POOL_SIZE};
use lotto_core::models::combination::bit_of;
use lotto_core::models::Combination;
use serde::{Deserialize, Serialize};

use crate::weights::slot;

/// Lower bound of a temporal multiplier.
pub const TEMPORAL_BASE: f64 = 1.0;

/// Span of a temporal multiplier; the most recent-heavy number reaches `BASE + SPAN`.
pub const TEMPORAL_SPAN: f64 = 0.5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSignals {
    critical: BTreeSet<u8>,
    temporal: BTreeMap<u8, f64>,
    /// `avoidance[present][absent]`: events where `present` was drawn without `absent`.
    avoidance: [[u32; POOL_SIZE]; POOL_SIZE],
}

impl FeedbackSignals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_critical(&self, number: u8) -> bool {
        self.critical.contains(&number)
    }

    pub fn critical(&self) -> &BTreeSet<u8> {
        &self.critical
    }

    /// Recency multiplier for `number`, defined only for numbers seen in the
    /// most recent feedback cycle.
    pub fn temporal(&self, number: u8) -> Option<f64> {
        self.temporal.get(&number).copied()
    }

    /// Events in which `present` appeared while `absent` did not.
    pub fn avoidance(&self, present: u8, absent: u8) -> u32 {
        self.avoidance[slot(present)][slot(absent)]
    }

    pub fn replace_critical(&mut self, critical: BTreeSet<u8>) {
        self.critical = critical;
    }

    /// Recompute temporal multipliers from `events` in observation order.
    ///
    /// Event `i` carries weight `i + 1`; a number's multiplier is
    /// `1.0 + 0.5 × (weight of events containing it ÷ total weight)`.
    pub fn refresh_temporal(&mut self, events: &[Combination]) {
        self.temporal.clear();
        let total: f64 = (1..=events.len()).map(|w| w as f64).sum();
        if total == 0.0 {
            return;
        }
        for number in MIN_NUMBER..=MAX_NUMBER {
            let weight: f64 = events
                .iter()
                .enumerate()
                .filter(|(_, e)| e.contains(number))
                .map(|(i, _)| (i + 1) as f64)
                .sum();
            if weight > 0.0 {
                self.temporal
                    .insert(number, TEMPORAL_BASE + TEMPORAL_SPAN * weight / total);
            }
        }
    }

    pub fn record_avoidance(&mut self, event: &Combination) {
        let mask = event.mask();
        for present in event.iter() {
            for absent in MIN_NUMBER..=MAX_NUMBER {
                if mask & bit_of(absent) == 0 {
                    self.avoidance[slot(present)][slot(absent)] += 1;
                }
            }
        }
    }
}
