//! LearningUpdater: the only writer of [`ModelState`].
//!
//! Two paths feed the state:
//! - bulk series learning (`learn_from_series`): tiered frequency boosts,
//!   position and pattern increments, and threshold-gated affinity bonuses;
//! - outcome feedback (`apply_feedback`): per-number multiplicative
//!   corrections against each observed event, plus critical, temporal and
//!   avoidance signal refresh.

use std::collections::{BTreeSet, HashMap};

use lotto_core::config::LearningConfig;
use lotto_core::constants::{MAX_EVENTS_PER_SERIES, MAX_NUMBER, MIN_NUMBER, PICK_SIZE, POOL_SIZE};
use lotto_core::errors::FeedbackError;
use lotto_core::models::{Combination, FeedbackSummary, PatternKind, SeriesId, SeriesPattern};
use tracing::{debug, info};

use crate::affinity::{pair_keys, triplet_keys};
use crate::features::PatternFeatures;
use crate::state::ModelState;
use crate::weights::slot;

/// Frequency tiers as `(minimum occurrence ratio, tier)`, checked in order.
const FREQUENCY_TIERS: [(f64, f64); 2] = [(0.7, 2.0), (0.5, 1.5)];
const FREQUENCY_TIER_FLOOR: f64 = 0.5;

const POSITION_STEP: f64 = 0.5;

const PAIR_QUALIFYING_RATIO: f64 = 0.5;
const PAIR_BONUS: f64 = 2.0;
const TRIPLET_QUALIFYING_RATIO: f64 = 0.4;
const TRIPLET_BONUS: f64 = 3.0;

const MISSED_BASE: f64 = 1.20;
const MISSED_SLOPE: f64 = 0.30;
const MISSED_CRITICAL: f64 = 1.60;
const WRONG_BASE: f64 = 0.75;
const WRONG_SLOPE: f64 = 0.17;
const CORRECT_FACTOR: f64 = 1.05;
const FEEDBACK_PAIR_STEP: f64 = 1.0;
const FEEDBACK_TRIPLET_STEP: f64 = 1.5;

fn frequency_tier(ratio: f64) -> f64 {
    FREQUENCY_TIERS
        .iter()
        .find(|(min, _)| ratio >= *min)
        .map_or(FREQUENCY_TIER_FLOOR, |(_, tier)| *tier)
}

/// Occurrences of every number across `events`, indexed by `number - 1`.
fn number_counts(events: &[Combination]) -> [usize; POOL_SIZE] {
    let mut counts = [0usize; POOL_SIZE];
    for event in events {
        for n in event.iter() {
            counts[slot(n)] += 1;
        }
    }
    counts
}

pub struct LearningUpdater<'a> {
    state: &'a mut ModelState,
    config: &'a LearningConfig,
}

impl<'a> LearningUpdater<'a> {
    pub fn new(state: &'a mut ModelState, config: &'a LearningConfig) -> Self {
        Self { state, config }
    }

    /// Tiered frequency boosts for numbers present in the series, then
    /// per-combination position and pattern increments.
    pub fn update_weights(&mut self, pattern: &SeriesPattern) {
        let events = pattern.event_count();
        if events == 0 {
            return;
        }
        let lr = self.config.learning_rate;
        let counts = number_counts(&pattern.combinations);
        let weights = &mut self.state.weights;

        for number in MIN_NUMBER..=MAX_NUMBER {
            let count = counts[slot(number)];
            if count == 0 {
                continue;
            }
            let ratio = count as f64 / events as f64;
            weights.scale_frequency(number, 1.0 + lr * frequency_tier(ratio));
        }

        for combination in &pattern.combinations {
            for number in combination.iter() {
                weights.add_position(number, lr * POSITION_STEP);
            }
            for kind in PatternFeatures::of(combination).matching_patterns() {
                weights.add_pattern(kind, lr);
            }
        }
    }

    /// Bonus for every pair drawn in at least half of the series' events.
    /// Returns the number of qualifying pairs.
    pub fn learn_pair_affinities(&mut self, pattern: &SeriesPattern) -> usize {
        let qualifying = qualifying_keys(pattern, PAIR_QUALIFYING_RATIO, |c| {
            pair_keys(c).collect()
        });
        let lr = self.config.learning_rate;
        for (key, ratio) in &qualifying {
            self.state.affinity.add_pair_key(*key, lr * PAIR_BONUS * ratio);
        }
        if !qualifying.is_empty() {
            self.state.weights.add_pattern(PatternKind::PairAffinity, lr);
        }
        qualifying.len()
    }

    /// Bonus for every triplet drawn in at least 40% of the series' events.
    /// Returns the number of qualifying triplets.
    pub fn learn_triplet_affinities(&mut self, pattern: &SeriesPattern) -> usize {
        let qualifying = qualifying_keys(pattern, TRIPLET_QUALIFYING_RATIO, |c| {
            triplet_keys(c).collect()
        });
        let lr = self.config.learning_rate;
        for (key, ratio) in &qualifying {
            self.state
                .affinity
                .add_triplet_key(*key, lr * TRIPLET_BONUS * ratio);
        }
        if !qualifying.is_empty() {
            self.state.weights.add_pattern(PatternKind::TripletAffinity, lr);
        }
        qualifying.len()
    }

    /// Full bulk pass over one series, then record it for the hybrid sets.
    pub fn learn_from_series(&mut self, pattern: &SeriesPattern) {
        if pattern.is_empty() {
            debug!(series_id = pattern.series_id, "skipping series without events");
            return;
        }
        self.update_weights(pattern);
        let pairs = self.learn_pair_affinities(pattern);
        let triplets = self.learn_triplet_affinities(pattern);
        self.state.record_series(pattern.clone());
        debug!(
            series_id = pattern.series_id,
            events = pattern.event_count(),
            qualifying_pairs = pairs,
            qualifying_triplets = triplets,
            "series learned"
        );
    }

    /// Correct the weights against the events actually observed for
    /// `series_id`, given the combination that was predicted for it.
    pub fn apply_feedback(
        &mut self,
        series_id: SeriesId,
        prediction: &Combination,
        actual: &[Combination],
    ) -> Result<FeedbackSummary, FeedbackError> {
        if actual.is_empty() {
            return Err(FeedbackError::NoEvents { series_id });
        }
        if actual.len() > MAX_EVENTS_PER_SERIES {
            return Err(FeedbackError::TooManyEvents {
                series_id,
                count: actual.len(),
                max: MAX_EVENTS_PER_SERIES,
            });
        }

        let lr = self.config.learning_rate;
        let events = actual.len() as f64;
        let counts = number_counts(actual);
        let critical: BTreeSet<u8> = (MIN_NUMBER..=MAX_NUMBER)
            .filter(|n| counts[slot(*n)] >= self.config.critical_min_events)
            .collect();
        self.state.signals.replace_critical(critical.clone());
        self.state.signals.refresh_temporal(actual);

        let mut hits_per_event = Vec::with_capacity(actual.len());
        for event in actual {
            for number in MIN_NUMBER..=MAX_NUMBER {
                let f = counts[slot(number)] as f64 / events;
                let factor = match (event.contains(number), prediction.contains(number)) {
                    (true, false) if critical.contains(&number) => {
                        (MISSED_BASE + MISSED_SLOPE * f) * MISSED_CRITICAL
                    }
                    (true, false) => MISSED_BASE + MISSED_SLOPE * f,
                    (false, true) => WRONG_BASE + WRONG_SLOPE * f,
                    (true, true) => CORRECT_FACTOR,
                    (false, false) => continue,
                };
                self.state.weights.scale_frequency(number, factor);
            }
            for key in pair_keys(event) {
                self.state.affinity.add_pair_key(key, lr * FEEDBACK_PAIR_STEP);
            }
            for key in triplet_keys(event) {
                self.state
                    .affinity
                    .add_triplet_key(key, lr * FEEDBACK_TRIPLET_STEP);
            }
            self.state.signals.record_avoidance(event);
            hits_per_event.push(prediction.intersection_count(event));
        }

        let pattern = SeriesPattern::new(series_id, actual.to_vec());
        if self.config.reinforce_with_bulk_update {
            self.update_weights(&pattern);
        }
        self.state.record_series(pattern);

        let correct_total: usize = hits_per_event.iter().sum();
        let misses = actual.len() * PICK_SIZE - correct_total;
        let summary = FeedbackSummary {
            series_id,
            events: actual.len(),
            best_hits: hits_per_event.iter().copied().max().unwrap_or(0),
            hits_per_event,
            critical_numbers: critical.into_iter().collect(),
            missed_total: misses,
            wrong_total: misses,
            correct_total,
        };
        info!(
            series_id,
            events = summary.events,
            best_hits = summary.best_hits,
            critical = summary.critical_numbers.len(),
            "feedback applied"
        );
        Ok(summary)
    }
}

/// Keys present in at least `min_ratio` of the events, with their ratio.
/// Sorted by key so updates are applied in a stable order.
fn qualifying_keys<F>(pattern: &SeriesPattern, min_ratio: f64, keys_of: F) -> Vec<(u16, f64)>
where
    F: Fn(&Combination) -> Vec<u16>,
{
    let events = pattern.event_count();
    if events == 0 {
        return Vec::new();
    }
    let mut counts: HashMap<u16, usize> = HashMap::new();
    for combination in &pattern.combinations {
        for key in keys_of(combination) {
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    let mut qualifying: Vec<(u16, f64)> = counts
        .into_iter()
        .map(|(key, count)| (key, count as f64 / events as f64))
        .filter(|(_, ratio)| *ratio >= min_ratio)
        .collect();
    qualifying.sort_unstable_by_key(|(key, _)| *key);
    qualifying
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(start: u8) -> Combination {
        Combination::new(&(start..start + 14).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn tiers() {
        assert_eq!(frequency_tier(1.0), 2.0);
        assert_eq!(frequency_tier(0.7), 2.0);
        assert_eq!(frequency_tier(0.5), 1.5);
        assert_eq!(frequency_tier(0.2), 0.5);
    }

    #[test]
    fn update_weights_tiers_and_positions() {
        let config = LearningConfig::default();
        let mut state = ModelState::new(&config);
        // 2..=14 in both events, 1 and 15 in one, 16..=25 in none.
        let pattern = SeriesPattern::new(1, vec![block(1), block(2)]);
        LearningUpdater::new(&mut state, &config).update_weights(&pattern);
        let w = &state.weights;
        assert!((w.frequency(2) - 1.2).abs() < 1e-12);
        assert!((w.frequency(1) - 1.15).abs() < 1e-12);
        assert!((w.frequency(15) - 1.15).abs() < 1e-12);
        assert_eq!(w.frequency(16), 1.0);
        assert!((w.position(2) - 1.1).abs() < 1e-12);
        assert!((w.position(1) - 1.05).abs() < 1e-12);
        assert!(w.pattern(PatternKind::LowCluster).is_some());
    }

    #[test]
    fn affinity_thresholds() {
        let config = LearningConfig::default();
        let mut state = ModelState::new(&config);
        let pattern = SeriesPattern::new(1, vec![block(1), block(12), block(12)]);
        let mut updater = LearningUpdater::new(&mut state, &config);
        assert!(updater.learn_pair_affinities(&pattern) > 0);
        assert!(updater.learn_triplet_affinities(&pattern) > 0);
        // {1, 2} appears in a third of the events: below both thresholds.
        assert_eq!(state.affinity.pair(1, 2), None);
        let expected = 0.1 * 2.0 * (2.0 / 3.0);
        assert!((state.affinity.pair(20, 21).unwrap() - expected).abs() < 1e-12);
        assert_eq!(state.weights.pattern(PatternKind::TripletAffinity), Some(0.1));
    }

    #[test]
    fn feedback_rejects_bad_event_counts() {
        let config = LearningConfig::default();
        let mut state = ModelState::new(&config);
        let mut updater = LearningUpdater::new(&mut state, &config);
        assert_eq!(
            updater.apply_feedback(9, &block(1), &[]),
            Err(FeedbackError::NoEvents { series_id: 9 })
        );
        let too_many = vec![block(1); 8];
        assert!(matches!(
            updater.apply_feedback(9, &block(1), &too_many),
            Err(FeedbackError::TooManyEvents { count: 8, max: 7, .. })
        ));
    }

    #[test]
    fn feedback_summary_counts_overlap() {
        let config = LearningConfig::default();
        let mut state = ModelState::new(&config);
        let summary = LearningUpdater::new(&mut state, &config)
            .apply_feedback(4, &block(1), &[block(12)])
            .unwrap();
        assert_eq!(summary.hits_per_event, vec![3]);
        assert_eq!(summary.best_hits, 3);
        assert_eq!(summary.correct_total, 3);
        assert_eq!(summary.missed_total, 11);
        assert!(summary.critical_numbers.is_empty());
        assert_eq!(state.series_learned(), 1);
        assert_eq!(state.signals.avoidance(12, 1), 1);
        assert_eq!(state.affinity.pair(12, 25), Some(0.1));
    }
}
