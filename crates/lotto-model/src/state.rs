//! ModelState: everything the model has learned, owned in one place.

use std::collections::VecDeque;

use lotto_core::config::LearningConfig;
use lotto_core::models::SeriesPattern;
use serde::{Deserialize, Serialize};

use crate::affinity::AffinityTracker;
use crate::hybrid::HybridSets;
use crate::signals::FeedbackSignals;
use crate::weights::WeightStore;

/// Learned state of one model instance.
///
/// Generation and scoring borrow it immutably; [`crate::LearningUpdater`] is
/// the only writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelState {
    pub weights: WeightStore,
    pub affinity: AffinityTracker,
    pub signals: FeedbackSignals,
    pub hybrid: HybridSets,
    /// Most recent training series, oldest first.
    recent_series: VecDeque<SeriesPattern>,
    recent_capacity: usize,
    series_learned: usize,
}

impl ModelState {
    pub fn new(config: &LearningConfig) -> Self {
        Self {
            weights: WeightStore::new(config),
            affinity: AffinityTracker::new(),
            signals: FeedbackSignals::new(),
            hybrid: HybridSets::default(),
            recent_series: VecDeque::with_capacity(config.hybrid_window),
            recent_capacity: config.hybrid_window,
            series_learned: 0,
        }
    }

    /// Append a training series, evicting the oldest beyond the hybrid window.
    pub fn record_series(&mut self, pattern: SeriesPattern) {
        self.series_learned += 1;
        if self.recent_capacity == 0 {
            return;
        }
        if self.recent_series.len() == self.recent_capacity {
            self.recent_series.pop_front();
        }
        self.recent_series.push_back(pattern);
    }

    /// Recompute the cold/hot sets from the recorded series.
    pub fn refresh_hybrid_sets(&mut self, set_size: usize) {
        self.hybrid = HybridSets::compute(&self.recent_series, set_size);
    }

    pub fn recent_series(&self) -> impl Iterator<Item = &SeriesPattern> {
        self.recent_series.iter()
    }

    /// Training series recorded over the lifetime of this state.
    pub fn series_learned(&self) -> usize {
        self.series_learned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotto_core::models::Combination;

    fn block(start: u8) -> Combination {
        Combination::new(&(start..start + 14).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn recent_window_is_bounded() {
        let config = LearningConfig {
            hybrid_window: 2,
            ..Default::default()
        };
        let mut state = ModelState::new(&config);
        for id in 1..=3 {
            state.record_series(SeriesPattern::new(id, vec![block(1)]));
        }
        let ids: Vec<u32> = state.recent_series().map(|p| p.series_id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(state.series_learned(), 3);
    }

    #[test]
    fn hybrid_refresh_uses_recorded_series() {
        let mut state = ModelState::new(&LearningConfig::default());
        state.refresh_hybrid_sets(7);
        assert!(state.hybrid.is_empty());
        state.record_series(SeriesPattern::new(1, vec![block(1)]));
        state.refresh_hybrid_sets(7);
        assert!(state.hybrid.hot().contains(&1));
        assert!(state.hybrid.cold().contains(&8));
        assert!(!state.hybrid.contains(15));
    }
}
