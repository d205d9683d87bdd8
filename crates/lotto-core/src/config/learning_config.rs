use serde::{Deserialize, Serialize};

use super::defaults;

/// Learning subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Base step for every weight and affinity update.
    pub learning_rate: f64,
    /// Lower clamp for frequency and position weights.
    pub weight_floor: f64,
    /// Upper clamp for frequency and position weights.
    pub weight_ceiling: f64,
    /// Events a number must appear in to become critical. Values above the
    /// event count of a series disable critical detection for it.
    pub critical_min_events: usize,
    /// Also fold validated outcomes through the bulk series update.
    pub reinforce_with_bulk_update: bool,
    /// Recent training series consulted for the hybrid cold/hot sets.
    pub hybrid_window: usize,
    /// Numbers in each of the cold and hot sets.
    pub hybrid_set_size: usize,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            learning_rate: defaults::DEFAULT_LEARNING_RATE,
            weight_floor: defaults::DEFAULT_WEIGHT_FLOOR,
            weight_ceiling: defaults::DEFAULT_WEIGHT_CEILING,
            critical_min_events: defaults::DEFAULT_CRITICAL_MIN_EVENTS,
            reinforce_with_bulk_update: defaults::DEFAULT_REINFORCE_WITH_BULK_UPDATE,
            hybrid_window: defaults::DEFAULT_HYBRID_WINDOW,
            hybrid_set_size: defaults::DEFAULT_HYBRID_SET_SIZE,
        }
    }
}
