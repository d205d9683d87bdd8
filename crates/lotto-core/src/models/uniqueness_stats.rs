use serde::{Deserialize, Serialize};

use super::SeriesId;

/// How much of the combination space a lookback window has consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniquenessStats {
    pub target_series: SeriesId,
    /// First series in the window (clamped to 1).
    pub window_start: SeriesId,
    /// Last series in the window; below `window_start` when the window is empty.
    pub window_end: SeriesId,
    pub series_analyzed: usize,
    /// Distinct combinations observed in the window.
    pub combinations_consumed: usize,
    pub theoretical_space: u64,
    pub usage_percentage: f64,
    pub remaining: u64,
}
