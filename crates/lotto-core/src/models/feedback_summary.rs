use serde::{Deserialize, Serialize};

use super::SeriesId;

/// What `validate_and_learn` observed for one series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSummary {
    pub series_id: SeriesId,
    pub events: usize,
    /// Overlap between the prediction and each event, in event order.
    pub hits_per_event: Vec<usize>,
    pub best_hits: usize,
    /// Numbers that reached the critical threshold, ascending.
    pub critical_numbers: Vec<u8>,
    pub missed_total: usize,
    pub wrong_total: usize,
    pub correct_total: usize,
}
