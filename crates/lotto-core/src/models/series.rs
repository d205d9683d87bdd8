use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Combination;

/// Identifier of a scheduled draw.
pub type SeriesId = u32;

/// One series as supplied by the historical data collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    pub series_id: SeriesId,
    /// Draw date when known.
    #[serde(default)]
    pub drawn_on: Option<NaiveDate>,
    /// Observed events, in observation order.
    pub combinations: Vec<Combination>,
}

/// One training unit: a series identifier plus its ordered events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPattern {
    pub series_id: SeriesId,
    pub combinations: Vec<Combination>,
}

impl SeriesPattern {
    pub fn new(series_id: SeriesId, combinations: Vec<Combination>) -> Self {
        Self {
            series_id,
            combinations,
        }
    }

    pub fn event_count(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}

impl From<HistoricalSeries> for SeriesPattern {
    fn from(series: HistoricalSeries) -> Self {
        Self::new(series.series_id, series.combinations)
    }
}

impl From<&HistoricalSeries> for SeriesPattern {
    fn from(series: &HistoricalSeries) -> Self {
        Self::new(series.series_id, series.combinations.clone())
    }
}
