use crate::errors::LottoResult;
use crate::models::{HistoricalSeries, SeriesId};

/// Historical draw data access.
///
/// Input is assumed to be validated by the implementor: every combination is
/// already a well-formed `Combination`.
pub trait IHistoryProvider: Send + Sync {
    /// Every series with `series_id < before`, ordered by series id.
    fn load_before(&self, before: SeriesId) -> LottoResult<Vec<HistoricalSeries>>;
}
