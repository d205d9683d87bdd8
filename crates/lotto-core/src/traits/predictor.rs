use crate::errors::LottoResult;
use crate::models::{Candidate, Combination, SeriesId};

/// Combination prediction for an upcoming series.
pub trait IPredictor {
    /// The single best-scoring unique candidate.
    fn predict_best_combination(&mut self, target_series: SeriesId) -> LottoResult<Combination>;

    /// Up to `top_count` best-scoring unique candidates, best first.
    fn predict_top_combinations(
        &mut self,
        target_series: SeriesId,
        top_count: usize,
    ) -> LottoResult<Vec<Candidate>>;
}
