use crate::errors::LottoResult;
use crate::models::{Combination, FeedbackSummary, SeriesId, SeriesPattern};

/// Learning from historical series and from observed outcomes.
pub trait ILearner {
    /// Fold one historical series into the model.
    fn learn_from_series(&mut self, pattern: &SeriesPattern) -> LottoResult<()>;

    /// Compare a prediction against the events observed for a series and learn from the gap.
    fn validate_and_learn(
        &mut self,
        series_id: SeriesId,
        prediction: &Combination,
        actual_results: &[Combination],
    ) -> LottoResult<FeedbackSummary>;
}
