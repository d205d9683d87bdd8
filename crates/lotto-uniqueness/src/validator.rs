//! UniquenessValidator: checks combinations against the lookback window of a
//! target series, loading history through the data collaborator.

use std::sync::Arc;

use lotto_core::config::UniquenessConfig;
use lotto_core::constants::COMBINATION_SPACE;
use lotto_core::errors::LottoResult;
use lotto_core::models::{Combination, SeriesId, UniquenessStats};
use lotto_core::traits::IHistoryProvider;
use lotto_core::uniqueness_span;
use tracing::debug;

use crate::generator::{self, GeneratedCombination};
use crate::window::SignatureWindow;

/// Historical uniqueness enforcement.
///
/// Every public check rebuilds the window from the collaborator, so results
/// always reflect the history currently visible to it.
pub struct UniquenessValidator {
    history: Arc<dyn IHistoryProvider>,
    config: UniquenessConfig,
}

impl UniquenessValidator {
    pub fn new(history: Arc<dyn IHistoryProvider>, config: UniquenessConfig) -> Self {
        Self { history, config }
    }

    /// Validator with the default 151-series lookback.
    pub fn with_defaults(history: Arc<dyn IHistoryProvider>) -> Self {
        Self::new(history, UniquenessConfig::default())
    }

    /// Load and index the lookback window of `target`.
    pub fn window(&self, target: SeriesId) -> LottoResult<SignatureWindow> {
        let _span = uniqueness_span!(target).entered();
        let lookback = self.config.lookback_window;
        let (start, end) = SignatureWindow::bounds(target, lookback);
        if end < start {
            debug!(target_series = target, "lookback window is empty");
            return Ok(SignatureWindow::empty(target, lookback));
        }

        let history = self.history.load_before(target)?;
        let window = SignatureWindow::build(&history, target, lookback);
        debug!(
            start,
            end,
            series = window.series_analyzed(),
            signatures = window.len(),
            "lookback window indexed"
        );
        Ok(window)
    }

    /// True iff no series in the window of `target` drew `combination`.
    pub fn is_unique_combination(
        &self,
        combination: &Combination,
        target: SeriesId,
    ) -> LottoResult<bool> {
        Ok(self.window(target)?.is_unique(combination))
    }

    /// Drop the combinations already drawn in the window, keeping input order.
    pub fn filter_unique_combinations(
        &self,
        combinations: &[Combination],
        target: SeriesId,
    ) -> LottoResult<Vec<Combination>> {
        let window = self.window(target)?;
        let unique = window.filter_unique(combinations);
        debug!(
            input = combinations.len(),
            kept = unique.len(),
            "filtered combinations against lookback window"
        );
        Ok(unique)
    }

    /// Seeded random combination absent from the window, or the deterministic
    /// fallback when the retry budget runs out.
    pub fn generate_unique_combination(
        &self,
        target: SeriesId,
        seed: u64,
    ) -> LottoResult<GeneratedCombination> {
        let window = self.window(target)?;
        generator::generate_unique(&window, seed, self.config.generation_retries)
    }

    /// Consumption of the combination space by the window of `target`.
    pub fn uniqueness_stats(&self, target: SeriesId) -> LottoResult<UniquenessStats> {
        let window = self.window(target)?;
        let consumed = window.len();
        Ok(UniquenessStats {
            target_series: target,
            window_start: window.start(),
            window_end: window.end(),
            series_analyzed: window.series_analyzed(),
            combinations_consumed: consumed,
            theoretical_space: COMBINATION_SPACE,
            usage_percentage: consumed as f64 / COMBINATION_SPACE as f64 * 100.0,
            remaining: COMBINATION_SPACE - consumed as u64,
        })
    }
}
