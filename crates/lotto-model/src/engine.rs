//! TrueLearningModel: owns the model state and exposes training, feedback,
//! and prediction. Implements `ILearner` and `IPredictor`.

use std::collections::BTreeSet;
use std::sync::Arc;

use lotto_core::errors::{LottoResult, PredictionError};
use lotto_core::models::{Candidate, Combination, FeedbackSummary, SeriesId, SeriesPattern};
use lotto_core::traits::{IHistoryProvider, ILearner, IPredictor};
use lotto_core::{feedback_span, learning_span, prediction_span, ModelConfig};
use lotto_uniqueness::UniquenessValidator;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::generator::{dedup_candidates, CandidateGenerator, CandidatePool};
use crate::hybrid::HybridSets;
use crate::learning::LearningUpdater;
use crate::scoring::{best_candidate, rank_candidates, ScoringEngine};
use crate::state::ModelState;
use crate::weights::WeightStore;

/// The adaptive prediction model.
///
/// Single-threaded: every mutating call takes `&mut self`. Generation draws
/// from an internal ChaCha8 stream, so a fixed `generation.seed` plus a fixed
/// call sequence reproduces the same predictions.
pub struct TrueLearningModel {
    config: ModelConfig,
    state: ModelState,
    validator: UniquenessValidator,
    history: Arc<dyn IHistoryProvider>,
    rng: ChaCha8Rng,
}

impl TrueLearningModel {
    /// Create a model with neutral weights. Fails if `config` is invalid.
    pub fn new(history: Arc<dyn IHistoryProvider>, config: ModelConfig) -> LottoResult<Self> {
        config.validate()?;
        let rng = match config.generation.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let validator = UniquenessValidator::new(Arc::clone(&history), config.uniqueness.clone());
        Ok(Self {
            state: ModelState::new(&config.learning),
            config,
            validator,
            history,
            rng,
        })
    }

    /// Resume from a previously captured [`ModelState`].
    pub fn with_state(
        history: Arc<dyn IHistoryProvider>,
        config: ModelConfig,
        state: ModelState,
    ) -> LottoResult<Self> {
        let mut model = Self::new(history, config)?;
        model.state = state;
        Ok(model)
    }

    pub fn with_defaults(history: Arc<dyn IHistoryProvider>) -> LottoResult<Self> {
        Self::new(history, ModelConfig::default())
    }

    /// Reset frequency and position weights to neutral and reseed the base
    /// pattern weights. Affinities and signals are kept.
    pub fn initialize_weights(&mut self) {
        self.state.weights.initialize();
    }

    /// Fold one historical series into the model.
    pub fn learn_from_series(&mut self, pattern: &SeriesPattern) -> LottoResult<()> {
        let _span = learning_span!(pattern.series_id, pattern.event_count()).entered();
        LearningUpdater::new(&mut self.state, &self.config.learning).learn_from_series(pattern);
        Ok(())
    }

    /// Learn every series the history provider holds before `target`, in
    /// series order. Returns how many series were learned.
    pub fn learn_from_history(&mut self, target: SeriesId) -> LottoResult<usize> {
        let history = self.history.load_before(target)?;
        for series in &history {
            self.learn_from_series(&SeriesPattern::from(series))?;
        }
        info!(
            target_series = target,
            series = history.len(),
            pairs = self.state.affinity.pair_count(),
            triplets = self.state.affinity.triplet_count(),
            "history learned"
        );
        Ok(history.len())
    }

    /// Recompute the hybrid cold/hot sets from the recorded training series.
    pub fn refresh_hybrid_sets(&mut self) {
        self.state
            .refresh_hybrid_sets(self.config.learning.hybrid_set_size);
    }

    /// Refresh the hybrid sets, then draw a uniqueness-filtered pool for `target`.
    pub fn generate_candidates(&mut self, target: SeriesId) -> LottoResult<CandidatePool> {
        self.refresh_hybrid_sets();
        let window = self.validator.window(target)?;
        Ok(CandidateGenerator::new(&self.state, &self.config.generation)
            .generate_candidates(&window, &mut self.rng))
    }

    pub fn calculate_score(&self, combination: &Combination) -> Candidate {
        ScoringEngine::new(&self.state).calculate_score(combination)
    }

    fn non_empty_pool(&mut self, target: SeriesId) -> LottoResult<CandidatePool> {
        let pool = self.generate_candidates(target)?;
        if pool.is_empty() {
            warn!(
                target_series = target,
                attempts = pool.attempts,
                "no candidate survived generation"
            );
            return Err(PredictionError::EmptyCandidatePool {
                target_series: target,
                attempts: pool.attempts,
            }
            .into());
        }
        Ok(pool)
    }

    /// The highest-scoring unique candidate for `target`.
    pub fn predict_best_combination(&mut self, target: SeriesId) -> LottoResult<Combination> {
        let _span = prediction_span!(target).entered();
        let pool = self.non_empty_pool(target)?;
        let scored = ScoringEngine::new(&self.state).score_all(&pool.candidates);
        let best = best_candidate(scored).ok_or(PredictionError::EmptyCandidatePool {
            target_series: target,
            attempts: pool.attempts,
        })?;

        match self.validator.is_unique_combination(&best.combination, target) {
            Ok(true) => {}
            Ok(false) => warn!(
                target_series = target,
                combination = %best.combination,
                "best candidate collides with the lookback window"
            ),
            Err(error) => warn!(
                target_series = target,
                error = %error,
                "uniqueness recheck failed"
            ),
        }

        info!(
            target_series = target,
            pool = pool.len(),
            score = best.score,
            combination = %best.combination,
            "best combination predicted"
        );
        Ok(best.combination)
    }

    /// Up to `top_count` distinct unique candidates for `target`, best first.
    pub fn predict_top_combinations(
        &mut self,
        target: SeriesId,
        top_count: usize,
    ) -> LottoResult<Vec<Candidate>> {
        if top_count == 0 {
            return Ok(Vec::new());
        }
        let _span = prediction_span!(target).entered();
        let pool = self.non_empty_pool(target)?;

        let unique = self
            .validator
            .filter_unique_combinations(&pool.candidates, target)?;
        let dropped = pool.len() - unique.len();
        if dropped > 0 {
            warn!(target_series = target, dropped, "second uniqueness pass dropped candidates");
        }
        let distinct = dedup_candidates(&unique);
        debug!(
            target_series = target,
            duplicates = unique.len() - distinct.len(),
            "identical candidates removed"
        );
        if distinct.is_empty() {
            return Err(PredictionError::EmptyCandidatePool {
                target_series: target,
                attempts: pool.attempts,
            }
            .into());
        }

        let mut scored = ScoringEngine::new(&self.state).score_all(&distinct);
        rank_candidates(&mut scored);
        scored.truncate(top_count);
        info!(
            target_series = target,
            returned = scored.len(),
            best_score = scored.first().map_or(0.0, |c| c.score),
            "top combinations predicted"
        );
        Ok(scored)
    }

    /// [`Self::predict_top_combinations`] with the configured default count.
    pub fn predict_default_top_combinations(
        &mut self,
        target: SeriesId,
    ) -> LottoResult<Vec<Candidate>> {
        self.predict_top_combinations(target, self.config.generation.default_top_count)
    }

    /// Compare `prediction` with the events observed for `series_id` and
    /// learn from the difference.
    pub fn validate_and_learn(
        &mut self,
        series_id: SeriesId,
        prediction: &Combination,
        actual_results: &[Combination],
    ) -> LottoResult<FeedbackSummary> {
        let _span = feedback_span!(series_id).entered();
        let summary = LearningUpdater::new(&mut self.state, &self.config.learning).apply_feedback(
            series_id,
            prediction,
            actual_results,
        )?;
        Ok(summary)
    }

    /// [`Self::validate_and_learn`] over raw number lists, validating each
    /// one as a combination first.
    pub fn validate_and_learn_numbers(
        &mut self,
        series_id: SeriesId,
        prediction: &[u8],
        actual_results: &[Vec<u8>],
    ) -> LottoResult<FeedbackSummary> {
        let prediction = Combination::new(prediction)?;
        let actual = actual_results
            .iter()
            .map(|numbers| Combination::new(numbers))
            .collect::<Result<Vec<_>, _>>()?;
        self.validate_and_learn(series_id, &prediction, &actual)
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn state(&self) -> &ModelState {
        &self.state
    }

    pub fn weights(&self) -> &WeightStore {
        &self.state.weights
    }

    pub fn pair_affinity(&self, a: u8, b: u8) -> Option<f64> {
        self.state.affinity.pair(a, b)
    }

    pub fn triplet_affinity(&self, a: u8, b: u8, c: u8) -> Option<f64> {
        self.state.affinity.triplet(a, b, c)
    }

    pub fn avoidance(&self, present: u8, absent: u8) -> u32 {
        self.state.signals.avoidance(present, absent)
    }

    pub fn critical_numbers(&self) -> &BTreeSet<u8> {
        self.state.signals.critical()
    }

    pub fn hybrid_sets(&self) -> &HybridSets {
        &self.state.hybrid
    }

    pub fn series_learned(&self) -> usize {
        self.state.series_learned()
    }

    pub fn validator(&self) -> &UniquenessValidator {
        &self.validator
    }
}

impl ILearner for TrueLearningModel {
    fn learn_from_series(&mut self, pattern: &SeriesPattern) -> LottoResult<()> {
        TrueLearningModel::learn_from_series(self, pattern)
    }

    fn validate_and_learn(
        &mut self,
        series_id: SeriesId,
        prediction: &Combination,
        actual_results: &[Combination],
    ) -> LottoResult<FeedbackSummary> {
        TrueLearningModel::validate_and_learn(self, series_id, prediction, actual_results)
    }
}

impl IPredictor for TrueLearningModel {
    fn predict_best_combination(&mut self, target_series: SeriesId) -> LottoResult<Combination> {
        TrueLearningModel::predict_best_combination(self, target_series)
    }

    fn predict_top_combinations(
        &mut self,
        target_series: SeriesId,
        top_count: usize,
    ) -> LottoResult<Vec<Candidate>> {
        TrueLearningModel::predict_top_combinations(self, target_series, top_count)
    }
}
