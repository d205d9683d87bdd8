use std::sync::Arc;

use lotto_core::config::{GenerationConfig, LearningConfig};
use lotto_core::models::Combination;
use lotto_core::ModelConfig;
use lotto_model::{CandidateGenerator, LearningUpdater, ModelState, ScoringEngine, TrueLearningModel};
use lotto_uniqueness::SignatureWindow;
use proptest::prelude::*;
use proptest::sample::subsequence;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use test_fixtures::{pattern, random_history, InMemoryHistory};

fn arb_numbers() -> impl Strategy<Value = Vec<u8>> {
    subsequence((1u8..=25).collect::<Vec<_>>(), 14).prop_shuffle()
}

fn trained_state(seed: u64) -> ModelState {
    let config = LearningConfig::default();
    let mut state = ModelState::new(&config);
    for series in random_history(seed, 4, 7) {
        LearningUpdater::new(&mut state, &config).learn_from_series(&series.into());
    }
    state.refresh_hybrid_sets(config.hybrid_set_size);
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn generated_candidates_are_well_formed(seed in any::<u64>()) {
        let state = trained_state(seed);
        let config = GenerationConfig { pool_size: 50, ..Default::default() };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let pool = CandidateGenerator::new(&state, &config)
            .generate_candidates(&SignatureWindow::default(), &mut rng);
        prop_assert_eq!(pool.len(), 50);
        prop_assert_eq!(pool.rejected_invalid, 0);
        for candidate in &pool.candidates {
            let numbers = candidate.numbers();
            prop_assert_eq!(numbers.len(), 14);
            prop_assert!(numbers.iter().all(|n| (1..=25).contains(n)));
            prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn same_seed_same_candidates(seed in any::<u64>()) {
        let state = trained_state(seed);
        let config = GenerationConfig { pool_size: 20, ..Default::default() };
        let generator = CandidateGenerator::new(&state, &config);
        let a = generator.generate_candidates(
            &SignatureWindow::default(),
            &mut ChaCha8Rng::seed_from_u64(seed),
        );
        let b = generator.generate_candidates(
            &SignatureWindow::default(),
            &mut ChaCha8Rng::seed_from_u64(seed),
        );
        prop_assert_eq!(a, b);
    }

    #[test]
    fn score_ignores_input_order(seed in 0u64..1_000, numbers in arb_numbers()) {
        let state = trained_state(seed);
        let engine = ScoringEngine::new(&state);
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        let shuffled = engine.calculate_score(&Combination::new(&numbers).unwrap());
        let ordered = engine.calculate_score(&Combination::new(&sorted).unwrap());
        prop_assert_eq!(shuffled.score, ordered.score);
    }

    #[test]
    fn full_presence_grows_by_exact_factor(
        lr in 0.01f64..0.5,
        numbers in arb_numbers(),
        events in 1usize..=7,
    ) {
        let config = LearningConfig { learning_rate: lr, ..Default::default() };
        let mut state = ModelState::new(&config);
        let combination = Combination::new(&numbers).unwrap();
        LearningUpdater::new(&mut state, &config)
            .learn_from_series(&pattern(1, vec![combination; events]));
        for n in combination.iter() {
            prop_assert!((state.weights.frequency(n) - (1.0 + lr * 2.0)).abs() < 1e-12);
        }
        for n in (1..=25u8).filter(|n| !combination.contains(*n)) {
            prop_assert_eq!(state.weights.frequency(n), 1.0);
        }
    }

    #[test]
    fn pair_affinity_is_symmetric(seed in 0u64..1_000, a in 1u8..=25, b in 1u8..=25) {
        prop_assume!(a != b);
        let state = trained_state(seed);
        prop_assert_eq!(state.affinity.pair(a, b), state.affinity.pair(b, a));
    }

    #[test]
    fn weights_stay_within_bounds(seed in 0u64..200) {
        let mut config = ModelConfig::default();
        config.generation.seed = Some(seed);
        config.learning.weight_ceiling = 5.0;
        let history = random_history(seed, 6, 7);
        let mut model = TrueLearningModel::new(
            Arc::new(InMemoryHistory::with_series(history.clone())),
            config,
        ).unwrap();
        for series in &history {
            model.validate_and_learn(series.series_id, &series.combinations[0], &series.combinations).unwrap();
        }
        for (_, w) in model.weights().frequencies() {
            prop_assert!((0.01..=5.0).contains(&w));
        }
    }
}
