use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lotto_core::config::{GenerationConfig, LearningConfig};
use lotto_core::models::SeriesPattern;
use lotto_model::{CandidateGenerator, LearningUpdater, ModelState, ScoringEngine};
use lotto_uniqueness::SignatureWindow;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use test_fixtures::random_history;

fn trained_state() -> (ModelState, SignatureWindow) {
    let config = LearningConfig::default();
    let mut state = ModelState::new(&config);
    let history = random_history(17, 150, 7);
    for series in &history {
        LearningUpdater::new(&mut state, &config).learn_from_series(&series.into());
    }
    state.refresh_hybrid_sets(config.hybrid_set_size);
    let window = SignatureWindow::build(&history, 151, 151);
    (state, window)
}

fn bench_generate_pool(c: &mut Criterion) {
    let (state, window) = trained_state();
    let config = GenerationConfig::default();
    c.bench_function("generate_1000_candidates", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            let pool = CandidateGenerator::new(&state, &config).generate_candidates(&window, &mut rng);
            black_box(pool.len())
        })
    });
}

fn bench_score_pool(c: &mut Criterion) {
    let (state, window) = trained_state();
    let config = GenerationConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let pool = CandidateGenerator::new(&state, &config).generate_candidates(&window, &mut rng);
    c.bench_function("score_1000_candidates", |b| {
        b.iter(|| {
            let scored = ScoringEngine::new(&state).score_all(black_box(&pool.candidates));
            black_box(scored.len())
        })
    });
}

fn bench_learn_series(c: &mut Criterion) {
    let config = LearningConfig::default();
    let history = random_history(3, 1, 7);
    let pattern = SeriesPattern::from(&history[0]);
    c.bench_function("learn_one_series", |b| {
        b.iter(|| {
            let mut state = ModelState::new(&config);
            LearningUpdater::new(&mut state, &config).learn_from_series(black_box(&pattern));
            black_box(state.series_learned())
        })
    });
}

criterion_group!(benches, bench_generate_pool, bench_score_pool, bench_learn_series);
criterion_main!(benches);
