//! Test fixtures: builders for combinations and series, in-memory history
//! providers, and typed loading of the JSON datasets under `test-fixtures/`.

use std::path::PathBuf;
use std::sync::Mutex;

use lotto_core::constants::{PICK_SIZE, POOL_SIZE};
use lotto_core::errors::{HistoryError, LottoResult};
use lotto_core::models::{Combination, HistoricalSeries, SeriesId, SeriesPattern};
use lotto_core::traits::IHistoryProvider;
use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::de::DeserializeOwned;

// ── Builders ─────────────────────────────────────────────────────────────

/// Build a combination, panicking on invalid input.
pub fn combo(numbers: &[u8]) -> Combination {
    Combination::new(numbers)
        .unwrap_or_else(|e| panic!("invalid fixture combination {numbers:?}: {e}"))
}

/// The 14 consecutive numbers starting at `start` (1..=12).
pub fn block(start: u8) -> Combination {
    combo(&(start..start + PICK_SIZE as u8).collect::<Vec<_>>())
}

/// A combination containing `required` plus the lowest other numbers not excluded.
pub fn with_numbers(required: &[u8], excluded: &[u8]) -> Combination {
    let mut numbers: Vec<u8> = required.to_vec();
    for n in 1..=POOL_SIZE as u8 {
        if numbers.len() == PICK_SIZE {
            break;
        }
        if !numbers.contains(&n) && !excluded.contains(&n) {
            numbers.push(n);
        }
    }
    combo(&numbers)
}

pub fn series(series_id: SeriesId, combinations: Vec<Combination>) -> HistoricalSeries {
    HistoricalSeries {
        series_id,
        drawn_on: None,
        combinations,
    }
}

pub fn pattern(series_id: SeriesId, combinations: Vec<Combination>) -> SeriesPattern {
    SeriesPattern::new(series_id, combinations)
}

/// A uniformly random combination from a seeded generator.
pub fn random_combination(rng: &mut ChaCha8Rng) -> Combination {
    let numbers: Vec<u8> = index::sample(rng, POOL_SIZE, PICK_SIZE)
        .into_iter()
        .map(|i| i as u8 + 1)
        .collect();
    combo(&numbers)
}

/// `count` series numbered from 1, each with `events` random combinations.
pub fn random_history(seed: u64, count: u32, events: usize) -> Vec<HistoricalSeries> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (1..=count)
        .map(|id| series(id, (0..events).map(|_| random_combination(&mut rng)).collect()))
        .collect()
}

// ── History providers ────────────────────────────────────────────────────

/// History held in memory. Series can be appended between calls.
#[derive(Default)]
pub struct InMemoryHistory {
    series: Mutex<Vec<HistoricalSeries>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut series: Vec<HistoricalSeries>) -> Self {
        series.sort_by_key(|s| s.series_id);
        Self {
            series: Mutex::new(series),
        }
    }

    pub fn push(&self, series: HistoricalSeries) {
        let mut guard = self.series.lock().expect("history lock poisoned");
        guard.push(series);
        guard.sort_by_key(|s| s.series_id);
    }

    pub fn len(&self) -> usize {
        self.series.lock().expect("history lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IHistoryProvider for InMemoryHistory {
    fn load_before(&self, before: SeriesId) -> LottoResult<Vec<HistoricalSeries>> {
        let guard = self.series.lock().expect("history lock poisoned");
        Ok(guard
            .iter()
            .filter(|s| s.series_id < before)
            .cloned()
            .collect())
    }
}

/// A provider whose every load fails.
pub struct FailingHistory;

impl IHistoryProvider for FailingHistory {
    fn load_before(&self, before: SeriesId) -> LottoResult<Vec<HistoricalSeries>> {
        Err(HistoryError::LoadFailed {
            series_id: before,
            reason: "fixture provider always fails".to_string(),
        }
        .into())
    }
}

// ── JSON datasets ────────────────────────────────────────────────────────

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("history").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// The bundled sample history: twenty dated series of seven events each.
pub fn sample_history() -> Vec<HistoricalSeries> {
    load_fixture("history/sample_history.json")
}
