//! Seeded pure-random fallback generator of unique combinations.

use lotto_core::constants::{PICK_SIZE, POOL_SIZE};
use lotto_core::errors::LottoResult;
use lotto_core::models::Combination;
use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::window::SignatureWindow;

/// Outcome of [`generate_unique`]. When the retry budget runs out the
/// deterministic fallback is returned with `unique` reporting whether it
/// happens to be absent from the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCombination {
    pub combination: Combination,
    pub unique: bool,
    pub attempts: usize,
    pub fallback: bool,
}

/// Draw uniformly random combinations until one is absent from `window`.
pub fn generate_unique(
    window: &SignatureWindow,
    seed: u64,
    retries: usize,
) -> LottoResult<GeneratedCombination> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    for attempt in 1..=retries {
        let numbers: Vec<u8> = index::sample(&mut rng, POOL_SIZE, PICK_SIZE)
            .into_iter()
            .map(|i| i as u8 + 1)
            .collect();
        let combination = Combination::new(&numbers)?;
        if window.is_unique(&combination) {
            return Ok(GeneratedCombination {
                combination,
                unique: true,
                attempts: attempt,
                fallback: false,
            });
        }
    }

    let combination = fallback_combination()?;
    let unique = window.is_unique(&combination);
    warn!(
        retries,
        unique,
        fallback = %combination,
        "unique generation exhausted its retries, returning fallback combination"
    );
    Ok(GeneratedCombination {
        combination,
        unique,
        attempts: retries,
        fallback: true,
    })
}

/// The lowest 14 numbers.
pub fn fallback_combination() -> LottoResult<Combination> {
    let numbers: Vec<u8> = (1..=PICK_SIZE as u8).collect();
    Ok(Combination::new(&numbers)?)
}
