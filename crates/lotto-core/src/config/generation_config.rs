use serde::{Deserialize, Serialize};

use super::defaults;

/// Candidate generation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Weighted draws attempted per prediction call.
    pub max_attempts: usize,
    /// Accepted candidates after which generation stops.
    pub pool_size: usize,
    /// Sampling multiplier for hybrid cold/hot numbers.
    pub hybrid_boost: f64,
    /// Sampling multiplier for critical numbers.
    pub critical_boost: f64,
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Candidates returned by top-N prediction when the caller has no preference.
    pub default_top_count: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_attempts: defaults::DEFAULT_MAX_GENERATION_ATTEMPTS,
            pool_size: defaults::DEFAULT_CANDIDATE_POOL_SIZE,
            hybrid_boost: defaults::DEFAULT_HYBRID_BOOST,
            critical_boost: defaults::DEFAULT_CRITICAL_BOOST,
            seed: None,
            default_top_count: defaults::DEFAULT_TOP_COUNT,
        }
    }
}
