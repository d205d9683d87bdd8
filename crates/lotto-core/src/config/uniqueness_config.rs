use serde::{Deserialize, Serialize};

use super::defaults;

/// Historical uniqueness configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniquenessConfig {
    /// Prior series consulted when checking uniqueness.
    pub lookback_window: u32,
    /// Random draws tried by the fallback unique generator.
    pub generation_retries: usize,
}

impl Default for UniquenessConfig {
    fn default() -> Self {
        Self {
            lookback_window: defaults::DEFAULT_LOOKBACK_WINDOW,
            generation_retries: defaults::DEFAULT_UNIQUE_GENERATION_RETRIES,
        }
    }
}
