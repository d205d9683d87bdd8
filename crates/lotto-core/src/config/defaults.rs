// Single source of truth for all default values.

// --- Learning ---
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_WEIGHT_FLOOR: f64 = 0.01;
pub const DEFAULT_WEIGHT_CEILING: f64 = 100.0;
pub const DEFAULT_CRITICAL_MIN_EVENTS: usize = 5;
pub const DEFAULT_REINFORCE_WITH_BULK_UPDATE: bool = true;
pub const DEFAULT_HYBRID_WINDOW: usize = 16;
pub const DEFAULT_HYBRID_SET_SIZE: usize = 7;

// --- Generation ---
pub const DEFAULT_MAX_GENERATION_ATTEMPTS: usize = 10_000;
pub const DEFAULT_CANDIDATE_POOL_SIZE: usize = 1_000;
pub const DEFAULT_HYBRID_BOOST: f64 = 50.0;
pub const DEFAULT_CRITICAL_BOOST: f64 = 5.0;
pub const DEFAULT_TOP_COUNT: usize = 7;

// --- Uniqueness ---
pub const DEFAULT_LOOKBACK_WINDOW: u32 = 151;
pub const DEFAULT_UNIQUE_GENERATION_RETRIES: usize = 1_000;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "info";
