/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Smallest drawable number.
pub const MIN_NUMBER: u8 = 1;

/// Largest drawable number.
pub const MAX_NUMBER: u8 = 25;

/// Size of the number pool.
pub const POOL_SIZE: usize = MAX_NUMBER as usize;

/// Numbers in every combination.
pub const PICK_SIZE: usize = 14;

/// Maximum observed events per series.
pub const MAX_EVENTS_PER_SERIES: usize = 7;

/// C(25, 14): every distinct combination that can be drawn.
pub const COMBINATION_SPACE: u64 = 4_457_400;

/// C(14, 2).
pub const PAIRS_PER_COMBINATION: usize = 91;

/// Inclusive number ranges used by the range features.
pub const LOW_RANGE: (u8, u8) = (1, 8);
pub const MID_RANGE: (u8, u8) = (9, 17);
pub const HIGH_RANGE: (u8, u8) = (18, 25);

/// Five equal quintiles over the pool.
pub const QUINTILE_WIDTH: u8 = 5;
pub const QUINTILE_COUNT: usize = 5;

/// Inclusive sum window treated as typical.
pub const SUM_RANGE: (u32, u32) = (160, 240);
