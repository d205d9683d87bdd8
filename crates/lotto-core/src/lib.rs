//! # lotto-core
//!
//! Foundation crate for the 14-of-25 prediction engine.
//! Defines the combination and series types, collaborator traits, errors,
//! config, constants, and tracing setup. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ModelConfig;
pub use errors::{LottoError, LottoResult};
pub use models::{Candidate, Combination, HistoricalSeries, PatternKind, SeriesId, SeriesPattern};
