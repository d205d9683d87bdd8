//! # lotto-uniqueness
//!
//! Rejects combinations that were already drawn in the recent past.
//!
//! The lookback window for a target series `t` covers series
//! `[max(1, t - lookback), t - 1]`. Every combination observed there is
//! indexed by its canonical signature; a candidate is unique iff its own
//! signature is absent from that index.

pub mod generator;
pub mod validator;
pub mod window;

pub use generator::GeneratedCombination;
pub use validator::UniquenessValidator;
pub use window::SignatureWindow;
