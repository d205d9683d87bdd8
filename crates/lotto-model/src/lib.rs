//! # lotto-model
//!
//! The adaptive learning model for 14-of-25 draws.
//!
//! ## Components
//!
//! | Component | Role |
//! |-----------|------|
//! | `WeightStore` | Per-number frequency/position weights, named pattern weights |
//! | `AffinityTracker` | Pair and triplet co-occurrence scores |
//! | `CandidateGenerator` | Weighted sampling without replacement, uniqueness-filtered |
//! | `ScoringEngine` | Additive composite score over weights, affinities, and patterns |
//! | `LearningUpdater` | Bulk series learning and outcome feedback |
//! | `TrueLearningModel` | Owns the state and exposes training and prediction |
//!
//! All components share one `ModelState`. Generation and scoring borrow it
//! immutably; only the learning updater mutates it.

pub mod affinity;
pub mod engine;
pub mod features;
pub mod generator;
pub mod hybrid;
pub mod learning;
pub mod scoring;
pub mod signals;
pub mod state;
pub mod weights;

pub use affinity::AffinityTracker;
pub use engine::TrueLearningModel;
pub use generator::{CandidateGenerator, CandidatePool};
pub use hybrid::HybridSets;
pub use learning::LearningUpdater;
pub use scoring::ScoringEngine;
pub use signals::FeedbackSignals;
pub use state::ModelState;
pub use weights::WeightStore;
