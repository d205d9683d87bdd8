//! Domain models shared across the workspace.

pub mod candidate;
pub mod combination;
pub mod feedback_summary;
pub mod pattern;
pub mod series;
pub mod uniqueness_stats;

pub use candidate::{Candidate, ScoreBreakdown};
pub use combination::Combination;
pub use feedback_summary::FeedbackSummary;
pub use pattern::PatternKind;
pub use series::{HistoricalSeries, SeriesId, SeriesPattern};
pub use uniqueness_stats::UniquenessStats;
