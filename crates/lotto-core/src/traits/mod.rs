//! Seams between the engine and its collaborators.

pub mod history;
pub mod learner;
pub mod predictor;

pub use history::IHistoryProvider;
pub use learner::ILearner;
pub use predictor::IPredictor;
