//! Error handling for the prediction engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod combination_error;
pub mod config_error;
pub mod error_code;
pub mod feedback_error;
pub mod history_error;
pub mod lotto_error;
pub mod prediction_error;

pub use combination_error::CombinationError;
pub use config_error::ConfigError;
pub use error_code::LottoErrorCode;
pub use feedback_error::FeedbackError;
pub use history_error::HistoryError;
pub use lotto_error::{LottoError, LottoResult};
pub use prediction_error::PredictionError;
