//! LottoErrorCode trait for stable, machine-readable error identifiers.

/// Every error enum implements this to provide a structured error code string
/// that callers can match on without parsing messages.
pub trait LottoErrorCode {
    /// Returns the error code string (e.g., "INVALID_COMBINATION").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_COMBINATION: &str = "INVALID_COMBINATION";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const HISTORY_ERROR: &str = "HISTORY_ERROR";
pub const EMPTY_CANDIDATE_POOL: &str = "EMPTY_CANDIDATE_POOL";
pub const FEEDBACK_ERROR: &str = "FEEDBACK_ERROR";
