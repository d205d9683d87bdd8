//! Span definitions per operation: learning, feedback, prediction, uniqueness.

/// Create a learning span for one training series.
#[macro_export]
macro_rules! learning_span {
    ($series_id:expr, $events:expr) => {
        tracing::info_span!("lotto.learning", series_id = $series_id, events = $events)
    };
}

/// Create a feedback span for one validated series.
#[macro_export]
macro_rules! feedback_span {
    ($series_id:expr) => {
        tracing::info_span!("lotto.feedback", series_id = $series_id)
    };
}

/// Create a prediction span.
#[macro_export]
macro_rules! prediction_span {
    ($target_series:expr) => {
        tracing::info_span!("lotto.prediction", target_series = $target_series)
    };
}

/// Create a uniqueness span.
#[macro_export]
macro_rules! uniqueness_span {
    ($target_series:expr) => {
        tracing::debug_span!("lotto.uniqueness", target_series = $target_series)
    };
}
