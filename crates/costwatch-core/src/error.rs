use chrono::NaiveDate;
use thiserror::Error;

/// Errors from the detection core.
///
/// Degenerate series (empty, or constant-valued) are not errors; they
/// produce empty results by contract.
#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("invalid threshold: {threshold} (must be finite and > 0)")]
    InvalidThreshold { threshold: f64 },

    #[error("malformed record at index {index} ({date}): {detail}")]
    MalformedRecord {
        index: usize,
        date: NaiveDate,
        detail: String,
    },
}

/// Convenience type alias for detector results.
pub type DetectorResult<T> = Result<T, DetectorError>;
