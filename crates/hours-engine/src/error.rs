//! Error types for hours-engine operations.

use thiserror::Error;

/// A fatal, structural parse failure.
///
/// These never cross the [`crate::parse_hours`] boundary — the driver folds
/// them into `parse_error = true` with empty entries — but every internal
/// stage reports its failure mode through a typed variant.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("unrecognized text after normalization: {0}")]
    UnrecognizedText(String),

    #[error("unexpected token: {0}")]
    UnexpectedToken(String),

    #[error("{days} day group(s) paired with {times} time range(s)")]
    CountMismatch { days: usize, times: usize },

    #[error("malformed time range: {0}")]
    MalformedInterval(String),

    #[error("time out of range: {0}")]
    TimeOutOfRange(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
