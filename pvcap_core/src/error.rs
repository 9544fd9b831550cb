use thiserror::Error;

/// Rejection reasons for a sampling-range expression.
///
/// Always recovered locally: the previous valid range is kept and the
/// message is surfaced as a notification string.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RangeError {
    #[error("expected two numbers separated by ':', got {0:?}")]
    Malformed(String),
    #[error("bound {0} is outside [0, 1]")]
    OutOfBounds(f64),
    #[error("lower bound {lower} exceeds upper bound {upper}")]
    Inverted { lower: f64, upper: f64 },
}

/// Failures of the streaming measurement session.
#[derive(Debug, Error, Clone)]
pub enum SessionError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid session state: {0}")]
    State(&'static str),
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
