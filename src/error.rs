use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
/// Enum for the various errors surfaced while reading and resampling measurements.
pub enum ResampleError {
    #[error("Invalid input. {0}")]
    InvalidInput(String),

    #[error("Invalid timestamp. {0}")]
    InvalidTimestamp(String),

    #[error("Invalid number. {0}")]
    InvalidNumber(String),

    #[error("Invalid record. {0}")]
    InvalidRecord(String),

    #[error("{0}")]
    General(String),
}

pub type ResampleResult<T> = Result<T, ResampleError>;
