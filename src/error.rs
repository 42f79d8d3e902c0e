//! Error type for recoverable failures.
//!
//! Contract violations (mismatched chromosome lengths, selecting from an
//! empty population) are programming defects and panic instead.

/// Errors returned by configuration validation and instance loading.
#[derive(Debug, thiserror::Error)]
pub enum KnapsackError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("instance contains no items")]
    EmptyInstance,

    #[error("weight limit must be positive and finite, got {0}")]
    InvalidWeightLimit(f64),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
