//! Error types for amount-to-words conversion.

use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, WordsError>;

/// Errors that can occur while converting amounts to words.
#[derive(Error, Debug)]
pub enum WordsError {
    /// Amount is negative, non-finite, unparsable, or above the configured cap
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },

    /// Rupee value needs a scale word beyond Crore
    #[error("Unsupported magnitude: {rupees} needs {chunks} digit groups, at most 4 are supported")]
    UnsupportedMagnitude { rupees: u128, chunks: usize },

    /// Scale index has no entry in the scale table
    #[error("Unsupported scale index {scale}")]
    UnsupportedScale { scale: usize },

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing input argument
    #[error("Missing input argument. Usage: rupee-words [--rounding <half-up|half-even>] [--max-rupees <N>] (<input.csv> | --amount <value>)")]
    MissingArgument,

    /// Unrecognized flag or bad flag value
    #[error("Invalid value for {flag}: '{value}'")]
    InvalidArgument { flag: String, value: String },
}

impl WordsError {
    pub(crate) fn invalid_amount(input: impl Into<String>, reason: impl Into<String>) -> Self {
        WordsError::InvalidAmount {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
