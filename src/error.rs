//! Error type shared by the factorial and digit-sum operations.

/// Errors raised while computing or reporting a factorial digit sum.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("factorial undefined for negative numbers (got {value})")]
    NegativeInput { value: String },

    #[error("expected a non-negative integer, got '{input}'")]
    NotAnInteger { input: String },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn negative(value: impl ToString) -> Self {
        Error::NegativeInput {
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
