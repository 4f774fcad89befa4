// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum BracketError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<BracketError>,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BracketError>;

/// Reasons a value cannot be used as a pair count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("no value supplied")]
    Empty,

    #[error("'{value}' is not an integer")]
    NotAnInteger { value: String },

    #[error("{value} is negative; the number of pairs must be zero or more")]
    Negative { value: String },

    #[error("{value} exceeds the largest supported pair count ({max})")]
    TooLarge { value: String, max: u64 },
}

impl BracketError {
    /// Returns the innermost input error, looking through any context layers.
    #[must_use]
    pub fn invalid_input(&self) -> Option<&InvalidInput> {
        match self {
            Self::InvalidInput(inner) => Some(inner),
            Self::Context { source, .. } => source.invalid_input(),
            Self::Io(_) => None,
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<BracketError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| BracketError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| BracketError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
