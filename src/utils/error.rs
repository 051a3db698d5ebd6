//! Error types for the control bar
//!
//! This module defines the error type used throughout the library.
//! We use thiserror for the library error and anyhow at the binary level.

use thiserror::Error;

/// Main error type for the control bar
#[derive(Error, Debug)]
pub enum ControlBarError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("File error: {0}")]
    FileIO(#[from] std::io::Error),

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Lifecycle callback invoked out of order
    #[error("Lifecycle error: {0}")]
    Lifecycle(String),

    /// Simulator script errors
    #[error("Script error on line {line}: {message}")]
    Script { line: usize, message: String },
}

impl From<serde_json::Error> for ControlBarError {
    fn from(err: serde_json::Error) -> Self {
        ControlBarError::InvalidInput(format!("JSON error: {}", err))
    }
}

impl ControlBarError {
    /// Create a script error for the given (1-based) line
    pub fn script<S: Into<String>>(line: usize, msg: S) -> Self {
        ControlBarError::Script {
            line,
            message: msg.into(),
        }
    }
}

/// Convenience type alias for Results in the control bar
pub type Result<T> = std::result::Result<T, ControlBarError>;

/// Extension trait for converting other errors to ControlBarError
pub trait IntoControlBarError<T> {
    /// Convert this error into a configuration error with the given context
    fn config_err(self, context: &str) -> Result<T>;
    fn input_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoControlBarError<T> for std::result::Result<T, E> {
    fn config_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ControlBarError::Config(format!("{}: {}", context, e)))
    }

    fn input_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ControlBarError::InvalidInput(format!("{}: {}", context, e)))
    }
}
