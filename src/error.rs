//! Centralized error handling for ponyfetch

use std::fmt;
use std::io;

/// Custom error type for ponyfetch operations
#[derive(Debug)]
pub enum PonyfetchError {
    /// I/O errors (file reading, command execution)
    Io(io::Error),
    /// Parsing errors (invalid data format)
    Parse(String),
    /// Configuration errors
    Config(String),
    /// System detection errors
    Detection(String),
}

impl fmt::Display for PonyfetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PonyfetchError::Io(err) => write!(f, "I/O error: {}", err),
            PonyfetchError::Parse(msg) => write!(f, "Parse error: {}", msg),
            PonyfetchError::Config(msg) => write!(f, "Config error: {}", msg),
            PonyfetchError::Detection(msg) => write!(f, "Detection error: {}", msg),
        }
    }
}

impl std::error::Error for PonyfetchError {}

impl From<io::Error> for PonyfetchError {
    fn from(error: io::Error) -> Self {
        PonyfetchError::Io(error)
    }
}

/// Type alias for Results in ponyfetch
pub type Result<T> = std::result::Result<T, PonyfetchError>;
