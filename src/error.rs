use std::path::PathBuf;

use thiserror::Error;

/// Error types for dialogue conversion
#[derive(Error, Debug)]
pub enum DialogSetError {
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Input is not valid UTF-8 (line {line}): {}", path.display())]
    Decode { path: PathBuf, line: usize },

    #[error("Malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl DialogSetError {
    /// Create an input-not-found error
    pub fn input_not_found<P: Into<PathBuf>>(path: P) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create a decode error
    pub fn decode<P: Into<PathBuf>>(path: P, line: usize) -> Self {
        Self::Decode {
            path: path.into(),
            line,
        }
    }

    /// Create a malformed line error
    pub fn malformed_line<S: Into<String>>(line: usize, reason: S) -> Self {
        Self::MalformedLine {
            line,
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            DialogSetError::InputNotFound { .. } => "not_found",
            DialogSetError::Decode { .. } => "decode",
            DialogSetError::MalformedLine { .. } => "malformed",
            DialogSetError::Io(_) => "io",
            DialogSetError::Json(_) => "json",
            DialogSetError::InvalidConfig { .. } => "config",
        }
    }
}

/// Result type alias for dialogset
pub type Result<T> = std::result::Result<T, DialogSetError>;
