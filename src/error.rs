//! Error types for the character generator

use thiserror::Error;

/// Main error type for the character generator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CharGenError {
    #[error("{kind} not found: {key}")]
    ConfigNotFound { kind: &'static str, key: String },

    #[error("Data consistency error: {0}")]
    DataConsistency(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl CharGenError {
    /// Shorthand for a missing catalog key
    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        CharGenError::ConfigNotFound {
            kind,
            key: key.into(),
        }
    }
}

impl From<serde_json::Error> for CharGenError {
    fn from(err: serde_json::Error) -> Self {
        CharGenError::Deserialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for CharGenError {
    fn from(err: serde_yaml::Error) -> Self {
        CharGenError::Deserialization(err.to_string())
    }
}

impl From<std::io::Error> for CharGenError {
    fn from(err: std::io::Error) -> Self {
        CharGenError::Io(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<CharGenError> for pyo3::PyErr {
    fn from(err: CharGenError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};

        let msg = err.to_string();
        match err {
            CharGenError::ConfigNotFound { .. } => PyKeyError::new_err(msg),
            CharGenError::InvalidArgument(_)
            | CharGenError::InvalidConfig(_)
            | CharGenError::Deserialization(_) => PyValueError::new_err(msg),
            CharGenError::DataConsistency(_) | CharGenError::Io(_) => {
                PyRuntimeError::new_err(msg)
            }
        }
    }
}

/// Result type alias for the character generator
pub type Result<T> = std::result::Result<T, CharGenError>;
