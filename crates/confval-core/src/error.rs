//! Error types for parsing and typed extraction.

use thiserror::Error;

use crate::value::Kind;

/// Errors surfaced by backends and by callers combining parse + extract.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The backend's parser rejected the input text.
    #[error("{format} parse error: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// A node could not be coerced to the requested type.
    #[error(transparent)]
    Coercion(#[from] CoercionError),
}

impl ConfigError {
    pub(crate) fn parse(format: &'static str, err: impl std::fmt::Display) -> Self {
        ConfigError::Parse {
            format,
            message: err.to_string(),
        }
    }
}

/// Failure of [`Value::coerce`](crate::Value::coerce).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoercionError {
    /// The active variant has no conversion to the requested type.
    #[error("type mismatch: cannot coerce {found} to {expected}")]
    TypeMismatch { expected: &'static str, found: Kind },

    /// The number is not finite or does not fit the integer target.
    #[error("{value} is out of range for {target}")]
    OutOfRange { target: &'static str, value: f64 },
}

impl CoercionError {
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, CoercionError::TypeMismatch { .. })
    }
}

/// Convenience alias used throughout confval-core.
pub type Result<T> = std::result::Result<T, ConfigError>;
