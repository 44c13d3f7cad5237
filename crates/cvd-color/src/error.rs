//! Error types for LUT generation.
//!
//! Two kinds of failure exist:
//! - caller input outside its domain ([`ColorError::Validation`]), detected
//!   before any computation or file access
//! - the environment refusing the write ([`ColorError::Io`])
//!
//! The color math itself never fails on valid input.

use cvd_lut::LutError;
use thiserror::Error;

/// Generation error.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A parameter is outside its declared domain.
    #[error("invalid {field}: {message}")]
    Validation {
        /// Name of the offending parameter.
        field: &'static str,
        /// What was wrong and what is allowed.
        message: String,
    },

    /// LUT assembly or encoding failed.
    #[error("LUT error: {0}")]
    Lut(LutError),

    /// I/O error while writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ColorError {
    /// Creates a validation error for `field`.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Name of the failing parameter, for validation errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

// Keep file-system failures distinguishable from format problems.
impl From<LutError> for ColorError {
    fn from(err: LutError) -> Self {
        match err {
            LutError::Io(io) => Self::Io(io),
            other => Self::Lut(other),
        }
    }
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
