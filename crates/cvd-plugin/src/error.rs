//! Error types for settings persistence and look activation.

use cvd_color::ColorError;
use thiserror::Error;

/// Result type for plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;

/// Errors raised while loading settings, generating or activating a look.
#[derive(Debug, Error)]
pub enum PluginError {
    /// I/O error on the settings file, runtime directory or activation tool.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be encoded or decoded.
    #[error("settings error: {0}")]
    Settings(#[from] serde_yaml::Error),

    /// JSON encoding of a config failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored values failed validation, or generation failed.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// The platform exposes no configuration directory.
    #[error("no configuration directory available; pass a settings path explicitly")]
    NoConfigDir,

    /// The activation tool ran but reported failure.
    #[error("look activation failed (exit code {code:?}): {stderr}")]
    Look {
        /// Exit code, `None` when terminated by a signal.
        code: Option<i32>,
        /// Captured diagnostic output.
        stderr: String,
    },
}
