//! CLI command implementations

pub mod apply;
pub mod config;
pub mod generate;

use anyhow::{Context, Result};
use cvd_plugin::FileSettings;
use std::path::Path;

/// Open the settings file, falling back to the platform default location
pub fn open_settings(path: Option<&Path>) -> Result<FileSettings> {
    match path {
        Some(path) => FileSettings::open(path)
            .with_context(|| format!("Failed to open settings: {}", path.display())),
        None => FileSettings::open_default().context("Failed to open settings"),
    }
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
