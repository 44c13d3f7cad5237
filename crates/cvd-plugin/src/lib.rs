//! # cvd-plugin
//!
//! Host-facing glue for color vision correction looks.
//!
//! - [`SettingsStore`] / [`FileSettings`] - per-app configs, global fallback
//! - [`LookBackend`] / [`Gamescope`] - activate or clear a `.cube` look
//! - [`Controller`] - regenerate and activate the LUT for the focused app
//!
//! # Usage
//!
//! ```rust,no_run
//! use cvd_plugin::{Controller, FileSettings, Gamescope};
//!
//! let settings = FileSettings::open_default()?;
//! let ctl = Controller::new(settings, Gamescope::new(), "/tmp/cvd-lut");
//!
//! // Startup: apply the global config
//! ctl.apply(None)?;
//!
//! // Focus changed to a game with its own entry
//! ctl.apply(Some("1245620"))?;
//!
//! // Unload
//! ctl.shutdown()?;
//! # Ok::<(), cvd_plugin::PluginError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod controller;
mod error;
mod look;
mod settings;

pub use controller::{Controller, LUT_FILE_NAME, default_runtime_dir};
pub use error::{PluginError, PluginResult};
pub use look::{DEFAULT_XDG_RUNTIME_DIR, Gamescope, LookBackend, LookOutcome};
pub use settings::{CorrectionConfig, FileSettings, Settings, SettingsStore};
