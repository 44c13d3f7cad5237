//! Per-application correction settings with a global fallback.
//!
//! # File Layout
//!
//! ```yaml
//! global:
//!   enabled: true
//!   deficiency: deutan
//!   operation: correct
//!   strength: 1.0
//!   lut_size: 32
//! apps:
//!   '1245620':
//!     enabled: false
//!     ...
//! ```
//!
//! Missing fields fall back to [`CorrectionConfig::default`]. Strength and
//! size are stored raw and checked by [`CorrectionConfig::to_request`], so a
//! hand-edited file with out-of-range values loads but cannot generate.

use crate::{PluginError, PluginResult};
use cvd_color::{ColorResult, Deficiency, GenerateRequest, LutSize, Operation, Strength};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Correction settings for one scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectionConfig {
    /// Whether a look should be active at all.
    pub enabled: bool,
    /// Targeted deficiency.
    #[serde(alias = "cb_type")]
    pub deficiency: Deficiency,
    /// Algorithm to run.
    pub operation: Operation,
    /// Effect strength, expected in [0, 1].
    pub strength: f64,
    /// Grid resolution, expected to be 16, 32 or 64.
    pub lut_size: u32,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            deficiency: Deficiency::Deutan,
            operation: Operation::Correct,
            strength: 1.0,
            lut_size: 32,
        }
    }
}

impl CorrectionConfig {
    /// Validates the stored values into a generation request.
    pub fn to_request(&self) -> ColorResult<GenerateRequest> {
        Ok(GenerateRequest::new(self.deficiency, self.operation)
            .with_strength(Strength::new(self.strength)?)
            .with_size(LutSize::try_from(self.lut_size)?))
    }
}

/// Storage for correction settings keyed by an optional application id.
///
/// `None` addresses the global scope.
pub trait SettingsStore {
    /// Effective config: the app's entry if present, else the global one.
    fn get(&self, app_id: Option<&str>) -> CorrectionConfig;

    /// Stores `config` for `app_id` (or globally).
    fn set(&mut self, config: CorrectionConfig, app_id: Option<&str>) -> PluginResult<()>;

    /// Restores defaults.
    ///
    /// `None` drops every app entry and resets the global one; `Some(id)`
    /// overwrites only that app with defaults.
    fn reset(&mut self, app_id: Option<&str>) -> PluginResult<()>;
}

/// In-memory settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fallback for apps without their own entry.
    pub global: CorrectionConfig,
    /// Per-application overrides.
    pub apps: BTreeMap<String, CorrectionConfig>,
}

impl SettingsStore for Settings {
    fn get(&self, app_id: Option<&str>) -> CorrectionConfig {
        app_id
            .and_then(|id| self.apps.get(id))
            .unwrap_or(&self.global)
            .clone()
    }

    fn set(&mut self, config: CorrectionConfig, app_id: Option<&str>) -> PluginResult<()> {
        match app_id {
            Some(id) => {
                self.apps.insert(id.to_string(), config);
            }
            None => self.global = config,
        }
        Ok(())
    }

    fn reset(&mut self, app_id: Option<&str>) -> PluginResult<()> {
        match app_id {
            Some(id) => {
                self.apps.insert(id.to_string(), CorrectionConfig::default());
            }
            None => *self = Self::default(),
        }
        Ok(())
    }
}

/// [`Settings`] persisted to a YAML file after every change.
#[derive(Debug)]
pub struct FileSettings {
    path: PathBuf,
    settings: Settings,
}

impl FileSettings {
    /// Opens the settings file at `path`, creating it with defaults if absent.
    pub fn open(path: impl Into<PathBuf>) -> PluginResult<Self> {
        let path = path.into();

        if !path.exists() {
            debug!(path = %path.display(), "creating default settings");
            let store = Self {
                path,
                settings: Settings::default(),
            };
            store.save()?;
            return Ok(store);
        }

        let content = fs::read_to_string(&path)?;
        let settings = if content.trim().is_empty() {
            Settings::default()
        } else {
            serde_yaml::from_str(&content)?
        };
        debug!(path = %path.display(), apps = settings.apps.len(), "settings loaded");

        Ok(Self { path, settings })
    }

    /// Opens the settings file at [`FileSettings::default_path`].
    pub fn open_default() -> PluginResult<Self> {
        Self::open(Self::default_path()?)
    }

    /// `<config_dir>/cvd-lut/settings.yaml`
    pub fn default_path() -> PluginResult<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("cvd-lut").join("settings.yaml"))
            .ok_or(PluginError::NoConfigDir)
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current document.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Writes the document, creating the parent directory if needed.
    pub fn save(&self) -> PluginResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(&self.settings)?;
        fs::write(&self.path, yaml)?;
        Ok(())
    }
}

impl SettingsStore for FileSettings {
    fn get(&self, app_id: Option<&str>) -> CorrectionConfig {
        self.settings.get(app_id)
    }

    fn set(&mut self, config: CorrectionConfig, app_id: Option<&str>) -> PluginResult<()> {
        self.settings.set(config, app_id)?;
        self.save()
    }

    fn reset(&mut self, app_id: Option<&str>) -> PluginResult<()> {
        self.settings.reset(app_id)?;
        self.save()
    }
}
