//! Settings -> generation -> activation.
//!
//! [`Controller`] is what a host calls: on startup and whenever the focused
//! application changes ([`Controller::apply`]), when the user edits settings
//! ([`Controller::update`], [`Controller::read`]) and on unload
//! ([`Controller::shutdown`]).

use crate::{CorrectionConfig, LookBackend, PluginResult, SettingsStore};
use cvd_color::generate_lut;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the generated look inside the runtime directory.
pub const LUT_FILE_NAME: &str = "lut.cube";

/// `$XDG_RUNTIME_DIR/cvd-lut`, or `<tmp>/cvd-lut` where there is none.
pub fn default_runtime_dir() -> PathBuf {
    dirs::runtime_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("cvd-lut")
}

/// Drives a settings store and a look backend.
#[derive(Debug)]
pub struct Controller<S, L> {
    settings: S,
    look: L,
    runtime_dir: PathBuf,
}

impl<S: SettingsStore, L: LookBackend> Controller<S, L> {
    /// Creates a controller writing its LUT under `runtime_dir`.
    pub fn new(settings: S, look: L, runtime_dir: impl Into<PathBuf>) -> Self {
        Self {
            settings,
            look,
            runtime_dir: runtime_dir.into(),
        }
    }

    /// Path the active LUT is written to.
    pub fn lut_path(&self) -> PathBuf {
        self.runtime_dir.join(LUT_FILE_NAME)
    }

    /// Runtime directory.
    pub fn runtime_dir(&self) -> &Path {
        &self.runtime_dir
    }

    /// Settings store.
    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// Look backend.
    pub fn look(&self) -> &L {
        &self.look
    }

    /// Applies the effective config for `app_id`.
    ///
    /// A disabled config clears the look and returns `None`. Otherwise the
    /// LUT is regenerated, activated, and its path returned.
    pub fn apply(&self, app_id: Option<&str>) -> PluginResult<Option<PathBuf>> {
        let config = self.settings.get(app_id);

        if !config.enabled {
            info!(app_id, "correction disabled, resetting look");
            self.reset_look()?;
            return Ok(None);
        }

        let request = config.to_request()?.with_output(self.lut_path());
        info!(
            app_id,
            deficiency = %request.deficiency,
            operation = %request.operation,
            strength = request.strength.get(),
            size = request.size.get(),
            "generating LUT"
        );

        fs::create_dir_all(&self.runtime_dir)?;
        let path = generate_lut(&request)?;

        self.look.set_look(Some(&path))?.check()?;
        info!(path = %path.display(), "LUT applied");
        Ok(Some(path))
    }

    /// Validates and stores `config` for `app_id`.
    ///
    /// Nothing is written when validation fails.
    pub fn update(&mut self, config: CorrectionConfig, app_id: Option<&str>) -> PluginResult<()> {
        config.to_request()?;
        self.settings.set(config, app_id)?;
        info!(app_id, "configuration updated");
        Ok(())
    }

    /// Restores defaults for `app_id`, or everywhere when `None`.
    pub fn reset(&mut self, app_id: Option<&str>) -> PluginResult<()> {
        self.settings.reset(app_id)
    }

    /// Effective config for `app_id` as JSON.
    pub fn read(&self, app_id: Option<&str>) -> PluginResult<String> {
        Ok(serde_json::to_string(&self.settings.get(app_id))?)
    }

    /// Clears the active look.
    pub fn shutdown(&self) -> PluginResult<()> {
        info!("resetting look system");
        self.reset_look()
    }

    fn reset_look(&self) -> PluginResult<()> {
        self.look.set_look(None)?.check()?;
        Ok(())
    }
}
