//! Settings commands

use crate::{ConfigAction, ConfigArgs, ConfigSetArgs};
use anyhow::Result;
use cvd_plugin::{CorrectionConfig, SettingsStore};
use std::path::Path;

pub fn run(args: ConfigArgs, settings: Option<&Path>, verbose: bool) -> Result<()> {
    let mut store = super::open_settings(settings)?;
    if verbose {
        println!("Settings: {}", store.path().display());
    }

    match args.action {
        ConfigAction::Show(app) => {
            let config = store.get(app.app_id.as_deref());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Set(set) => {
            let app_id = set.app.app_id.clone();
            let config = merge(store.get(app_id.as_deref()), set)?;
            // Reject before anything is written.
            config.to_request()?;
            store.set(config, app_id.as_deref())?;
            println!("Updated {}", scope(app_id.as_deref()));
        }
        ConfigAction::Reset(app) => {
            store.reset(app.app_id.as_deref())?;
            match app.app_id.as_deref() {
                Some(_) => println!("Reset {}", scope(app.app_id.as_deref())),
                None => println!("Reset all settings"),
            }
        }
    }

    Ok(())
}

/// Overlay the given flags on `base`.
fn merge(mut base: CorrectionConfig, set: ConfigSetArgs) -> Result<CorrectionConfig> {
    if let Some(enabled) = set.enabled {
        base.enabled = enabled;
    }
    if let Some(d) = set.deficiency {
        base.deficiency = d.parse()?;
    }
    if let Some(op) = set.operation {
        base.operation = op.parse()?;
    }
    if let Some(s) = set.strength {
        base.strength = s;
    }
    if let Some(size) = set.size {
        base.lut_size = size;
    }
    Ok(base)
}

fn scope(app_id: Option<&str>) -> String {
    match app_id {
        Some(id) => format!("app {}", id),
        None => "global settings".to_string(),
    }
}
