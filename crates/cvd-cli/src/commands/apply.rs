//! Look activation commands

use crate::AppArgs;
use anyhow::{Context, Result};
use cvd_plugin::{Controller, Gamescope, LookBackend, default_runtime_dir};
use std::path::Path;

pub fn run(
    args: AppArgs,
    settings: Option<&Path>,
    runtime_dir: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let store = super::open_settings(settings)?;
    let runtime_dir = runtime_dir.map_or_else(default_runtime_dir, Path::to_path_buf);

    if verbose {
        println!("Settings: {}", store.path().display());
        println!("Runtime:  {}", runtime_dir.display());
    }

    let controller = Controller::new(store, Gamescope::new(), runtime_dir);
    let app_id = args.app_id.as_deref();

    match controller.apply(app_id).context("Failed to apply look")? {
        Some(path) => println!("Applied: {}", path.display()),
        None => println!("Correction disabled, look reset"),
    }

    Ok(())
}

pub fn reset(verbose: bool) -> Result<()> {
    let outcome = Gamescope::new()
        .set_look(None)
        .context("Failed to run gamescopectl")?
        .check()
        .context("Failed to reset look")?;

    if verbose && !outcome.stdout.trim().is_empty() {
        println!("{}", outcome.stdout.trim());
    }
    println!("Look reset");
    Ok(())
}
