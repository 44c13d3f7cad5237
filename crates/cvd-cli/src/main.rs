//! cvdlut - color vision deficiency LUT generator
//!
//! Bakes simulate / daltonize / correct transforms into `.cube` files and
//! manages the per-app settings used to activate them as gamescope looks.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "cvdlut")]
#[command(author, version, about = "Color vision deficiency LUT generator")]
#[command(long_about = "
Generates 3D color LUTs (.cube) that simulate, daltonize or correct
protan, deutan and tritan color vision, and applies them as gamescope looks.

Examples:
  cvdlut generate deutan correct                 # deutan_correct_100.cube, 32^3
  cvdlut generate protan simulate -s 0.5 --size 64
  cvdlut generate tritan daltonize -o tritan.cube -v
  cvdlut config set --deficiency protan --strength 0.8
  cvdlut config set --app-id 1245620 --enabled false
  cvdlut apply --app-id 1245620                  # generate + set_look
  cvdlut reset                                   # clear the active look
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Settings file (default: <config dir>/cvd-lut/settings.yaml)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Directory the active lut.cube is written to
    #[arg(long = "runtime-dir", global = true)]
    runtime_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a .cube LUT
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Generate the configured LUT and activate it
    Apply(AppArgs),

    /// Clear the active look
    Reset,

    /// Show or edit stored settings
    Config(ConfigArgs),
}

/// Arguments for the `generate` command.
#[derive(Args)]
struct GenerateArgs {
    /// Deficiency: protan, deutan, tritan
    deficiency: String,

    /// Operation: simulate, daltonize, correct
    operation: String,

    /// Effect strength in [0, 1]
    #[arg(short, long, default_value = "1.0")]
    strength: f64,

    /// Output file (default: <deficiency>_<operation>_<percent>.cube)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Grid size: 16, 32 or 64
    #[arg(long, default_value = "32")]
    size: u32,
}

/// Application scope shared by `apply` and `config`.
#[derive(Args)]
struct AppArgs {
    /// Application id; omit for the global scope
    #[arg(long = "app-id")]
    app_id: Option<String>,
}

/// Arguments for the `config` command.
#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config as JSON
    Show(AppArgs),

    /// Update selected fields
    Set(ConfigSetArgs),

    /// Restore defaults (all scopes when no app id is given)
    Reset(AppArgs),
}

/// Arguments for `config set`.
#[derive(Args)]
struct ConfigSetArgs {
    #[command(flatten)]
    app: AppArgs,

    /// Enable or disable the look
    #[arg(long)]
    enabled: Option<bool>,

    /// Deficiency: protan, deutan, tritan
    #[arg(long)]
    deficiency: Option<String>,

    /// Operation: simulate, daltonize, correct
    #[arg(long)]
    operation: Option<String>,

    /// Effect strength in [0, 1]
    #[arg(short, long)]
    strength: Option<f64>,

    /// Grid size: 16, 32 or 64
    #[arg(long)]
    size: Option<u32>,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let settings = cli.settings.as_deref();
    match cli.command {
        Commands::Generate(args) => commands::generate::run(args, cli.verbose),
        Commands::Apply(args) => {
            commands::apply::run(args, settings, cli.runtime_dir.as_deref(), cli.verbose)
        }
        Commands::Reset => commands::apply::reset(cli.verbose),
        Commands::Config(args) => commands::config::run(args, settings, cli.verbose),
    }
}
