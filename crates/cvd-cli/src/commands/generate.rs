//! LUT generation command

use crate::GenerateArgs;
use anyhow::{Context, Result};
use cvd_color::{GenerateRequest, generate_lut};
use tracing::debug;

pub fn run(args: GenerateArgs, verbose: bool) -> Result<()> {
    let mut req =
        GenerateRequest::parse(&args.deficiency, &args.operation, args.strength, args.size)?;
    if let Some(output) = args.output {
        req = req.with_output(output);
    }
    debug!(?req, "parsed request");

    if verbose {
        println!("Generating {0}x{0}x{0} LUT", req.size);
        println!("  Deficiency: {}", req.deficiency);
        println!("  Operation:  {}", req.operation);
        println!("  Strength:   {}", req.strength);
    }

    let path = generate_lut(&req)
        .with_context(|| format!("Failed to write: {}", req.output_path().display()))?;

    if verbose {
        let bytes = std::fs::metadata(&path)
            .with_context(|| format!("Failed to stat: {}", path.display()))?
            .len();
        println!("  Entries:    {}", req.size.entries());
        println!("Generated: {} ({})", path.display(), super::format_size(bytes));
    } else {
        println!("Generated: {}", path.display());
    }

    Ok(())
}
