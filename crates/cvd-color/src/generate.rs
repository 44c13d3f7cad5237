//! Generation entry point: sample, title, write.

use crate::{ColorResult, GenerateRequest};
use cvd_lut::{Lut3D, cube};
use cvd_math::Vec3;
use std::path::PathBuf;
use tracing::{debug, info};

/// Samples the request's transform into a titled LUT without touching disk.
pub fn build_lut(req: &GenerateRequest) -> ColorResult<Lut3D> {
    let op = req.operation;
    let deficiency = req.deficiency;
    let strength = req.strength.get();

    debug!(
        %deficiency, %op, strength, size = req.size.get(),
        "sampling LUT"
    );

    let lut = Lut3D::sample(req.size.get(), |rgb| {
        op.apply(Vec3::from(rgb), deficiency, strength).to_array()
    })?;
    Ok(lut.with_title(req.title()))
}

/// Generates the LUT described by `req` and writes it as `.cube`.
///
/// Returns the written path: the request's output, or its default file name
/// relative to the working directory. The request is already validated, so
/// in practice only the write can fail.
///
/// # Example
///
/// ```rust,no_run
/// use cvd_color::{generate_lut, GenerateRequest};
///
/// let req = GenerateRequest::parse("protan", "daltonize", 1.0, 32)?;
/// let path = generate_lut(&req)?;
/// println!("wrote {}", path.display());
/// # Ok::<(), cvd_color::ColorError>(())
/// ```
pub fn generate_lut(req: &GenerateRequest) -> ColorResult<PathBuf> {
    let path = req.output_path();
    let lut = build_lut(req)?;

    cube::write_3d(&path, &lut)?;

    info!(
        path = %path.display(),
        entries = lut.entry_count(),
        "LUT written"
    );
    Ok(path)
}
