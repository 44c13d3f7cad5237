//! `.cube` 3D LUT format support.
//!
//! # Format
//!
//! ```text
//! TITLE "LUT Name"
//! LUT_3D_SIZE 32
//! 0.000000 0.000000 0.000000
//! ...
//! 1.000000 1.000000 1.000000
//! ```
//!
//! The writer emits exactly that: a two-line header followed by `size^3`
//! rows of three values with six decimals, R slowest and B fastest. No
//! comments, domain lines or blank lines.
//!
//! # Example
//!
//! ```rust,ignore
//! use cvd_lut::cube;
//!
//! cube::write_3d("deutan.cube", &lut)?;
//! let back = cube::read_3d("deutan.cube")?;
//! ```

use crate::{Lut3D, LutError, LutResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Title used when the LUT carries none.
pub const DEFAULT_TITLE: &str = "Color Vision LUT";

/// Reads a 3D LUT from a .cube file.
pub fn read_3d<P: AsRef<Path>>(path: P) -> LutResult<Lut3D> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    parse_3d(reader)
}

/// Parses a 3D LUT from a reader.
///
/// Accepts the subset this crate writes plus comments, blank lines and a
/// unit-cube `DOMAIN_MIN`/`DOMAIN_MAX`. Rows are kept in file order.
pub fn parse_3d<R: BufRead>(reader: R) -> LutResult<Lut3D> {
    let mut size: Option<usize> = None;
    let mut title: Option<String> = None;
    let mut data: Vec<[f64; 3]> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with("TITLE") {
            title = Some(parse_title(line));
        } else if line.starts_with("LUT_3D_SIZE") {
            size = Some(parse_size(line)?);
        } else if line.starts_with("LUT_1D_SIZE") {
            return Err(LutError::ParseError("expected 3D LUT, found 1D".into()));
        } else if line.starts_with("DOMAIN_MIN") {
            expect_domain(line, 0.0)?;
        } else if line.starts_with("DOMAIN_MAX") {
            expect_domain(line, 1.0)?;
        } else {
            data.push(parse_rgb(line)?);
        }
    }

    let size = size.ok_or_else(|| LutError::ParseError("missing LUT_3D_SIZE".into()))?;
    let expected = size * size * size;

    if data.len() != expected {
        return Err(LutError::ParseError(format!(
            "expected {} values, found {}",
            expected,
            data.len()
        )));
    }

    let mut lut = Lut3D::from_data(data, size)?;
    lut.title = title;
    Ok(lut)
}

/// Writes a 3D LUT to a .cube file.
///
/// The file is created (or truncated) only after the LUT has been checked,
/// and is flushed before returning.
pub fn write_3d<P: AsRef<Path>>(path: P, lut: &Lut3D) -> LutResult<()> {
    check_len(lut)?;
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_3d_to(&mut writer, lut)?;
    writer.flush()?;
    Ok(())
}

/// Writes a 3D LUT in .cube format to any writer.
pub fn write_3d_to<W: Write>(writer: &mut W, lut: &Lut3D) -> LutResult<()> {
    check_len(lut)?;

    let title = lut.title.as_deref().unwrap_or(DEFAULT_TITLE);
    writeln!(writer, "TITLE \"{}\"", title.replace('"', "'"))?;
    writeln!(writer, "LUT_3D_SIZE {}", lut.size)?;

    for rgb in &lut.data {
        writeln!(writer, "{:.6} {:.6} {:.6}", rgb[0], rgb[1], rgb[2])?;
    }

    Ok(())
}

// Helper functions

fn check_len(lut: &Lut3D) -> LutResult<()> {
    if lut.size == 0 || lut.data.len() != lut.entry_count() {
        return Err(LutError::InvalidSize(format!(
            "size {} needs {} entries, LUT has {}",
            lut.size,
            lut.entry_count(),
            lut.data.len()
        )));
    }
    Ok(())
}

fn parse_title(line: &str) -> String {
    line["TITLE".len()..].trim().trim_matches('"').to_string()
}

fn parse_size(line: &str) -> LutResult<usize> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(LutError::ParseError("invalid size line".into()));
    }
    match parts[1].parse::<usize>() {
        Ok(0) | Err(_) => Err(LutError::ParseError("invalid size value".into())),
        Ok(size) => Ok(size),
    }
}

fn expect_domain(line: &str, bound: f64) -> LutResult<()> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(LutError::ParseError("invalid domain line".into()));
    }
    for part in &parts[1..4] {
        let v: f64 = part
            .parse()
            .map_err(|_| LutError::ParseError(format!("invalid domain value: {}", part)))?;
        if v != bound {
            return Err(LutError::ParseError(format!(
                "unsupported domain: {}",
                line
            )));
        }
    }
    Ok(())
}

fn parse_rgb(line: &str) -> LutResult<[f64; 3]> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(LutError::ParseError(format!("invalid RGB line: {}", line)));
    }
    Ok([
        parts[0].parse().map_err(|_| LutError::ParseError("invalid R value".into()))?,
        parts[1].parse().map_err(|_| LutError::ParseError("invalid G value".into()))?,
        parts[2].parse().map_err(|_| LutError::ParseError("invalid B value".into()))?,
    ])
}
