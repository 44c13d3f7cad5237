//! Validated generation parameters.
//!
//! [`GenerateRequest::parse`] is the single place where raw caller input is
//! checked. Everything downstream takes the typed request, so the sampler
//! and writer never see an out-of-range strength or an unsupported size.

use crate::{ColorError, ColorResult, Deficiency, Operation};
use std::fmt;
use std::path::PathBuf;

/// Effect strength in `[0.0, 1.0]`.
///
/// 0 is the identity, 1 the full effect. NaN is rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Strength(f64);

impl Strength {
    /// Full effect.
    pub const FULL: Self = Self(1.0);
    /// No effect.
    pub const NONE: Self = Self(0.0);

    /// Validates `value`.
    pub fn new(value: f64) -> ColorResult<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ColorError::validation(
                "strength",
                format!("must be within [0.0, 1.0], got {}", value),
            ))
        }
    }

    /// Raw value.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// `strength * 100`, truncated, as used in default file names.
    #[inline]
    pub fn percent(self) -> u32 {
        (self.0 * 100.0) as u32
    }
}

impl Default for Strength {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<f64> for Strength {
    type Error = ColorError;

    fn try_from(value: f64) -> ColorResult<Self> {
        Self::new(value)
    }
}

impl From<Strength> for f64 {
    fn from(s: Strength) -> f64 {
        s.0
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Supported grid resolutions.
///
/// Only these sizes are produced; the display tooling consuming the files
/// expects one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LutSize {
    /// 16³ = 4,096 entries
    S16,
    /// 32³ = 32,768 entries
    #[default]
    S32,
    /// 64³ = 262,144 entries
    S64,
}

impl LutSize {
    /// All sizes, ascending.
    pub const ALL: [Self; 3] = [Self::S16, Self::S32, Self::S64];

    /// Grid points per axis.
    #[inline]
    pub const fn get(self) -> usize {
        match self {
            Self::S16 => 16,
            Self::S32 => 32,
            Self::S64 => 64,
        }
    }

    /// Total number of entries (`size³`).
    #[inline]
    pub const fn entries(self) -> usize {
        let n = self.get();
        n * n * n
    }
}

impl TryFrom<u32> for LutSize {
    type Error = ColorError;

    fn try_from(value: u32) -> ColorResult<Self> {
        match value {
            16 => Ok(Self::S16),
            32 => Ok(Self::S32),
            64 => Ok(Self::S64),
            other => Err(ColorError::validation(
                "lut_size",
                format!("must be one of 16, 32, 64, got {}", other),
            )),
        }
    }
}

impl fmt::Display for LutSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// One LUT generation job.
///
/// # Example
///
/// ```rust
/// use cvd_color::{GenerateRequest, LutSize};
///
/// let req = GenerateRequest::parse("deuteranope", "correct", 0.75, 16).unwrap();
/// assert_eq!(req.size, LutSize::S16);
/// assert_eq!(req.default_file_name(), "deutan_correct_75.cube");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    /// Deficiency to target.
    pub deficiency: Deficiency,
    /// Algorithm to run.
    pub operation: Operation,
    /// Effect strength.
    pub strength: Strength,
    /// Grid resolution.
    pub size: LutSize,
    /// Destination; derived from the parameters when `None`.
    pub output: Option<PathBuf>,
}

impl GenerateRequest {
    /// Creates a request at full strength and the default size.
    pub fn new(deficiency: Deficiency, operation: Operation) -> Self {
        Self {
            deficiency,
            operation,
            strength: Strength::default(),
            size: LutSize::default(),
            output: None,
        }
    }

    /// Validates raw parameters into a request.
    ///
    /// Checks deficiency, operation, strength and size in that order and
    /// reports the first failure.
    pub fn parse(
        deficiency: &str,
        operation: &str,
        strength: f64,
        size: u32,
    ) -> ColorResult<Self> {
        Ok(Self {
            deficiency: deficiency.parse()?,
            operation: operation.parse()?,
            strength: Strength::new(strength)?,
            size: LutSize::try_from(size)?,
            output: None,
        })
    }

    /// Sets the strength.
    #[must_use]
    pub fn with_strength(mut self, strength: Strength) -> Self {
        self.strength = strength;
        self
    }

    /// Sets the grid size.
    #[must_use]
    pub fn with_size(mut self, size: LutSize) -> Self {
        self.size = size;
        self
    }

    /// Sets an explicit output path.
    #[must_use]
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// `<deficiency>_<operation>_<percent>.cube`
    pub fn default_file_name(&self) -> String {
        format!(
            "{}_{}_{}.cube",
            self.deficiency,
            self.operation,
            self.strength.percent()
        )
    }

    /// Where the LUT will be written.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.default_file_name()))
    }

    /// Title written to the `.cube` header.
    pub fn title(&self) -> String {
        format!(
            "{} {} (strength={})",
            self.deficiency.label(),
            self.operation.label(),
            self.strength
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_bounds() {
        assert!(Strength::new(0.0).is_ok());
        assert!(Strength::new(1.0).is_ok());
        assert_eq!(Strength::new(1.5).unwrap_err().field(), Some("strength"));
        assert!(Strength::new(-0.01).is_err());
        assert!(Strength::new(f64::NAN).is_err());
        assert!(Strength::new(f64::INFINITY).is_err());
    }

    #[test]
    fn strength_percent_truncates() {
        assert_eq!(Strength::new(0.5).unwrap().percent(), 50);
        assert_eq!(Strength::new(0.29).unwrap().percent(), 28);
        assert_eq!(Strength::FULL.percent(), 100);
        assert_eq!(Strength::NONE.percent(), 0);
    }

    #[test]
    fn lut_size_allowed_set() {
        assert_eq!(LutSize::try_from(16).unwrap(), LutSize::S16);
        assert_eq!(LutSize::try_from(64).unwrap().entries(), 262_144);
        assert_eq!(LutSize::default().get(), 32);
        for bad in [0, 10, 17, 33, 128] {
            assert_eq!(LutSize::try_from(bad).unwrap_err().field(), Some("lut_size"));
        }
    }

    #[test]
    fn parse_reports_first_bad_field() {
        let err = GenerateRequest::parse("achromat", "invert", 2.0, 10).unwrap_err();
        assert_eq!(err.field(), Some("deficiency"));
        let err = GenerateRequest::parse("protan", "invert", 2.0, 10).unwrap_err();
        assert_eq!(err.field(), Some("operation"));
        let err = GenerateRequest::parse("protan", "simulate", 2.0, 10).unwrap_err();
        assert_eq!(err.field(), Some("strength"));
        let err = GenerateRequest::parse("protan", "simulate", 1.0, 10).unwrap_err();
        assert_eq!(err.field(), Some("lut_size"));
    }

    #[test]
    fn default_names_and_title() {
        let req = GenerateRequest::new(Deficiency::Deutan, Operation::Correct);
        assert_eq!(req.default_file_name(), "deutan_correct_100.cube");
        assert_eq!(req.output_path(), PathBuf::from("deutan_correct_100.cube"));
        assert_eq!(req.title(), "Deutan Correct (strength=1.00)");

        let req = GenerateRequest::parse("tritanope", "daltonise", 0.5, 64)
            .unwrap()
            .with_output("/tmp/x.cube");
        assert_eq!(req.default_file_name(), "tritan_daltonize_50.cube");
        assert_eq!(req.output_path(), PathBuf::from("/tmp/x.cube"));
        assert_eq!(req.title(), "Tritan Daltonize (strength=0.50)");
    }
}
