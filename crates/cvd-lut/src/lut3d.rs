//! 3-dimensional lookup table.
//!
//! A 3D LUT maps RGB input to RGB output through a cube of color values
//! sampled on a regular grid over the unit cube.

use crate::{LutError, LutResult};

/// A 3-dimensional lookup table.
///
/// # Structure
///
/// - `size^3` entries, each containing RGB output values
/// - Stored with R varying slowest and B fastest (see crate docs)
/// - Optional title, written to the `.cube` header
///
/// # Example
///
/// ```rust
/// use cvd_lut::Lut3D;
///
/// let lut = Lut3D::from_data(vec![[0.5, 0.5, 0.5]; 8], 2).unwrap();
/// assert_eq!(lut.entry_count(), 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lut3D {
    /// LUT data, flattened as `b + size * (g + size * r)`
    pub data: Vec<[f64; 3]>,
    /// Cube size (grid points per axis)
    pub size: usize,
    /// Human-readable title
    pub title: Option<String>,
}

impl Lut3D {
    /// Creates a 3D LUT from raw data.
    ///
    /// Data must be in R-slowest/B-fastest order with exactly `size^3` entries.
    pub fn from_data(data: Vec<[f64; 3]>, size: usize) -> LutResult<Self> {
        if size == 0 {
            return Err(LutError::InvalidSize("size must be positive".into()));
        }
        let expected = size * size * size;
        if data.len() != expected {
            return Err(LutError::InvalidSize(format!(
                "expected {} entries for size {}, got {}",
                expected,
                size,
                data.len()
            )));
        }
        Ok(Self {
            data,
            size,
            title: None,
        })
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the total number of entries in the LUT.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.size * self.size * self.size
    }

    /// Returns the flat index for grid position (r, g, b).
    #[inline]
    pub fn index(&self, r: usize, g: usize, b: usize) -> usize {
        b + self.size * (g + self.size * r)
    }

    /// Gets the value at grid position (r, g, b).
    ///
    /// Returns `None` outside the grid.
    pub fn get(&self, r: usize, g: usize, b: usize) -> Option<[f64; 3]> {
        if r >= self.size || g >= self.size || b >= self.size {
            return None;
        }
        self.data.get(self.index(r, g, b)).copied()
    }

    /// Returns true if every channel of every entry lies in [0, 1].
    pub fn is_normalized(&self) -> bool {
        self.data
            .iter()
            .flatten()
            .all(|v| (0.0..=1.0).contains(v))
    }
}
