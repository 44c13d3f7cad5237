//! Regular-grid sampling of a continuous RGB transform.

use crate::{Lut3D, LutError, LutResult};
use rayon::prelude::*;

/// Input coordinate of grid cell `index` along one axis.
///
/// Samples sit at the cell center, `(index + 0.5) / size`, never at the
/// lower corner.
///
/// ```rust
/// use cvd_lut::cell_center;
///
/// assert_eq!(cell_center(0, 2), 0.25);
/// assert_eq!(cell_center(1, 2), 0.75);
/// ```
#[inline]
pub fn cell_center(index: usize, size: usize) -> f64 {
    (index as f64 + 0.5) / size as f64
}

impl Lut3D {
    /// Bakes `transform` into a `size^3` LUT.
    ///
    /// Every cell center of the unit cube is passed through `transform`, the
    /// result is clamped to [0, 1] and stored in R-slowest/B-fastest order.
    /// Cells are computed in parallel; the output order does not depend on
    /// scheduling.
    ///
    /// Returns [`LutError::InvalidSize`] for a zero `size`, like
    /// [`Lut3D::from_data`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use cvd_lut::Lut3D;
    ///
    /// let lut = Lut3D::sample(4, |rgb| rgb)?;
    /// assert_eq!(lut.data[0], [0.125, 0.125, 0.125]);
    /// # Ok::<(), cvd_lut::LutError>(())
    /// ```
    pub fn sample<F>(size: usize, transform: F) -> LutResult<Self>
    where
        F: Fn([f64; 3]) -> [f64; 3] + Sync,
    {
        if size == 0 {
            return Err(LutError::InvalidSize("size must be positive".into()));
        }

        let plane = size * size;
        let data: Vec<[f64; 3]> = (0..plane * size)
            .into_par_iter()
            .map(|i| {
                let input = [
                    cell_center(i / plane, size),
                    cell_center((i / size) % size, size),
                    cell_center(i % size, size),
                ];
                transform(input).map(|v| v.clamp(0.0, 1.0))
            })
            .collect();

        Ok(Self {
            data,
            size,
            title: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count() {
        for size in [1, 2, 5] {
            let lut = Lut3D::sample(size, |rgb| rgb).unwrap();
            assert_eq!(lut.data.len(), size * size * size);
            assert_eq!(lut.size, size);
        }
    }

    #[test]
    fn sample_rejects_zero_size() {
        let err = Lut3D::sample(0, |rgb| rgb).unwrap_err();
        assert!(matches!(err, LutError::InvalidSize(_)));
        assert_eq!(err.to_string(), "invalid LUT size: size must be positive");
    }

    #[test]
    fn sample_order_blue_fastest() {
        let lut = Lut3D::sample(2, |rgb| rgb).unwrap();
        let expected = [
            [0.25, 0.25, 0.25],
            [0.25, 0.25, 0.75],
            [0.25, 0.75, 0.25],
            [0.25, 0.75, 0.75],
            [0.75, 0.25, 0.25],
            [0.75, 0.25, 0.75],
            [0.75, 0.75, 0.25],
            [0.75, 0.75, 0.75],
        ];
        assert_eq!(lut.data, expected);
    }

    #[test]
    fn sample_clamps_output() {
        let lut = Lut3D::sample(3, |[r, g, b]| [r * 4.0 - 1.0, -g, b + 2.0]).unwrap();
        assert!(lut.is_normalized());
        assert_eq!(lut.data[0], [0.0, 0.0, 1.0]);
        assert_eq!(lut.data[26][0], 1.0);
    }

    #[test]
    fn sample_matches_grid_position() {
        let lut = Lut3D::sample(5, |rgb| rgb).unwrap();
        let v = lut.get(4, 1, 3).unwrap();
        approx::assert_abs_diff_eq!(v[0], 0.9);
        approx::assert_abs_diff_eq!(v[1], 0.3);
        approx::assert_abs_diff_eq!(v[2], 0.7);
    }
}
