//! 3D vector type for color triplets.
//!
//! [`Vec3`] holds sRGB, linear RGB or LMS values. Which one is up to the
//! caller.
//!
//! # Usage
//!
//! ```rust
//! use cvd_math::Vec3;
//!
//! let rgb = Vec3::new(1.0, 0.5, 0.25);
//! let scaled = rgb * 2.0;
//! let clamped = scaled.clamp01();
//! ```

use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// A 3D vector for color triplets.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
/// For RGB: x=R, y=G, z=B. For LMS: x=L, y=M, z=S.
///
/// # Example
///
/// ```rust
/// use cvd_math::Vec3;
///
/// let color = Vec3::new(0.5, 0.25, 0.125);
/// assert_eq!(color.x, 0.5);
/// assert_eq!(color[1], 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// X component (R for RGB, L for LMS)
    pub x: f64,
    /// Y component (G for RGB, M for LMS)
    pub y: f64,
    /// Z component (B for RGB, S for LMS)
    pub z: f64,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    ///
    /// ```rust
    /// use cvd_math::Vec3;
    ///
    /// assert_eq!(Vec3::splat(0.5), Vec3::new(0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Clamps each component to [0, 1].
    ///
    /// Saturating: values below 0 become 0, above 1 become 1.
    #[inline]
    pub fn clamp01(self) -> Self {
        self.min(Self::ONE).max(Self::ZERO)
    }

    /// Component-wise power.
    ///
    /// Used for gamma curves; callers keep components non-negative.
    #[inline]
    pub fn powf(self, exp: f64) -> Self {
        Self::new(self.x.powf(exp), self.y.powf(exp), self.z.powf(exp))
    }

    /// Returns a copy with component `i` replaced by `value`.
    ///
    /// # Panics
    ///
    /// Panics if `i > 2`.
    #[inline]
    #[must_use]
    pub fn with(self, i: usize, value: f64) -> Self {
        let mut out = self;
        out[i] = value;
        out
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Vec3 * Vec3 (component-wise)
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> [f64; 3] {
        v.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vec3_clamp01() {
        let v = Vec3::new(-0.5, 0.5, 1.5);
        assert_eq!(v.clamp01(), Vec3::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_vec3_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
    }

    #[test]
    fn test_vec3_powf() {
        let v = Vec3::new(0.0, 0.25, 1.0).powf(0.5);
        approx::assert_abs_diff_eq!(v.y, 0.5);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.z, 1.0);
    }

    #[test]
    fn test_vec3_with_replaces_one_component() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.with(1, 9.0), Vec3::new(1.0, 9.0, 3.0));
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_vec3_index_out_of_bounds() {
        let _ = Vec3::ZERO[3];
    }
}
