//! Pure power-law gamma for sRGB ↔ linear RGB.
//!
//! The transforms model display sRGB as a plain 2.2 power curve, not the
//! piecewise sRGB EOTF.
//!
//! # Range
//!
//! - Input/Output: [0, 1]; non-positive input maps to 0

use cvd_math::Vec3;

/// Display gamma.
pub const GAMMA: f64 = 2.2;

/// EOTF: `v^2.2`
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= 0.0 { 0.0 } else { v.powf(GAMMA) }
}

/// OETF: `l^(1/2.2)`
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= 0.0 { 0.0 } else { l.powf(1.0 / GAMMA) }
}

/// Gamma-decodes an sRGB triplet to linear RGB.
#[inline]
pub fn decode(rgb: Vec3) -> Vec3 {
    Vec3::new(eotf(rgb.x), eotf(rgb.y), eotf(rgb.z))
}

/// Gamma-encodes a linear RGB triplet to sRGB.
#[inline]
pub fn encode(linear: Vec3) -> Vec3 {
    Vec3::new(oetf(linear.x), oetf(linear.y), oetf(linear.z))
}
