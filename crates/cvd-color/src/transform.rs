//! The three color-vision-deficiency transforms.
//!
//! Each maps an sRGB color in [0, 1] plus a deficiency and a strength in
//! [0, 1] to an sRGB color in [0, 1]. Strength 0 returns the input
//! unchanged, strength 1 is the full effect.
//!
//! The published `rgb_from_lms` is only a rounded inverse of `lms_from_rgb`,
//! so an LMS round trip drifts by up to ~3e-4 near the cube corners.
//! `simulate` and `correct` therefore short-circuit at strength 0.
//!
//! # Pipelines
//!
//! ```text
//! simulate:  sRGB -> linear -> LMS -> lerp(channel, simulated) -> linear -> clamp -> sRGB
//! daltonize: RGB -> Viénot simulate -> error -> Fidaner delta -> RGB + delta -> clamp
//! correct:   sRGB -> linear -> LMS -> + multiplier * error -> linear -> clamp -> sRGB
//! ```
//!
//! Daltonize works directly in the input RGB domain, without a gamma step.

use crate::Deficiency;
use crate::Operation;
use crate::gamma;
use crate::matrices::{
    DELTA_RECIP, GAMMA_LMS, SIMULATE, VIENOT_LMS, correction_amount, error_to_delta,
    vienot_deficiency,
};
use cvd_math::Vec3;

impl Operation {
    /// Runs this operation on one sRGB color.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cvd_color::{Deficiency, Operation};
    /// use cvd_math::Vec3;
    ///
    /// let rgb = Vec3::new(0.6, 0.4, 0.3);
    /// let out = Operation::Simulate.apply(rgb, Deficiency::Deutan, 1.0);
    /// assert!((out.x - out.y).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn apply(self, rgb: Vec3, deficiency: Deficiency, strength: f64) -> Vec3 {
        match self {
            Self::Simulate => simulate(rgb, deficiency, strength),
            Self::Daltonize => daltonize(rgb, deficiency, strength),
            Self::Correct => correct(rgb, deficiency, strength),
        }
    }
}

/// LMS response of a gamma-encoded sRGB color, plus the value its affected
/// channel would read under full deficiency.
#[inline]
fn lms_and_simulated(rgb: Vec3, deficiency: Deficiency) -> (Vec3, f64) {
    let lms = GAMMA_LMS.to_lms(gamma::decode(rgb));
    let simulated = SIMULATE.row(deficiency.channel()).dot(lms);
    (lms, simulated)
}

#[inline]
fn lms_to_srgb(lms: Vec3) -> Vec3 {
    gamma::encode(GAMMA_LMS.to_rgb(lms).clamp01())
}

/// Simulates how `rgb` appears to a viewer with `deficiency`.
///
/// The affected LMS channel is interpolated from its own value (strength 0)
/// to the value rebuilt from the other two channels (strength 1).
pub fn simulate(rgb: Vec3, deficiency: Deficiency, strength: f64) -> Vec3 {
    if strength == 0.0 {
        return rgb;
    }
    let ch = deficiency.channel();
    let (lms, simulated) = lms_and_simulated(rgb, deficiency);

    let affected = lms[ch];
    let lms = lms.with(ch, affected + strength * (simulated - affected));

    lms_to_srgb(lms)
}

/// Fidaner daltonization.
///
/// Computes what the viewer loses (original minus Viénot simulation) and
/// pushes that error into channels they can still see.
pub fn daltonize(rgb: Vec3, deficiency: Deficiency, strength: f64) -> Vec3 {
    let lms = vienot_deficiency(deficiency) * VIENOT_LMS.to_lms(rgb);
    let simulated = VIENOT_LMS.to_rgb(lms);

    let error = rgb - simulated;
    let delta = error_to_delta(deficiency) * (error * strength);

    (rgb + delta).clamp01()
}

/// Hybrid correction.
///
/// Mixes two strategies on the scaled LMS error of the affected channel:
/// - hue shift, weighted `strength²`: push the error along a column of
///   [`DELTA_RECIP`] into the other channels
/// - brightness, weighted `(1 - strength) * 2`: amplify the affected channel
///
/// At strength 0 the input is returned as is; at strength 1 only the hue
/// shift remains.
pub fn correct(rgb: Vec3, deficiency: Deficiency, strength: f64) -> Vec3 {
    if strength == 0.0 {
        return rgb;
    }
    let ch = deficiency.channel();
    let (lms, simulated) = lms_and_simulated(rgb, deficiency);
    let error = strength * (lms[ch] - simulated);

    let hue_shift = strength * strength;
    let brightness = 1.0 - strength;

    let multiplier = (DELTA_RECIP.col(ch) * (hue_shift * correction_amount(deficiency)))
        .with(ch, brightness * 2.0);

    lms_to_srgb(lms + multiplier * error)
}
