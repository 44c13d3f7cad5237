//! Calibration tables.
//!
//! Published constants, transcribed as-is. They are grouped by the
//! algorithm that consumes them so the two LMS models cannot be mixed:
//!
//! | Table | Used by |
//! |-------|---------|
//! | [`GAMMA_LMS`], [`SIMULATE`] | simulate, correct |
//! | [`VIENOT_LMS`], [`vienot_deficiency`] | daltonize |
//! | [`error_to_delta`] | daltonize |
//! | [`DELTA_RECIP`], [`correction_amount`] | correct |
//!
//! # Sources
//!
//! - Gamma-domain LMS model and deficiency rows: ixora.io color-blindness
//!   simulation research.
//! - Alternative LMS model and deficiency operators: Viénot, Brettel and
//!   Mollon (1999).
//! - Error-to-delta matrices: Fidaner, Lin and Ozguven (2005).
//! - Correction tuning: colour-blind-luts by Andrew Willmott.

use crate::Deficiency;
use cvd_math::{Mat3, Vec3};

/// A pair of linear-RGB ↔ LMS conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LmsModel {
    /// Linear RGB to LMS.
    pub lms_from_rgb: Mat3,
    /// LMS to linear RGB.
    pub rgb_from_lms: Mat3,
}

impl LmsModel {
    /// Converts RGB to LMS.
    #[inline]
    pub fn to_lms(&self, rgb: Vec3) -> Vec3 {
        self.lms_from_rgb * rgb
    }

    /// Converts LMS to RGB.
    #[inline]
    pub fn to_rgb(&self, lms: Vec3) -> Vec3 {
        self.rgb_from_lms * lms
    }
}

/// LMS model for gamma-decoded sRGB (simulate and correct).
pub const GAMMA_LMS: LmsModel = LmsModel {
    lms_from_rgb: Mat3::from_rows([
        [0.31399022, 0.63951294, 0.04649755],
        [0.15537241, 0.75789446, 0.08670142],
        [0.01775239, 0.10944209, 0.87256922],
    ]),
    rgb_from_lms: Mat3::from_rows([
        [5.47221206, -4.64196010, 0.16963708],
        [-1.1252419, 2.29317094, -0.16789520],
        [0.02980165, -0.19318073, 1.16364789],
    ]),
};

/// What each LMS channel reads under full deficiency, one row per channel.
///
/// Row `i` rebuilds channel `i` from the other two; it only makes sense
/// against [`GAMMA_LMS`].
pub const SIMULATE: Mat3 = Mat3::from_rows([
    [0.0, 1.05118294, -0.05116099],
    [0.9513092, 0.0, 0.04866992],
    [-0.86744736, 1.86727089, 0.0],
]);

/// Viénot LMS model (daltonize only).
pub const VIENOT_LMS: LmsModel = LmsModel {
    lms_from_rgb: Mat3::from_rows([
        [17.8824, 43.5161, 4.11935],
        [3.45565, 27.1554, 3.86714],
        [0.0299566, 0.184309, 1.46709],
    ]),
    rgb_from_lms: Mat3::from_rows([
        [0.080944447900, -0.13050440900, 0.116721066],
        [-0.010248533500, 0.05401932660, -0.113614708],
        [-0.000365296938, -0.00412161469, 0.693511405],
    ]),
};

const VIENOT_PROTAN: Mat3 = Mat3::from_rows([
    [0.0, 2.02344, -2.52581],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
]);

const VIENOT_DEUTAN: Mat3 = Mat3::from_rows([
    [1.0, 0.0, 0.0],
    [0.494207, 0.0, 1.24827],
    [0.0, 0.0, 1.0],
]);

const VIENOT_TRITAN: Mat3 = Mat3::from_rows([
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [-0.395913, 0.801109, 0.0],
]);

/// Viénot LMS deficiency operator: zeroes the lost channel and rebuilds it
/// from the remaining two.
pub const fn vienot_deficiency(deficiency: Deficiency) -> &'static Mat3 {
    match deficiency {
        Deficiency::Protan => &VIENOT_PROTAN,
        Deficiency::Deutan => &VIENOT_DEUTAN,
        Deficiency::Tritan => &VIENOT_TRITAN,
    }
}

const ERROR_TO_DELTA_PROTAN: Mat3 = Mat3::from_rows([
    [0.0, 0.0, 0.0],
    [0.7, 1.0, 0.0],
    [0.7, 0.0, 1.0],
]);

const ERROR_TO_DELTA_DEUTAN: Mat3 = Mat3::from_rows([
    [1.0, 0.7, 0.0],
    [0.0, 0.0, 0.0],
    [0.0, 0.7, 1.0],
]);

const ERROR_TO_DELTA_TRITAN: Mat3 = Mat3::from_rows([
    [1.0, 0.0, 0.7],
    [0.0, 1.0, 0.7],
    [0.0, 0.0, 0.0],
]);

/// Fidaner matrix mapping the RGB simulation error to a correction delta.
pub const fn error_to_delta(deficiency: Deficiency) -> &'static Mat3 {
    match deficiency {
        Deficiency::Protan => &ERROR_TO_DELTA_PROTAN,
        Deficiency::Deutan => &ERROR_TO_DELTA_DEUTAN,
        Deficiency::Tritan => &ERROR_TO_DELTA_TRITAN,
    }
}

/// Redistribution directions for correct; column `i` serves channel `i`.
pub const DELTA_RECIP: Mat3 = Mat3::from_rows([
    [0.0, 1.05118299, -1.15280771],
    [0.951309144, 0.0, 0.535540938],
    [-19.5461426, 20.5465717, 0.0],
]);

/// Per-channel redistribution weight for correct.
///
/// Negated relative to the values stored in the colour-blind-luts C++
/// source (0.25, -0.3, -0.07).
pub const fn correction_amount(deficiency: Deficiency) -> f64 {
    match deficiency {
        Deficiency::Protan => -0.25,
        Deficiency::Deutan => 0.3,
        Deficiency::Tritan => 0.07,
    }
}
