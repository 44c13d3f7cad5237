//! # cvd-math
//!
//! Fixed-size linear algebra for color-vision-deficiency transforms.
//!
//! - [`Vec3`] - 3-component vectors for sRGB, linear RGB and LMS triplets
//! - [`Mat3`] - 3x3 matrices for conversions between those spaces
//!
//! # Design
//!
//! Everything is `f64` and `Copy`; every operation returns a new value.
//! Matrices are stored **row-major** and applied to **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! The types do not track which color space a triplet lives in. Callers
//! keep sRGB, linear RGB and LMS values apart themselves.
//!
//! # Usage
//!
//! ```rust
//! use cvd_math::{Mat3, Vec3};
//!
//! let lms_from_rgb = Mat3::from_rows([
//!     [0.31399022, 0.63951294, 0.04649755],
//!     [0.15537241, 0.75789446, 0.08670142],
//!     [0.01775239, 0.10944209, 0.87256922],
//! ]);
//!
//! let rgb = Vec3::new(1.0, 0.5, 0.25);
//! let lms = lms_from_rgb * rgb;
//! ```
//!
//! # Used By
//!
//! - `cvd-color` - calibration tables and the transform algorithms

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;
