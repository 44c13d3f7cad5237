//! # cvd-color
//!
//! Color-vision-deficiency transforms baked into 3D LUTs.
//!
//! Three algorithms, each selected by an [`Operation`] and targeting a
//! [`Deficiency`]:
//!
//! - **Simulate** - how a color appears with the deficiency
//! - **Daltonize** - Fidaner error redistribution into visible channels
//! - **Correct** - hue-shift / brightness blend on the lost LMS channel
//!
//! # Architecture
//!
//! ```text
//!                 cvd-color
//!                     |
//!        +------------+------------+
//!        |                         |
//!    cvd-math                  cvd-lut
//!  (Vec3, Mat3)        (Lut3D, sampler, .cube)
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cvd_color::{generate_lut, GenerateRequest};
//!
//! // deutan correction at 75%, 64³ grid
//! let req = GenerateRequest::parse("deutan", "correct", 0.75, 64)?;
//! let path = generate_lut(&req)?; // deutan_correct_75.cube
//! # Ok::<(), cvd_color::ColorError>(())
//! ```
//!
//! Per-color access without a LUT:
//!
//! ```rust
//! use cvd_color::{Deficiency, Operation};
//! use cvd_math::Vec3;
//!
//! let out = Operation::Daltonize.apply(Vec3::new(0.6, 0.4, 0.3), Deficiency::Protan, 1.0);
//! assert_eq!(out.x, 0.6);
//! ```
//!
//! # Color Models
//!
//! | Algorithm | Domain | LMS model |
//! |-----------|--------|-----------|
//! | simulate | gamma 2.2 linear | [`matrices::GAMMA_LMS`] |
//! | daltonize | input RGB, no gamma | [`matrices::VIENOT_LMS`] |
//! | correct | gamma 2.2 linear | [`matrices::GAMMA_LMS`] |
//!
//! # Used By
//!
//! - `cvd-plugin` - settings-driven generation and activation
//! - `cvd-cli` - `cvdlut` binary

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod deficiency;
mod error;
mod generate;
mod request;
pub mod gamma;
pub mod matrices;
pub mod transform;

pub use deficiency::{Deficiency, Operation};
pub use error::{ColorError, ColorResult};
pub use generate::{build_lut, generate_lut};
pub use request::{GenerateRequest, LutSize, Strength};
pub use transform::{correct, daltonize, simulate};

// Re-export sub-crates for convenience
pub use cvd_lut as lut;
pub use cvd_math as math;
