//! # cvd-lut
//!
//! 3D look-up tables for color-vision-deficiency transforms.
//!
//! - [`Lut3D`] - an N³ grid of output colors in canonical file order
//! - [`Lut3D::sample`] - bakes a continuous RGB transform into a grid
//! - [`cube`] - `.cube` writer and reader
//!
//! # Ordering
//!
//! Entries are stored and written with **R slowest, B fastest**:
//!
//! ```text
//! index = b + size * (g + size * r)
//! ```
//!
//! Consumers of the generated files assume this order, so it is the only
//! one this crate produces or accepts.
//!
//! # Usage
//!
//! ```rust
//! use cvd_lut::{cube, Lut3D};
//!
//! // Swap red and blue
//! let lut = Lut3D::sample(16, |[r, g, b]| [b, g, r])?.with_title("Swap");
//!
//! let mut text: Vec<u8> = Vec::new();
//! cube::write_3d_to(&mut text, &lut)?;
//! # Ok::<(), cvd_lut::LutError>(())
//! ```
//!
//! # Used By
//!
//! - `cvd-color` - generation entry point

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod lut3d;
mod sample;
pub mod cube;

pub use error::{LutError, LutResult};
pub use lut3d::Lut3D;
pub use sample::cell_center;
pub use cube::{read_3d as read_cube_3d, write_3d as write_cube_3d};
