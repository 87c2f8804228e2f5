//! # lab-core
//!
//! Core types for converting sRGB pixels to CIE L*a*b*.
//!
//! This crate provides the value types shared by the rest of the workspace:
//!
//! - [`PixelSample`] - One sRGB pixel in its native storage encoding
//! - [`Encoding`], [`BitDepth`] - Tags describing that encoding
//! - [`Channel`] - Trait for `u8` / `u16` channel storage
//! - [`ColorSample`] - Seam to the image loading layer
//! - [`LinearRgb`], [`Xyz`], [`Lab`] - Outputs of the three pipeline stages
//! - [`Error`] - Source adaptation and buffer layout errors
//!
//! ## Crate Structure
//!
//! ```text
//! lab-core (this crate)
//!    ^
//!    |
//!    +-- lab-math (Vec3, Mat3)
//!    +-- lab-transfer (sRGB EOTF, quantization)
//!    +-- lab-primaries (sRGB / D65 matrices)
//!    +-- lab-color (decoder, XYZ, Lab)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialization for tags and color triples
//! - `image` - [`ColorSample`] for `image` crate pixel types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod format;
pub mod pixel;

#[cfg(feature = "image")]
mod image;

// Re-exports for convenience
pub use color::{Lab, LinearRgb, Xyz};
pub use error::{Error, Result};
pub use format::{BitDepth, Channel, Encoding};
pub use pixel::{ColorSample, PixelSample};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use lab_core::prelude::*;
///
/// let px = PixelSample::Gray8(128);
/// assert_eq!(px.encoding(), Encoding::Gray8);
/// ```
pub mod prelude {
    pub use crate::color::{Lab, LinearRgb, Xyz};
    pub use crate::error::{Error, Result};
    pub use crate::format::{BitDepth, Channel, Encoding};
    pub use crate::pixel::{ColorSample, PixelSample};
}
