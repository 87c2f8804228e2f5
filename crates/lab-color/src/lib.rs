//! # lab-color
//!
//! sRGB pixels to CIE L*a*b* with a D65 reference white.
//!
//! This crate composes the lower crates into the three-stage pipeline used
//! to feed perceptual color math such as error-diffusion dithering:
//!
//! - **Decoder** - Native sRGB samples to 16-bit linear RGB
//! - **RGB to XYZ** - Fixed sRGB / D65 matrix, no clamping
//! - **XYZ to Lab** - CIE 1976 L*a*b* against D65
//!
//! # Architecture
//!
//! ```text
//!                    lab-color
//!                        |
//!     +------------------+------------------+
//!     |                  |                  |
//! lab-transfer    lab-primaries          lab-math
//!     |                  |                  |
//!     +--------+---------+------------------+
//!              |
//!          lab-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use lab_color::{srgb_to_lab, to_linear_rgb};
//! use lab_core::PixelSample;
//!
//! let gray = PixelSample::Gray8(128);
//! assert_eq!(to_linear_rgb(gray).r, 14146);
//!
//! let lab = srgb_to_lab(gray);
//! assert!((lab.l - 53.6).abs() < 0.1);
//! ```
//!
//! # Encodings
//!
//! | Encoding | Channels | Path |
//! |----------|----------|------|
//! | `Gray8` | 1 | 8-bit table, replicated |
//! | `Gray16` | 1 | Direct, replicated |
//! | `Rgb8` / `Rgba8` | 3 / 4 | 8-bit table |
//! | `Rgb16` / `Rgba16` | 3 / 4 | Direct |
//! | `Generic` | 4 | Direct on canonical 16-bit RGBA |
//!
//! Alpha is carried by the sample types but never affects the result.
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Batch conversion on the rayon thread pool
//! - `serde` - Serialization for the value types
//! - `image` - Accept `image` crate pixels through [`sample_to_lab`]
//!
//! # Dependencies
//!
//! - [`lab-core`] - Sample and value types, errors
//! - [`lab-math`] - `Vec3` / `Mat3`
//! - [`lab-transfer`] - sRGB EOTF and quantization
//! - [`lab-primaries`] - sRGB matrix and D65 white
//! - [`tracing`] - Batch-level logging

#![warn(missing_docs)]

pub mod decode;
pub mod lab;
pub mod pipeline;
pub mod xyz;

pub use decode::{decode_interleaved, to_linear_rgb};
pub use lab::{lab_f, xyz_to_lab};
pub use pipeline::{delta_e76, sample_to_lab, samples_to_lab, samples_to_linear, srgb_to_lab};
pub use xyz::linear_rgb_to_xyz;

pub use lab_core::{ColorSample, Encoding, Error, Lab, LinearRgb, PixelSample, Result, Xyz};

/// Prelude module for convenient imports.
///
/// ```
/// use lab_color::prelude::*;
///
/// let lab = srgb_to_lab(PixelSample::Rgb8([0, 0, 0]));
/// assert_eq!(lab, Lab::new(0.0, 0.0, 0.0));
/// ```
pub mod prelude {
    pub use crate::decode::{decode_interleaved, to_linear_rgb};
    pub use crate::lab::xyz_to_lab;
    pub use crate::pipeline::{sample_to_lab, samples_to_lab, srgb_to_lab};
    pub use crate::xyz::linear_rgb_to_xyz;
    pub use lab_core::prelude::*;
}
