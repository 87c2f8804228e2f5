//! Composed sRGB to Lab conversion, per sample and in batches.
//!
//! ```text
//! PixelSample -> to_linear_rgb -> LinearRgb -> linear_rgb_to_xyz -> Xyz -> xyz_to_lab -> Lab
//! ```
//!
//! Every stage is a pure function of its input, so batches are split
//! across threads freely when the `parallel` feature is enabled.

use lab_core::{ColorSample, Lab, LinearRgb, PixelSample, Result};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::decode::to_linear_rgb;
use crate::lab::xyz_to_lab;
use crate::xyz::linear_rgb_to_xyz;

/// Converts one sRGB sample to CIE L*a*b* (D65).
///
/// # Example
///
/// ```rust
/// use lab_color::srgb_to_lab;
/// use lab_core::PixelSample;
///
/// let lab = srgb_to_lab(PixelSample::Rgb8([255, 255, 255]));
/// assert!((lab.l - 100.0).abs() < 0.01);
/// assert!(lab.a.abs() < 0.01 && lab.b.abs() < 0.01);
/// ```
#[inline]
pub fn srgb_to_lab(sample: PixelSample) -> Lab {
    xyz_to_lab(linear_rgb_to_xyz(to_linear_rgb(sample)))
}

/// Converts any [`ColorSample`] to Lab.
///
/// Sources with a native encoding take the fast path. Others are read as
/// 16-bit RGBA through the generic fallback. Sources offering neither fail
/// with [`Error::UnsupportedEncoding`](lab_core::Error::UnsupportedEncoding).
pub fn sample_to_lab<S: ColorSample + ?Sized>(source: &S) -> Result<Lab> {
    PixelSample::from_sample(source).map(srgb_to_lab)
}

/// CIE 1976 color difference between two sRGB samples.
///
/// # Example
///
/// ```rust
/// use lab_color::delta_e76;
/// use lab_core::PixelSample;
///
/// let d = delta_e76(PixelSample::Gray8(0), PixelSample::Gray8(255));
/// assert!((d - 100.0).abs() < 0.01);
/// ```
#[inline]
pub fn delta_e76(a: PixelSample, b: PixelSample) -> f64 {
    srgb_to_lab(a).delta_e76(srgb_to_lab(b))
}

/// Converts a batch of samples to Lab, preserving order.
pub fn samples_to_lab(samples: &[PixelSample]) -> Vec<Lab> {
    trace!(count = samples.len(), "samples_to_lab");
    debug!(count = samples.len(), parallel = cfg!(feature = "parallel"), "Converting samples to Lab");

    #[cfg(feature = "parallel")]
    {
        samples.par_iter().map(|&s| srgb_to_lab(s)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        samples.iter().map(|&s| srgb_to_lab(s)).collect()
    }
}

/// Decodes a batch of samples to linear RGB, preserving order.
pub fn samples_to_linear(samples: &[PixelSample]) -> Vec<LinearRgb> {
    trace!(count = samples.len(), "samples_to_linear");

    #[cfg(feature = "parallel")]
    {
        samples.par_iter().map(|&s| to_linear_rgb(s)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        samples.iter().map(|&s| to_linear_rgb(s)).collect()
    }
}
