//! Linear RGB to CIE XYZ.
//!
//! Uses the fixed sRGB / D65 matrix from [`lab_primaries::SRGB_TO_XYZ`]
//! and scales the 16-bit inputs to nominal [0, 1]. White lands on the D65
//! white point (Y = 1.0). Nothing is clamped.

use lab_core::{LinearRgb, Xyz};
use lab_math::Vec3;
use lab_primaries::SRGB_TO_XYZ;

/// Converts 16-bit linear RGB to CIE XYZ.
///
/// Each component is the dot product of one matrix row with `(r, g, b)`,
/// divided by 65535.
///
/// # Example
///
/// ```rust
/// use lab_color::linear_rgb_to_xyz;
/// use lab_core::LinearRgb;
///
/// let white = linear_rgb_to_xyz(LinearRgb::WHITE);
/// assert!((white.y - 1.0).abs() < 1e-6);
/// assert_eq!(linear_rgb_to_xyz(LinearRgb::BLACK).to_array(), [0.0; 3]);
/// ```
#[inline]
pub fn linear_rgb_to_xyz(rgb: LinearRgb) -> Xyz {
    let v = Vec3::new(f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b));
    let xyz = SRGB_TO_XYZ * v / f64::from(LinearRgb::FULL_SCALE);
    Xyz::new(xyz.x, xyz.y, xyz.z)
}
