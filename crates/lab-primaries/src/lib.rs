//! # lab-primaries
//!
//! sRGB primaries, the D65 white point, and the RGB to XYZ matrix.
//!
//! The pipeline only ever works in one RGB space: sRGB primaries with a
//! D65 white. [`SRGB_TO_XYZ`] is the fixed matrix the conversion uses;
//! [`rgb_to_xyz_matrix`] derives a matrix from chromaticities and serves
//! as a cross-check of those published coefficients.
//!
//! # Usage
//!
//! ```rust
//! use lab_primaries::{SRGB_TO_XYZ, D65_WHITE};
//! use lab_math::Vec3;
//!
//! // Linear white maps onto (approximately) the reference white
//! let white = SRGB_TO_XYZ * Vec3::ONE;
//! assert!((white.x - D65_WHITE.x).abs() < 1e-4);
//! assert!((white.y - 1.0).abs() < 1e-6);
//! ```
//!
//! # Dependencies
//!
//! - [`lab-math`] - Matrix operations
//!
//! # Used By
//!
//! - `lab-color` - RGB to XYZ and XYZ to Lab stages

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use lab_math::{Mat3, Vec3};

/// RGB color space primaries definition.
///
/// Defines a color space by its three primary colors (R, G, B) and white point,
/// all specified as CIE xy chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub b: (f64, f64),
    /// White point (x, y) chromaticity
    pub w: (f64, f64),
    /// Color space name
    pub name: &'static str,
}

impl Primaries {
    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.w.0, self.w.1)
    }
}

// ============================================================================
// White Point
// ============================================================================

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: (f64, f64) = (0.31270, 0.32900);

/// D65 reference white as XYZ, Y normalized to 1.
///
/// These are the tristimulus values the Lab stage divides by. They differ
/// from [`D65_XY`] converted to XYZ in the fifth decimal; Lab output is
/// defined against these.
pub const D65_WHITE: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

// ============================================================================
// sRGB
// ============================================================================

/// sRGB / Rec.709 primaries (D65 white point).
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "sRGB",
};

/// Linear sRGB to XYZ (D65) matrix.
///
/// Rows give X, Y and Z as weighted sums of linear R, G, B in [0, 1].
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.412453, 0.357580, 0.180423],
    [0.212671, 0.715160, 0.072169],
    [0.019334, 0.119193, 0.950227],
]);

// ============================================================================
// Matrix Generation
// ============================================================================

/// Converts xy chromaticity to XYZ (with Y=1).
fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    if y.abs() < 1e-10 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Compute scaling factors so white point maps correctly
/// 3. Multiply primaries by scaling factors
///
/// Returns `None` if the primaries are collinear.
///
/// # Example
///
/// ```rust
/// use lab_primaries::{SRGB, rgb_to_xyz_matrix};
/// use lab_math::Vec3;
///
/// let m = rgb_to_xyz_matrix(&SRGB).unwrap();
/// let white = m * Vec3::ONE;
/// assert!((white.y - 1.0).abs() < 1e-9);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Option<Mat3> {
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = primaries.white_xyz();

    // Solve M * S = W for the per-primary scale S
    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);
    let s = m.inverse()? * w_xyz;

    Some(Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fixed_matrix_rows_sum_to_white() {
        let white = SRGB_TO_XYZ * Vec3::ONE;
        assert_abs_diff_eq!(white.x, 0.950456, epsilon = 1e-12);
        assert_abs_diff_eq!(white.y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(white.z, 1.088754, epsilon = 1e-12);
    }

    #[test]
    fn test_derived_matches_fixed() {
        let m = rgb_to_xyz_matrix(&SRGB).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(m.m[i][j], SRGB_TO_XYZ.m[i][j], epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn test_white_point_close_to_reference() {
        let w = SRGB.white_xyz();
        assert_abs_diff_eq!(w.x, D65_WHITE.x, epsilon = 1e-3);
        assert_eq!(w.y, 1.0);
        assert_abs_diff_eq!(w.z, D65_WHITE.z, epsilon = 1e-3);
    }

    #[test]
    fn test_collinear_primaries_rejected() {
        let flat = Primaries {
            r: (0.2, 0.2),
            g: (0.3, 0.3),
            b: (0.4, 0.4),
            w: D65_XY,
            name: "flat",
        };
        assert!(rgb_to_xyz_matrix(&flat).is_none());
    }
}
