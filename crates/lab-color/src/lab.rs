//! CIE XYZ to CIE L*a*b* relative to D65.
//!
//! ```text
//! x' = X / 0.95047    y' = Y    z' = Z / 1.08883
//!
//! f(t) = t^(1/3)              t > 0.008856
//!      = 7.787 t + 16/116     otherwise
//!
//! L = 116 f(y') - 16
//! a = 500 (f(x') - f(y'))
//! b = 200 (f(y') - f(z'))
//! ```

use lab_core::{Lab, Xyz};
use lab_math::Vec3;
use lab_primaries::D65_WHITE;

/// Cube-root branch threshold, (6/29)^3 rounded.
pub const EPSILON: f64 = 0.008856;

/// Slope of the linear branch, (29/6)^2 / 3 rounded.
pub const KAPPA_SLOPE: f64 = 7.787;

/// Offset of the linear branch.
pub const OFFSET: f64 = 16.0 / 116.0;

/// Lab companding function.
///
/// Cube root above [`EPSILON`], linear below. The two branches meet to
/// within a few parts in 10^7 at the threshold.
///
/// # Example
///
/// ```rust
/// use lab_color::lab_f;
///
/// assert_eq!(lab_f(1.0), 1.0);
/// assert_eq!(lab_f(0.0), 16.0 / 116.0);
/// ```
#[inline]
pub fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE * t + OFFSET
    }
}

/// Converts CIE XYZ to CIE L*a*b* with a D65 reference white.
///
/// Black maps to exactly `(0, 0, 0)`. The D65 white maps to L = 100 with
/// a and b within a few thousandths of zero.
///
/// # Example
///
/// ```rust
/// use lab_color::xyz_to_lab;
/// use lab_core::Xyz;
///
/// let lab = xyz_to_lab(Xyz::new(0.0, 0.0, 0.0));
/// assert_eq!(lab.to_array(), [0.0, 0.0, 0.0]);
/// ```
#[inline]
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let n = Vec3::from_array(xyz.to_array()) / D65_WHITE;
    let (fx, fy, fz) = (lab_f(n.x), lab_f(n.y), lab_f(n.z));
    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}
