//! # lab-math
//!
//! Math primitives for the sRGB to Lab pipeline.
//!
//! - [`Mat3`] - 3x3 matrix for the linear RGB to XYZ transform
//! - [`Vec3`] - 3D vector for RGB / XYZ triplets
//!
//! # Design
//!
//! Everything is `f64`: the XYZ and Lab stages are specified in double
//! precision, and the matrix multiply must not lose bits on the way.
//! Matrices are stored **row-major** and act on **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use lab_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.412453, 0.357580, 0.180423],
//!     [0.212671, 0.715160, 0.072169],
//!     [0.019334, 0.119193, 0.950227],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::ONE;
//! assert!((xyz.y - 1.0).abs() < 1e-6);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Interop with `DVec3` / `DMat3`
//!
//! # Used By
//!
//! - `lab-primaries` - RGB/XYZ matrix generation
//! - `lab-color` - RGB to XYZ stage

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DVec3};
}
