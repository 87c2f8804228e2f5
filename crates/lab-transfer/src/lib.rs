//! # lab-transfer
//!
//! Decoding of sRGB-encoded channel values to linear light.
//!
//! - [`srgb`] - The IEC 61966-2-1 EOTF on normalized values
//! - [`quantize`] - Scaling linear light back to 16-bit integers
//!
//! # Usage
//!
//! ```rust
//! use lab_transfer::{linearize_u8, linearize_u16, srgb};
//!
//! // Decode sRGB to linear
//! let linear = srgb::eotf(0.5);
//! assert!((linear - 0.214).abs() < 0.001);
//!
//! // Native channel straight to 16-bit linear
//! assert_eq!(linearize_u8(255), 65535);
//! assert_eq!(linearize_u16(0), 0);
//! ```
//!
//! # Dependencies
//!
//! - [`lab-core`] - [`Channel`](lab_core::Channel) storage trait
//!
//! # Used By
//!
//! - `lab-color` - Decoder stage

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod quantize;
pub mod srgb;

// Re-export common functions
pub use quantize::{linearize, linearize_u16, linearize_u8, quantize16, Linearize};
pub use srgb::eotf as srgb_eotf;
