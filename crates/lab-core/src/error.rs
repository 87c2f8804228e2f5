//! Error types for lab-core operations.
//!
//! The conversion math itself cannot fail: every sample in a supported
//! encoding maps to a defined output. Errors only arise at the boundary
//! with the pixel source, when a value cannot be turned into a
//! [`PixelSample`](crate::PixelSample) at all, or when an interleaved
//! buffer does not match the layout it claims.
//!
//! # Usage
//!
//! ```rust
//! use lab_core::{Error, Result};
//!
//! fn check_row(len: usize, channels: usize) -> Result<()> {
//!     if len % channels != 0 {
//!         return Err(Error::invalid_buffer_length(len, channels));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_row(12, 3).is_ok());
//! assert!(check_row(10, 3).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::PixelSample::from_sample`] - Source adaptation
//! - `lab-color` - Interleaved buffer decoding

use crate::format::{BitDepth, Encoding};
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while feeding pixels into the Lab pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The pixel source has no fast-path encoding and cannot expose
    /// normalized RGBA channels for the generic fallback either.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lab_core::Error;
    ///
    /// let err = Error::unsupported_encoding("cmyk16");
    /// assert!(err.to_string().contains("cmyk16"));
    /// ```
    #[error("unsupported pixel encoding: {source_type}")]
    UnsupportedEncoding {
        /// Description of the pixel source that was rejected
        source_type: String,
    },

    /// Storage type of a buffer does not match the declared encoding.
    #[error("bit depth mismatch: encoding is {expected}, storage is {got}")]
    DepthMismatch {
        /// Bit depth implied by the encoding
        expected: BitDepth,
        /// Bit depth of the storage type
        got: BitDepth,
    },

    /// The encoding has no interleaved buffer layout.
    #[error("no interleaved layout for {0} encoding")]
    NotInterleaved(Encoding),

    /// Interleaved buffer length is not a whole number of pixels.
    #[error("buffer length {len} is not a multiple of {channels} channels")]
    InvalidBufferLength {
        /// Number of channel values in the buffer
        len: usize,
        /// Channels per pixel
        channels: usize,
    },
}

impl Error {
    /// Creates an [`Error::UnsupportedEncoding`] error.
    #[inline]
    pub fn unsupported_encoding(source_type: impl Into<String>) -> Self {
        Self::UnsupportedEncoding {
            source_type: source_type.into(),
        }
    }

    /// Creates an [`Error::DepthMismatch`] error.
    #[inline]
    pub fn depth_mismatch(expected: BitDepth, got: BitDepth) -> Self {
        Self::DepthMismatch { expected, got }
    }

    /// Creates an [`Error::InvalidBufferLength`] error.
    #[inline]
    pub fn invalid_buffer_length(len: usize, channels: usize) -> Self {
        Self::InvalidBufferLength { len, channels }
    }

    /// Returns `true` if the pixel source itself was rejected.
    #[inline]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedEncoding { .. })
    }

    /// Returns `true` if this is a buffer layout error.
    #[inline]
    pub fn is_layout_error(&self) -> bool {
        matches!(
            self,
            Self::DepthMismatch { .. } | Self::NotInterleaved(_) | Self::InvalidBufferLength { .. }
        )
    }
}
