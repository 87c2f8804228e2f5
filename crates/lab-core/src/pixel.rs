//! Pixel samples in their native storage encodings.
//!
//! # Types
//!
//! - [`PixelSample`] - Closed set of encodings the decoder understands
//! - [`ColorSample`] - Trait implemented by pixel types of the image layer
//!
//! # Design
//!
//! The decoder dispatches on [`PixelSample`] with a plain `match`. Known
//! encodings take a fast path at native precision; anything else reaches the
//! decoder as [`PixelSample::Generic`], premultiplied RGBA widened to 16 bits.
//!
//! ```
//! use lab_core::{Encoding, PixelSample};
//!
//! let px = PixelSample::from([255u8, 128, 0]);
//! assert_eq!(px.encoding(), Encoding::Rgb8);
//!
//! let gray = PixelSample::Gray16(40000);
//! assert!(gray.encoding().is_gray());
//! ```
//!
//! # Alpha Handling
//!
//! Alpha is stored but ignored: a transparent pixel decodes as if it were
//! fully opaque. No compositing against a background takes place.

use crate::error::{Error, Result};
use crate::format::{Channel, Encoding};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One sRGB-encoded pixel in its native storage format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PixelSample {
    /// Single-channel 8-bit gray.
    Gray8(u8),
    /// Single-channel 16-bit gray.
    Gray16(u16),
    /// 8-bit RGB.
    Rgb8([u8; 3]),
    /// 8-bit RGB with straight alpha `[r, g, b, a]`.
    Rgba8([u8; 4]),
    /// 16-bit RGB.
    Rgb16([u16; 3]),
    /// 16-bit RGB with straight alpha `[r, g, b, a]`.
    Rgba16([u16; 4]),
    /// RGBA at the canonical 16-bit depth `[r, g, b, a]`, as reported by
    /// the source. Premultiplied by convention; alpha is ignored either way.
    Generic([u16; 4]),
}

impl PixelSample {
    /// Encoding tag of this sample.
    #[inline]
    pub const fn encoding(&self) -> Encoding {
        match self {
            Self::Gray8(_) => Encoding::Gray8,
            Self::Gray16(_) => Encoding::Gray16,
            Self::Rgb8(_) => Encoding::Rgb8,
            Self::Rgba8(_) => Encoding::Rgba8,
            Self::Rgb16(_) => Encoding::Rgb16,
            Self::Rgba16(_) => Encoding::Rgba16,
            Self::Generic(_) => Encoding::Generic,
        }
    }

    /// Canonical 16-bit RGBA view of the sample.
    ///
    /// Narrow channels are widened by bit replication (`v * 257`), gray is
    /// replicated to R, G and B, and missing alpha reads as opaque. This is
    /// the representation the generic fallback decodes from.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lab_core::PixelSample;
    ///
    /// assert_eq!(PixelSample::Gray8(1).to_rgba16(), [257, 257, 257, 65535]);
    /// ```
    pub fn to_rgba16(&self) -> [u16; 4] {
        const OPAQUE: u16 = u16::MAX;
        let w = <u8 as Channel>::widen;
        match *self {
            Self::Gray8(y) => [w(y), w(y), w(y), OPAQUE],
            Self::Gray16(y) => [y, y, y, OPAQUE],
            Self::Rgb8([r, g, b]) => [w(r), w(g), w(b), OPAQUE],
            Self::Rgba8([r, g, b, a]) => [w(r), w(g), w(b), w(a)],
            Self::Rgb16([r, g, b]) => [r, g, b, OPAQUE],
            Self::Rgba16(c) | Self::Generic(c) => c,
        }
    }

    /// Alpha channel normalized to the canonical 16-bit range, if stored.
    #[inline]
    pub fn alpha16(&self) -> Option<u16> {
        if self.encoding().has_alpha() {
            Some(self.to_rgba16()[3])
        } else {
            None
        }
    }

    /// Adapts a pixel from the image layer.
    ///
    /// Uses the source's native encoding when it reports one and falls back
    /// to its 16-bit RGBA channels otherwise. A source offering neither is
    /// rejected with [`Error::UnsupportedEncoding`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use lab_core::{ColorSample, PixelSample};
    ///
    /// struct Opaque16([u16; 3]);
    ///
    /// impl ColorSample for Opaque16 {
    ///     fn rgba16(&self) -> Option<[u16; 4]> {
    ///         let [r, g, b] = self.0;
    ///         Some([r, g, b, u16::MAX])
    ///     }
    /// }
    ///
    /// let px = PixelSample::from_sample(&Opaque16([1, 2, 3])).unwrap();
    /// assert_eq!(px, PixelSample::Generic([1, 2, 3, u16::MAX]));
    /// ```
    pub fn from_sample<S: ColorSample + ?Sized>(source: &S) -> Result<Self> {
        if let Some(native) = source.native() {
            return Ok(native);
        }
        match source.rgba16() {
            Some(rgba) => {
                tracing::trace!(source = %source.describe(), "generic fallback");
                Ok(Self::Generic(rgba))
            }
            None => Err(Error::unsupported_encoding(source.describe())),
        }
    }
}

impl From<[u8; 3]> for PixelSample {
    #[inline]
    fn from(c: [u8; 3]) -> Self {
        Self::Rgb8(c)
    }
}

impl From<[u8; 4]> for PixelSample {
    #[inline]
    fn from(c: [u8; 4]) -> Self {
        Self::Rgba8(c)
    }
}

impl From<[u16; 3]> for PixelSample {
    #[inline]
    fn from(c: [u16; 3]) -> Self {
        Self::Rgb16(c)
    }
}

impl From<[u16; 4]> for PixelSample {
    #[inline]
    fn from(c: [u16; 4]) -> Self {
        Self::Rgba16(c)
    }
}

/// A pixel value handed over by the image loading layer.
///
/// Implementors report a fast-path encoding through [`native`](Self::native)
/// when they have one. Otherwise they must expose premultiplied RGBA at
/// 16 bits through [`rgba16`](Self::rgba16). A type that can do neither
/// makes [`PixelSample::from_sample`] fail.
pub trait ColorSample {
    /// Sample in a fast-path encoding, if this source has one.
    fn native(&self) -> Option<PixelSample> {
        None
    }

    /// Premultiplied RGBA widened to 16 bits, if obtainable.
    fn rgba16(&self) -> Option<[u16; 4]> {
        None
    }

    /// Name used in error messages.
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

impl ColorSample for PixelSample {
    #[inline]
    fn native(&self) -> Option<PixelSample> {
        Some(*self)
    }

    #[inline]
    fn rgba16(&self) -> Option<[u16; 4]> {
        Some(self.to_rgba16())
    }

    fn describe(&self) -> String {
        self.encoding().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unreadable;

    impl ColorSample for Unreadable {}

    struct Premultiplied([u16; 4]);

    impl ColorSample for Premultiplied {
        fn rgba16(&self) -> Option<[u16; 4]> {
            Some(self.0)
        }

        fn describe(&self) -> String {
            "premultiplied".into()
        }
    }

    #[test]
    fn test_encoding_tags() {
        assert_eq!(PixelSample::Gray8(0).encoding(), Encoding::Gray8);
        assert_eq!(PixelSample::from([0u16; 3]).encoding(), Encoding::Rgb16);
        assert_eq!(PixelSample::from([0u16; 4]).encoding(), Encoding::Rgba16);
        assert_eq!(PixelSample::from([0u8; 4]).encoding(), Encoding::Rgba8);
        assert_eq!(PixelSample::Generic([0; 4]).encoding(), Encoding::Generic);
    }

    #[test]
    fn test_to_rgba16_widening() {
        assert_eq!(PixelSample::Rgb8([255, 0, 128]).to_rgba16(), [65535, 0, 0x8080, 65535]);
        assert_eq!(PixelSample::Rgba8([1, 2, 3, 0]).to_rgba16(), [257, 514, 771, 0]);
        assert_eq!(PixelSample::Gray16(1000).to_rgba16(), [1000, 1000, 1000, 65535]);
    }

    #[test]
    fn test_alpha16() {
        assert_eq!(PixelSample::Rgb8([1, 2, 3]).alpha16(), None);
        assert_eq!(PixelSample::Rgba8([1, 2, 3, 255]).alpha16(), Some(65535));
        assert_eq!(PixelSample::Rgba16([1, 2, 3, 7]).alpha16(), Some(7));
    }

    #[test]
    fn test_from_sample_native() {
        let px = PixelSample::Rgba16([9, 8, 7, 6]);
        assert_eq!(PixelSample::from_sample(&px).unwrap(), px);
    }

    #[test]
    fn test_from_sample_fallback() {
        let src = Premultiplied([100, 200, 300, 400]);
        let px = PixelSample::from_sample(&src).unwrap();
        assert_eq!(px, PixelSample::Generic([100, 200, 300, 400]));
    }

    #[test]
    fn test_from_sample_unsupported() {
        let err = PixelSample::from_sample(&Unreadable).unwrap_err();
        assert!(err.is_unsupported());
        assert!(err.to_string().contains("Unreadable"));
    }
}
