//! Bit depths, encoding tags and channel storage types.
//!
//! # Types
//!
//! - [`BitDepth`] - Integer precision of a stored channel (8 or 16 bits)
//! - [`Encoding`] - Tag naming the native layout of a [`PixelSample`](crate::PixelSample)
//! - [`Channel`] - Trait for channel storage types (`u8`, `u16`)
//!
//! # Usage
//!
//! ```rust
//! use lab_core::format::{BitDepth, Encoding};
//!
//! let enc = Encoding::Rgba8;
//! assert_eq!(enc.channels(), 4);
//! assert!(enc.has_alpha());
//! assert_eq!(enc.bit_depth(), BitDepth::U8);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bit depth of a stored integer channel.
///
/// - `U8` - 8-bit unsigned [0, 255]
/// - `U16` - 16-bit unsigned [0, 65535]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BitDepth {
    /// 8-bit unsigned integer.
    #[default]
    U8,
    /// 16-bit unsigned integer.
    U16,
}

impl BitDepth {
    /// Number of bits per channel.
    #[inline]
    pub const fn bits(&self) -> u32 {
        match self {
            Self::U8 => 8,
            Self::U16 => 16,
        }
    }

    /// Maximum representable integer value.
    #[inline]
    pub const fn max_value(&self) -> u32 {
        match self {
            Self::U8 => 255,
            Self::U16 => 65535,
        }
    }

    /// Normalization factor for converting to the [0, 1] range.
    #[inline]
    pub const fn normalize_factor(&self) -> f64 {
        match self {
            Self::U8 => 255.0,
            Self::U16 => 65535.0,
        }
    }
}

impl std::fmt::Display for BitDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::U8 => write!(f, "8-bit"),
            Self::U16 => write!(f, "16-bit"),
        }
    }
}

/// Native encoding of a pixel sample.
///
/// Every variant of [`PixelSample`](crate::PixelSample) has exactly one tag.
/// [`Encoding::Generic`] marks the fallback representation: premultiplied
/// RGBA at the canonical 16-bit depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Encoding {
    /// Single-channel 8-bit gray.
    Gray8,
    /// Single-channel 16-bit gray.
    Gray16,
    /// 8-bit RGB.
    Rgb8,
    /// 8-bit RGB with straight (non-premultiplied) alpha.
    Rgba8,
    /// 16-bit RGB.
    Rgb16,
    /// 16-bit RGB with straight (non-premultiplied) alpha.
    Rgba16,
    /// Fallback: premultiplied RGBA widened to 16 bits.
    Generic,
}

impl Encoding {
    /// All encodings, fast paths first.
    pub const ALL: [Encoding; 7] = [
        Self::Gray8,
        Self::Gray16,
        Self::Rgb8,
        Self::Rgba8,
        Self::Rgb16,
        Self::Rgba16,
        Self::Generic,
    ];

    /// Number of stored channels, alpha included.
    #[inline]
    pub const fn channels(&self) -> usize {
        match self {
            Self::Gray8 | Self::Gray16 => 1,
            Self::Rgb8 | Self::Rgb16 => 3,
            Self::Rgba8 | Self::Rgba16 | Self::Generic => 4,
        }
    }

    /// Whether an alpha channel is stored.
    ///
    /// Alpha is carried for layout purposes only and never reaches the
    /// color computation.
    #[inline]
    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::Rgba8 | Self::Rgba16 | Self::Generic)
    }

    /// Whether this is a single-channel gray encoding.
    #[inline]
    pub const fn is_gray(&self) -> bool {
        matches!(self, Self::Gray8 | Self::Gray16)
    }

    /// Whether this encoding takes the generic fallback path.
    #[inline]
    pub const fn is_generic(&self) -> bool {
        matches!(self, Self::Generic)
    }

    /// Stored bit depth per channel.
    #[inline]
    pub const fn bit_depth(&self) -> BitDepth {
        match self {
            Self::Gray8 | Self::Rgb8 | Self::Rgba8 => BitDepth::U8,
            Self::Gray16 | Self::Rgb16 | Self::Rgba16 | Self::Generic => BitDepth::U16,
        }
    }

    /// Short name for display.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Gray8 => "gray8",
            Self::Gray16 => "gray16",
            Self::Rgb8 => "rgb8",
            Self::Rgba8 => "rgba8",
            Self::Rgb16 => "rgb16",
            Self::Rgba16 => "rgba16",
            Self::Generic => "generic",
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Trait for integer channel storage types.
///
/// Implemented for `u8` and `u16`, the two depths with a fast decode path.
///
/// # Example
///
/// ```
/// use lab_core::Channel;
///
/// assert_eq!(255u8.to_unit(), 1.0);
/// assert_eq!(0x80u8.widen(), 0x8080);
/// ```
pub trait Channel: Copy + Send + Sync + 'static {
    /// Bit depth of this storage type.
    const DEPTH: BitDepth;

    /// Maximum stored value as `f64`.
    const MAX_VALUE: f64;

    /// Normalizes to [0, 1] by the type's own bit depth.
    fn to_unit(self) -> f64;

    /// Widens to the canonical 16-bit range by bit replication.
    fn widen(self) -> u16;
}

impl Channel for u8 {
    const DEPTH: BitDepth = BitDepth::U8;
    const MAX_VALUE: f64 = 255.0;

    #[inline]
    fn to_unit(self) -> f64 {
        f64::from(self) / Self::MAX_VALUE
    }

    #[inline]
    fn widen(self) -> u16 {
        u16::from(self) * 0x101
    }
}

impl Channel for u16 {
    const DEPTH: BitDepth = BitDepth::U16;
    const MAX_VALUE: f64 = 65535.0;

    #[inline]
    fn to_unit(self) -> f64 {
        f64::from(self) / Self::MAX_VALUE
    }

    #[inline]
    fn widen(self) -> u16 {
        self
    }
}
