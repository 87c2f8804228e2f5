//! Quantization of linear light to 16-bit integers.
//!
//! Linear values are scaled to 0..=65535 and rounded half-to-even. Values
//! outside [0, 1] saturate at the ends of the range.
//!
//! # Fast Path
//!
//! There are only 256 distinct 8-bit inputs, so [`linearize_u8`] reads a
//! table filled once, on first use, from the exact formula. Table lookups and
//! direct evaluation are bit-identical.

use crate::srgb;
use lab_core::Channel;
use std::sync::OnceLock;

/// Full-scale value of the 16-bit linear output.
pub const FULL_SCALE: f64 = 65535.0;

// Precomputed at first use
static U8_TABLE: OnceLock<[u16; 256]> = OnceLock::new();

fn build_u8_table() -> [u16; 256] {
    std::array::from_fn(|i| linearize(i as u8))
}

/// Scales linear light in [0, 1] to 16 bits, rounding half to even.
///
/// # Example
///
/// ```rust
/// use lab_transfer::quantize16;
///
/// assert_eq!(quantize16(0.0), 0);
/// assert_eq!(quantize16(1.0), 65535);
/// // 0.5 * 65535 = 32767.5 rounds to the even neighbour
/// assert_eq!(quantize16(0.5), 32768);
/// ```
#[inline]
pub fn quantize16(linear: f64) -> u16 {
    (linear * FULL_SCALE).round_ties_even() as u16
}

/// Decodes one sRGB channel at its native depth to 16-bit linear light.
///
/// The channel is first normalized by its own bit depth, then passed
/// through the sRGB EOTF and quantized with [`quantize16`].
///
/// # Example
///
/// ```rust
/// use lab_transfer::linearize;
///
/// assert_eq!(linearize(0u8), 0);
/// assert_eq!(linearize(255u8), 65535);
/// assert_eq!(linearize(65535u16), 65535);
/// ```
#[inline]
pub fn linearize<T: Channel>(v: T) -> u16 {
    quantize16(srgb::eotf(v.to_unit()))
}

/// Decodes an 8-bit sRGB channel through the lookup table.
#[inline]
pub fn linearize_u8(v: u8) -> u16 {
    U8_TABLE.get_or_init(build_u8_table)[usize::from(v)]
}

/// Decodes a 16-bit sRGB channel.
#[inline]
pub fn linearize_u16(v: u16) -> u16 {
    linearize(v)
}

/// Channel types with a dedicated decode path.
///
/// Lets code that is generic over storage depth pick the 8-bit table or
/// direct 16-bit evaluation without matching on the depth itself.
pub trait Linearize: Channel {
    /// Decodes this sRGB channel to 16-bit linear light.
    fn linearize16(self) -> u16;
}

impl Linearize for u8 {
    #[inline]
    fn linearize16(self) -> u16 {
        linearize_u8(self)
    }
}

impl Linearize for u16 {
    #[inline]
    fn linearize16(self) -> u16 {
        linearize_u16(self)
    }
}
