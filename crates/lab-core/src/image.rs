//! [`ColorSample`] for the pixel types of the `image` crate.
//!
//! Integer pixels map onto fast-path encodings. Luma with alpha decodes as
//! plain gray since alpha never enters the color math. Float pixels have no
//! fast path and go through the generic fallback, quantized to 16 bits.

use crate::pixel::{ColorSample, PixelSample};
use ::image::{Luma, LumaA, Rgb, Rgba};

impl ColorSample for Luma<u8> {
    #[inline]
    fn native(&self) -> Option<PixelSample> {
        Some(PixelSample::Gray8(self.0[0]))
    }
}

impl ColorSample for Luma<u16> {
    #[inline]
    fn native(&self) -> Option<PixelSample> {
        Some(PixelSample::Gray16(self.0[0]))
    }
}

impl ColorSample for LumaA<u8> {
    #[inline]
    fn native(&self) -> Option<PixelSample> {
        Some(PixelSample::Gray8(self.0[0]))
    }
}

impl ColorSample for LumaA<u16> {
    #[inline]
    fn native(&self) -> Option<PixelSample> {
        Some(PixelSample::Gray16(self.0[0]))
    }
}

impl ColorSample for Rgb<u8> {
    #[inline]
    fn native(&self) -> Option<PixelSample> {
        Some(PixelSample::Rgb8(self.0))
    }
}

impl ColorSample for Rgba<u8> {
    #[inline]
    fn native(&self) -> Option<PixelSample> {
        Some(PixelSample::Rgba8(self.0))
    }
}

impl ColorSample for Rgb<u16> {
    #[inline]
    fn native(&self) -> Option<PixelSample> {
        Some(PixelSample::Rgb16(self.0))
    }
}

impl ColorSample for Rgba<u16> {
    #[inline]
    fn native(&self) -> Option<PixelSample> {
        Some(PixelSample::Rgba16(self.0))
    }
}

impl ColorSample for Rgb<f32> {
    fn rgba16(&self) -> Option<[u16; 4]> {
        let [r, g, b] = self.0;
        Some([unit_to_u16(r), unit_to_u16(g), unit_to_u16(b), u16::MAX])
    }
}

impl ColorSample for Rgba<f32> {
    fn rgba16(&self) -> Option<[u16; 4]> {
        Some(self.0.map(unit_to_u16))
    }
}

/// Quantizes a nominal [0, 1] float to 16 bits. NaN maps to 0.
#[inline]
fn unit_to_u16(v: f32) -> u16 {
    let v = if v.is_nan() { 0.0 } else { f64::from(v).clamp(0.0, 1.0) };
    (v * 65535.0).round_ties_even() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_pixels_take_fast_path() {
        assert_eq!(Luma([7u8]).native(), Some(PixelSample::Gray8(7)));
        assert_eq!(LumaA([7u16, 0]).native(), Some(PixelSample::Gray16(7)));
        assert_eq!(Rgb([1u8, 2, 3]).native(), Some(PixelSample::Rgb8([1, 2, 3])));
        assert_eq!(
            Rgba([1u16, 2, 3, 4]).native(),
            Some(PixelSample::Rgba16([1, 2, 3, 4]))
        );
    }

    #[test]
    fn test_float_pixels_fall_back() {
        let px = PixelSample::from_sample(&Rgb([1.0f32, 0.0, 0.5])).unwrap();
        assert_eq!(px, PixelSample::Generic([65535, 0, 32768, 65535]));
    }

    #[test]
    fn test_float_out_of_range_is_clamped() {
        let px = PixelSample::from_sample(&Rgba([2.0f32, -1.0, f32::NAN, 1.0])).unwrap();
        assert_eq!(px, PixelSample::Generic([65535, 0, 0, 65535]));
    }
}
