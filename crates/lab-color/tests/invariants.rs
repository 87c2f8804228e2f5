//! Pipeline invariants across encodings.

use lab_color::{
    decode_interleaved, samples_to_lab, sample_to_lab, srgb_to_lab, to_linear_rgb,
};
use lab_core::{ColorSample, Encoding, Error, PixelSample};

/// Pixel source that only exposes normalized RGBA.
struct Straight([u16; 4]);

impl ColorSample for Straight {
    fn rgba16(&self) -> Option<[u16; 4]> {
        Some(self.0)
    }
}

/// Pixel source with nothing to offer.
struct Indexed(u8);

impl ColorSample for Indexed {
    fn describe(&self) -> String {
        format!("Indexed({})", self.0)
    }
}

#[test]
fn test_alpha_never_affects_result() {
    for a in 0..=255u8 {
        assert_eq!(
            srgb_to_lab(PixelSample::Rgba8([90, 160, 220, a])),
            srgb_to_lab(PixelSample::Rgb8([90, 160, 220])),
            "alpha {}",
            a
        );
    }
    for a in [0u16, 1, 257, 40000, 65535] {
        assert_eq!(
            to_linear_rgb(PixelSample::Rgba16([300, 20000, 65000, a])),
            to_linear_rgb(PixelSample::Rgb16([300, 20000, 65000]))
        );
    }
}

#[test]
fn test_gray_is_neutral() {
    for v in 0..=255u8 {
        let lin = to_linear_rgb(PixelSample::Gray8(v));
        assert!(lin.is_neutral());
        let lab = srgb_to_lab(PixelSample::Gray8(v));
        assert!(lab.a.abs() < 0.01, "v={} a={}", v, lab.a);
        assert!(lab.b.abs() < 0.01, "v={} b={}", v, lab.b);
    }
}

#[test]
fn test_lightness_monotonic_in_gray() {
    let labs = samples_to_lab(&(0..=255u8).map(PixelSample::Gray8).collect::<Vec<_>>());
    for pair in labs.windows(2) {
        assert!(pair[1].l > pair[0].l);
    }
}

#[test]
fn test_generic_agrees_with_fast_paths() {
    for v in 0..=255u8 {
        let fast = to_linear_rgb(PixelSample::Rgb8([v, v, 255 - v]));
        let generic = to_linear_rgb(PixelSample::Generic(
            PixelSample::Rgb8([v, v, 255 - v]).to_rgba16(),
        ));
        for (f, g) in fast.to_array().into_iter().zip(generic.to_array()) {
            assert!((i32::from(f) - i32::from(g)).abs() <= 1, "v={}", v);
        }
    }
}

#[test]
fn test_fallback_source() {
    let lab = sample_to_lab(&Straight([65535, 65535, 65535, 0])).unwrap();
    assert!((lab.l - 100.0).abs() < 1e-3);
    assert_eq!(
        PixelSample::from_sample(&Straight([1, 2, 3, 4])).unwrap().encoding(),
        Encoding::Generic
    );
}

#[test]
fn test_unsupported_source() {
    let err = sample_to_lab(&Indexed(3)).unwrap_err();
    assert!(err.is_unsupported());
    assert_eq!(err.to_string(), "unsupported pixel encoding: Indexed(3)");
}

#[test]
fn test_interleaved_matches_samples() {
    let row: Vec<u16> = (0..64u16).map(|i| i * 1031).collect();
    let decoded = decode_interleaved(&row, Encoding::Rgba16).unwrap();
    assert_eq!(decoded.len(), 16);
    for (chunk, lin) in row.chunks_exact(4).zip(&decoded) {
        let px = PixelSample::Rgba16([chunk[0], chunk[1], chunk[2], chunk[3]]);
        assert_eq!(*lin, to_linear_rgb(px));
    }
}

#[test]
fn test_interleaved_errors() {
    let row = [0u8; 6];
    assert!(matches!(
        decode_interleaved(&row, Encoding::Rgb16),
        Err(Error::DepthMismatch { .. })
    ));
    assert!(matches!(
        decode_interleaved(&row, Encoding::Rgba8),
        Err(Error::InvalidBufferLength { len: 6, channels: 4 })
    ));
    assert!(decode_interleaved(&row, Encoding::Gray8).is_ok());
}

#[cfg(feature = "image")]
#[test]
fn test_image_pixels() {
    use image::{Luma, Rgb, Rgba};

    let native = sample_to_lab(&Rgb([128u8, 128, 128])).unwrap();
    assert_eq!(native, srgb_to_lab(PixelSample::Gray8(128)));
    assert_eq!(sample_to_lab(&Luma([0u16])).unwrap().l, 0.0);

    let float = sample_to_lab(&Rgba([1.0f32, 1.0, 1.0, 0.0])).unwrap();
    assert!((float.l - 100.0).abs() < 1e-3);
}
