//! sRGB to Lab validation against reference values.
//!
//! Reference values are computed from the published formulas:
//!
//! - IEC 61966-2-1 sRGB EOTF, quantized to 16 bits with round-half-to-even
//! - sRGB / D65 RGB to XYZ matrix (4-decimal-place primaries)
//! - CIE 1976 L*a*b* against D65 white (0.95047, 1.0, 1.08883)

use approx::assert_abs_diff_eq;
use lab_color::{srgb_to_lab, to_linear_rgb};
use lab_core::{LinearRgb, PixelSample};

// ============================================================================
// Decoder Reference Values
// ============================================================================
// linear = round_half_even(eotf(v / 255) * 65535)
//
// eotf(v) = v / 12.92                    v <= 0.04045
//         = ((v + 0.055) / 1.055)^2.4    otherwise

/// (8-bit sRGB, 16-bit linear)
const DECODE_U8_REFERENCE: &[(u8, u16)] = &[
    (0, 0),
    (1, 20),      // Linear segment: 1/255/12.92*65535 = 19.89
    (10, 199),    // Linear segment: 10/255/12.92*65535 = 198.9
    (128, 14146), // Power segment: 0.21586 * 65535
    (200, 37852),
    (255, 65535),
];

/// (16-bit sRGB, 16-bit linear)
const DECODE_U16_REFERENCE: &[(u16, u16)] = &[
    (0, 0),
    (1000, 77),
    (2650, 205),
    (32768, 14028),
    (65535, 65535),
];

#[test]
fn test_decode_u8_reference() {
    for &(input, expected) in DECODE_U8_REFERENCE {
        let lin = to_linear_rgb(PixelSample::Gray8(input));
        assert_eq!(lin, LinearRgb::gray(expected), "Gray8({})", input);
    }
}

#[test]
fn test_decode_u16_reference() {
    for &(input, expected) in DECODE_U16_REFERENCE {
        let lin = to_linear_rgb(PixelSample::Gray16(input));
        assert_eq!(lin, LinearRgb::gray(expected), "Gray16({})", input);
    }
}

#[test]
fn test_mid_gray_applies_gamma() {
    // A plain scale-by-257 would land on 32896.
    let lin = to_linear_rgb(PixelSample::Gray8(128));
    assert_eq!(lin.r, 14146);
    assert!(lin.r < 32768 / 2);
}

// ============================================================================
// Lab Reference Values
// ============================================================================

/// (8-bit sRGB, expected L*, a*, b*)
const LAB_REFERENCE: &[([u8; 3], [f64; 3])] = &[
    ([0, 0, 0], [0.0, 0.0, 0.0]),
    ([255, 255, 255], [100.0, -0.002455, 0.004653]),
    ([128, 128, 128], [53.584328, -0.001473, 0.002791]),
    ([255, 0, 0], [53.240588, 80.092308, 67.202751]),
    ([0, 255, 0], [87.735099, -86.183030, 83.179703]),
    ([0, 0, 255], [32.295673, 79.185591, -107.857300]),
    ([255, 255, 0], [97.139507, -21.554681, 94.478122]),
    ([0, 255, 255], [91.113301, -48.090596, -14.126330]),
    ([255, 0, 255], [60.323507, 98.233054, -60.821015]),
    ([200, 100, 50], [53.630000, 36.304152, 45.382940]),
];

#[test]
fn test_lab_reference() {
    for &(rgb, [l, a, b]) in LAB_REFERENCE {
        let lab = srgb_to_lab(PixelSample::Rgb8(rgb));
        assert_abs_diff_eq!(lab.l, l, epsilon = 1e-4);
        assert_abs_diff_eq!(lab.a, a, epsilon = 1e-4);
        assert_abs_diff_eq!(lab.b, b, epsilon = 1e-4);
    }
}

#[test]
fn test_lab_reference_all_rgb_encodings() {
    for &(rgb, [l, a, b]) in LAB_REFERENCE {
        let [r, g, bl] = rgb;
        let wide = rgb.map(|c| u16::from(c) * 257);
        for px in [
            PixelSample::Rgba8([r, g, bl, 17]),
            PixelSample::Rgb16(wide),
            PixelSample::Rgba16([wide[0], wide[1], wide[2], 0]),
        ] {
            let lab = srgb_to_lab(px);
            assert_abs_diff_eq!(lab.l, l, epsilon = 1e-4);
            assert_abs_diff_eq!(lab.a, a, epsilon = 1e-4);
            assert_abs_diff_eq!(lab.b, b, epsilon = 1e-4);
        }
    }
}

#[test]
fn test_mid_gray_lightness() {
    let lab = srgb_to_lab(PixelSample::Gray8(128));
    assert!((lab.l - 50.0).abs() < 5.0, "L* = {}", lab.l);
    assert!(lab.a.abs() < 1.0);
    assert!(lab.b.abs() < 1.0);
}

#[test]
fn test_black_exact() {
    for px in [
        PixelSample::Gray8(0),
        PixelSample::Gray16(0),
        PixelSample::Rgb8([0; 3]),
        PixelSample::Rgba16([0, 0, 0, 65535]),
        PixelSample::Generic([0; 4]),
    ] {
        let lab = srgb_to_lab(px);
        assert_eq!(lab.l, 0.0);
        assert_eq!(lab.a, 0.0);
        assert_eq!(lab.b, 0.0);
    }
}
