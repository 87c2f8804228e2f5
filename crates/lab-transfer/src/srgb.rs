//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//! The linear segment is what keeps the slope finite at zero, so a pure
//! power law is not an acceptable substitute.
//!
//! # Range
//!
//! - Input/Output: [0, 1]
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Encoded value at which the curve switches from linear to power law.
pub const THRESHOLD: f64 = 0.04045;

/// Divisor of the linear segment.
pub const LINEAR_SLOPE: f64 = 12.92;

/// Offset of the power segment.
pub const OFFSET: f64 = 0.055;

/// Exponent of the power segment.
pub const GAMMA: f64 = 2.4;

/// sRGB EOTF: Decodes sRGB encoded values to linear light.
///
/// Converts gamma-encoded sRGB [0, 1] to linear [0, 1]. Inputs outside
/// [0, 1] are not meaningful; callers normalize by bit depth first.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use lab_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.001);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= THRESHOLD {
        v / LINEAR_SLOPE
    } else {
        ((v + OFFSET) / (1.0 + OFFSET)).powf(GAMMA)
    }
}

/// Applies sRGB EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(eotf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_boundaries() {
        assert_eq!(eotf(0.0), 0.0);
        assert_eq!(eotf(1.0), 1.0);
    }

    #[test]
    fn test_linear_segment() {
        for i in 0..=100 {
            let v = THRESHOLD * i as f64 / 100.0;
            assert_eq!(eotf(v), v / 12.92, "v={}", v);
        }
    }

    #[test]
    fn test_power_segment() {
        for i in 1..=100 {
            let v = THRESHOLD + (1.0 - THRESHOLD) * i as f64 / 100.0;
            let expected = ((v + 0.055) / 1.055).powf(2.4);
            assert_eq!(eotf(v), expected, "v={}", v);
        }
    }

    #[test]
    fn test_continuous_at_threshold() {
        let below = THRESHOLD / LINEAR_SLOPE;
        let above = ((THRESHOLD + OFFSET) / 1.055).powf(GAMMA);
        // The published constants leave a gap of about 4e-6 here
        assert!((below - above).abs() < 1e-5);
    }

    #[test]
    fn test_midpoint() {
        // sRGB 0.5 is about 0.214 linear, nowhere near 0.5
        assert_relative_eq!(eotf(0.5), 0.214_041_140_48, epsilon = 1e-9);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = eotf(0.0);
        for i in 1..=1000 {
            let cur = eotf(i as f64 / 1000.0);
            assert!(cur > prev);
            prev = cur;
        }
    }

    #[test]
    fn test_eotf_rgb() {
        let out = eotf_rgb([0.0, 0.5, 1.0]);
        assert_eq!(out, [eotf(0.0), eotf(0.5), eotf(1.0)]);
    }
}
