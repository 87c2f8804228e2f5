//! Color triples produced by each pipeline stage.
//!
//! - [`LinearRgb`] - 16-bit linear-light RGB (decoder output)
//! - [`Xyz`] - CIE 1931 XYZ, D65-referenced, Y of white = 1
//! - [`Lab`] - CIE L*a*b*
//!
//! All three are plain `Copy` values. Nothing here is mutated after
//! construction; each stage builds a fresh triple from the previous one.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Linear-light RGB at 16-bit precision.
///
/// Each channel spans 0..=65535 and is proportional to physical light
/// intensity (sRGB gamma removed).
///
/// # Example
///
/// ```rust
/// use lab_core::LinearRgb;
///
/// let white = LinearRgb::WHITE;
/// assert_eq!(white.to_array(), [65535; 3]);
/// assert!(LinearRgb::gray(1200).is_neutral());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearRgb {
    /// Red channel.
    pub r: u16,
    /// Green channel.
    pub g: u16,
    /// Blue channel.
    pub b: u16,
}

impl LinearRgb {
    /// Full-scale value of a channel.
    pub const FULL_SCALE: u16 = u16::MAX;

    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White (65535, 65535, 65535).
    pub const WHITE: Self = Self::gray(Self::FULL_SCALE);

    /// Creates a new triple.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }

    /// Creates a triple with all channels equal.
    #[inline]
    pub const fn gray(v: u16) -> Self {
        Self::new(v, v, v)
    }

    /// Channels as an array.
    #[inline]
    pub const fn to_array(self) -> [u16; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels normalized to [0, 1].
    #[inline]
    pub fn to_unit(self) -> [f64; 3] {
        let s = f64::from(Self::FULL_SCALE);
        [
            f64::from(self.r) / s,
            f64::from(self.g) / s,
            f64::from(self.b) / s,
        ]
    }

    /// Whether R, G and B are exactly equal.
    #[inline]
    pub const fn is_neutral(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<[u16; 3]> for LinearRgb {
    #[inline]
    fn from(a: [u16; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<LinearRgb> for [u16; 3] {
    #[inline]
    fn from(c: LinearRgb) -> Self {
        c.to_array()
    }
}

/// CIE 1931 XYZ tristimulus values, D65-referenced.
///
/// Values are not clamped: saturated primaries can push X or Z slightly
/// past 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Xyz {
    /// X tristimulus.
    pub x: f64,
    /// Y tristimulus (luminance).
    pub y: f64,
    /// Z tristimulus.
    pub z: f64,
}

impl Xyz {
    /// Creates a new triple.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Components as an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Xyz {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

/// CIE L*a*b* color.
///
/// `l` lies in [0, 100]; `a` and `b` are nominally unbounded and sit
/// roughly in [-100, 100] for sRGB input.
///
/// # Example
///
/// ```rust
/// use lab_core::Lab;
///
/// let p = Lab::new(50.0, 0.0, 0.0);
/// let q = Lab::new(50.0, 3.0, 4.0);
/// assert_eq!(p.delta_e76(q), 5.0);
/// assert_eq!(q.chroma(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lab {
    /// Lightness L*.
    pub l: f64,
    /// Green-red axis a*.
    pub a: f64,
    /// Blue-yellow axis b*.
    pub b: f64,
}

impl Lab {
    /// Creates a new triple.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Components as an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Chroma C*ab, the distance from the neutral axis.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }

    /// CIE76 color difference: Euclidean distance in Lab.
    #[inline]
    pub fn delta_e76(self, other: Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

impl From<[f64; 3]> for Lab {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl std::fmt::Display for Lab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lab({:.3}, {:.3}, {:.3})", self.l, self.a, self.b)
    }
}
