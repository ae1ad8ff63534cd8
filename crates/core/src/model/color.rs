//! Device color spaces and the target-to-replacement color table.
//!
//! Only the three device color models are represented: DeviceGray,
//! DeviceRGB and DeviceCMYK. Anything else a content stream selects is
//! treated as unknown by the graphics state and can never match.

use crate::error::{Result, RewriteError};
use lopdf::Object;
use lopdf::content::Operation;

/// Per-component tolerance for the closeness comparison used by the
/// color-table policy. A component differing by exactly this amount still
/// matches.
pub const COLOR_TOLERANCE: f64 = 0.005;

/// The device color space a [`Color`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpaceKind {
    Gray,
    Rgb,
    Cmyk,
}

impl ColorSpaceKind {
    /// Number of color components in this space.
    pub fn ncomponents(self) -> usize {
        match self {
            ColorSpaceKind::Gray => 1,
            ColorSpaceKind::Rgb => 3,
            ColorSpaceKind::Cmyk => 4,
        }
    }

    /// The non-stroking color-setting operator for this space.
    pub fn operator(self) -> &'static str {
        match self {
            ColorSpaceKind::Gray => "g",
            ColorSpaceKind::Rgb => "rg",
            ColorSpaceKind::Cmyk => "k",
        }
    }

    /// Pure black expressed in this space.
    pub fn black(self) -> Color {
        match self {
            ColorSpaceKind::Gray => Color::Gray(0.0),
            ColorSpaceKind::Rgb => Color::Rgb(0.0, 0.0, 0.0),
            ColorSpaceKind::Cmyk => Color::Cmyk(0.0, 0.0, 0.0, 1.0),
        }
    }
}

/// A color in one of the three device color spaces, components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Greyscale (0.0 = black, 1.0 = white)
    Gray(f64),
    /// RGB
    Rgb(f64, f64, f64),
    /// CMYK
    Cmyk(f64, f64, f64, f64),
}

impl Color {
    /// The device color space this color belongs to.
    pub fn space(&self) -> ColorSpaceKind {
        match self {
            Color::Gray(_) => ColorSpaceKind::Gray,
            Color::Rgb(..) => ColorSpaceKind::Rgb,
            Color::Cmyk(..) => ColorSpaceKind::Cmyk,
        }
    }

    /// Component values in order.
    pub fn components(&self) -> Vec<f64> {
        match self {
            Color::Gray(g) => vec![*g],
            Color::Rgb(r, g, b) => vec![*r, *g, *b],
            Color::Cmyk(c, m, y, k) => vec![*c, *m, *y, *k],
        }
    }

    /// Whether `other` is in the same space with every component within
    /// [`COLOR_TOLERANCE`] (inclusive).
    pub fn is_close(&self, other: &Color) -> bool {
        if self.space() != other.space() {
            return false;
        }
        self.components()
            .iter()
            .zip(other.components())
            .all(|(a, b)| (a - b).abs() <= COLOR_TOLERANCE)
    }

    /// Encode as a non-stroking color-setting operation (`g`, `rg` or `k`).
    ///
    /// Components are clamped to [0, 1] before encoding.
    pub fn to_operation(&self) -> Operation {
        let operands = self
            .components()
            .into_iter()
            .map(|v| Object::Real(v.clamp(0.0, 1.0) as f32))
            .collect();
        Operation::new(self.space().operator(), operands)
    }

    /// Parse a `#RRGGBB` hex literal into an RGB color.
    ///
    /// Components are normalized to [0, 1], rounded to four decimal places
    /// and passed through `f32` so they compare equal to the same value
    /// read back out of a content stream.
    pub fn from_hex(hex: &str) -> Result<Color> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(RewriteError::UnsupportedColor(format!(
                "invalid hex color literal: {hex:?} (expected #RRGGBB)"
            )));
        }
        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).expect("checked hex digits")
        };
        let normalize = |v: u8| {
            let unit = (v as f64 / 255.0 * 10_000.0).round() / 10_000.0;
            unit as f32 as f64
        };
        Ok(Color::Rgb(
            normalize(byte(0..2)),
            normalize(byte(2..4)),
            normalize(byte(4..6)),
        ))
    }
}

/// Insertion-ordered mapping from target colors to replacement colors.
///
/// Lookup is by closeness, not exact equality, and the first entry whose
/// target is within tolerance wins. Built once from configuration and
/// read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    entries: Vec<(Color, Color)>,
}

impl ColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a (target, replacement) pair.
    pub fn insert(&mut self, target: Color, replacement: Color) {
        self.entries.push((target, replacement));
    }

    /// Replacement for the first target close to `observed`, if any.
    pub fn lookup(&self, observed: &Color) -> Option<&Color> {
        self.entries
            .iter()
            .find(|(target, _)| target.is_close(observed))
            .map(|(_, replacement)| replacement)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Color, Color)> for ColorTable {
    fn from_iter<I: IntoIterator<Item = (Color, Color)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
