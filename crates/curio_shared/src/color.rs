//! Accent color parsing and conversion.
//!
//! Colors arrive as short text tokens (`"#4f46e5"`, `"#f0a"`, `"teal"`) and are
//! stored as plain 8-bit sRGB so they can be hashed and compared exactly.
//! Renderers convert with [`Rgb::to_linear`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced while parsing a color token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The token was empty or whitespace only.
    #[error("color is empty")]
    Empty,

    /// The token is neither a hex color nor a known color name.
    #[error("malformed color: {0:?}")]
    Malformed(String),
}

/// 8-bit sRGB color, no alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

/// Named colors accepted in addition to hex tokens.
const NAMED: &[(&str, Rgb)] = &[
    ("black", Rgb::from_hex(0x000000)),
    ("white", Rgb::from_hex(0xffffff)),
    ("red", Rgb::from_hex(0xff0000)),
    ("green", Rgb::from_hex(0x008000)),
    ("blue", Rgb::from_hex(0x0000ff)),
    ("yellow", Rgb::from_hex(0xffff00)),
    ("orange", Rgb::from_hex(0xffa500)),
    ("purple", Rgb::from_hex(0x800080)),
    ("gray", Rgb::from_hex(0x808080)),
    ("grey", Rgb::from_hex(0x808080)),
    ("pink", Rgb::from_hex(0xffc0cb)),
    ("cyan", Rgb::from_hex(0x00ffff)),
    ("magenta", Rgb::from_hex(0xff00ff)),
    ("brown", Rgb::from_hex(0xa52a2a)),
    ("gold", Rgb::from_hex(0xffd700)),
    ("teal", Rgb::from_hex(0x008080)),
    ("navy", Rgb::from_hex(0x000080)),
];

impl Rgb {
    /// Creates a color from channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a packed `0xRRGGBB` literal.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Parses `#rgb`, `#rrggbb` or a known color name (case-insensitive).
    ///
    /// # Errors
    ///
    /// [`ColorError::Empty`] for blank input, [`ColorError::Malformed`] otherwise.
    pub fn parse(token: &str) -> Result<Self, ColorError> {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(ColorError::Empty);
        }

        if let Some(digits) = trimmed.strip_prefix('#') {
            return Self::parse_hex_digits(digits)
                .ok_or_else(|| ColorError::Malformed(token.to_string()));
        }

        NAMED
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
            .map(|&(_, rgb)| rgb)
            .ok_or_else(|| ColorError::Malformed(token.to_string()))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn parse_hex_digits(digits: &str) -> Option<Self> {
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let packed = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Self::from_hex(packed)),
            3 => {
                // #abc expands to #aabbcc
                let expand = |nibble: u32| ((nibble & 0xf) * 0x11) as u8;
                Some(Self::new(expand(packed >> 8), expand(packed >> 4), expand(packed)))
            }
            _ => None,
        }
    }

    /// Packed `0xRRGGBB`.
    #[inline]
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.to_u32())
    }

    /// Normalized sRGB components in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn to_f32(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }

    /// Linear-light components for shading.
    #[must_use]
    pub fn to_linear(self) -> [f32; 3] {
        self.to_f32().map(|c| {
            if c <= 0.040_45 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        })
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_u32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_hex() {
        assert_eq!(Rgb::parse("#ff8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::parse("  #4F46E5 ").unwrap(), Rgb::from_hex(0x4f46e5));
    }

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(Rgb::parse("#f0a").unwrap(), Rgb::from_hex(0xff00aa));
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(Rgb::parse("Teal").unwrap(), Rgb::from_hex(0x008080));
        assert_eq!(Rgb::parse("grey").unwrap(), Rgb::parse("gray").unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Rgb::parse(""), Err(ColorError::Empty));
        assert_eq!(Rgb::parse("   "), Err(ColorError::Empty));
        for bad in ["#", "#12", "#12345", "#1234567", "#gggggg", "#+12345", "ff0000", "chartreuse-ish"] {
            assert!(
                matches!(Rgb::parse(bad), Err(ColorError::Malformed(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_hex_roundtrip_display() {
        let c = Rgb::from_hex(0x0a0b0c);
        assert_eq!(c.to_hex(), "#0a0b0c");
        assert_eq!(c.to_string(), "#0a0b0c");
        assert_eq!(c.to_u32(), 0x0a0b0c);
    }

    #[test]
    fn test_linear_conversion_endpoints() {
        assert_eq!(Rgb::from_hex(0x000000).to_linear(), [0.0, 0.0, 0.0]);
        let white = Rgb::from_hex(0xffffff).to_linear();
        assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-6));
        // Mid gray is darker in linear space
        let mid = Rgb::new(128, 128, 128).to_linear()[0];
        assert!(mid < 0.5 && mid > 0.2);
    }
}
