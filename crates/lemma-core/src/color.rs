use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA color with f32 components in [0.0, 1.0].
///
/// The named constants below are the lesson palette, written as the hex
/// literals the scripts quote; `from_hex` is a const fn so they parse at
/// compile time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

const fn hex_digit(c: u8) -> Result<u8, ColorError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ColorError::InvalidHex),
    }
}

const fn hex_channel(digits: &[u8], i: usize) -> Result<u8, ColorError> {
    let hi = match hex_digit(digits[i]) {
        Ok(v) => v,
        Err(e) => return Err(e),
    };
    let lo = match hex_digit(digits[i + 1]) {
        Ok(v) => v,
        Err(e) => return Err(e),
    };
    Ok(hi * 16 + lo)
}

impl Color {
    /// Create a new RGBA color.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 1.0).
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse a hex color string, 6 or 8 digits, `#` optional.
    pub const fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let bytes = hex.as_bytes();
        let digits: &[u8] = match bytes {
            [b'#', rest @ ..] => rest,
            other => other,
        };
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorError::InvalidHex);
        }
        let r = match hex_channel(digits, 0) {
            Ok(v) => v,
            Err(e) => return Err(e),
        };
        let g = match hex_channel(digits, 2) {
            Ok(v) => v,
            Err(e) => return Err(e),
        };
        let b = match hex_channel(digits, 4) {
            Ok(v) => v,
            Err(e) => return Err(e),
        };
        let a = if digits.len() == 8 {
            match hex_channel(digits, 6) {
                Ok(v) => v,
                Err(e) => return Err(e),
            }
        } else {
            255
        };
        Ok(Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ))
    }

    /// Const shorthand for hex literals (palette constants, lesson colors).
    /// A bad literal fails compilation.
    pub const fn hex(hex: &str) -> Self {
        match Self::from_hex(hex) {
            Ok(color) => color,
            Err(_) => panic!("invalid hex color literal"),
        }
    }

    /// Convert to RGBA u8 components.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            (self.r * 255.0).clamp(0.0, 255.0) as u8,
            (self.g * 255.0).clamp(0.0, 255.0) as u8,
            (self.b * 255.0).clamp(0.0, 255.0) as u8,
            (self.a * 255.0).clamp(0.0, 255.0) as u8,
        ]
    }

    // --- Named constants ---
    //
    // The *_DARK shades are the fill companions of their stroke colors;
    // the lesson scripts fill regions with the dark shade and stroke with
    // the bright one.

    pub const TRANSPARENT: Color = Color::hex("#00000000");
    pub const BLACK: Color = Color::hex("#000000");
    pub const WHITE: Color = Color::hex("#FFFFFF");
    pub const GRAY: Color = Color::hex("#868E96");
    pub const RED: Color = Color::hex("#FC616B");
    pub const RED_DARK: Color = Color::hex("#992626");
    pub const GREEN: Color = Color::hex("#54C268");
    pub const GREEN_DARK: Color = Color::hex("#216B36");
    pub const BLUE: Color = Color::hex("#59A6F5");
    pub const BLUE_DARK: Color = Color::hex("#1C4D8A");
    pub const YELLOW: Color = Color::hex("#FFD600");
    pub const YELLOW_DARK: Color = Color::hex("#9C8017");
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Hex notation, the form markup labels embed (`#RRGGBB`, alpha suffixed
/// only when not fully opaque).
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color string")]
    InvalidHex,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_six_digits() {
        let c = Color::from_hex("#FF8800").unwrap();
        assert_eq!(c.to_rgba8(), [255, 136, 0, 255]);
    }

    #[test]
    fn test_from_hex_eight_digits() {
        let c = Color::from_hex("#FF880080").unwrap();
        assert_eq!(c.to_rgba8(), [255, 136, 0, 128]);
    }

    #[test]
    fn test_from_hex_hash_optional() {
        let c = Color::from_hex("9775fa").unwrap();
        assert_eq!(c.to_rgba8(), [151, 117, 250, 255]);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Color::from_hex("invalid").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
        assert!(Color::from_hex("#12345").is_err());
    }

    #[test]
    fn test_hex_literal_in_const_context() {
        const C: Color = Color::hex("#4dabf7");
        assert_eq!(C.to_rgba8(), [77, 171, 247, 255]);
    }

    #[test]
    fn test_display_roundtrips_hex() {
        assert_eq!(format!("{}", Color::hex("#9775FA")), "#9775FA");
        assert_eq!(format!("{}", Color::WHITE), "#FFFFFF");
        assert_eq!(format!("{}", Color::rgba(1.0, 0.0, 0.0, 0.5)), "#FF00007F");
    }
}
