//! Icon colors.
//!
//! Colors are straight-alpha 8-bit sRGB ([`Srgba<u8>`]). The fixed accent
//! colors come from palette's CSS named colors.

use std::str::FromStr;

use palette::{Srgb, Srgba, WithAlpha, named};
use resvg::tiny_skia::Color;

use crate::error::IconError;

/// Outline and accent colors that do not depend on the vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accents {
    /// Selection ring stroke.
    pub selection: Srgba<u8>,
    /// Front marker of the multi-rotor shape.
    pub heading_marker: Srgba<u8>,
    /// Outline drawn around polygons and dots.
    pub outline: Srgba<u8>,
}

impl Default for Accents {
    fn default() -> Self {
        Self {
            selection: opaque(named::YELLOW),
            heading_marker: opaque(named::RED),
            outline: opaque(named::BLACK),
        }
    }
}

/// Default fill color for icons that are not given one.
pub fn default_fill() -> Srgba<u8> {
    opaque(named::YELLOW)
}

fn opaque(color: Srgb<u8>) -> Srgba<u8> {
    color.with_alpha(u8::MAX)
}

pub(crate) fn to_skia(color: Srgba<u8>) -> Color {
    Color::from_rgba8(color.red, color.green, color.blue, color.alpha)
}

/// Formats a color as `#rrggbbaa`.
pub fn to_hex(color: Srgba<u8>) -> String {
    format!(
        "#{:02x}{:02x}{:02x}{:02x}",
        color.red, color.green, color.blue, color.alpha
    )
}

/// Parses `#rrggbb` (opaque) or `#rrggbbaa`. The leading `#` is optional.
pub fn parse_hex(input: &str) -> Result<Srgba<u8>, IconError> {
    let invalid = || IconError::InvalidColor(input.to_string());
    let digits = input.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let (rgb, alpha) = match digits.len() {
        6 => (digits, u8::MAX),
        8 => {
            let alpha = u8::from_str_radix(&digits[6..], 16).map_err(|_| invalid())?;
            (&digits[..6], alpha)
        }
        _ => return Err(invalid()),
    };

    let rgb = Srgb::<u8>::from_str(rgb).map_err(|_| invalid())?;
    Ok(rgb.with_alpha(alpha))
}

/// Serde adapter storing colors as hex strings.
pub(crate) mod hex {
    use palette::Srgba;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(color: &Srgba<u8>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Srgba<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_hex(&text).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_match_named_colors() {
        let accents = Accents::default();
        assert_eq!(accents.selection, Srgba::new(255, 255, 0, 255));
        assert_eq!(accents.heading_marker, Srgba::new(255, 0, 0, 255));
        assert_eq!(accents.outline, Srgba::new(0, 0, 0, 255));
    }

    #[test]
    fn parse_six_and_eight_digits() {
        assert_eq!(parse_hex("#ff8000").unwrap(), Srgba::new(255, 128, 0, 255));
        assert_eq!(parse_hex("10203040").unwrap(), Srgba::new(16, 32, 48, 64));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(parse_hex("#12"), Err(IconError::InvalidColor(_))));
        assert!(matches!(parse_hex("#gg0000"), Err(IconError::InvalidColor(_))));
        assert!(matches!(parse_hex("#ff0000zz"), Err(IconError::InvalidColor(_))));
        assert!(matches!(parse_hex("##ff0000"), Err(IconError::InvalidColor(_))));
    }

    #[test]
    fn hex_output_includes_alpha() {
        assert_eq!(to_hex(Srgba::new(1, 2, 3, 4)), "#01020304");
        assert_eq!(to_hex(default_fill()), "#ffff00ff");
    }
}
