//! Linear RGB colors written as CSS-style hex strings in options files.

use std::{borrow::Cow, fmt};

use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// RGB color with components in `0.0..=1.0`.
///
/// Serializes as `"#rrggbb"` so presets read like the palette a designer
/// would hand over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub [f32; 3]);

impl Color {
    /// Pure white.
    pub const WHITE: Self = Self([1.0, 1.0, 1.0]);
    /// `#00ffff`, the scene's accent color.
    pub const CYAN: Self = Self([0.0, 1.0, 1.0]);

    /// Parse `#rrggbb`, `rrggbb` or the `#rgb` shorthand.
    pub fn from_hex(value: &str) -> Result<Self, SceneError> {
        let invalid = || SceneError::InvalidColor(value.to_owned());
        let digits = value.strip_prefix('#').unwrap_or(value);
        // from_str_radix tolerates a sign, so check digits up front.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |hex: &str| {
            u8::from_str_radix(hex, 16).map(|v| f32::from(v) / 255.0)
        };
        let rgb = match digits.len() {
            6 => [
                channel(&digits[0..2]),
                channel(&digits[2..4]),
                channel(&digits[4..6]),
            ],
            3 => {
                let doubled: Vec<String> = digits
                    .chars()
                    .map(|c| format!("{c}{c}"))
                    .collect();
                [
                    channel(&doubled[0]),
                    channel(&doubled[1]),
                    channel(&doubled[2]),
                ]
            }
            _ => return Err(invalid()),
        };

        let mut out = [0.0; 3];
        for (slot, parsed) in out.iter_mut().zip(rgb) {
            *slot = parsed.map_err(|_| invalid())?;
        }
        Ok(Self(out))
    }

    /// Format as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = SceneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl JsonSchema for Color {
    fn schema_name() -> Cow<'static, str> {
        "Color".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": "^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$"
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_and_short_hex() {
        assert_eq!(Color::from_hex("#00ffff").unwrap(), Color::CYAN);
        assert_eq!(Color::from_hex("fff").unwrap(), Color::WHITE);
        let peach = Color::from_hex("#ffddaa").unwrap();
        assert!((peach.0[1] - 221.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn rejects_signed_channels() {
        assert!(Color::from_hex("#+f+f+f").is_err());
        assert!(Color::from_hex("+ff").is_err());
        assert!(Color::from_hex("#-10000").is_err());
    }

    #[test]
    fn hex_survives_serde() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            color: Color,
        }
        let parsed: Wrapper = toml::from_str("color = \"#ff66ff\"").unwrap();
        assert_eq!(parsed.color.to_hex(), "#ff66ff");
        let written = toml::to_string(&parsed).unwrap();
        assert!(written.contains("#ff66ff"));
    }
}
