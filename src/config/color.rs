use crate::foundation::core::Rgba8;
use serde::{Deserialize, Serialize};

/// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
pub(crate) fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let digits = s
        .strip_prefix('#')
        .ok_or_else(|| format!("color '{s}' must start with '#'"))?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("color '{s}' must contain only hex digits"));
    }

    fn byte(hex: &str) -> u8 {
        // Caller guarantees ascii hex digits.
        u8::from_str_radix(hex, 16).unwrap_or(0)
    }

    match digits.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, c) in out.iter_mut().zip(digits.chars()) {
                let v = byte(&c.to_string());
                *slot = v * 16 + v;
            }
            Ok(Rgba8::rgb(out[0], out[1], out[2]))
        }
        6 | 8 => {
            let r = byte(&digits[0..2]);
            let g = byte(&digits[2..4]);
            let b = byte(&digits[4..6]);
            let a = if digits.len() == 8 {
                byte(&digits[6..8])
            } else {
                255
            };
            Ok(Rgba8 { r, g, b, a })
        }
        _ => Err(format!("color '{s}' must be #RGB, #RRGGBB or #RRGGBBAA")),
    }
}

pub(crate) fn to_hex(c: Rgba8) -> String {
    if c.a == 255 {
        format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
    }
}

impl Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&to_hex(*self))
    }
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex(s.trim()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/color.rs"]
mod tests;
