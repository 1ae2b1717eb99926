// Color module
// Event marker color with hex text serialization

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a string is not a `#RRGGBB` or `#RGB` hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a hex color (expected #RRGGBB or #RGB)")]
pub struct ColorParseError(pub String);

/// Opaque RGB color stored with each event.
///
/// Stored in the database as uppercase `#RRGGBB` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl EventColor {
    pub const BLUE: EventColor = EventColor::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB`, `#RGB`, or either form without the leading `#`.
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            3 => {
                // #F57 expands to #FF5577
                let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
                Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_array(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }
}

impl Default for EventColor {
    fn default() -> Self {
        Self::BLUE
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for EventColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| ColorParseError(s.to_string()))
    }
}

impl TryFrom<String> for EventColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EventColor> for String {
    fn from(color: EventColor) -> Self {
        color.to_hex()
    }
}
