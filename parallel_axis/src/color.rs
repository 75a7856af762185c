//! CSS-style color strings as they appear in chart options.

use std::{fmt, str::FromStr};

use egui::Color32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("unrecognized color syntax: {0:?}")]
    Syntax(String),

    #[error("bad hex color {0:?}: expected #rgb, #rrggbb or #rrggbbaa")]
    Hex(String),

    #[error("color channel {channel:?} in {input:?} is not a number in 0..=255")]
    Channel { input: String, channel: String },

    #[error("alpha {alpha:?} in {input:?} is not a number in 0..=1")]
    Alpha { input: String, alpha: String },
}

/// A color parsed from option text, remembering the text it came from.
///
/// Supports `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r,g,b)`, `rgba(r,g,b)` and
/// `rgba(r,g,b,a)`. Serializes back to the original text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Color {
    rgba: Color32,
    text: String,
}

impl Color {
    pub fn parse(text: &str) -> Result<Self, ColorParseError> {
        let rgba = parse_css_color(text)?;
        Ok(Self {
            rgba,
            text: text.trim().to_owned(),
        })
    }

    /// Pair a color with the text it should serialize as.
    pub fn new(rgba: Color32, text: impl Into<String>) -> Self {
        Self {
            rgba,
            text: text.into(),
        }
    }

    /// Opaque color, rendered as `rgb(r,g,b)`.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgba: Color32::from_rgb(r, g, b),
            text: format!("rgb({r},{g},{b})"),
        }
    }

    #[inline]
    pub fn color32(&self) -> Color32 {
        self.rgba
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&Color> for Color32 {
    fn from(color: &Color) -> Self {
        color.rgba
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Parse a CSS-style color into an unmultiplied [`Color32`].
pub fn parse_css_color(input: &str) -> Result<Color32, ColorParseError> {
    let text = input.trim();

    if let Some(hex) = text.strip_prefix('#') {
        return parse_hex(input, hex);
    }

    let lower = text.to_ascii_lowercase();
    let args = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ColorParseError::Syntax(input.to_owned()))?;

    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let (channels, alpha) = match parts.as_slice() {
        [r, g, b] => ([*r, *g, *b], None),
        [r, g, b, a] => ([*r, *g, *b], Some(*a)),
        _ => return Err(ColorParseError::Syntax(input.to_owned())),
    };

    let mut rgb = [0_u8; 3];
    for (slot, channel) in rgb.iter_mut().zip(channels) {
        *slot = parse_channel(channel).ok_or_else(|| ColorParseError::Channel {
            input: input.to_owned(),
            channel: channel.to_owned(),
        })?;
    }

    let a = match alpha {
        None => 255,
        Some(alpha) => parse_alpha(alpha).ok_or_else(|| ColorParseError::Alpha {
            input: input.to_owned(),
            alpha: alpha.to_owned(),
        })?,
    };

    let [r, g, b] = rgb;
    Ok(Color32::from_rgba_unmultiplied(r, g, b, a))
}

fn parse_channel(text: &str) -> Option<u8> {
    let value: f64 = text.parse().ok()?;
    (0.0..=255.0)
        .contains(&value)
        .then(|| value.round() as u8)
}

fn parse_alpha(text: &str) -> Option<u8> {
    let value: f64 = text.parse().ok()?;
    (0.0..=1.0)
        .contains(&value)
        .then(|| (value * 255.0).round() as u8)
}

fn parse_hex(input: &str, hex: &str) -> Result<Color32, ColorParseError> {
    let bad = || ColorParseError::Hex(input.to_owned());
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(bad());
    }

    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map(|n| n * 17).map_err(|_| bad());

    match hex.len() {
        3 => Ok(Color32::from_rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Ok(Color32::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Ok(Color32::from_rgba_unmultiplied(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            byte(6)?,
        )),
        _ => Err(bad()),
    }
}
