use std::str::FromStr;

use error_stack::{report, Result};
use palette::{IntoColor, Srgb, Srgba, Xyz};

use super::Color;
use crate::error::KeyboardError;

/// Returns the color as a CSS-compatible hex string, with `#` prefix. Opacity is dropped.
pub fn color_hex(col: Color) -> String {
  let col: Srgb<u8> = col.color.into_format();
  format!("#{col:x}")
}

/// Parses a `#rrggbb` or `#rgb` hex string (the `#` is optional) into an opaque color.
pub fn parse_hex_color(s: &str) -> Result<Color, KeyboardError> {
  let c: Srgb = Srgb::<u8>::from_str(s.trim())
    .map_err(|_| report!(KeyboardError::InvalidColor(s.to_string())))?
    .into_format();
  Ok(Srgba::new(c.red, c.green, c.blue, 1.0))
}

/// Returns a legible text color for the given background color.
///
/// Returns white for "dark" colors (luminance < 0.5) and black for "bright" colors.
pub fn text_color_for_bgcolor(bg: Color) -> Color {
  let xyz: Xyz = bg.color.into_color();
  let luminance = xyz.y;
  if luminance < 0.5 {
    Srgba::new(1.0, 1.0, 1.0, 1.0)
  } else {
    Srgba::new(0.0, 0.0, 0.0, 1.0)
  }
}

pub trait ToHexColorStr {
  fn to_hex_color(&self) -> String;
}

impl ToHexColorStr for Color {
  fn to_hex_color(&self) -> String {
    color_hex(*self)
  }
}
