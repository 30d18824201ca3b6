//! Themes: the per-interval-class colors, symbols and symbol sizes that
//! intervallic keys are drawn with.
pub mod config;
pub mod presets;

pub use config::ThemeConfig;
pub use presets::{preset, PRESET_NAMES};

use std::fmt::Display;

use error_stack::{report, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::KeyboardError;
use crate::harmony::{IntervalClass, PITCH_CLASS_COUNT};

/// Identity of the symbol drawn on a key. The presentation layer decides what each one looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeySymbol {
  Circle,
  Triangle,
  Square,
  Diamond,
  Pentagon,
  Hexagon,
  Star,
  Cross,
  Heart,
  Capsule,
  Ring,
  Chevron,
}

impl KeySymbol {
  pub fn name(&self) -> &'static str {
    use KeySymbol::*;
    match self {
      Circle => "circle",
      Triangle => "triangle",
      Square => "square",
      Diamond => "diamond",
      Pentagon => "pentagon",
      Hexagon => "hexagon",
      Star => "star",
      Cross => "cross",
      Heart => "heart",
      Capsule => "capsule",
      Ring => "ring",
      Chevron => "chevron",
    }
  }
}

impl Display for KeySymbol {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

/// Colors, symbols and symbol sizes for each of the twelve interval classes.
///
/// Index 0 of every sequence is the tonic. A `Theme` can only be built through
/// [Theme::new], which checks every sequence, so lookups by [IntervalClass] are
/// always in bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
  name: String,
  key_colors: [Color; PITCH_CLASS_COUNT],
  symbol_colors: [Color; PITCH_CLASS_COUNT],
  symbols: [KeySymbol; PITCH_CLASS_COUNT],
  symbol_sizes: [f32; PITCH_CLASS_COUNT],
  tonic_outline_color: Color,
}

fn twelve<T>(field: &str, values: Vec<T>) -> Result<[T; PITCH_CLASS_COUNT], KeyboardError> {
  let len = values.len();
  values.try_into().map_err(|_| {
    debug!("rejecting theme: {field} has {len} entries");
    report!(KeyboardError::InvalidTheme(format!(
      "{field} requires {PITCH_CLASS_COUNT} values, but found {len}"
    )))
  })
}

impl Theme {
  /// Builds a theme, failing with [KeyboardError::InvalidTheme] unless every
  /// sequence has exactly 12 entries and every symbol size is in `(0.0, 1.0]`.
  ///
  /// The tonic outline color starts out as the perfect-fourth symbol color; use
  /// [Theme::with_tonic_outline_color] to pick a different one.
  pub fn new(
    name: impl Into<String>,
    key_colors: Vec<Color>,
    symbol_colors: Vec<Color>,
    symbols: Vec<KeySymbol>,
    symbol_sizes: Vec<f32>,
  ) -> Result<Theme, KeyboardError> {
    let key_colors = twelve("key_colors", key_colors)?;
    let symbol_colors = twelve("symbol_colors", symbol_colors)?;
    let symbols = twelve("symbols", symbols)?;
    let symbol_sizes = twelve("symbol_sizes", symbol_sizes)?;

    for (i, size) in symbol_sizes.iter().enumerate() {
      if !(*size > 0.0 && *size <= 1.0) {
        debug!("rejecting theme: symbol size {size} at index {i}");
        return Err(report!(KeyboardError::InvalidTheme(format!(
          "symbol size at index {i} must be in (0, 1], but was {size}"
        ))));
      }
    }

    Ok(Theme::from_parts(
      name.into(),
      key_colors,
      symbol_colors,
      symbols,
      symbol_sizes,
    ))
  }

  /// Only for tables that are known to be valid, like the built-in presets.
  pub(crate) fn from_parts(
    name: String,
    key_colors: [Color; PITCH_CLASS_COUNT],
    symbol_colors: [Color; PITCH_CLASS_COUNT],
    symbols: [KeySymbol; PITCH_CLASS_COUNT],
    symbol_sizes: [f32; PITCH_CLASS_COUNT],
  ) -> Theme {
    let tonic_outline_color = symbol_colors[IntervalClass::PERFECT_FOURTH.index()];
    Theme {
      name,
      key_colors,
      symbol_colors,
      symbols,
      symbol_sizes,
      tonic_outline_color,
    }
  }

  pub fn with_tonic_outline_color(mut self, color: Color) -> Theme {
    self.tonic_outline_color = color;
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn key_color(&self, ic: IntervalClass) -> Color {
    self.key_colors[ic.index()]
  }

  pub fn symbol_color(&self, ic: IntervalClass) -> Color {
    self.symbol_colors[ic.index()]
  }

  pub fn symbol(&self, ic: IntervalClass) -> KeySymbol {
    self.symbols[ic.index()]
  }

  pub fn symbol_size(&self, ic: IntervalClass) -> f32 {
    self.symbol_sizes[ic.index()]
  }

  pub fn tonic_outline_color(&self) -> Color {
    self.tonic_outline_color
  }

  pub fn key_colors(&self) -> &[Color] {
    &self.key_colors
  }

  pub fn symbol_colors(&self) -> &[Color] {
    &self.symbol_colors
  }

  pub fn symbols(&self) -> &[KeySymbol] {
    &self.symbols
  }

  pub fn symbol_sizes(&self) -> &[f32] {
    &self.symbol_sizes
  }
}
