//! JSON theme files.
//!
//! ```json
//! {
//!   "name": "sunset",
//!   "key_colors": ["#ff0000", "#bf0041", ...],
//!   "symbol_colors": ["#ffffff", ...],
//!   "symbols": ["circle", "triangle", ...],
//!   "symbol_sizes": [1.0, 0.6, ...],
//!   "tonic_outline_color": "#222222"
//! }
//! ```
//!
//! `tonic_outline_color` is optional.
use error_stack::{IntoReport, Result, ResultExt};
use serde::{Deserialize, Serialize};

use super::{KeySymbol, Theme};
use crate::color::{
  utils::{color_hex, parse_hex_color},
  Color,
};
use crate::error::KeyboardError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
  pub name: String,
  pub key_colors: Vec<String>,
  pub symbol_colors: Vec<String>,
  pub symbols: Vec<KeySymbol>,
  pub symbol_sizes: Vec<f32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tonic_outline_color: Option<String>,
}

fn parse_colors(field: &str, values: &[String]) -> Result<Vec<Color>, KeyboardError> {
  values
    .iter()
    .map(|s| parse_hex_color(s).attach_printable_lazy(|| format!("in theme field {field}")))
    .collect()
}

impl ThemeConfig {
  pub fn from_json_str(json: &str) -> Result<ThemeConfig, KeyboardError> {
    serde_json::from_str(json)
      .into_report()
      .change_context(KeyboardError::ConfigError("malformed theme json".to_string()))
  }

  pub fn to_json_string(&self) -> Result<String, KeyboardError> {
    serde_json::to_string_pretty(self)
      .into_report()
      .change_context(KeyboardError::ConfigError("unable to serialize theme".to_string()))
  }

  /// Parses the colors and validates the tables.
  pub fn into_theme(self) -> Result<Theme, KeyboardError> {
    let key_colors = parse_colors("key_colors", &self.key_colors)?;
    let symbol_colors = parse_colors("symbol_colors", &self.symbol_colors)?;
    let outline = match &self.tonic_outline_color {
      Some(s) => Some(parse_hex_color(s).attach_printable("in theme field tonic_outline_color")?),
      None => None,
    };

    let theme = Theme::new(
      self.name.clone(),
      key_colors,
      symbol_colors,
      self.symbols,
      self.symbol_sizes,
    )
    .attach_printable_lazy(|| format!("in theme {}", self.name))?;

    Ok(match outline {
      Some(color) => theme.with_tonic_outline_color(color),
      None => theme,
    })
  }
}

impl From<&Theme> for ThemeConfig {
  fn from(theme: &Theme) -> Self {
    let hex = |colors: &[Color]| -> Vec<String> { colors.iter().map(|c| color_hex(*c)).collect() };
    ThemeConfig {
      name: theme.name().to_string(),
      key_colors: hex(theme.key_colors()),
      symbol_colors: hex(theme.symbol_colors()),
      symbols: theme.symbols().to_vec(),
      symbol_sizes: theme.symbol_sizes().to_vec(),
      tonic_outline_color: Some(color_hex(theme.tonic_outline_color())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::ThemeConfig;
  use crate::color::utils::color_hex;
  use crate::error::KeyboardError;
  use crate::harmony::IntervalClass;
  use crate::theme::{presets::HOMEY, KeySymbol};

  fn config_json(key_color_count: usize, outline: Option<&str>) -> String {
    let colors: Vec<String> = (0..key_color_count).map(|_| "\"#336699\"".to_string()).collect();
    let symbol_colors: Vec<String> = (0..12).map(|_| "\"#ffffff\"".to_string()).collect();
    let symbols: Vec<String> = (0..12).map(|_| "\"star\"".to_string()).collect();
    let sizes: Vec<String> = (0..12).map(|_| "0.5".to_string()).collect();
    let outline = outline
      .map(|o| format!(", \"tonic_outline_color\": \"{o}\""))
      .unwrap_or_default();
    format!(
      "{{\"name\": \"custom\", \"key_colors\": [{}], \"symbol_colors\": [{}], \"symbols\": [{}], \"symbol_sizes\": [{}]{}}}",
      colors.join(","),
      symbol_colors.join(","),
      symbols.join(","),
      sizes.join(","),
      outline
    )
  }

  #[test]
  fn test_parse_theme_config() {
    let theme = ThemeConfig::from_json_str(&config_json(12, None))
      .unwrap()
      .into_theme()
      .unwrap();
    assert_eq!(theme.name(), "custom");
    assert_eq!(color_hex(theme.key_color(IntervalClass::TRITONE)), "#336699");
    assert_eq!(theme.symbol(IntervalClass::TONIC), KeySymbol::Star);
    assert_eq!(color_hex(theme.tonic_outline_color()), "#ffffff");
  }

  #[test]
  fn test_outline_override() {
    let theme = ThemeConfig::from_json_str(&config_json(12, Some("#112233")))
      .unwrap()
      .into_theme()
      .unwrap();
    assert_eq!(color_hex(theme.tonic_outline_color()), "#112233");
  }

  #[test]
  fn test_short_config_is_invalid_theme() {
    let err = ThemeConfig::from_json_str(&config_json(11, None))
      .unwrap()
      .into_theme()
      .unwrap_err();
    assert!(matches!(err.current_context(), KeyboardError::InvalidTheme(_)));
  }

  #[test]
  fn test_malformed_json() {
    let err = ThemeConfig::from_json_str("{ \"name\": ").unwrap_err();
    assert!(matches!(err.current_context(), KeyboardError::ConfigError(_)));
  }

  #[test]
  fn test_preset_round_trip() {
    let json = ThemeConfig::from(&*HOMEY).to_json_string().unwrap();
    let theme = ThemeConfig::from_json_str(&json).unwrap().into_theme().unwrap();
    assert_eq!(theme.symbols(), HOMEY.symbols());
    assert_eq!(theme.symbol_sizes(), HOMEY.symbol_sizes());
    for (a, b) in theme.key_colors().iter().zip(HOMEY.key_colors()) {
      assert_eq!(color_hex(*a), color_hex(*b));
    }
  }
}
