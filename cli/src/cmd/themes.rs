use error_stack::{report, Result};

use intervallic_core::{
  color::utils::color_hex,
  theme::{preset, ThemeConfig, PRESET_NAMES},
  KeyboardError,
};

pub fn run_themes_cmd(json: Option<&str>) -> Result<(), KeyboardError> {
  let name = match json {
    Some(name) => name,
    None => {
      for name in PRESET_NAMES {
        if let Some(theme) = preset(name) {
          let swatches: Vec<String> = theme.key_colors().iter().map(|c| color_hex(*c)).collect();
          println!("{name:<12} {}", swatches.join(" "));
        }
      }
      return Ok(());
    }
  };

  let theme = preset(name).ok_or_else(|| {
    report!(KeyboardError::ConfigError(format!(
      "no built-in theme named '{name}'. expected one of {}",
      PRESET_NAMES.join(", ")
    )))
  })?;
  println!("{}", ThemeConfig::from(theme).to_json_string()?);
  Ok(())
}
