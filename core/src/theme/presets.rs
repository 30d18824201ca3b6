//! Built-in themes. Each preset is built once, on first use, and shared from then on.
use lazy_static::lazy_static;

use super::{KeySymbol, Theme};
use crate::color::{from_rgb_u32, utils::text_color_for_bgcolor, wheel::wheel_colors, Color};
use crate::harmony::PITCH_CLASS_COUNT;

use KeySymbol::*;

pub const PRESET_NAMES: [&str; 3] = ["homey", "wheel", "monochrome"];

const HOMEY_KEY_COLORS: [u32; PITCH_CLASS_COUNT] = [
  0xf2e3c6, 0x6b4f3f, 0xc9a66b, 0x8c5a3c, 0xe0b872, 0x7a8c5a, 0x5a4a6b, 0x4f7a8c, 0xa0574a,
  0xd98c5f, 0x6b6b4f, 0xb8a07a,
];

const HOMEY_SYMBOL_COLORS: [u32; PITCH_CLASS_COUNT] = [
  0x7a3b1e, 0xe8d5b5, 0x4a3520, 0xf0d9b5, 0x5c3d1e, 0xf2ead8, 0xe6d9f2, 0xeaf2f5, 0xf5e1dc,
  0x4a2a14, 0xf2f2e0, 0x3d2e1a,
];

const HOMEY_SYMBOLS: [KeySymbol; PITCH_CLASS_COUNT] = [
  Circle, Chevron, Pentagon, Triangle, Square, Hexagon, Star, Diamond, Capsule, Heart, Cross, Ring,
];

const HOMEY_SYMBOL_SIZES: [f32; PITCH_CLASS_COUNT] = [
  1.0, 0.6, 0.75, 0.8, 0.8, 0.9, 0.7, 0.9, 0.75, 0.8, 0.6, 0.65,
];

const WHEEL_SYMBOLS: [KeySymbol; PITCH_CLASS_COUNT] = [
  Circle, Triangle, Square, Diamond, Pentagon, Hexagon, Star, Hexagon, Pentagon, Diamond, Square,
  Triangle,
];

fn rgb_table(table: [u32; PITCH_CLASS_COUNT]) -> [Color; PITCH_CLASS_COUNT] {
  table.map(from_rgb_u32)
}

fn homey() -> Theme {
  Theme::from_parts(
    "homey".to_string(),
    rgb_table(HOMEY_KEY_COLORS),
    rgb_table(HOMEY_SYMBOL_COLORS),
    HOMEY_SYMBOLS,
    HOMEY_SYMBOL_SIZES,
  )
}

// keys walk the RYB wheel starting from red on the tonic; symbols are black or white
// depending on which reads better on top of the key
fn wheel() -> Theme {
  let wheel = wheel_colors(PITCH_CLASS_COUNT);
  let key_colors: [Color; PITCH_CLASS_COUNT] =
    std::array::from_fn(|i| wheel.get(i).copied().unwrap_or_else(crate::color::white));
  let symbol_colors = key_colors.map(text_color_for_bgcolor);

  let mut sizes = [0.8; PITCH_CLASS_COUNT];
  sizes[0] = 1.0;

  Theme::from_parts(
    "wheel".to_string(),
    key_colors,
    symbol_colors,
    WHEEL_SYMBOLS,
    sizes,
  )
}

fn monochrome() -> Theme {
  let key_colors = std::array::from_fn(|i| {
    if i % 2 == 0 {
      from_rgb_u32(0xd8d8d8)
    } else {
      from_rgb_u32(0x505050)
    }
  });
  let symbol_colors = std::array::from_fn(|i| {
    if i % 2 == 0 {
      from_rgb_u32(0x202020)
    } else {
      from_rgb_u32(0xf0f0f0)
    }
  });

  Theme::from_parts(
    "monochrome".to_string(),
    key_colors,
    symbol_colors,
    HOMEY_SYMBOLS,
    HOMEY_SYMBOL_SIZES,
  )
}

lazy_static! {
  pub static ref HOMEY: Theme = homey();
  pub static ref WHEEL: Theme = wheel();
  pub static ref MONOCHROME: Theme = monochrome();
}

/// Looks up a built-in theme by name. See [PRESET_NAMES].
pub fn preset(name: &str) -> Option<&'static Theme> {
  match name {
    "homey" => Some(&*HOMEY),
    "wheel" => Some(&*WHEEL),
    "monochrome" => Some(&*MONOCHROME),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::{preset, PRESET_NAMES};
  use crate::theme::Theme;

  #[test]
  fn test_presets_pass_validation() {
    for name in PRESET_NAMES {
      let theme = preset(name).unwrap();
      assert_eq!(theme.name(), name);

      // round-trip the tables through the checked constructor
      let rebuilt = Theme::new(
        name,
        theme.key_colors().to_vec(),
        theme.symbol_colors().to_vec(),
        theme.symbols().to_vec(),
        theme.symbol_sizes().to_vec(),
      );
      assert!(rebuilt.is_ok(), "preset {name} failed validation");
    }
  }

  #[test]
  fn test_unknown_preset() {
    assert!(preset("nope").is_none());
  }
}
