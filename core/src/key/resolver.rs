//! Resolves a [KeyVisualState] into concrete colors, symbol placement and geometry.
//!
//! Resolution is a pure function of its input: nothing is cached between calls and
//! every combination of viewpoint, form factor, activation and subtlety is handled.
use crate::color::{adjust, utils::text_color_for_bgcolor, Color, HsbDelta};
use crate::geometry::{Alignment, Float, Insets, Size};
use crate::harmony::{IntervalClass, NoteSpelling, TwelveToneSpelling};
use crate::theme::KeySymbol;

use super::state::{FormFactorConfig, KeyLabel, KeyVisualState, Viewpoint};

pub const GOLDEN_RATIO: Float = 1.618_033_988_749_895;

/// Symbol scale multiplier for small (accidental) piano keys.
pub const SMALL_KEY_SYMBOL_SCALE: f32 = 1.25;

const PRESSED_NATURAL_BRIGHTNESS: f32 = -0.3;
const PRESSED_ACCIDENTAL_BRIGHTNESS: f32 = 0.3;
const PRESSED_KEY_BRIGHTNESS: f32 = -0.2;
const SUBTLE_LARGE_KEY_BIAS: f32 = 0.1;
const SUBTLE_SMALL_KEY_BIAS: f32 = -0.1;
const PRESSED_SYMBOL_BRIGHTNESS: f32 = 0.2;
const IDLE_SYMBOL_BRIGHTNESS: f32 = -0.1;
const PRESSED_OUTLINE_BRIGHTNESS: f32 = 0.1;

/// Split symbols sit this fraction of the cell height away from the center, plus half a symbol.
const SPLIT_SYMBOL_OFFSET_RATIO: Float = 0.25;
const DOOR_HEIGHT_RATIO: Float = 0.4;
const DOOR_WIDTH_RATIO: Float = 0.2;

const TRITONE_ROTATION_DEGREES: Float = 45.0;

/// The small mark drawn inside the symbol of the exact tonic pitch.
#[derive(Debug, Clone, PartialEq)]
pub struct Door {
  pub size: Size,
  /// One vertical offset per symbol copy.
  pub offsets: Vec<Float>,
  pub color: Color,
}

/// Everything needed to draw one key. Vertical offsets are y-down and measured from
/// the anchor given by `alignment`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedKeyAttributes {
  pub interval_class: IntervalClass,
  pub key_color: Color,
  pub symbol_color: Color,
  pub symbol: KeySymbol,
  pub symbol_scale: f32,
  /// Side length of the (square) symbol, in cell units.
  pub symbol_length: Float,
  /// One entry per symbol copy. Split symbols have two.
  pub symbol_offsets: Vec<Float>,
  pub text_color: Color,
  pub label: Option<String>,
  /// Set only when the key carries the tonic outline.
  pub border_color: Option<Color>,
  pub border_width: Float,
  pub is_outlined: bool,
  pub outline_width: Float,
  pub corner_radius: Float,
  /// Where the key-color rectangle sits inside the cell.
  pub key_insets: Insets,
  pub alignment: Alignment,
  pub rotation_degrees: Float,
  pub door: Option<Door>,
}

impl ResolvedKeyAttributes {
  pub fn has_split_symbol(&self) -> bool {
    self.symbol_offsets.len() > 1
  }
}

/// Resolves key attributes, asking `S` how notes are spelled.
#[derive(Debug, Clone, Default)]
pub struct KeyAttributeResolver<S = TwelveToneSpelling> {
  spelling: S,
}

impl KeyAttributeResolver<TwelveToneSpelling> {
  pub fn new() -> Self {
    KeyAttributeResolver {
      spelling: TwelveToneSpelling,
    }
  }
}

/// Resolves with the standard 12-tone spelling.
pub fn resolve_key_attributes(state: &KeyVisualState) -> ResolvedKeyAttributes {
  KeyAttributeResolver::new().resolve(state)
}

// facts about the key that every attribute depends on
struct Key<'s, 'a> {
  state: &'s KeyVisualState<'a>,
  ic: IntervalClass,
  config: FormFactorConfig,
  natural: bool,
  small: bool,
  activated: bool,
}

impl<S: NoteSpelling> KeyAttributeResolver<S> {
  pub fn with_spelling(spelling: S) -> Self {
    KeyAttributeResolver { spelling }
  }

  pub fn resolve(&self, state: &KeyVisualState) -> ResolvedKeyAttributes {
    let config = state.form_factor.config();
    let natural = self.spelling.is_natural(state.pitch);
    let key = Key {
      state,
      ic: state.pitch.interval_class(state.tonic),
      config,
      natural,
      small: config.small_accidentals && !natural,
      activated: state.activated(),
    };

    let key_color = key.key_color();
    let symbol_scale = key.symbol_scale();
    let symbol_length = state.cell.width / GOLDEN_RATIO.powi(3) * symbol_scale as Float;
    let symbol_offsets = key.symbol_offsets(symbol_length);

    let is_outlined = key.is_outlined();
    let min_dim = state.cell.min_dimension();
    let outline_width = if is_outlined {
      config.tonic_outline_ratio * min_dim
    } else {
      0.0
    };
    let corner_radius = config.corner_radius_ratio * min_dim;
    let border_width = if key.small {
      config.small_key_border_width
    } else {
      config.border_width
    };

    let door = (state.pitch == state.tonic).then(|| {
      let height = symbol_length * DOOR_HEIGHT_RATIO;
      Door {
        size: Size::new(symbol_length * DOOR_WIDTH_RATIO, height),
        offsets: symbol_offsets
          .iter()
          .map(|o| o + (symbol_length - height) * 0.5)
          .collect(),
        color: key_color,
      }
    });

    ResolvedKeyAttributes {
      interval_class: key.ic,
      key_color,
      symbol_color: key.symbol_color(),
      symbol: state.theme.symbol(key.ic),
      symbol_scale,
      symbol_length,
      symbol_offsets,
      text_color: key.text_color(key_color),
      label: self.label(state),
      border_color: is_outlined.then(|| key.outline_color()),
      border_width,
      is_outlined,
      outline_width,
      corner_radius,
      key_insets: key.insets(border_width, corner_radius).grown(outline_width),
      alignment: config.alignment,
      rotation_degrees: if config.rotates_tritone && key.ic.is_tritone() {
        TRITONE_ROTATION_DEGREES
      } else {
        0.0
      },
      door,
    }
  }

  fn label(&self, state: &KeyVisualState) -> Option<String> {
    match &state.label {
      KeyLabel::Default => {
        let name = self.spelling.note_name(state.pitch);
        (name.class == "C").then(|| name.to_string())
      }
      KeyLabel::Text(text) => Some(text.clone()),
      KeyLabel::Hidden => None,
    }
  }
}

impl<'s, 'a> Key<'s, 'a> {
  fn theme_key_color(&self) -> Color {
    self.state.theme.key_color(self.ic)
  }

  fn theme_symbol_color(&self) -> Color {
    self.state.theme.symbol_color(self.ic)
  }

  fn key_color(&self) -> Color {
    let state = self.state;
    match state.viewpoint {
      Viewpoint::Diatonic => {
        let base = if self.natural {
          state.natural_color
        } else {
          state.accidental_color
        };
        if !self.activated {
          return base;
        }
        // naturals darken and accidentals lighten, so the press shows on either
        state.pressed_color.unwrap_or_else(|| {
          let delta = if self.natural {
            PRESSED_NATURAL_BRIGHTNESS
          } else {
            PRESSED_ACCIDENTAL_BRIGHTNESS
          };
          adjust(base, HsbDelta::brightness(delta))
        })
      }

      Viewpoint::Intervallic if state.subtle => {
        if self.activated {
          return self.theme_symbol_color();
        }
        match (self.config.small_accidentals, self.small) {
          (false, _) => self.theme_key_color(),
          (true, false) => adjust(self.theme_key_color(), HsbDelta::brightness(SUBTLE_LARGE_KEY_BIAS)),
          (true, true) => adjust(self.theme_key_color(), HsbDelta::brightness(SUBTLE_SMALL_KEY_BIAS)),
        }
      }

      Viewpoint::Intervallic => {
        if self.activated {
          adjust(self.theme_key_color(), HsbDelta::brightness(PRESSED_KEY_BRIGHTNESS))
        } else {
          self.theme_key_color()
        }
      }
    }
  }

  fn symbol_color(&self) -> Color {
    if self.state.subtle {
      return match (self.state.viewpoint, self.activated) {
        (Viewpoint::Intervallic, true) => self.theme_key_color(),
        _ => self.theme_symbol_color(),
      };
    }

    let delta = if self.activated {
      PRESSED_SYMBOL_BRIGHTNESS
    } else {
      IDLE_SYMBOL_BRIGHTNESS
    };
    adjust(self.theme_symbol_color(), HsbDelta::brightness(delta))
  }

  fn text_color(&self, key_color: Color) -> Color {
    match self.state.viewpoint {
      Viewpoint::Diatonic if self.natural => self.state.accidental_color,
      Viewpoint::Diatonic => self.state.natural_color,
      Viewpoint::Intervallic => text_color_for_bgcolor(key_color),
    }
  }

  fn is_outlined(&self) -> bool {
    self.state.viewpoint == Viewpoint::Intervallic && self.ic.is_tonic()
  }

  fn outline_color(&self) -> Color {
    let color = self.state.theme.tonic_outline_color();
    if self.activated {
      adjust(color, HsbDelta::brightness(PRESSED_OUTLINE_BRIGHTNESS))
    } else {
      color
    }
  }

  fn symbol_scale(&self) -> f32 {
    let size = self.state.theme.symbol_size(self.ic);
    if self.small {
      size * SMALL_KEY_SYMBOL_SCALE
    } else {
      size
    }
  }

  fn symbol_offsets(&self, symbol_length: Float) -> Vec<Float> {
    let height = self.state.cell.height;
    let split = self.config.splits_perfect_symbols
      && (self.ic.is_tonic() || self.ic.is_perfect_fourth_or_fifth());

    if split {
      let offset = height * SPLIT_SYMBOL_OFFSET_RATIO + 0.5 * symbol_length;
      return vec![-offset, offset];
    }

    let nudge = if self.small {
      self.config.small_symbol_nudge
    } else {
      self.config.natural_symbol_nudge
    };
    vec![0.0 - height * nudge]
  }

  fn insets(&self, border_width: Float, corner_radius: Float) -> Insets {
    let mut insets = Insets::uniform(border_width);
    if self.config.flat_top {
      // small keys pull their rounded top corners up past the cell edge
      insets.top = if self.small { -corner_radius } else { 0.0 };
    }
    insets
  }
}
