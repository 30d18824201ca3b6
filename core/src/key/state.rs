use std::{fmt::Display, str::FromStr};

use crate::color::{black, white, Color};
use crate::geometry::{Alignment, Float, Size};
use crate::harmony::Pitch;
use crate::theme::Theme;

/// Middle C.
pub const DEFAULT_TONIC: Pitch = Pitch(60);

/// How keys are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Viewpoint {
  /// By absolute note identity: the white / black key convention.
  Diatonic,
  /// By interval class relative to the tonic, using the theme.
  Intervallic,
}

/// The physical layout convention a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormFactor {
  Isomorphic,
  Symmetric,
  Piano,
  Guitar,
}

/// Geometry rules for one [FormFactor]. Ratios are relative to the key's cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormFactorConfig {
  /// Corner radius, as a fraction of the smaller cell dimension.
  pub corner_radius_ratio: Float,
  pub border_width: Float,
  /// Border width for keys spelled with an accidental, when those are drawn small.
  pub small_key_border_width: Float,
  /// Width of the tonic outline, as a fraction of the smaller cell dimension.
  pub tonic_outline_ratio: Float,
  /// Upward nudge of a single symbol, as a fraction of the cell height.
  pub natural_symbol_nudge: Float,
  pub small_symbol_nudge: Float,
  pub alignment: Alignment,
  /// Keys hang from the top edge, so only the bottom corners show rounding.
  pub flat_top: bool,
  /// Accidentals are drawn as small "black keys".
  pub small_accidentals: bool,
  /// Tonic and perfect fourth / fifth keys get two stacked symbols.
  pub splits_perfect_symbols: bool,
  /// Tritone keys are rotated into a diamond.
  pub rotates_tritone: bool,
}

const ISOMORPHIC: FormFactorConfig = FormFactorConfig {
  corner_radius_ratio: 0.125,
  border_width: 1.0,
  small_key_border_width: 1.0,
  tonic_outline_ratio: 0.06,
  natural_symbol_nudge: 0.0,
  small_symbol_nudge: 0.0,
  alignment: Alignment::Center,
  flat_top: false,
  small_accidentals: false,
  splits_perfect_symbols: false,
  rotates_tritone: false,
};

const SYMMETRIC: FormFactorConfig = FormFactorConfig {
  splits_perfect_symbols: true,
  rotates_tritone: true,
  ..ISOMORPHIC
};

const PIANO: FormFactorConfig = FormFactorConfig {
  small_key_border_width: 0.5,
  natural_symbol_nudge: 0.2,
  small_symbol_nudge: 0.3,
  alignment: Alignment::Bottom,
  flat_top: true,
  small_accidentals: true,
  ..ISOMORPHIC
};

// frets are square cells
const GUITAR: FormFactorConfig = FormFactorConfig {
  corner_radius_ratio: 0.0,
  ..ISOMORPHIC
};

impl FormFactor {
  pub const ALL: [FormFactor; 4] = [
    FormFactor::Isomorphic,
    FormFactor::Symmetric,
    FormFactor::Piano,
    FormFactor::Guitar,
  ];

  pub fn config(&self) -> FormFactorConfig {
    match self {
      FormFactor::Isomorphic => ISOMORPHIC,
      FormFactor::Symmetric => SYMMETRIC,
      FormFactor::Piano => PIANO,
      FormFactor::Guitar => GUITAR,
    }
  }

  pub fn name(&self) -> &'static str {
    match self {
      FormFactor::Isomorphic => "isomorphic",
      FormFactor::Symmetric => "symmetric",
      FormFactor::Piano => "piano",
      FormFactor::Guitar => "guitar",
    }
  }
}

impl Display for FormFactor {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for FormFactor {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    FormFactor::ALL
      .into_iter()
      .find(|ff| ff.name().eq_ignore_ascii_case(s))
      .ok_or_else(|| format!("unknown form factor '{s}'. expected one of isomorphic, symmetric, piano, guitar"))
  }
}

impl Display for Viewpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Viewpoint::Diatonic => write!(f, "diatonic"),
      Viewpoint::Intervallic => write!(f, "intervallic"),
    }
  }
}

impl FromStr for Viewpoint {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "diatonic" => Ok(Viewpoint::Diatonic),
      "intervallic" => Ok(Viewpoint::Intervallic),
      _ => Err(format!("unknown viewpoint '{s}'. expected diatonic or intervallic")),
    }
  }
}

/// Text shown on a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyLabel {
  /// The note name with octave (e.g. "C4"), but only on pitches whose note class is C.
  Default,
  Text(String),
  Hidden,
}

/// Everything the resolver needs to know about one key for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyVisualState<'a> {
  pub pitch: Pitch,
  pub tonic: Pitch,
  /// Local "down" state, e.g. touch or mouse.
  pub is_activated: bool,
  /// Remote state, usually incoming MIDI.
  pub is_activated_externally: bool,
  pub viewpoint: Viewpoint,
  pub form_factor: FormFactor,
  pub theme: &'a Theme,
  /// Swap key and symbol colors on press instead of shifting brightness.
  pub subtle: bool,
  /// Diatonic viewpoint only: replaces the computed pressed color.
  pub pressed_color: Option<Color>,
  pub natural_color: Color,
  pub accidental_color: Color,
  /// Size of the key's cell. Offsets and lengths in the resolved attributes are in the same units.
  pub cell: Size,
  pub label: KeyLabel,
}

impl<'a> KeyVisualState<'a> {
  /// A key in its resting state. Defaults:
  ///
  /// * tonic: [DEFAULT_TONIC] (middle C)
  /// * not activated, locally or externally
  /// * diatonic viewpoint, isomorphic form factor, not subtle
  /// * no pressed color override
  /// * white naturals, black accidentals
  /// * a 1 x 1 cell, so offsets come out as fractions of the cell
  /// * [KeyLabel::Default]
  pub fn new(pitch: Pitch, theme: &'a Theme) -> KeyVisualState<'a> {
    KeyVisualState {
      pitch,
      tonic: DEFAULT_TONIC,
      is_activated: false,
      is_activated_externally: false,
      viewpoint: Viewpoint::Diatonic,
      form_factor: FormFactor::Isomorphic,
      theme,
      subtle: false,
      pressed_color: None,
      natural_color: white(),
      accidental_color: black(),
      cell: Size::UNIT,
      label: KeyLabel::Default,
    }
  }

  /// Either source lights the key. They don't stack.
  pub fn activated(&self) -> bool {
    self.is_activated_externally || self.is_activated
  }

  pub fn with_tonic(mut self, tonic: Pitch) -> Self {
    self.tonic = tonic;
    self
  }

  pub fn with_activation(mut self, is_activated: bool, is_activated_externally: bool) -> Self {
    self.is_activated = is_activated;
    self.is_activated_externally = is_activated_externally;
    self
  }

  pub fn with_viewpoint(mut self, viewpoint: Viewpoint) -> Self {
    self.viewpoint = viewpoint;
    self
  }

  pub fn with_form_factor(mut self, form_factor: FormFactor) -> Self {
    self.form_factor = form_factor;
    self
  }

  pub fn with_subtle(mut self, subtle: bool) -> Self {
    self.subtle = subtle;
    self
  }

  pub fn with_pressed_color(mut self, color: Color) -> Self {
    self.pressed_color = Some(color);
    self
  }

  pub fn with_diatonic_colors(mut self, natural: Color, accidental: Color) -> Self {
    self.natural_color = natural;
    self.accidental_color = accidental;
    self
  }

  pub fn with_cell(mut self, cell: Size) -> Self {
    self.cell = cell;
    self
  }

  pub fn with_label(mut self, label: KeyLabel) -> Self {
    self.label = label;
    self
  }
}
