use error_stack::Context;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardError {
  /// A theme sequence had the wrong length, or held an out-of-range value.
  InvalidTheme(String),

  /// The symmetric layout was given something other than a single ascending octave.
  InvalidRange {
    start: i32,
    end: i32,
  },

  InvalidIndex(usize),

  InvalidColor(String),

  ConfigError(String),
}

impl Context for KeyboardError {}

impl Display for KeyboardError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use KeyboardError::*;
    match self {
      InvalidTheme(msg) => write!(f, "invalid theme: {msg}"),

      InvalidRange { start, end } => write!(
        f,
        "invalid pitch range {start} ..= {end}. expected 13 ascending pitches (one octave)"
      ),

      InvalidIndex(n) => write!(f, "invalid interval index {n}"),

      InvalidColor(s) => write!(f, "invalid color value: {s}"),

      ConfigError(msg) => write!(f, "configuration error: {msg}"),
    }
  }
}
