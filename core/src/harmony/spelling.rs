//! Note spelling, as seen by the key resolver.
//!
//! The resolver only needs two answers from a music-theory library: whether a pitch
//! is spelled without an accidental (a "white key"), and what to call it. Both are
//! behind [NoteSpelling] so callers can plug in other spellings or tunings.
use std::fmt::Display;

use tune::note::{Note, NoteLetter};

use super::Pitch;

pub trait NoteSpelling {
  /// True when the pitch is spelled without an accidental.
  fn is_natural(&self, pitch: Pitch) -> bool;

  fn note_name(&self, pitch: Pitch) -> NoteName;
}

/// A note class name (e.g. "C#") together with its octave number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteName {
  pub class: String,
  pub octave: i32,
}

impl Display for NoteName {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}{}", self.class, self.octave)
  }
}

/// Standard 12-tone spelling in the key of C, using sharps for accidentals.
/// Pitch 60 is spelled C4.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TwelveToneSpelling;

fn letter_name(letter: NoteLetter) -> &'static str {
  use NoteLetter::*;
  match letter {
    C => "C",
    Csh => "C#",
    D => "D",
    Dsh => "D#",
    E => "E",
    F => "F",
    Fsh => "F#",
    G => "G",
    Gsh => "G#",
    A => "A",
    Ash => "A#",
    B => "B",
  }
}

impl NoteSpelling for TwelveToneSpelling {
  fn is_natural(&self, pitch: Pitch) -> bool {
    use NoteLetter::*;
    let (letter, _) = Note::from_midi_number(pitch.midi_number()).letter_and_octave();
    !matches!(letter, Csh | Dsh | Fsh | Gsh | Ash)
  }

  fn note_name(&self, pitch: Pitch) -> NoteName {
    let (letter, octave) = Note::from_midi_number(pitch.midi_number()).letter_and_octave();
    NoteName {
      class: letter_name(letter).to_string(),
      octave: octave.octave_number(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{NoteSpelling, TwelveToneSpelling};
  use crate::harmony::Pitch;

  #[test]
  fn test_naturals() {
    let spelling = TwelveToneSpelling;
    let naturals: Vec<i32> = (60..72).filter(|p| spelling.is_natural(Pitch(*p))).collect();
    assert_eq!(naturals, vec![60, 62, 64, 65, 67, 69, 71]);
    assert!(!spelling.is_natural(Pitch(1)));
  }

  #[test]
  fn test_note_names() {
    let spelling = TwelveToneSpelling;
    assert_eq!(spelling.note_name(Pitch(60)).to_string(), "C4");
    assert_eq!(spelling.note_name(Pitch(61)).to_string(), "C#4");
    assert_eq!(spelling.note_name(Pitch(71)).class, "B");
    assert_eq!(spelling.note_name(Pitch(72)).octave, 5);
  }
}
