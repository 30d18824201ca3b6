//! Pitch arithmetic relative to a tonic.
//!
//! Everything here is plain integer math on semitone numbers. Note spelling
//! (natural vs. accidental, note names) lives behind the [NoteSpelling] trait
//! in [spelling].
pub mod spelling;

pub use spelling::{NoteName, NoteSpelling, TwelveToneSpelling};

use crate::error::KeyboardError;
use error_stack::{report, Result};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::fmt::Display;

/// Number of pitch classes in an octave.
pub const PITCH_CLASS_COUNT: usize = 12;

/// A musical pitch, as a semitone number. Pitch 60 is middle C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pitch(pub i32);

impl Pitch {
  pub const fn new(midi_number: i32) -> Pitch {
    Pitch(midi_number)
  }

  pub const fn midi_number(&self) -> i32 {
    self.0
  }

  /// Returns the pitch `semitones` above (or below, if negative) this one.
  /// Saturates at the ends of the `i32` range.
  pub const fn transposed(&self, semitones: i32) -> Pitch {
    Pitch(self.0.saturating_add(semitones))
  }

  /// Returns the interval class between this pitch and `tonic`.
  ///
  /// Uses a floored modulo, so pitches below the tonic wrap around instead of going negative.
  ///
  /// ```rust
  /// use intervallic_core::harmony::Pitch;
  ///
  /// let tonic = Pitch(60);
  /// assert_eq!(Pitch(67).interval_class(tonic).index(), 7);
  /// assert_eq!(Pitch(55).interval_class(tonic).index(), 7);
  /// assert_eq!(Pitch(72).interval_class(tonic).index(), 0);
  /// ```
  pub fn interval_class(&self, tonic: Pitch) -> IntervalClass {
    // widened so any two i32 pitches have a distance
    let diff = self.0 as i64 - tonic.0 as i64;
    IntervalClass(diff.rem_euclid(PITCH_CLASS_COUNT as i64) as u8)
  }

  pub fn is_tonic(&self, tonic: Pitch) -> bool {
    self.interval_class(tonic).is_tonic()
  }

  pub fn is_tritone(&self, tonic: Pitch) -> bool {
    self.interval_class(tonic).is_tritone()
  }

  pub fn is_perfect_fourth_or_fifth(&self, tonic: Pitch) -> bool {
    self.interval_class(tonic).is_perfect_fourth_or_fifth()
  }
}

impl Display for Pitch {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// The distance in semitones from a tonic to a pitch, folded into a single octave (0 ..= 11).
///
/// Values produced by [Pitch::interval_class] are always in range, so theme lookups
/// keyed by an `IntervalClass` never need a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntervalClass(u8);

impl IntervalClass {
  pub const TONIC: IntervalClass = IntervalClass(0);
  pub const PERFECT_FOURTH: IntervalClass = IntervalClass(5);
  pub const TRITONE: IntervalClass = IntervalClass(6);
  pub const PERFECT_FIFTH: IntervalClass = IntervalClass(7);

  /// When converting from arbitrary input, use this; it rejects values of 12 and up.
  pub fn new(value: u8) -> Result<IntervalClass, KeyboardError> {
    if (value as usize) < PITCH_CLASS_COUNT {
      Ok(IntervalClass(value))
    } else {
      Err(report!(KeyboardError::InvalidIndex(value as usize)))
    }
  }

  pub const fn value(&self) -> u8 {
    self.0
  }

  pub const fn index(&self) -> usize {
    self.0 as usize
  }

  pub fn is_tonic(&self) -> bool {
    *self == Self::TONIC
  }

  pub fn is_tritone(&self) -> bool {
    *self == Self::TRITONE
  }

  pub fn is_perfect_fourth_or_fifth(&self) -> bool {
    *self == Self::PERFECT_FOURTH || *self == Self::PERFECT_FIFTH
  }

  /// The named interval for this class. Class 0 is always the unison, never the octave.
  pub fn interval(&self) -> Interval {
    Interval::CHROMATIC[self.index()]
  }
}

impl Display for IntervalClass {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// The thirteen steps of an octave, P1 through P8 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive)]
pub enum Interval {
  PerfectUnison = 0,
  MinorSecond,
  MajorSecond,
  MinorThird,
  MajorThird,
  PerfectFourth,
  Tritone,
  PerfectFifth,
  MinorSixth,
  MajorSixth,
  MinorSeventh,
  MajorSeventh,
  PerfectOctave,
}

impl Interval {
  /// All intervals in ascending order, unison to octave.
  pub const CHROMATIC: [Interval; 13] = [
    Interval::PerfectUnison,
    Interval::MinorSecond,
    Interval::MajorSecond,
    Interval::MinorThird,
    Interval::MajorThird,
    Interval::PerfectFourth,
    Interval::Tritone,
    Interval::PerfectFifth,
    Interval::MinorSixth,
    Interval::MajorSixth,
    Interval::MinorSeventh,
    Interval::MajorSeventh,
    Interval::PerfectOctave,
  ];

  pub fn from_index(index: usize) -> Result<Interval, KeyboardError> {
    Interval::from_usize(index).ok_or_else(|| report!(KeyboardError::InvalidIndex(index)))
  }

  pub const fn semitones(&self) -> i32 {
    *self as i32
  }

  pub fn interval_class(&self) -> IntervalClass {
    IntervalClass((self.semitones() as usize % PITCH_CLASS_COUNT) as u8)
  }

  pub fn short_name(&self) -> &'static str {
    use Interval::*;
    match self {
      PerfectUnison => "P1",
      MinorSecond => "m2",
      MajorSecond => "M2",
      MinorThird => "m3",
      MajorThird => "M3",
      PerfectFourth => "P4",
      Tritone => "TT",
      PerfectFifth => "P5",
      MinorSixth => "m6",
      MajorSixth => "M6",
      MinorSeventh => "m7",
      MajorSeventh => "M7",
      PerfectOctave => "P8",
    }
  }
}

impl Display for Interval {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.short_name())
  }
}

#[cfg(test)]
mod tests {
  use super::{Interval, IntervalClass, Pitch};
  use crate::error::KeyboardError;

  #[test]
  fn test_interval_class_is_periodic() {
    for tonic in [-13, 0, 5, 60, 61, 127] {
      let tonic = Pitch(tonic);
      for p in -30..150 {
        let ic = Pitch(p).interval_class(tonic);
        assert!(ic.index() < 12);
        assert_eq!(ic, Pitch(p + 12).interval_class(tonic));
        assert_eq!(ic, Pitch(p - 24).interval_class(tonic));
      }
    }
  }

  #[test]
  fn test_extreme_pitches() {
    assert_eq!(Pitch(i32::MAX).interval_class(Pitch(-1)).value(), 8);
    assert_eq!(Pitch(i32::MIN).interval_class(Pitch(i32::MAX)).value(), 9);
    assert_eq!(Pitch(i32::MAX).interval_class(Pitch(i32::MIN)).value(), 3);
    assert!(Pitch(i32::MIN).is_tonic(Pitch(i32::MIN)));

    assert_eq!(Pitch(i32::MAX).transposed(12), Pitch(i32::MAX));
    assert_eq!(Pitch(i32::MIN).transposed(-1), Pitch(i32::MIN));
  }

  #[test]
  fn test_tonic_is_class_zero() {
    for t in -20..140 {
      assert_eq!(Pitch(t).interval_class(Pitch(t)), IntervalClass::TONIC);
      assert!(Pitch(t).is_tonic(Pitch(t)));
    }
  }

  #[test]
  fn test_below_tonic_wraps() {
    let tonic = Pitch(60);
    assert_eq!(Pitch(59).interval_class(tonic).value(), 11);
    assert_eq!(Pitch(54).interval_class(tonic).value(), 6);
    assert!(Pitch(54).is_tritone(tonic));
  }

  #[test]
  fn test_relation_predicates() {
    let tonic = Pitch(62);
    assert!(Pitch(67).is_perfect_fourth_or_fifth(tonic));
    assert!(Pitch(69).is_perfect_fourth_or_fifth(tonic));
    assert!(!Pitch(68).is_perfect_fourth_or_fifth(tonic));
    assert!(Pitch(68).is_tritone(tonic));
    assert!(Pitch(74).is_tonic(tonic));
  }

  #[test]
  fn test_checked_interval_class() {
    assert_eq!(IntervalClass::new(11).unwrap().index(), 11);
    let err = IntervalClass::new(12).unwrap_err();
    assert_eq!(err.current_context(), &KeyboardError::InvalidIndex(12));
  }

  #[test]
  fn test_interval_lookup() {
    assert_eq!(Interval::from_index(6).unwrap(), Interval::Tritone);
    assert_eq!(Interval::from_index(12).unwrap(), Interval::PerfectOctave);
    assert!(Interval::from_index(13).is_err());

    assert_eq!(IntervalClass::TONIC.interval(), Interval::PerfectUnison);
    assert_eq!(Interval::PerfectOctave.interval_class(), IntervalClass::TONIC);
    assert_eq!(Pitch(63).interval_class(Pitch(60)).interval().short_name(), "m3");
  }
}
