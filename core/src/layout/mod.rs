//! Keyboard layouts that place pitches into 2D cells.
pub mod symmetric;

pub use symmetric::{
  layout_symmetric_octave, layout_symmetric_octave_with, CellOutline, LayoutCell, SymmetricOctave,
};
