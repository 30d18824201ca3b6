//! The symmetric keyboard places one octave (P1 through P8, 13 pitches) into eight
//! equal-width columns. Seconds, thirds, sixths and sevenths are stacked with the
//! major interval on top; the tritone is a small diamond that straddles the
//! boundary between the fourth and the fifth.
//!
//! ```text
//!  +----+----+----+----+----+----+----+----+
//!  |    | M2 | M3 |    |    | M6 | M7 |    |
//!  |    |    |    |    |    |    |    |    |
//!  | P1 +----+----+ P4 <>P5 +----+----+ P8 |
//!  |    | m2 | m3 |    TT   | m6 | m7 |    |
//!  |    |    |    |    |    |    |    |    |
//!  +----+----+----+----+----+----+----+----+
//! ```
//!
//! Only a single octave is handled here. To draw several, lay out each one and
//! shift its cells right by the container width (see [LayoutCell::translated]).
use std::ops::RangeInclusive;

use error_stack::{report, Result};
use log::trace;

use crate::error::KeyboardError;
use crate::geometry::{Float, Rect, Size};
use crate::harmony::{Interval, Pitch};

/// P1 through P8 inclusive.
pub const OCTAVE_PITCH_COUNT: usize = 13;
const OCTAVE_SPAN: i32 = OCTAVE_PITCH_COUNT as i32 - 1;
pub const COLUMN_COUNT: usize = 8;

/// The tritone cell is a square whose side is the smaller of these fractions of
/// its host column's height and width.
pub const TRITONE_HEIGHT_RATIO: Float = 0.3125;
pub const TRITONE_WIDTH_RATIO: Float = 1.0;

const TRITONE_ROTATION_DEGREES: Float = 45.0;

/// Corner radius of the tritone frame, as a fraction of its side.
const TRITONE_FRAME_CORNER_RATIO: Float = 0.125;
const TRITONE_FRAME_LINE_WIDTH: Float = 2.0;

enum Column {
  Single(Interval),
  Stacked { upper: Interval, lower: Interval },
}

const COLUMNS: [Column; COLUMN_COUNT] = {
  use Interval::*;
  [
    Column::Single(PerfectUnison),
    Column::Stacked {
      upper: MajorSecond,
      lower: MinorSecond,
    },
    Column::Stacked {
      upper: MajorThird,
      lower: MinorThird,
    },
    Column::Single(PerfectFourth),
    Column::Single(PerfectFifth),
    Column::Stacked {
      upper: MajorSixth,
      lower: MinorSixth,
    },
    Column::Stacked {
      upper: MajorSeventh,
      lower: MinorSeventh,
    },
    Column::Single(PerfectOctave),
  ]
};

/// Index of the column the tritone overlay hangs off (the perfect fifth).
const TRITONE_HOST_COLUMN: usize = 4;

/// One placed key.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCell {
  pub pitch: Pitch,
  pub interval: Interval,
  pub column: usize,
  pub frame: Rect,
  /// Rotation around the frame's center, clockwise.
  pub rotation_degrees: Float,
  /// Cells with a higher z-index are drawn over the others.
  pub z_index: i32,
  /// A frame drawn around the cell, on top of the key itself.
  pub outline: Option<CellOutline>,
}

/// A stroked rounded rect around a cell's frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellOutline {
  pub corner_radius: Float,
  pub line_width: Float,
}

impl LayoutCell {
  pub fn is_overlay(&self) -> bool {
    self.z_index > 0
  }

  pub fn translated(&self, dx: Float, dy: Float) -> LayoutCell {
    LayoutCell {
      frame: self.frame.translated(dx, dy),
      ..self.clone()
    }
  }
}

/// One validated octave of pitches, ready to be laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymmetricOctave {
  root: Pitch,
}

impl SymmetricOctave {
  /// Accepts exactly one octave, e.g. `Pitch(60) ..= Pitch(72)`.
  pub fn new(range: RangeInclusive<Pitch>) -> Result<SymmetricOctave, KeyboardError> {
    let (start, end) = range.into_inner();
    // checked, so a root too close to i32::MAX has no octave above it
    if start.midi_number().checked_add(OCTAVE_SPAN) != Some(end.midi_number()) {
      return Err(report!(KeyboardError::InvalidRange {
        start: start.midi_number(),
        end: end.midi_number(),
      }));
    }
    Ok(SymmetricOctave { root: start })
  }

  /// Accepts 13 ascending, consecutive pitches.
  pub fn from_pitches(pitches: &[Pitch]) -> Result<SymmetricOctave, KeyboardError> {
    let invalid = || {
      report!(KeyboardError::InvalidRange {
        start: pitches.first().map(Pitch::midi_number).unwrap_or_default(),
        end: pitches.last().map(Pitch::midi_number).unwrap_or_default(),
      })
    };

    if pitches.len() != OCTAVE_PITCH_COUNT {
      return Err(invalid().attach_printable(format!(
        "expected {OCTAVE_PITCH_COUNT} pitches, got {}",
        pitches.len()
      )));
    }
    if pitches
      .windows(2)
      .any(|w| w[0].midi_number().checked_add(1) != Some(w[1].midi_number()))
    {
      return Err(invalid().attach_printable("pitches must be consecutive semitones"));
    }
    Ok(SymmetricOctave { root: pitches[0] })
  }

  pub fn root(&self) -> Pitch {
    self.root
  }

  pub fn pitch(&self, interval: Interval) -> Pitch {
    self.root.transposed(interval.semitones())
  }

  /// Side length of the tritone diamond for a host column of the given size.
  pub fn tritone_length(column: Size) -> Float {
    (column.height * TRITONE_HEIGHT_RATIO).min(column.width * TRITONE_WIDTH_RATIO)
  }

  /// Places all 13 pitches in a container of the given size, in drawing order:
  /// the columns from left to right, then the tritone overlay.
  pub fn layout(&self, container: Size) -> Vec<LayoutCell> {
    let column_width = container.width / COLUMN_COUNT as Float;
    let half_height = container.height / 2.0;

    let mut cells = Vec::with_capacity(OCTAVE_PITCH_COUNT);
    let mut place = |interval: Interval, column: usize, frame: Rect| {
      cells.push(LayoutCell {
        pitch: self.pitch(interval),
        interval,
        column,
        frame,
        rotation_degrees: 0.0,
        z_index: 0,
        outline: None,
      })
    };

    for (i, column) in COLUMNS.iter().enumerate() {
      let x = i as Float * column_width;
      match column {
        Column::Single(interval) => {
          place(*interval, i, Rect::new(x, 0.0, column_width, container.height))
        }
        Column::Stacked { upper, lower } => {
          place(*upper, i, Rect::new(x, 0.0, column_width, half_height));
          place(*lower, i, Rect::new(x, half_height, column_width, half_height));
        }
      }
    }

    // centered on the left edge of the fifth's column, halfway down
    let host_x = TRITONE_HOST_COLUMN as Float * column_width;
    let side = Self::tritone_length(Size::new(column_width, container.height));
    cells.push(LayoutCell {
      pitch: self.pitch(Interval::Tritone),
      interval: Interval::Tritone,
      column: TRITONE_HOST_COLUMN,
      frame: Rect::new(host_x - side / 2.0, half_height - side / 2.0, side, side),
      rotation_degrees: TRITONE_ROTATION_DEGREES,
      z_index: 1,
      outline: Some(CellOutline {
        corner_radius: side * TRITONE_FRAME_CORNER_RATIO,
        line_width: TRITONE_FRAME_LINE_WIDTH,
      }),
    });

    trace!(
      "laid out octave rooted at {} in {}x{}",
      self.root,
      container.width,
      container.height
    );
    cells
  }

  /// Lays out the octave and hands each cell to `factory`, keeping drawing order.
  pub fn layout_with<T, F>(&self, container: Size, factory: F) -> Vec<T>
  where
    F: FnMut(&LayoutCell) -> T,
  {
    self.layout(container).iter().map(factory).collect()
  }
}

/// Validates `range` and lays it out. To build something from each cell as it's
/// placed, use [layout_symmetric_octave_with].
///
/// ```rust
/// use intervallic_core::geometry::Size;
/// use intervallic_core::harmony::Pitch;
/// use intervallic_core::layout::layout_symmetric_octave;
///
/// let cells = layout_symmetric_octave(Pitch(60)..=Pitch(72), Size::new(800.0, 400.0)).unwrap();
/// assert_eq!(cells.len(), 13);
///
/// let tritone = cells.last().unwrap();
/// assert_eq!(tritone.pitch, Pitch(66));
/// assert_eq!(tritone.rotation_degrees, 45.0);
///
/// assert!(layout_symmetric_octave(Pitch(60)..=Pitch(71), Size::new(800.0, 400.0)).is_err());
/// ```
pub fn layout_symmetric_octave(
  range: RangeInclusive<Pitch>,
  container: Size,
) -> Result<Vec<LayoutCell>, KeyboardError> {
  Ok(SymmetricOctave::new(range)?.layout(container))
}

/// Like [layout_symmetric_octave], but builds one `T` per cell with `factory`,
/// in drawing order. See [SymmetricOctave::layout_with].
pub fn layout_symmetric_octave_with<T, F>(
  range: RangeInclusive<Pitch>,
  container: Size,
  factory: F,
) -> Result<Vec<T>, KeyboardError>
where
  F: FnMut(&LayoutCell) -> T,
{
  Ok(SymmetricOctave::new(range)?.layout_with(container, factory))
}

#[cfg(test)]
mod tests {
  use super::{layout_symmetric_octave, layout_symmetric_octave_with, CellOutline, LayoutCell, SymmetricOctave};
  use crate::error::KeyboardError;
  use crate::geometry::Size;
  use crate::harmony::{Interval, Pitch};
  use crate::key::{resolve_key_attributes, FormFactor, KeyVisualState, Viewpoint};
  use crate::theme::presets::HOMEY;

  const CONTAINER: Size = Size {
    width: 800.0,
    height: 400.0,
  };

  fn octave_cells() -> Vec<LayoutCell> {
    layout_symmetric_octave(Pitch(60)..=Pitch(72), CONTAINER).unwrap()
  }

  fn cell_for(cells: &[LayoutCell], pitch: i32) -> &LayoutCell {
    cells.iter().find(|c| c.pitch == Pitch(pitch)).unwrap()
  }

  #[test]
  fn test_every_pitch_placed_once() {
    let cells = octave_cells();
    let mut pitches: Vec<i32> = cells.iter().map(|c| c.pitch.midi_number()).collect();
    pitches.sort();
    assert_eq!(pitches, (60..=72).collect::<Vec<i32>>());
  }

  #[test]
  fn test_columns() {
    let cells = octave_cells();
    let column_of = |pitch| cell_for(&cells, pitch).column;
    assert_eq!(column_of(60), 0);
    assert_eq!(column_of(61), 1);
    assert_eq!(column_of(62), 1);
    assert_eq!(column_of(63), 2);
    assert_eq!(column_of(64), 2);
    assert_eq!(column_of(65), 3);
    assert_eq!(column_of(67), 4);
    assert_eq!(column_of(68), 5);
    assert_eq!(column_of(70), 6);
    assert_eq!(column_of(72), 7);

    // full height singles
    let p4 = cell_for(&cells, 65);
    assert_eq!(p4.frame.origin.x, 300.0);
    assert_eq!(p4.frame.size.height, 400.0);
    assert_eq!(p4.frame.size.width, 100.0);
  }

  #[test]
  fn test_major_stacks_over_minor() {
    let cells = octave_cells();
    for (minor, major) in [(61, 62), (63, 64), (68, 69), (70, 71)] {
      let minor = cell_for(&cells, minor);
      let major = cell_for(&cells, major);
      assert_eq!(minor.column, major.column);
      assert_eq!(major.frame.origin.y, 0.0);
      assert_eq!(minor.frame.origin.y, 200.0);
      assert_eq!(major.frame.size.height, 200.0);
      assert_eq!(minor.frame.size.height, 200.0);
    }
  }

  #[test]
  fn test_tritone_overlay() {
    let cells = octave_cells();
    let tritone = cell_for(&cells, 66);
    let fifth = cell_for(&cells, 67);

    assert_eq!(tritone.interval, Interval::Tritone);
    assert_eq!(tritone.column, fifth.column);
    assert_eq!(tritone.rotation_degrees, 45.0);
    assert!(tritone.is_overlay());
    assert!(!fifth.is_overlay());

    // min(0.3125 * 400, 100) = 100
    assert_eq!(tritone.frame.size, Size::new(100.0, 100.0));
    let center = tritone.frame.center();
    assert_eq!(center.x, fifth.frame.min_x());
    assert_eq!(center.y, 200.0);

    // drawn after everything it overlaps
    assert_eq!(cells.last().unwrap().pitch, Pitch(66));

    assert_eq!(
      tritone.outline,
      Some(CellOutline {
        corner_radius: 12.5,
        line_width: 2.0
      })
    );
    assert!(cells.iter().filter(|c| c.pitch != Pitch(66)).all(|c| c.outline.is_none()));
  }

  #[test]
  fn test_tritone_is_capped_by_height() {
    let cells = layout_symmetric_octave(Pitch(48)..=Pitch(60), Size::new(1600.0, 160.0)).unwrap();
    let tritone = cell_for(&cells, 54);
    assert_eq!(tritone.frame.size.width, 50.0);
    assert_eq!(tritone.frame.size.height, 50.0);
  }

  #[test]
  fn test_twelve_pitches_is_invalid() {
    let err = layout_symmetric_octave(Pitch(60)..=Pitch(71), CONTAINER).unwrap_err();
    assert_eq!(
      err.current_context(),
      &KeyboardError::InvalidRange { start: 60, end: 71 }
    );

    let reversed = SymmetricOctave::new(Pitch(72)..=Pitch(60)).unwrap_err();
    assert!(matches!(reversed.current_context(), KeyboardError::InvalidRange { .. }));
  }

  #[test]
  fn test_extreme_ranges_are_invalid() {
    let err = SymmetricOctave::new(Pitch(i32::MIN)..=Pitch(i32::MAX)).unwrap_err();
    assert_eq!(
      err.current_context(),
      &KeyboardError::InvalidRange {
        start: i32::MIN,
        end: i32::MAX
      }
    );

    // no room for the octave above
    assert!(SymmetricOctave::new(Pitch(i32::MAX - 5)..=Pitch(i32::MAX)).is_err());

    let top = SymmetricOctave::new(Pitch(i32::MAX - 12)..=Pitch(i32::MAX)).unwrap();
    assert_eq!(top.pitch(Interval::PerfectOctave), Pitch(i32::MAX));
    let bottom = SymmetricOctave::new(Pitch(i32::MIN)..=Pitch(i32::MIN + 12)).unwrap();
    assert_eq!(bottom.layout(CONTAINER).len(), 13);

    // twelve steps up to i32::MAX, then one that wraps around to i32::MIN
    let wrapped: Vec<Pitch> = (0..13).map(|i| Pitch((i32::MAX - 11).wrapping_add(i))).collect();
    assert_eq!(wrapped[12], Pitch(i32::MIN));
    assert!(SymmetricOctave::from_pitches(&wrapped).is_err());
  }

  #[test]
  fn test_from_pitches() {
    let pitches: Vec<Pitch> = (60..=72).map(Pitch).collect();
    assert_eq!(SymmetricOctave::from_pitches(&pitches).unwrap().root(), Pitch(60));

    assert!(SymmetricOctave::from_pitches(&pitches[..12]).is_err());

    let mut gapped = pitches.clone();
    gapped[5] = Pitch(90);
    let err = SymmetricOctave::from_pitches(&gapped).unwrap_err();
    assert_eq!(
      err.current_context(),
      &KeyboardError::InvalidRange { start: 60, end: 72 }
    );

    assert!(SymmetricOctave::from_pitches(&[]).is_err());
  }

  #[test]
  fn test_layout_with_factory() {
    let intervals = layout_symmetric_octave_with(Pitch(60)..=Pitch(72), CONTAINER, |cell| {
      cell.interval.short_name()
    })
    .unwrap();
    assert_eq!(intervals.len(), 13);
    assert_eq!(intervals[0], "P1");
    assert_eq!(intervals[12], "TT");

    assert!(layout_symmetric_octave_with(Pitch(60)..=Pitch(70), CONTAINER, |c| c.pitch).is_err());
  }

  #[test]
  fn test_layout_is_repeatable() {
    let octave = SymmetricOctave::new(Pitch(60)..=Pitch(72)).unwrap();
    assert_eq!(octave.layout(CONTAINER), octave.layout(CONTAINER));
  }

  #[test]
  fn test_tiling() {
    let second = SymmetricOctave::new(Pitch(72)..=Pitch(84)).unwrap();
    let shifted: Vec<LayoutCell> = second
      .layout(CONTAINER)
      .iter()
      .map(|c| c.translated(CONTAINER.width, 0.0))
      .collect();
    assert_eq!(cell_for(&shifted, 72).frame.origin.x, 800.0);
    assert_eq!(cell_for(&shifted, 84).frame.origin.x, 1500.0);
  }

  #[test]
  fn test_cells_resolve_with_split_perfects() {
    let octave = SymmetricOctave::new(Pitch(60)..=Pitch(72)).unwrap();
    let resolved = octave.layout_with(CONTAINER, |cell| {
      let state = KeyVisualState::new(cell.pitch, &HOMEY)
        .with_tonic(Pitch(60))
        .with_viewpoint(Viewpoint::Intervallic)
        .with_form_factor(FormFactor::Symmetric)
        .with_cell(cell.frame.size);
      (cell.pitch, resolve_key_attributes(&state))
    });

    for (pitch, attrs) in &resolved {
      let copies = match pitch.midi_number() {
        60 | 65 | 67 | 72 => 2,
        _ => 1,
      };
      assert_eq!(attrs.symbol_offsets.len(), copies, "pitch {pitch}");
    }

    let (_, tritone) = resolved.last().unwrap();
    assert_eq!(tritone.rotation_degrees, 45.0);
  }
}
