use std::{fs, path::PathBuf};

use error_stack::{IntoReport, Result, ResultExt};
use log::info;

use intervallic_core::{
  geometry::{Rect, Size},
  harmony::Pitch,
  key::FormFactor,
  layout::{LayoutCell, SymmetricOctave},
  KeyboardError,
};

use super::RenderOptions;
use crate::svg::SvgKeyboard;

/// Semitones in an octave.
const OCTAVE: i32 = 12;

pub fn run_octave_cmd(
  root: Pitch,
  octaves: u8,
  width: f64,
  height: f64,
  out: Option<&PathBuf>,
  render: &RenderOptions,
) -> Result<(), KeyboardError> {
  let theme = render.load_theme()?;
  let container = Size::new(width, height);
  let octaves = octaves.max(1) as i32;

  let cells = match render.form_factor {
    FormFactor::Symmetric => symmetric_cells(root, octaves, container)?,
    _ => row_cells(root, octaves, container),
  };

  let mut keyboard = SvgKeyboard::new(Size::new(width * octaves as f64, height));
  for cell in &cells {
    keyboard.draw_cell(cell, &render.key_state(cell.pitch, &theme));
  }
  let svg = keyboard.finish();

  match out {
    Some(path) => {
      fs::write(path, svg)
        .into_report()
        .change_context(KeyboardError::ConfigError(format!(
          "unable to write {}",
          path.display()
        )))?;
      info!("wrote {} keys to {}", cells.len(), path.display());
    }
    None => println!("{svg}"),
  }
  Ok(())
}

// each octave is laid out on its own, then shifted right
fn symmetric_cells(
  root: Pitch,
  octaves: i32,
  container: Size,
) -> Result<Vec<LayoutCell>, KeyboardError> {
  let mut cells = Vec::new();
  for i in 0..octaves {
    let start = root.transposed(i * OCTAVE);
    let octave = SymmetricOctave::new(start..=start.transposed(OCTAVE))?;
    let dx = i as f64 * container.width;
    cells.extend(octave.layout(container).iter().map(|c| c.translated(dx, 0.0)));
  }
  // overlays go on top of every octave, not just their own
  cells.sort_by_key(|c| c.z_index);
  Ok(cells)
}

// other form factors get a plain row of equal cells
fn row_cells(root: Pitch, octaves: i32, container: Size) -> Vec<LayoutCell> {
  let count = octaves * OCTAVE + 1;
  let cell_width = container.width * octaves as f64 / count as f64;
  (0..count)
    .map(|i| {
      let pitch = root.transposed(i);
      LayoutCell {
        pitch,
        interval: pitch.interval_class(root).interval(),
        column: i as usize,
        frame: Rect::new(i as f64 * cell_width, 0.0, cell_width, container.height),
        rotation_degrees: 0.0,
        z_index: 0,
        outline: None,
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::{row_cells, symmetric_cells};
  use intervallic_core::{geometry::Size, harmony::Pitch};

  #[test]
  fn test_symmetric_tiling() {
    let cells = symmetric_cells(Pitch(48), 2, Size::new(800.0, 400.0)).unwrap();
    assert_eq!(cells.len(), 26);

    // both tritones come last
    let overlays: Vec<i32> = cells[24..].iter().map(|c| c.pitch.midi_number()).collect();
    assert_eq!(overlays, vec![54, 66]);

    let second_root = cells.iter().find(|c| c.pitch == Pitch(60) && c.column == 0).unwrap();
    assert_eq!(second_root.frame.origin.x, 800.0);
  }

  #[test]
  fn test_row_cells() {
    let cells = row_cells(Pitch(60), 1, Size::new(1300.0, 100.0));
    assert_eq!(cells.len(), 13);
    assert_eq!(cells[12].pitch, Pitch(72));
    assert_eq!(cells[12].frame.origin.x, 1200.0);
  }
}
