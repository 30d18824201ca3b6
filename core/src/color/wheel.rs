use palette::{Gradient, LinSrgb, Srgb, Srgba};

use super::{from_rgb_u32, Color};

// hard-coded control points along an "RYB" color wheel, starting at red
const RYB_CONTROL_POINTS: [u32; 12] = [
  0xff0000, 0xbf0041, 0x800080, 0x55308d, 0x2a6099, 0x158466, 0x00a933, 0x81d41a, 0xffff00,
  0xffbf00, 0xff8000, 0xff4000,
];

fn wheel_gradient() -> Gradient<LinSrgb> {
  // interpolate in linear space, then convert back to sRGB for display
  let ryb_colors: Vec<LinSrgb> = RYB_CONTROL_POINTS
    .iter()
    .map(|rgb| from_rgb_u32(*rgb).color.into_linear())
    .collect();

  Gradient::new(ryb_colors)
}

/// Returns `divisions` colors evenly spaced around the RYB wheel.
pub fn wheel_colors(divisions: usize) -> Vec<Color> {
  wheel_gradient()
    .take(divisions)
    .map(|lin| {
      let c = Srgb::from_linear(lin);
      Srgba::new(c.red, c.green, c.blue, 1.0)
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::wheel_colors;
  use crate::color::utils::color_hex;

  #[test]
  fn test_wheel_endpoints() {
    let colors = wheel_colors(12);
    assert_eq!(colors.len(), 12);
    assert_eq!(color_hex(colors[0]), "#ff0000");
    assert!(color_hex(colors[11]).starts_with("#ff"));

    let coarse = wheel_colors(3);
    assert_eq!(coarse.len(), 3);
    assert_eq!(color_hex(coarse[0]), "#ff0000");
  }
}
