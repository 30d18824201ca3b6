//! Color values and the HSB adjustments used for press / idle contrast.
pub mod adjust;
pub mod utils;
pub mod wheel;

pub use adjust::{adjust, HsbDelta};

use palette::{Srgb, Srgba};

/// Key and symbol colors are gamma-encoded sRGB with an opacity channel.
pub type Color = Srgba;

/// Builds an opaque color from a `0xRRGGBB` literal.
pub fn from_rgb_u32(rgb: u32) -> Color {
  let c: Srgb = Srgb::new(
    ((rgb >> 16) & 0xff) as u8,
    ((rgb >> 8) & 0xff) as u8,
    (rgb & 0xff) as u8,
  )
  .into_format();
  Srgba::new(c.red, c.green, c.blue, 1.0)
}

pub fn white() -> Color {
  Srgba::new(1.0, 1.0, 1.0, 1.0)
}

pub fn black() -> Color {
  Srgba::new(0.0, 0.0, 0.0, 1.0)
}
