use palette::{FromColor, Hsv, Srgb, Srgba};

use super::Color;

/// Relative changes to apply to a color in hue / saturation / brightness space.
///
/// `hue` is in degrees and wraps around the color wheel. The other channels are
/// fractions of their full range and are clamped to `0.0 ..= 1.0` after the change.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HsbDelta {
  pub hue: f32,
  pub saturation: f32,
  pub brightness: f32,
  pub opacity: f32,
}

impl HsbDelta {
  pub fn brightness(brightness: f32) -> HsbDelta {
    HsbDelta {
      brightness,
      ..Default::default()
    }
  }
}

/// Applies `delta` to `color` in HSB space.
///
/// Channels that aren't touched by the delta keep their value, so a brightness-only
/// adjustment preserves hue and saturation.
pub fn adjust(color: Color, delta: HsbDelta) -> Color {
  let hsv: Hsv = Hsv::from_color(color.color);

  let hue = (hsv.hue.to_positive_degrees() + delta.hue).rem_euclid(360.0);
  let saturation = (hsv.saturation + delta.saturation).clamp(0.0, 1.0);
  let value = (hsv.value + delta.brightness).clamp(0.0, 1.0);
  let opacity = (color.alpha + delta.opacity).clamp(0.0, 1.0);

  let rgb: Srgb = Srgb::from_color(Hsv::new(hue, saturation, value));
  Srgba::new(rgb.red, rgb.green, rgb.blue, opacity)
}

/// Brightness of `color` in HSB space, `0.0 ..= 1.0`.
pub fn brightness(color: Color) -> f32 {
  let hsv: Hsv = Hsv::from_color(color.color);
  hsv.value
}

#[cfg(test)]
mod tests {
  use super::{adjust, brightness, HsbDelta};
  use crate::color::{black, from_rgb_u32, white};
  use palette::{FromColor, Hsv};

  const EPSILON: f32 = 1e-4;

  #[test]
  fn test_brightness_only_keeps_hue_and_saturation() {
    let c = from_rgb_u32(0x2a6099);
    let before: Hsv = Hsv::from_color(c.color);
    let after: Hsv = Hsv::from_color(adjust(c, HsbDelta::brightness(-0.2)).color);

    assert!((before.hue.to_positive_degrees() - after.hue.to_positive_degrees()).abs() < 0.01);
    assert!((before.saturation - after.saturation).abs() < EPSILON);
    assert!((before.value - 0.2 - after.value).abs() < EPSILON);
  }

  #[test]
  fn test_channels_clamp() {
    assert!((brightness(adjust(white(), HsbDelta::brightness(0.5))) - 1.0).abs() < EPSILON);
    assert!(brightness(adjust(black(), HsbDelta::brightness(-0.5))).abs() < EPSILON);

    let faded = adjust(white(), HsbDelta { opacity: -2.0, ..Default::default() });
    assert_eq!(faded.alpha, 0.0);
    let opaque = adjust(white(), HsbDelta { opacity: 1.0, ..Default::default() });
    assert_eq!(opaque.alpha, 1.0);
  }

  #[test]
  fn test_hue_wraps() {
    let red = from_rgb_u32(0xff0000);
    let shifted: Hsv = Hsv::from_color(adjust(red, HsbDelta { hue: -120.0, ..Default::default() }).color);
    assert!((shifted.hue.to_positive_degrees() - 240.0).abs() < 0.01);

    let around: Hsv = Hsv::from_color(adjust(red, HsbDelta { hue: 480.0, ..Default::default() }).color);
    assert!((around.hue.to_positive_degrees() - 120.0).abs() < 0.01);
  }

  #[test]
  fn test_zero_delta_is_identity() {
    let c = from_rgb_u32(0x81d41a);
    let same = adjust(c, HsbDelta::default());
    assert!((same.red - c.red).abs() < EPSILON);
    assert!((same.green - c.green).abs() < EPSILON);
    assert!((same.blue - c.blue).abs() < EPSILON);
  }
}
