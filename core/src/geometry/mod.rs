//! Plain 2D geometry for key cells. Coordinates are y-down, like SVG.

/// Just a typedef for the floating point type used for coordinates, etc.
/// This only exists to make it a bit easier to change to f32 if that's ever
/// needed.
pub type Float = f64;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
  pub x: Float,
  pub y: Float,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
  pub width: Float,
  pub height: Float,
}

impl Size {
  pub const UNIT: Size = Size {
    width: 1.0,
    height: 1.0,
  };

  pub fn new(width: Float, height: Float) -> Size {
    Size { width, height }
  }

  pub fn min_dimension(&self) -> Float {
    self.width.min(self.height)
  }
}

impl Default for Size {
  fn default() -> Self {
    Size::UNIT
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
  pub origin: Point,
  pub size: Size,
}

impl Rect {
  pub fn new(x: Float, y: Float, width: Float, height: Float) -> Rect {
    Rect {
      origin: Point { x, y },
      size: Size { width, height },
    }
  }

  pub fn min_x(&self) -> Float {
    self.origin.x
  }

  pub fn max_x(&self) -> Float {
    self.origin.x + self.size.width
  }

  pub fn min_y(&self) -> Float {
    self.origin.y
  }

  pub fn max_y(&self) -> Float {
    self.origin.y + self.size.height
  }

  pub fn center(&self) -> Point {
    Point {
      x: self.origin.x + self.size.width / 2.0,
      y: self.origin.y + self.size.height / 2.0,
    }
  }

  pub fn translated(&self, dx: Float, dy: Float) -> Rect {
    Rect::new(self.origin.x + dx, self.origin.y + dy, self.size.width, self.size.height)
  }

  /// Shrinks the rect by the given edge insets. Negative insets grow it.
  pub fn inset_by(&self, insets: Insets) -> Rect {
    Rect::new(
      self.origin.x + insets.leading,
      self.origin.y + insets.top,
      self.size.width - insets.leading - insets.trailing,
      self.size.height - insets.top - insets.bottom,
    )
  }
}

/// Per-edge insets. Positive values move an edge toward the center of the rect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
  pub top: Float,
  pub leading: Float,
  pub bottom: Float,
  pub trailing: Float,
}

impl Insets {
  pub fn uniform(inset: Float) -> Insets {
    Insets {
      top: inset,
      leading: inset,
      bottom: inset,
      trailing: inset,
    }
  }

  pub fn grown(&self, by: Float) -> Insets {
    Insets {
      top: self.top + by,
      leading: self.leading + by,
      bottom: self.bottom + by,
      trailing: self.trailing + by,
    }
  }
}

/// Where the key's content (label, symbols) is anchored within the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
  Center,
  Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Angle {
  Degrees(Float),
  Radians(Float),
}

impl Angle {
  pub fn as_degrees(&self) -> Float {
    match self {
      Angle::Degrees(d) => *d,
      Angle::Radians(r) => r.to_degrees(),
    }
  }
}

/// Convert polar coordinates in the form of (center, radius, angle) to
/// Cartesian (x,y) coordinates. An angle of zero points straight up.
pub fn polar_to_cartesian(center: Point, radius: Float, angle: Angle) -> Point {
  let a = (angle.as_degrees() - 90.0).to_radians();
  Point {
    x: center.x + (radius * a.cos()),
    y: center.y + (radius * a.sin()),
  }
}

#[cfg(test)]
mod tests {
  use super::{polar_to_cartesian, Angle, Insets, Point, Rect};

  fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
  }

  #[test]
  fn test_inset_by() {
    let r = Rect::new(0.0, 0.0, 10.0, 20.0);
    assert_eq!(r.inset_by(Insets::uniform(1.0)), Rect::new(1.0, 1.0, 8.0, 18.0));

    let pulled_up = Insets {
      top: -2.0,
      ..Insets::uniform(0.5)
    };
    assert_eq!(r.inset_by(pulled_up), Rect::new(0.5, -2.0, 9.0, 21.5));
  }

  #[test]
  fn test_polar_to_cartesian() {
    let c = Point { x: 10.0, y: 10.0 };
    assert!(close(polar_to_cartesian(c, 5.0, Angle::Degrees(0.0)), Point { x: 10.0, y: 5.0 }));
    assert!(close(polar_to_cartesian(c, 5.0, Angle::Degrees(90.0)), Point { x: 15.0, y: 10.0 }));
    assert!(close(polar_to_cartesian(c, 5.0, Angle::Radians(std::f64::consts::PI)), Point { x: 10.0, y: 15.0 }));
  }
}
