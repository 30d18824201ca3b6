//! Draws resolved keys as SVG shapes.
//!
//! This is the only place that knows what a [KeySymbol] looks like; the core just
//! picks one.
use log::trace;

use intervallic_core::{
  color::{utils::ToHexColorStr, Color},
  geometry::{polar_to_cartesian, Alignment, Angle, Float, Insets, Point, Rect, Size},
  key::{resolve_key_attributes, KeyVisualState, ResolvedKeyAttributes},
  layout::LayoutCell,
  theme::KeySymbol,
};

/// Label font size, as a fraction of the smaller cell dimension.
const RELATIVE_FONT_SIZE: Float = 0.333;

const BORDER_COLOR: &str = "#000000";

pub struct SvgKeyboard {
  size: Size,
  body: String,
}

impl SvgKeyboard {
  pub fn new(size: Size) -> SvgKeyboard {
    SvgKeyboard {
      size,
      body: String::new(),
    }
  }

  /// Resolves `state` for a cell at `frame` and draws it on top of what's already there.
  pub fn draw_key(&mut self, frame: Rect, state: &KeyVisualState) {
    let attrs = resolve_key_attributes(&state.clone().with_cell(frame.size));
    trace!(
      "drawing key {} ({}) at {:?}: {} on {}",
      state.pitch,
      attrs.interval_class.interval(),
      frame.origin,
      attrs.symbol,
      attrs.key_color.to_hex_color()
    );
    self.body.push_str(&key_svg(frame, &attrs));
  }

  /// Draws a laid-out cell: the key, then the cell's frame if it has one.
  pub fn draw_cell(&mut self, cell: &LayoutCell, state: &KeyVisualState) {
    self.draw_key(cell.frame, state);
    if let Some(outline) = cell.outline {
      let center = cell.frame.center();
      let r = cell.frame;
      self.body.push_str(&format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"none\" stroke=\"{BORDER_COLOR}\" stroke-width=\"{}\" transform=\"rotate({} {} {})\"/>\n",
        r.origin.x,
        r.origin.y,
        r.size.width,
        r.size.height,
        outline.corner_radius,
        outline.line_width,
        cell.rotation_degrees,
        center.x,
        center.y
      ));
    }
  }

  pub fn finish(self) -> String {
    let Size { width, height } = self.size;
    format!(
      "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n{}</svg>",
      self.body
    )
  }
}

fn fill(color: Color) -> String {
  if color.alpha < 1.0 {
    format!("fill=\"{}\" fill-opacity=\"{}\"", color.to_hex_color(), color.alpha)
  } else {
    format!("fill=\"{}\"", color.to_hex_color())
  }
}

fn rect(r: Rect, corner_radius: Float, fill_attrs: &str) -> String {
  format!(
    "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{corner_radius}\" {fill_attrs}/>",
    r.origin.x, r.origin.y, r.size.width, r.size.height
  )
}

/// Formats points for the `points` attribute of an SVG `<polygon>`.
fn points_attr(points: &[Point]) -> String {
  points
    .iter()
    .map(|p| format!("{},{}", p.x, p.y))
    .collect::<Vec<String>>()
    .join(" ")
}

fn polygon(points: &[Point], fill_attrs: &str) -> String {
  format!("<polygon points=\"{}\" {fill_attrs}/>", points_attr(points))
}

fn regular_polygon(center: Point, radius: Float, sides: usize) -> Vec<Point> {
  (0..sides)
    .map(|i| {
      let angle = Angle::Degrees(360.0 * i as Float / sides as Float);
      polar_to_cartesian(center, radius, angle)
    })
    .collect()
}

fn star(center: Point, radius: Float) -> Vec<Point> {
  (0..10)
    .map(|i| {
      let r = if i % 2 == 0 { radius } else { radius * 0.45 };
      polar_to_cartesian(center, r, Angle::Degrees(36.0 * i as Float))
    })
    .collect()
}

// offsets relative to the center, in units of the symbol radius
fn scaled(center: Point, r: Float, offsets: &[(Float, Float)]) -> Vec<Point> {
  offsets
    .iter()
    .map(|(dx, dy)| Point {
      x: center.x + dx * r,
      y: center.y + dy * r,
    })
    .collect()
}

const CROSS: [(Float, Float); 12] = [
  (-0.33, -1.0),
  (0.33, -1.0),
  (0.33, -0.33),
  (1.0, -0.33),
  (1.0, 0.33),
  (0.33, 0.33),
  (0.33, 1.0),
  (-0.33, 1.0),
  (-0.33, 0.33),
  (-1.0, 0.33),
  (-1.0, -0.33),
  (-0.33, -0.33),
];

const CHEVRON: [(Float, Float); 6] = [
  (-1.0, -0.5),
  (0.0, 0.2),
  (1.0, -0.5),
  (1.0, 0.0),
  (0.0, 0.7),
  (-1.0, 0.0),
];

fn symbol_svg(symbol: KeySymbol, c: Point, length: Float, fill_attrs: &str) -> String {
  use KeySymbol::*;
  let r = length / 2.0;
  match symbol {
    Circle => format!("<circle cx=\"{}\" cy=\"{}\" r=\"{r}\" {fill_attrs}/>", c.x, c.y),
    Ring => {
      let stroke = fill_attrs.replace("fill", "stroke");
      format!(
        "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke-width=\"{}\" {stroke}/>",
        c.x,
        c.y,
        r * 0.85,
        r * 0.3
      )
    }
    Square => rect(Rect::new(c.x - r, c.y - r, length, length), 0.0, fill_attrs),
    Capsule => rect(Rect::new(c.x - r, c.y - r / 2.0, length, r), r / 2.0, fill_attrs),
    Triangle => polygon(&regular_polygon(c, r, 3), fill_attrs),
    Diamond => polygon(&regular_polygon(c, r, 4), fill_attrs),
    Pentagon => polygon(&regular_polygon(c, r, 5), fill_attrs),
    Hexagon => polygon(&regular_polygon(c, r, 6), fill_attrs),
    Star => polygon(&star(c, r), fill_attrs),
    Cross => polygon(&scaled(c, r, &CROSS), fill_attrs),
    Chevron => polygon(&scaled(c, r, &CHEVRON), fill_attrs),
    Heart => format!(
      "<path d=\"M {} {} C {} {}, {} {}, {} {} C {} {}, {} {}, {} {} Z\" {fill_attrs}/>",
      c.x,
      c.y + r * 0.8,
      c.x - r * 1.2,
      c.y - r * 0.1,
      c.x - r * 0.6,
      c.y - r,
      c.x,
      c.y - r * 0.4,
      c.x + r * 0.6,
      c.y - r,
      c.x + r * 1.2,
      c.y - r * 0.1,
      c.x,
      c.y + r * 0.8
    ),
  }
}

/// Renders one key into an SVG `<g>` element.
pub fn key_svg(frame: Rect, attrs: &ResolvedKeyAttributes) -> String {
  let center = frame.center();
  let mut g = if attrs.rotation_degrees != 0.0 {
    format!(
      "<g transform=\"rotate({} {} {})\">",
      attrs.rotation_degrees, center.x, center.y
    )
  } else {
    String::from("<g>")
  };

  // the dark backing shows through around the key fill as its border
  g.push_str(&rect(frame, attrs.corner_radius, &format!("fill=\"{BORDER_COLOR}\"")));
  if let Some(outline) = attrs.border_color {
    let outline_rect = frame.inset_by(Insets::uniform(attrs.border_width));
    g.push_str(&rect(outline_rect, attrs.corner_radius, &fill(outline)));
  }
  g.push_str(&rect(
    frame.inset_by(attrs.key_insets),
    attrs.corner_radius,
    &fill(attrs.key_color),
  ));

  let anchor = match attrs.alignment {
    Alignment::Center => center,
    Alignment::Bottom => Point {
      x: center.x,
      y: frame.max_y() - attrs.symbol_length,
    },
  };

  let symbol_fill = fill(attrs.symbol_color);
  for offset in &attrs.symbol_offsets {
    let c = Point {
      x: anchor.x,
      y: anchor.y + offset,
    };
    g.push_str(&symbol_svg(attrs.symbol, c, attrs.symbol_length, &symbol_fill));
  }

  if let Some(door) = &attrs.door {
    for offset in &door.offsets {
      let door_rect = Rect::new(
        anchor.x - door.size.width / 2.0,
        anchor.y + offset - door.size.height / 2.0,
        door.size.width,
        door.size.height,
      );
      g.push_str(&rect(door_rect, 0.0, &fill(door.color)));
    }
  }

  if let Some(label) = &attrs.label {
    let font_size = frame.size.min_dimension() * RELATIVE_FONT_SIZE;
    g.push_str(&format!(
      "<text x=\"{}\" y=\"{}\" font-size=\"{font_size}\" text-anchor=\"middle\" {}>{label}</text>",
      center.x,
      frame.max_y() - font_size / 3.0,
      fill(attrs.text_color)
    ));
  }

  g.push_str("</g>\n");
  g
}
