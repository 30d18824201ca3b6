use error_stack::Result;

use intervallic_core::{
  color::utils::color_hex,
  geometry::Size,
  harmony::Pitch,
  key::resolve_key_attributes,
  KeyboardError,
};

use super::RenderOptions;

pub fn run_key_cmd(
  pitch: Pitch,
  width: f64,
  height: f64,
  render: &RenderOptions,
) -> Result<(), KeyboardError> {
  let theme = render.load_theme()?;
  let state = render.key_state(pitch, &theme).with_cell(Size::new(width, height));
  let attrs = resolve_key_attributes(&state);

  println!("pitch          {pitch} ({})", attrs.interval_class.interval());
  println!("key color      {}", color_hex(attrs.key_color));
  println!(
    "symbol         {} {} x{:.3} (length {:.2})",
    attrs.symbol,
    color_hex(attrs.symbol_color),
    attrs.symbol_scale,
    attrs.symbol_length
  );
  println!("symbol offsets {:?}", attrs.symbol_offsets);
  println!("text color     {}", color_hex(attrs.text_color));
  if let Some(label) = &attrs.label {
    println!("label          {label}");
  }
  match attrs.border_color {
    Some(c) => println!(
      "tonic outline  {} (width {:.2})",
      color_hex(c),
      attrs.outline_width
    ),
    None => println!("border width   {:.2}", attrs.border_width),
  }
  println!("corner radius  {:.2}", attrs.corner_radius);
  println!("insets         {:?}", attrs.key_insets);
  println!("alignment      {:?}", attrs.alignment);
  if attrs.rotation_degrees != 0.0 {
    println!("rotation       {}°", attrs.rotation_degrees);
  }
  if let Some(door) = &attrs.door {
    println!(
      "door           {:.2} x {:.2} at {:?}",
      door.size.width, door.size.height, door.offsets
    );
  }
  Ok(())
}
