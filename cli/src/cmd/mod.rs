mod key;
mod octave;
mod themes;

use clap::{Args, Subcommand};
use error_stack::{IntoReport, Result, ResultExt};
use std::path::PathBuf;

use intervallic_core::{
  harmony::Pitch,
  key::{FormFactor, KeyVisualState, Viewpoint},
  theme::{preset, Theme, ThemeConfig},
  KeyboardError,
};

use self::{key::run_key_cmd, octave::run_octave_cmd, themes::run_themes_cmd};

#[derive(Subcommand)]
pub enum CliCommand {
  /// Lists the built-in themes, or prints one as a JSON theme file.
  Themes {
    /// Name of a built-in theme to print as JSON.
    #[clap(long, value_parser)]
    json: Option<String>,
  },

  /// Prints the resolved attributes of a single key.
  Key {
    #[clap(long, value_parser, allow_hyphen_values = true)]
    pitch: i32,

    /// Width and height of the key's cell.
    #[clap(long, value_parser, default_value_t = 60.0)]
    width: f64,
    #[clap(long, value_parser, default_value_t = 180.0)]
    height: f64,

    #[clap(flatten)]
    render: RenderOptions,
  },

  /// Renders one or more octaves of keys as SVG.
  Octave {
    /// Lowest pitch of the first octave.
    #[clap(long, value_parser, default_value_t = 60)]
    root: i32,

    #[clap(long, value_parser, default_value_t = 1)]
    octaves: u8,

    /// Size of a single octave.
    #[clap(long, value_parser, default_value_t = 800.0)]
    width: f64,
    #[clap(long, value_parser, default_value_t = 400.0)]
    height: f64,

    /// Where to write the SVG. Defaults to stdout.
    #[clap(long, value_parser)]
    out: Option<PathBuf>,

    #[clap(flatten)]
    render: RenderOptions,
  },
}

/// Options shared by everything that resolves keys.
#[derive(Args)]
pub struct RenderOptions {
  #[clap(long, value_parser, default_value_t = 60)]
  tonic: i32,

  #[clap(long, value_parser, default_value = "intervallic")]
  viewpoint: Viewpoint,

  #[clap(long, value_parser, default_value = "symmetric")]
  form_factor: FormFactor,

  /// Name of a built-in theme, or a path to a JSON theme file.
  #[clap(long, value_parser, default_value = "homey")]
  theme: String,

  /// Swap key and symbol colors on press.
  #[clap(long, action)]
  subtle: bool,

  /// Pitches held down locally, comma separated.
  #[clap(long, value_parser, value_delimiter = ',')]
  activated: Vec<i32>,

  /// Pitches held down by an external source (e.g. MIDI), comma separated.
  #[clap(long, value_parser, value_delimiter = ',')]
  external: Vec<i32>,
}

impl RenderOptions {
  pub fn load_theme(&self) -> Result<Theme, KeyboardError> {
    if let Some(theme) = preset(&self.theme) {
      return Ok(theme.clone());
    }

    let contents = std::fs::read_to_string(&self.theme)
      .into_report()
      .change_context(KeyboardError::ConfigError(format!(
        "'{}' is not a built-in theme or a readable theme file",
        self.theme
      )))?;
    ThemeConfig::from_json_str(&contents)?.into_theme()
  }

  /// A key state for `pitch` with every option applied.
  pub fn key_state<'a>(&self, pitch: Pitch, theme: &'a Theme) -> KeyVisualState<'a> {
    let p = pitch.midi_number();
    KeyVisualState::new(pitch, theme)
      .with_tonic(Pitch(self.tonic))
      .with_viewpoint(self.viewpoint)
      .with_form_factor(self.form_factor)
      .with_subtle(self.subtle)
      .with_activation(self.activated.contains(&p), self.external.contains(&p))
  }
}

impl CliCommand {
  pub fn run(&self) -> Result<(), KeyboardError> {
    match self {
      Self::Themes { json } => run_themes_cmd(json.as_deref()),

      Self::Key {
        pitch,
        width,
        height,
        render,
      } => run_key_cmd(Pitch(*pitch), *width, *height, render),

      Self::Octave {
        root,
        octaves,
        width,
        height,
        out,
        render,
      } => run_octave_cmd(Pitch(*root), *octaves, *width, *height, out.as_ref(), render),
    }
  }
}
