//! Visual attributes and layout for intervallic keyboard keys.
//!
//! [key] resolves what a single key looks like from its pitch, the tonic, activation
//! state, viewpoint, form factor and [theme]. [layout] places one octave of pitches
//! into the symmetric keyboard's cells. Drawing is left to the caller.
pub mod color;
pub mod error;
pub mod geometry;
pub mod harmony;
pub mod key;
pub mod layout;
pub mod theme;

pub use error::KeyboardError;
