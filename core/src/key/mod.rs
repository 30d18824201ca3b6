//! Per-key visual attributes: what a single key looks like for a given pitch, tonic,
//! activation state, viewpoint and form factor.
pub mod resolver;
pub mod state;

pub use resolver::{resolve_key_attributes, Door, KeyAttributeResolver, ResolvedKeyAttributes};
pub use state::{FormFactor, FormFactorConfig, KeyLabel, KeyVisualState, Viewpoint, DEFAULT_TONIC};
