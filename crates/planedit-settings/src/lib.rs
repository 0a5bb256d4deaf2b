//! planedit settings crate
//!
//! Editor preferences: display unit, text handling of transforms, resize
//! defaults and the size of new rooms, stored as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{DisplaySettings, EditorConfig, PointsSettings, TransformSettings};
pub use error::{SettingsError, SettingsResult};
