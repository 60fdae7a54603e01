//! Settings for dispatch diagnostics and animation.
//!
//! Settings are plain data: hosts embed them in their own configuration or
//! load them from a standalone TOML file.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AnimationSettings, DiagnosticsSettings, Settings, MAX_DUMP_INDENT};
