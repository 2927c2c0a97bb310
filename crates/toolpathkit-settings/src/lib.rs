//! ToolpathKit Settings Crate
//!
//! Machining settings consumed read-only by the toolpath strategies, plus
//! validation and JSON/TOML persistence.

pub mod config;
pub mod error;

pub use config::Settings;
pub use error::{SettingsError, SettingsResult};
