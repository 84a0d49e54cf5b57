//! GCodeScope Settings Crate
//!
//! Handles persisted configuration: default scale factors and viewer options.

pub mod config;
pub mod error;

pub use config::{Config, ViewerSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
