//! Cyclograph Settings Crate
//!
//! Handles application configuration: loading, saving and validating the
//! server, render and toolpath sections.

pub mod config;
pub mod error;

pub use config::{Config, ServerSettings};
pub use error::{SettingsError, SettingsResult};
