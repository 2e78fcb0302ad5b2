//! Configuration management for cyclograph
//!
//! Provides configuration file handling, defaults and validation.
//! Supports JSON and TOML file formats, by default stored in the platform
//! configuration directory.
//!
//! Configuration is organized into logical sections:
//! - Server settings (bind address, CORS origins)
//! - Render settings (canvas size, offset, colours)
//! - Toolpath defaults (blocks, pen commands, target box, feed rates)

use crate::error::{SettingsError, SettingsResult};
use cyclograph_camtools::ToolpathOptions;
use cyclograph_export::RenderSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS
    pub allowed_origins: Vec<String>,
    /// Largest `steps` accepted in a request
    pub max_steps: u32,
    /// Largest polygon `sides` accepted in a request
    pub max_sides: u32,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5001,
            allowed_origins: vec!["http://localhost:3000".to_string()],
            max_steps: 100_000,
            max_sides: 10_000,
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerSettings,
    pub render: RenderSettings,
    pub toolpath: ToolpathOptions,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/cyclograph/config.toml`, when the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cyclograph").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            info!(
                "No configuration at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => self.to_toml()?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> SettingsResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.server.port == 0 {
            return Err(SettingsError::invalid("server.port", "must be > 0"));
        }
        if self.server.host.trim().is_empty() {
            return Err(SettingsError::invalid("server.host", "must not be empty"));
        }
        if self.server.max_steps == 0 {
            return Err(SettingsError::invalid("server.max_steps", "must be > 0"));
        }
        if self.server.max_sides < 3 {
            return Err(SettingsError::invalid("server.max_sides", "must be >= 3"));
        }

        self.render
            .validate()
            .map_err(|e| SettingsError::invalid("render", e.to_string()))?;

        self.toolpath
            .validate()
            .map_err(|e| SettingsError::invalid("toolpath", e.to_string()))?;

        Ok(())
    }
}

/// On-disk configuration format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(format!(
                "config file must be .json or .toml, got {:?}",
                other.unwrap_or("")
            ))),
        }
    }
}
