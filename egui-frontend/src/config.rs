//! # Application Configuration
//!
//! Loads the optional YAML configuration file for the signup app.
//!
//! ## Location
//! 1. `$SIGNUP_FORM_CONFIG` if set
//! 2. `<config dir>/signup-form/config.yaml` (e.g. `~/.config/signup-form/config.yaml`)
//!
//! A missing file means defaults. Every section and key is optional.
//!
//! ## YAML Format
//!
//! ```yaml
//! window:
//!   title: "Signup Form"
//!   width: 720.0
//!   height: 640.0
//! form:
//!   input_transform: none   # or "uppercase"
//!   success_message: "Signup complete"
//! notification:
//!   auto_hide_ms: 3000
//! ```

use log::info;
use serde::{Deserialize, Serialize};
use shared::{FormSettings, NotificationSettings};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "SIGNUP_FORM_CONFIG";

const CONFIG_DIR_NAME: &str = "signup-form";
const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Main window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Signup Form".to_string(),
            width: 720.0,
            height: 640.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub form: FormSettings,
    pub notification: NotificationSettings,
}

impl AppConfig {
    /// Resolve the config path from the environment or the platform config dir
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("⚙️ No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&yaml_content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("⚙️ Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_yaml(yaml_content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to a mapping
        if yaml_content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml_content)
    }
}
