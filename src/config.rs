//! Configuration file handling
//!
//! Settings load from `./focuspoint.toml` first, then from the user
//! config directory, then fall back to defaults. Command line flags
//! override whatever the files provide.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Config file name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "focuspoint.toml";

const USER_CONFIG_DIR: &str = "focuspoint";
const USER_CONFIG_FILE: &str = "config.toml";

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_BIND: &str = "127.0.0.1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_BYTES: u64 = 50 * 1024 * 1024;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerSection,
    pub fetch: FetchSection,
}

/// `[server]` section: HTTP service binding
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub port: u16,
    pub bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// `[fetch]` section: URL download behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchSection {
    pub timeout_secs: u64,
    pub max_bytes: u64,
}

impl Default for FetchSection {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

/// Command line values that take precedence over file configuration
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Loads configuration from the first file found in the search
    /// order, or the defaults when none exists.
    pub fn load() -> Result<Self, ConfigError> {
        let local = Path::new(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::load_from_path(local);
        }

        if let Some(user) = Self::user_config_path() {
            if user.exists() {
                return Self::load_from_path(&user);
            }
        }

        Ok(Self::default())
    }

    /// Loads configuration from an explicit file path.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }

    /// Location of the per-user config file, when the platform has a
    /// config directory.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
    }

    /// Applies command line overrides on top of file values.
    #[must_use]
    pub fn merge_with_cli(mut self, overrides: &CliOverrides) -> Self {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = &overrides.bind {
            self.server.bind = bind.clone();
        }
        if let Some(secs) = overrides.timeout_secs {
            self.fetch.timeout_secs = secs;
        }
        self
    }
}
