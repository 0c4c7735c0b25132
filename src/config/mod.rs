//
//  instaapi
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loads, saves and edits the client configuration, stored as TOML in a
//! platform-specific directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/insta/config.toml`
//! - **macOS**: `~/Library/Application Support/insta/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\insta\config.toml`
//!
//! Set `INSTA_CONFIG_DIR` to use another directory (the session file lives
//! there too).
//!
//! ## Example Configuration File
//!
//! ```toml
//! [core]
//! output = "table"
//! use_keyring = true
//!
//! [api]
//! api_url = "https://i.instagram.com"
//! graph_url = "https://graph.instagram.com"
//! locale = "en-US"
//! timezone = "Europe/London"
//! timeout_secs = 30
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use instaapi::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("api.locale", "en-GB".to_string())?;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod file;

pub use file::*;

use std::path::PathBuf;

use anyhow::{bail, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::uri::{DEFAULT_API_URL, DEFAULT_GRAPH_URL};

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "INSTA_CONFIG_DIR";

/// Every key accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &[
    "core.output",
    "core.use_keyring",
    "api.api_url",
    "api.graph_url",
    "api.locale",
    "api.timezone",
    "api.timeout_secs",
    "api.app_version",
    "api.app_version_code",
];

/// Global configuration container.
///
/// # Fields
///
/// * `core` - CLI behavior (output format, keyring use)
/// * `api` - Endpoints and request defaults used to build the client
///
/// # Notes
///
/// - All fields use `#[serde(default)]` so partial files load cleanly
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,

    #[serde(default)]
    pub api: ApiConfig,
}

/// CLI behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Default output format: `"table"` or `"json"`.
    #[serde(default = "default_output")]
    pub output: String,

    /// Keep session authorization values in the system keyring.
    #[serde(default = "default_true")]
    pub use_keyring: bool,
}

fn default_output() -> String {
    "table".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            use_keyring: true,
        }
    }
}

/// Endpoint and request settings used to build an
/// [`InstaClient`](crate::api::InstaClient).
///
/// # Default Values
///
/// | Field | Default |
/// |-------|---------|
/// | `api_url` | `https://i.instagram.com` |
/// | `graph_url` | `https://graph.instagram.com` |
/// | `locale` | `"en-US"` |
/// | `timezone` | `"UTC"` |
/// | `timeout_secs` | `30` |
/// | `app_version` | `None` (built-in version) |
/// | `app_version_code` | `None` (built-in version code) |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Base URL of the business GraphQL endpoint.
    #[serde(default = "default_graph_url")]
    pub graph_url: String,

    /// Locale sent as `Accept-Language` (e.g. `"en-US"`).
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Timezone name sent with statistics queries.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Overrides the advertised app version.
    #[serde(default)]
    pub app_version: Option<String>,

    /// Overrides the advertised app version code.
    #[serde(default)]
    pub app_version_code: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_graph_url() -> String {
    DEFAULT_GRAPH_URL.to_string()
}

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            graph_url: default_graph_url(),
            locale: default_locale(),
            timezone: default_timezone(),
            timeout_secs: default_timeout_secs(),
            app_version: None,
            app_version_code: None,
        }
    }
}

impl Config {
    /// Loads the configuration from the default location, or defaults if the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if config_exists(path) {
            let content = read_config_file(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Configuration directory: `$INSTA_CONFIG_DIR`, else the platform
    /// config dir for `insta`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Reads a value by dotted key (see [`CONFIG_KEYS`]).
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "core.output" => Some(self.core.output.clone()),
            "core.use_keyring" => Some(self.core.use_keyring.to_string()),
            "api.api_url" => Some(self.api.api_url.clone()),
            "api.graph_url" => Some(self.api.graph_url.clone()),
            "api.locale" => Some(self.api.locale.clone()),
            "api.timezone" => Some(self.api.timezone.clone()),
            "api.timeout_secs" => Some(self.api.timeout_secs.to_string()),
            "api.app_version" => self.api.app_version.clone(),
            "api.app_version_code" => self.api.app_version_code.clone(),
            _ => None,
        }
    }

    /// Sets a value by dotted key.
    ///
    /// # Errors
    ///
    /// Fails for unknown keys and for values that do not parse for the key
    /// (booleans, numbers, the output format).
    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "core.output" => match value.as_str() {
                "table" | "json" => self.core.output = value,
                other => bail!("Invalid output format '{}': expected 'table' or 'json'", other),
            },
            "core.use_keyring" => self.core.use_keyring = value.parse()?,
            "api.api_url" => self.api.api_url = value,
            "api.graph_url" => self.api.graph_url = value,
            "api.locale" => self.api.locale = value,
            "api.timezone" => self.api.timezone = value,
            "api.timeout_secs" => self.api.timeout_secs = value.parse()?,
            "api.app_version" => self.api.app_version = Some(value),
            "api.app_version_code" => self.api.app_version_code = Some(value),
            other => bail!("Unknown config key '{}'", other),
        }
        Ok(())
    }

    /// Restores the default value of a key.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        match key {
            "api.app_version" => self.api.app_version = None,
            "api.app_version_code" => self.api.app_version_code = None,
            _ => match Self::default().get(key) {
                Some(value) => self.set(key, value)?,
                None => bail!("Unknown config key '{}'", key),
            },
        }
        Ok(())
    }
}
