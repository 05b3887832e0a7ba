//! Configuration resolution for the botpower CLI
//!
//! Settings come from a YAML key-value file, with overrides applied in a
//! priority chain (lowest to highest):
//! 1. Built-in defaults (factory credentials, API base path)
//! 2. Config file (`~/.config/botpower.cfg` unless `-c` points elsewhere)
//! 3. Environment variables (`BOTPOWER_*`)
//! 4. CLI arguments

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Factory-default credentials for the IP9258
const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "12345678";

/// Base path of the device's query API, including the `?`
const DEFAULT_API_URL: &str = "/set.cmd?";

/// Resolved PDU connection settings
///
/// All values are opaque strings; the device's firmware is the authority on
/// what they mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PduConfig {
    /// PDU hostname or IP address
    pub hostname: String,
    /// API base path appended after the hostname, e.g. `/set.cmd?`
    pub api_url: String,
    /// Username for HTTP basic authentication
    pub username: String,
    /// Password for HTTP basic authentication
    pub password: String,
}

impl PduConfig {
    /// Create a new builder for constructing configuration
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// On-disk config file shape; every key is optional so partial files merge
/// cleanly with the other sources
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    hostname: Option<String>,
    api_url: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

/// Default config file location: `botpower.cfg` under the user's config
/// directory (`$XDG_CONFIG_HOME`, falling back to `~/.config`)
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config)
    } else if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config")
    } else {
        anyhow::bail!("cannot determine config directory");
    };

    Ok(config_dir.join("botpower.cfg"))
}

/// Builder for PDU configuration with priority chain support
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    hostname: Option<String>,
    api_url: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the PDU hostname
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Set the API base path
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Set the basic-auth username
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the basic-auth password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Load settings from a config file.
    ///
    /// With `path = None` the default location is used and a missing file is
    /// tolerated (env vars or CLI flags may still complete the config). An
    /// explicitly-passed path that is missing or malformed is a hard error.
    pub fn with_config_file(mut self, path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_config_path()?, false),
        };

        if !path.exists() {
            if explicit {
                anyhow::bail!("config file not found: {}", path.display());
            }
            return Ok(self);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;

        self.hostname = file.hostname.or(self.hostname);
        self.api_url = file.api_url.or(self.api_url);
        self.username = file.username.or(self.username);
        self.password = file.password.or(self.password);
        Ok(self)
    }

    /// Apply environment variable overrides
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(hostname) = std::env::var("BOTPOWER_HOSTNAME") {
            self.hostname = Some(hostname);
        }
        if let Ok(api_url) = std::env::var("BOTPOWER_API_URL") {
            self.api_url = Some(api_url);
        }
        if let Ok(username) = std::env::var("BOTPOWER_USERNAME") {
            self.username = Some(username);
        }
        if let Ok(password) = std::env::var("BOTPOWER_PASSWORD") {
            self.password = Some(password);
        }
        self
    }

    /// Build the final configuration.
    ///
    /// Credentials and the API path fall back to the device factory defaults;
    /// the hostname has no sensible default and must come from one of the
    /// sources.
    pub fn build(self) -> Result<PduConfig> {
        let hostname = self
            .hostname
            .context("no hostname configured (set it in the config file or pass --hostname)")?;

        Ok(PduConfig {
            hostname,
            api_url: self.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            username: self.username.unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            password: self.password.unwrap_or_else(|| DEFAULT_PASSWORD.to_string()),
        })
    }
}
