//! Configuration management for pagecheck.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Fetch timeout applied to every check, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 10;

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base data directory.
    pub data_dir: PathBuf,
    /// Database filename.
    pub database_filename: String,
    /// User agent for outbound HTTP requests.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub request_timeout: u64,
    /// Bind host for the web server.
    pub host: String,
    /// Bind port for the web server.
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("pagecheck");

        Self {
            data_dir,
            database_filename: "pagecheck.db".to_string(),
            user_agent: format!("pagecheck/{}", env!("CARGO_PKG_VERSION")),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl Settings {
    /// Get the full path to the database.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_filename)
    }

    /// Ensure the data directory exists.
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.data_dir)
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Target directory for data.
    #[serde(default)]
    pub target: Option<String>,
    /// Database filename.
    #[serde(default)]
    pub database: Option<String>,
    /// User agent string.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Request timeout in seconds.
    #[serde(default)]
    pub request_timeout: Option<u64>,
    /// Bind host.
    #[serde(default)]
    pub host: Option<String>,
    /// Bind port.
    #[serde(default)]
    pub port: Option<u16>,
}

impl Config {
    /// Load configuration from the first pagecheck.toml found: the working
    /// directory, then the user config directory. Missing files mean
    /// defaults.
    pub fn load() -> Self {
        let mut candidates = vec![PathBuf::from("pagecheck.toml")];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("pagecheck").join("pagecheck.toml"));
        }

        for path in candidates {
            match fs::read_to_string(&path) {
                Ok(raw) => match toml::from_str(&raw) {
                    Ok(config) => {
                        tracing::debug!("Loaded configuration from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Ignoring malformed config {}: {}", path.display(), e);
                    }
                },
                Err(_) => continue,
            }
        }

        Self::default()
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(ref target) = self.target {
            let path = shellexpand::tilde(target);
            settings.data_dir = PathBuf::from(path.as_ref());
        }
        if let Some(ref database) = self.database {
            settings.database_filename = database.clone();
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = user_agent.clone();
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
        if let Some(ref host) = self.host {
            settings.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
    }
}

/// Load settings from configuration.
pub fn load_settings() -> Settings {
    let config = Config::load();
    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings);
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_config_is_empty() {
        let config = Config::default();
        let mut settings = Settings::default();
        config.apply_to_settings(&mut settings);

        assert_eq!(settings.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(settings.database_filename, "pagecheck.db");
    }

    #[test]
    fn config_overrides_settings() {
        let config: Config = toml::from_str(
            r#"
            database = "other.db"
            request_timeout = 3
            port = 9000
            "#,
        )
        .unwrap();

        let mut settings = Settings::default();
        config.apply_to_settings(&mut settings);

        assert_eq!(settings.database_filename, "other.db");
        assert_eq!(settings.request_timeout, 3);
        assert_eq!(settings.port, 9000);
    }
}
