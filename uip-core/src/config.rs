//! Application configuration management.
//!
//! Handles loading, saving, and accessing application configuration: the
//! managed store endpoint and access key, logging settings, and display
//! preferences. Configuration is persisted as TOML on disk; the two store
//! credentials may also be supplied through environment variables, which take
//! precedence over the file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::constants;
use crate::error::{UipError, UipResult};
use crate::paths;

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Managed store connection settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Terminal display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Managed store connection configuration.
///
/// The store is addressed by exactly two values: an endpoint URL and an
/// access key. All reads and writes fail when either is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store endpoint URL (e.g. "https://abcdefgh.supabase.co").
    #[serde(default)]
    pub url: String,

    /// Anonymous access key sent with every request.
    #[serde(default)]
    pub api_key: String,

    /// Request timeout in milliseconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses the default data directory.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured output for the log file.
    #[serde(default)]
    pub json_output: bool,
}

/// Terminal display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Whether to colorize output.
    #[serde(default = "default_true")]
    pub color: bool,

    /// Maximum width for text columns in tables.
    #[serde(default = "default_column_width")]
    pub column_width: usize,
}

// Default value functions for serde

fn default_request_timeout() -> u64 {
    constants::DEFAULT_REQUEST_TIMEOUT_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_column_width() -> usize {
    48
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            logging: LoggingConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            column_width: default_column_width(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default config file path, then apply
    /// environment variable overrides.
    pub fn load_default() -> UipResult<Self> {
        let path = Self::default_config_path()?;
        let mut config = if path.exists() {
            Self::load_from_file(&path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific file path. Environment variables
    /// still override the store credentials.
    pub fn load_from_file(path: &Path) -> UipResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> UipResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| UipError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> UipResult<PathBuf> {
        Ok(paths::config_dir()?.join("config.toml"))
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> UipResult<PathBuf> {
        if self.logging.directory.is_empty() {
            Ok(paths::data_dir()?.join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }

    /// Overwrite the store credentials from environment variables when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(constants::env::STORE_URL) {
            if !url.trim().is_empty() {
                self.store.url = url;
            }
        }
        if let Ok(key) = std::env::var(constants::env::STORE_KEY) {
            if !key.trim().is_empty() {
                self.store.api_key = key;
            }
        }
        self.store.url = Self::sanitize_store_url(&self.store.url);
    }

    /// Whether the store connection is configured.
    pub fn is_store_configured(&self) -> bool {
        !self.store.url.is_empty() && !self.store.api_key.is_empty()
    }

    /// Sanitize and normalize a store endpoint URL.
    ///
    /// Strips surrounding whitespace and quotes, applies an https scheme when
    /// none is present, and removes trailing slashes.
    pub fn sanitize_store_url(url: &str) -> String {
        let trimmed = url.trim().trim_matches('"').trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        with_scheme.trim_end_matches('/').to_string()
    }
}

/// Thread-safe configuration holder shared across the client.
#[derive(Clone)]
pub struct ConfigHandle {
    inner: Arc<RwLock<AppConfig>>,
}

impl ConfigHandle {
    /// Create a new configuration handle.
    pub fn new(config: AppConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Read the configuration.
    pub async fn read(&self) -> tokio::sync::RwLockReadGuard<'_, AppConfig> {
        self.inner.read().await
    }

    /// Write/update the configuration.
    pub async fn write(&self) -> tokio::sync::RwLockWriteGuard<'_, AppConfig> {
        self.inner.write().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.store.request_timeout_ms, 30_000);
        assert_eq!(config.logging.level, "info");
        assert!(config.display.color);
        assert!(!config.is_store_configured());
    }

    #[test]
    fn test_sanitize_store_url() {
        assert_eq!(
            AppConfig::sanitize_store_url("abcdefgh.supabase.co"),
            "https://abcdefgh.supabase.co"
        );
        assert_eq!(
            AppConfig::sanitize_store_url("https://abcdefgh.supabase.co/"),
            "https://abcdefgh.supabase.co"
        );
        assert_eq!(
            AppConfig::sanitize_store_url("  \"http://localhost:54321/\"  "),
            "http://localhost:54321"
        );
        assert_eq!(AppConfig::sanitize_store_url("   "), "");
    }

    #[test]
    fn test_roundtrip_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.store.url = "https://example.supabase.co".into();
        config.store.api_key = "anon-key".into();
        config.save_to_file(&path).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.store.url, config.store.url);
        assert_eq!(loaded.store.api_key, config.store.api_key);
        assert!(loaded.is_store_configured());
    }

    #[test]
    fn test_config_missing_sections_use_defaults() {
        let config: AppConfig =
            toml::from_str("[store]\nurl = \"https://x.supabase.co\"\napi_key = \"k\"\n").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.store.request_timeout_ms, 30_000);
        assert!(config.is_store_configured());
    }
}
