use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use midify_ui_controls::{FileListClient, TransitionTiming};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the configured server address.
pub(crate) const SERVER_URL_ENV: &str = "MIDIFY_SERVER_URL";

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TRANSITION_MS: u64 = 500;
const DEFAULT_REFLOW_DELAY_MS: u64 = 10;

/// Errors emitted while loading the app configuration.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("config IO failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("server url '{url}' is unusable: {reason}")]
    Url { url: String, reason: String },
}

/// User configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    server_url: String,
    transition_ms: u64,
    reflow_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: String::from(DEFAULT_SERVER_URL),
            transition_ms: DEFAULT_TRANSITION_MS,
            reflow_delay_ms: DEFAULT_REFLOW_DELAY_MS,
        }
    }
}

impl AppConfig {
    pub(crate) fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Animation timing shared by the popup and the sidebar.
    pub(crate) fn timing(&self) -> TransitionTiming {
        TransitionTiming::new(
            Duration::from_millis(self.transition_ms),
            Duration::from_millis(self.reflow_delay_ms),
        )
    }

    /// Build the HTTP client for the configured server.
    pub(crate) fn files_client(&self) -> Result<FileListClient, ConfigError> {
        FileListClient::new(&self.server_url).map_err(|err| ConfigError::Url {
            url: self.server_url.clone(),
            reason: err.to_string(),
        })
    }

    /// Apply the server url override, ignoring blank values.
    pub(crate) fn with_server_url_override(
        mut self,
        value: Option<String>,
    ) -> Self {
        if let Some(url) = value.filter(|url| !url.trim().is_empty()) {
            log::info!("server url overridden by {SERVER_URL_ENV}: {url}");
            self.server_url = url.trim().to_string();
        }
        self
    }
}

/// Status describing how the config was loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the config from disk.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: AppConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    pub(crate) fn new(config: AppConfig, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (AppConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

/// Load the config for startup, falling back to defaults on any problem.
pub(crate) fn load_initial_config() -> AppConfig {
    let path = config_path();
    let config = match load_config_from_path(&path) {
        Ok(load) => {
            let (config, status) = load.into_parts();
            match status {
                ConfigLoadStatus::Loaded => {
                    log::debug!("config loaded from {}", path.display());
                },
                ConfigLoadStatus::Missing => {
                    log::debug!(
                        "no config at {}, using defaults",
                        path.display()
                    );
                },
                ConfigLoadStatus::Invalid(message) => {
                    log::warn!(
                        "config at {} is invalid, using defaults: {message}",
                        path.display()
                    );
                },
            }
            config
        },
        Err(err) => {
            log::warn!("config load failed, using defaults: {err}");
            AppConfig::default()
        },
    };

    config.with_server_url_override(std::env::var(SERVER_URL_ENV).ok())
}

fn load_config_from_path(path: &Path) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                AppConfig::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<AppConfig>(&data) {
        Ok(config) => Ok(ConfigLoad::new(config, ConfigLoadStatus::Loaded)),
        Err(err) => Ok(ConfigLoad::new(
            AppConfig::default(),
            ConfigLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("midify")
            .join("config.json");
    }

    std::env::temp_dir().join("midify").join("config.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::{
        AppConfig, ConfigError, ConfigLoadStatus, load_config_from_path,
    };

    #[test]
    fn given_partial_config_when_load_then_missing_fields_use_defaults() {
        let root = test_temp_dir("partial");
        let path = root.join("config.json");
        fs::write(&path, r#"{ "server_url": "http://music.local:8080" }"#)
            .expect("config payload should be written");

        let (config, status) = load_config_from_path(&path)
            .expect("config should load")
            .into_parts();

        assert!(matches!(status, ConfigLoadStatus::Loaded));
        assert_eq!(config.server_url(), "http://music.local:8080");
        assert_eq!(config.timing().duration, Duration::from_millis(500));
        assert_eq!(config.timing().reflow_delay, Duration::from_millis(10));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_missing_file_when_load_then_defaults_with_missing_status() {
        let root = test_temp_dir("missing");

        let (config, status) = load_config_from_path(&root.join("none.json"))
            .expect("missing config should not be an error")
            .into_parts();

        assert!(matches!(status, ConfigLoadStatus::Missing));
        assert_eq!(config, AppConfig::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_load_then_defaults_with_invalid_status() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("config.json");
        fs::write(&path, "{ not json").expect("payload should be written");

        let (config, status) = load_config_from_path(&path)
            .expect("invalid config should not fail with io error")
            .into_parts();

        assert_eq!(config, AppConfig::default());
        match status {
            ConfigLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_override_when_applied_then_server_url_is_replaced() {
        let config = AppConfig::default().with_server_url_override(Some(
            String::from(" http://10.0.0.2:5000 "),
        ));

        assert_eq!(config.server_url(), "http://10.0.0.2:5000");
    }

    #[test]
    fn given_blank_override_when_applied_then_config_is_unchanged() {
        let config = AppConfig::default()
            .with_server_url_override(Some(String::from("  ")))
            .with_server_url_override(None);

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn given_unparseable_server_url_when_building_client_then_url_error() {
        let config = AppConfig::default()
            .with_server_url_override(Some(String::from("not a url")));

        let result = config.files_client();

        assert!(matches!(result, Err(ConfigError::Url { .. })));
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "midify-config-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
