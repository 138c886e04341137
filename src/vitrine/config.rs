use crate::error::{Result, VitrineError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Configuration for vitrine, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VitrineConfig {
    /// Artificial delay before a login attempt is answered, in milliseconds
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,

    /// Default log level when neither `RUST_LOG` nor `-v` is given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_login_delay_ms() -> u64 {
    DEFAULT_LOGIN_DELAY_MS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for VitrineConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
            log_level: default_log_level(),
        }
    }
}

impl VitrineConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(VitrineError::Io)?;
        let config: VitrineConfig =
            serde_json::from_str(&content).map_err(VitrineError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(VitrineError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(VitrineError::Serialization)?;
        fs::write(config_path, content).map_err(VitrineError::Io)?;
        Ok(())
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    /// Value of `key` rendered for display.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "login-delay-ms" => Ok(self.login_delay_ms.to_string()),
            "log-level" => Ok(self.log_level.clone()),
            other => Err(unknown_key(other)),
        }
    }

    /// Parse and set `key`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "login-delay-ms" => {
                self.login_delay_ms = value.parse().map_err(|_| {
                    VitrineError::Config(format!(
                        "login-delay-ms must be a whole number, got {:?}",
                        value
                    ))
                })?;
            }
            "log-level" => {
                let level = value.to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(VitrineError::Config(format!(
                        "log-level must be one of {}, got {:?}",
                        LOG_LEVELS.join(", "),
                        value
                    )));
                }
                self.log_level = level;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["login-delay-ms", "log-level"]
    }
}

fn unknown_key(key: &str) -> VitrineError {
    VitrineError::Config(format!(
        "Unknown config key: {} (known keys: {})",
        key,
        VitrineConfig::keys().join(", ")
    ))
}
