use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub data: DataConfig,
    pub notify: NotifyConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct DataConfig {
    /// Directory holding orders.json, products.json and categories.json.
    pub dir: PathBuf,
}

#[derive(Clone, Debug)]
pub struct NotifyConfig {
    /// Auto-dismiss window for the "item added" toast, in seconds.
    pub toast_secs: u64,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig { dir: PathBuf::from("data") },
            notify: NotifyConfig { toast_secs: 2 },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

// Optional TOML shape; every field may be omitted.
#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    data: Option<DataPatch>,
    notify: Option<NotifyPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct DataPatch {
    dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct NotifyPatch {
    toast_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("shopfront.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(data) = patch.data {
            if let Some(dir) = data.dir {
                self.data.dir = dir;
            }
        }
        if let Some(notify) = patch.notify {
            if let Some(toast_secs) = notify.toast_secs {
                self.notify.toast_secs = toast_secs;
            }
        }
        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(dir) = env::var("SHOPFRONT_DATA_DIR") {
            self.data.dir = PathBuf::from(dir);
        }
        if let Ok(level) = env::var("SHOPFRONT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = env::var("SHOPFRONT_LOG_FORMAT") {
            self.logging.format = format.parse().map_err(|_| ConfigError::InvalidEnvOverride {
                key: "SHOPFRONT_LOG_FORMAT".to_string(),
                value: format,
            })?;
        }
        if let Ok(secs) = env::var("SHOPFRONT_TOAST_SECS") {
            self.notify.toast_secs =
                secs.parse().map_err(|_| ConfigError::InvalidEnvOverride {
                    key: "SHOPFRONT_TOAST_SECS".to_string(),
                    value: secs,
                })?;
        }
        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(dir) = overrides.data_dir {
            self.data.dir = dir;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.notify.toast_secs == 0 {
            return Err(ConfigError::Validation(
                "notify.toast_secs must be at least 1".to_string(),
            ));
        }
        if self.data.dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation("data.dir must not be empty".to_string()));
        }
        Ok(())
    }
}

fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    let candidate =
        explicit.map_or_else(|| PathBuf::from("shopfront.toml"), Path::to_path_buf);
    candidate.exists().then_some(candidate)
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
    toml::from_str(&raw).map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}
