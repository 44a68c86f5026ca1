use crate::constants::{
    CONFIG_PATH_ENV, DEFAULT_DURATION_MINUTES, DEFAULT_LOCATION, DEFAULT_LOG_DIR,
    DEFAULT_LOG_FILE, DEFAULT_TIME, TIME_FORMAT,
};
use crate::error::{EventError, Result};
use crate::types::DefaultsRecord;
use chrono::NaiveTime;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: DefaultsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub location: String,
    pub time: String,
    pub duration_minutes: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            time: DEFAULT_TIME.to_string(),
            duration_minutes: DEFAULT_DURATION_MINUTES,
        }
    }
}

impl DefaultsConfig {
    pub fn to_record(&self) -> DefaultsRecord {
        DefaultsRecord {
            location: self.location.clone(),
            time: self.time.clone(),
            duration_minutes: self.duration_minutes,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: PathBuf,
    pub file_name: String,
    pub file_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_LOG_DIR),
            file_name: DEFAULT_LOG_FILE.to_string(),
            file_enabled: false,
        }
    }
}

impl Config {
    /// Load from `path` if given, else from `HAPPY_HOUR_CONFIG`, else built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
        match path.map(Path::to_path_buf).or(env_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            EventError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.defaults.location.trim().is_empty() {
            return Err(EventError::Config("defaults.location must not be empty".into()));
        }
        NaiveTime::parse_from_str(&self.defaults.time, TIME_FORMAT).map_err(|e| {
            EventError::Config(format!(
                "defaults.time '{}' is not HH:MM: {}",
                self.defaults.time, e
            ))
        })?;
        if self.defaults.duration_minutes == 0 {
            return Err(EventError::Config("defaults.duration_minutes must be positive".into()));
        }
        Ok(())
    }
}
