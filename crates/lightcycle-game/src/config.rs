use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::time::DEFAULT_TICK_RATE_HZ;

/// Environment variable naming a TOML config file.
pub const CONFIG_ENV_VAR: &str = "LIGHTCYCLE_CONFIG";
/// Fallback config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/lightcycle.toml";

/// Host settings. Arena rules are fixed and not configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightcycleConfig {
    /// Simulation rate (ticks per second).
    pub tick_rate_hz: f32,
    /// Skip the intro screen and start playing immediately.
    pub autostart: bool,
    /// Stop the host after this many completed rounds.
    pub round_limit: Option<u32>,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for LightcycleConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            autostart: false,
            round_limit: None,
            log_filter: "info".to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, error: std::io::Error },
    Parse { path: PathBuf, error: String },
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, error } => write!(f, "cannot read {}: {error}", path.display()),
            Self::Parse { path, error } => write!(f, "cannot parse {}: {error}", path.display()),
            Self::Invalid(m) => write!(f, "invalid config: {m}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl LightcycleConfig {
    /// Load from `$LIGHTCYCLE_CONFIG`, then `config/lightcycle.toml`, falling
    /// back to defaults. A file that exists but fails to load is an error.
    pub fn try_load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::from_path(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_PATH);
        if fallback.exists() {
            return Self::from_path(fallback);
        }
        Ok(Self::default())
    }

    /// Like [`try_load`](Self::try_load), but logs failures and uses defaults.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Falling back to default config");
                Self::default()
            },
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|error| ConfigError::Read {
            path: path.to_path_buf(),
            error,
        })?;
        let config = toml::from_str::<Self>(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tick_rate_hz.is_finite() || self.tick_rate_hz <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tick_rate_hz must be positive, got {}",
                self.tick_rate_hz
            )));
        }
        if self.round_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "round_limit must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}
