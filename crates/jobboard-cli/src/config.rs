//! CLI configuration.
//!
//! Built-in defaults, overlaid by an optional YAML file (`--config`), then by
//! environment variables. Unknown keys in the file are rejected so a typo
//! does not silently fall back to a default.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use jobboard_core::{DEFAULT_SALARY_UNIT, LISTING_TTL_DAYS};

/// Environment variable overriding [`CliConfig::listing_ttl_days`].
pub const ENV_LISTING_TTL_DAYS: &str = "JOBBOARD_LISTING_TTL_DAYS";
/// Environment variable overriding [`CliConfig::salary_unit`].
pub const ENV_SALARY_UNIT: &str = "JOBBOARD_SALARY_UNIT";
/// Environment variable overriding [`CliConfig::pretty`].
pub const ENV_PRETTY: &str = "JOBBOARD_PRETTY";

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Days a newly created job stays listed.
    pub listing_ttl_days: i64,
    /// Unit appended to salary bands in text output.
    pub salary_unit: String,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            listing_ttl_days: LISTING_TTL_DAYS,
            salary_unit: DEFAULT_SALARY_UNIT.to_string(),
            pretty: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from `path` (if given) and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|var| std::env::var(var).ok())?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Read a YAML configuration file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay environment overrides, read through `lookup`.
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(raw) = lookup(ENV_LISTING_TTL_DAYS) {
            self.listing_ttl_days = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid_env(ENV_LISTING_TTL_DAYS, &raw, "not an integer"))?;
        }
        if let Some(raw) = lookup(ENV_SALARY_UNIT) {
            self.salary_unit = raw.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_PRETTY) {
            self.pretty = parse_bool(&raw)
                .ok_or_else(|| ConfigError::invalid_env(ENV_PRETTY, &raw, "expected true or false"))?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.listing_ttl_days < 1 {
            return Err(ConfigError::Invalid {
                field: "listing_ttl_days",
                reason: format!("must be at least 1, got {}", self.listing_ttl_days),
            });
        }
        if self.salary_unit.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "salary_unit",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid_env(var: &'static str, value: &str, reason: &'static str) -> Self {
        Self::InvalidEnv {
            var,
            value: value.to_string(),
            reason,
        }
    }
}
