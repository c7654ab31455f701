//! Configuration loading and environment variable handling

use crate::domains::logging::{LogFormat, LogLevel, LoggingConfig};
use crate::domains::payload::{default_pool_size, PayloadConfig, SelectionMode};
use crate::domains::target::{InvocationMode, TargetConfig};
use crate::domains::LoadgenConfig;
use crate::error::ConfigResult;
use crate::validation::parse_positive_int;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};

/// Base URL of the target service
pub const ENV_BASE_URL: &str = "NANOFAAS_URL";
/// `sync` or `async`
pub const ENV_INVOCATION_MODE: &str = "INVOCATION_MODE";
/// `legacy-random`, `pool-sequential` or `pool-random`
pub const ENV_PAYLOAD_MODE: &str = "K6_PAYLOAD_MODE";
/// Positive payload pool size
pub const ENV_PAYLOAD_POOL_SIZE: &str = "K6_PAYLOAD_POOL_SIZE";

/// Configuration loader with environment variable support
///
/// The four run-shaping keys (`NANOFAAS_URL`, `INVOCATION_MODE`,
/// `K6_PAYLOAD_MODE`, `K6_PAYLOAD_POOL_SIZE`) are shared with the rest of the
/// load-test tooling and are read without a prefix. Loader-specific settings
/// use `<PREFIX>_NAME`.
pub struct ConfigLoader {
    /// Environment variable prefix
    prefix: String,
}

impl ConfigLoader {
    /// Create a new config loader with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "LOADGEN".to_string(),
        }
    }

    /// Create a new config loader with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Load configuration from a YAML file with environment overrides
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<LoadgenConfig> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let mut config: LoadgenConfig = serde_yaml::from_str(&content)?;

        self.apply_overrides(&mut config, |key| std::env::var(key).ok());
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env(&self) -> ConfigResult<LoadgenConfig> {
        self.from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an explicit key/value source
    pub fn from_lookup<F>(&self, lookup: F) -> ConfigResult<LoadgenConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = LoadgenConfig::default();
        self.apply_overrides(&mut config, lookup);
        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration with fallback chain
    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<LoadgenConfig> {
        match config_path {
            Some(path) => self.from_file(path),
            None => self.from_env(),
        }
    }

    /// Apply overrides to configuration
    fn apply_overrides<F>(&self, config: &mut LoadgenConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.apply_target_overrides(&mut config.target, &lookup);
        self.apply_payload_overrides(&mut config.payload, &lookup);
        self.apply_logging_overrides(&mut config.logging, &lookup);
    }

    /// Apply target config overrides
    fn apply_target_overrides<F>(&self, config: &mut TargetConfig, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            config.base_url = base_url;
        }

        if let Some(mode) = lookup(ENV_INVOCATION_MODE) {
            config.invocation_mode = InvocationMode::resolve(Some(&mode));
        }

        let timeout_key = self.prefixed("REQUEST_TIMEOUT");
        if let Some(timeout) = lookup(&timeout_key) {
            match timeout.trim().parse::<u64>() {
                Ok(seconds) if seconds > 0 => config.timeout = Duration::from_secs(seconds),
                _ => warn!(
                    "Invalid {}: '{}', keeping {}s",
                    timeout_key,
                    timeout,
                    config.timeout.as_secs()
                ),
            }
        }
    }

    /// Apply payload config overrides
    fn apply_payload_overrides<F>(&self, config: &mut PayloadConfig, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup(ENV_PAYLOAD_MODE).filter(|v| !v.is_empty()) {
            config.selection_mode = SelectionMode::resolve(Some(&mode));
        }

        if let Some(pool_size) = lookup(ENV_PAYLOAD_POOL_SIZE) {
            config.pool_size = parse_positive_int(Some(&pool_size), default_pool_size());
        }
    }

    /// Apply logging config overrides
    fn apply_logging_overrides<F>(&self, config: &mut LoggingConfig, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let level_key = self.prefixed("LOG_LEVEL");
        if let Some(log_level) = lookup(&level_key) {
            match LogLevel::from_str(&log_level) {
                Ok(level) => config.level = level,
                Err(_) => warn!("Invalid {}: '{}', keeping {}", level_key, log_level, config.level),
            }
        }

        let format_key = self.prefixed("LOG_FORMAT");
        if let Some(format) = lookup(&format_key) {
            match LogFormat::from_str(&format) {
                Ok(parsed) => config.format = parsed,
                Err(_) => warn!("Invalid {}: '{}', keeping {:?}", format_key, format, config.format),
            }
        }
    }

    fn prefixed(&self, name: &str) -> String {
        format!("{}_{}", self.prefix, name)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = ConfigLoader::new().from_lookup(|_| None).unwrap();
        assert_eq!(config, LoadgenConfig::default());
        assert_eq!(config.payload.pool_size, 5000);
        assert_eq!(config.payload.selection_mode, SelectionMode::LegacyRandom);
        assert_eq!(config.target.invocation_mode, InvocationMode::Sync);
    }

    #[test]
    fn test_run_keys_override() {
        let config = ConfigLoader::new()
            .from_lookup(lookup_from(&[
                ("NANOFAAS_URL", "http://10.0.0.5:30080"),
                ("INVOCATION_MODE", "ASYNC"),
                ("K6_PAYLOAD_MODE", "pool-sequential"),
                ("K6_PAYLOAD_POOL_SIZE", "128"),
            ]))
            .unwrap();

        assert_eq!(config.target.base_url, "http://10.0.0.5:30080");
        assert_eq!(config.target.invocation_mode, InvocationMode::Async);
        assert_eq!(config.payload.selection_mode, SelectionMode::PoolSequential);
        assert_eq!(config.payload.pool_size, 128);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let config = ConfigLoader::new()
            .from_lookup(lookup_from(&[
                ("INVOCATION_MODE", "maybe"),
                ("K6_PAYLOAD_MODE", "shuffle"),
                ("K6_PAYLOAD_POOL_SIZE", "-3"),
                ("LOADGEN_REQUEST_TIMEOUT", "soon"),
                ("LOADGEN_LOG_LEVEL", "chatty"),
            ]))
            .unwrap();

        assert_eq!(config.target.invocation_mode, InvocationMode::Sync);
        assert_eq!(config.payload.selection_mode, SelectionMode::LegacyRandom);
        assert_eq!(config.payload.pool_size, 5000);
        assert_eq!(config.target.timeout, Duration::from_secs(30));
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = ConfigLoader::new().from_lookup(lookup_from(&[("NANOFAAS_URL", "nowhere")]));
        assert!(result.is_err());
    }
}
