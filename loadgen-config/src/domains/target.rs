//! Target endpoint configuration

use crate::error::ConfigResult;
use crate::validation::{require_http_url, require_positive, Validatable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How functions are invoked on the target service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum InvocationMode {
    /// `POST ...:invoke`, expecting `200` with the function output
    #[default]
    Sync,
    /// `POST ...:enqueue`, expecting `202` with an execution id
    Async,
}

impl InvocationMode {
    /// Resolve a raw mode value. Only a case-insensitive `async` selects
    /// asynchronous invocation; anything else, including an absent value,
    /// resolves to `sync`.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.trim().eq_ignore_ascii_case("async") => InvocationMode::Async,
            _ => InvocationMode::Sync,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InvocationMode::Sync => "sync",
            InvocationMode::Async => "async",
        }
    }

    pub fn is_async(&self) -> bool {
        matches!(self, InvocationMode::Async)
    }
}

impl From<String> for InvocationMode {
    fn from(value: String) -> Self {
        InvocationMode::resolve(Some(&value))
    }
}

impl fmt::Display for InvocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target endpoint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Base URL of the function-invocation service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Invocation mode, fixed for the whole run
    #[serde(default)]
    pub invocation_mode: InvocationMode,

    /// Per-request timeout handed to the driver
    #[serde(
        with = "crate::domains::utils::serde_duration",
        default = "default_timeout"
    )]
    pub timeout: Duration,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            invocation_mode: InvocationMode::default(),
            timeout: default_timeout(),
        }
    }
}

impl Validatable for TargetConfig {
    fn validate(&self) -> ConfigResult<()> {
        require_http_url(&self.base_url, "base_url")
            .and_then(|()| require_positive(self.timeout.as_secs(), "timeout"))
            .map_err(|reason| self.validation_error(reason))
    }

    fn domain_name(&self) -> &'static str {
        "target"
    }
}

// Default value functions
pub(crate) fn default_base_url() -> String {
    "http://localhost:30080".to_string()
}

pub(crate) fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_target_config_defaults() {
        let config = TargetConfig::default();
        assert_eq!(config.base_url, "http://localhost:30080");
        assert_eq!(config.invocation_mode, InvocationMode::Sync);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invocation_mode_resolve() {
        assert_eq!(InvocationMode::resolve(Some("async")), InvocationMode::Async);
        assert_eq!(InvocationMode::resolve(Some("ASYNC")), InvocationMode::Async);
        assert_eq!(InvocationMode::resolve(Some("sync")), InvocationMode::Sync);
        assert_eq!(InvocationMode::resolve(Some("asynchronous")), InvocationMode::Sync);
        assert_eq!(InvocationMode::resolve(None), InvocationMode::Sync);
    }

    #[test]
    fn test_invocation_mode_ignores_surrounding_whitespace() {
        assert_eq!(InvocationMode::resolve(Some(" async")), InvocationMode::Async);
        assert_eq!(InvocationMode::resolve(Some("async\n")), InvocationMode::Async);
        assert_eq!(InvocationMode::resolve(Some("a sync")), InvocationMode::Sync);
    }

    #[test]
    fn test_invocation_mode_lenient_deserialize() {
        let mode: InvocationMode = serde_yaml::from_str("Async").unwrap();
        assert_eq!(mode, InvocationMode::Async);

        let mode: InvocationMode = serde_yaml::from_str("bogus").unwrap();
        assert_eq!(mode, InvocationMode::Sync);
    }

    #[test]
    fn test_target_config_validation() {
        let mut config = TargetConfig::default();
        config.base_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config = TargetConfig::default();
        config.timeout = Duration::from_secs(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_errors_name_the_domain() {
        let config = TargetConfig {
            base_url: "ws://gateway".to_string(),
            ..TargetConfig::default()
        };
        match config.validate() {
            Err(ConfigError::DomainError { domain, message }) => {
                assert_eq!(domain, "target");
                assert!(message.contains("base_url scheme 'ws'"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
