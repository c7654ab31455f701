//! Payload selection configuration

use crate::domains::utils::RawScalar;
use crate::error::ConfigResult;
use crate::validation::{parse_positive_int, require_positive, Validatable};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy for choosing which canonical payload an iteration sends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum SelectionMode {
    /// No pooling: every call synthesizes a fresh payload from randomness
    #[default]
    LegacyRandom,
    /// Cycle through the pool by iteration index
    PoolSequential,
    /// Sample a pool slot uniformly
    PoolRandom,
}

impl SelectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::LegacyRandom => "legacy-random",
            SelectionMode::PoolSequential => "pool-sequential",
            SelectionMode::PoolRandom => "pool-random",
        }
    }

    /// All supported selection modes
    pub fn all() -> &'static [SelectionMode] {
        &[
            SelectionMode::LegacyRandom,
            SelectionMode::PoolSequential,
            SelectionMode::PoolRandom,
        ]
    }

    /// Resolve a raw mode value, falling back to `legacy-random` for absent
    /// or unrecognized values.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            None => SelectionMode::default(),
            Some(value) => value.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "Unrecognized payload mode '{}', falling back to {}",
                    value,
                    SelectionMode::LegacyRandom
                );
                SelectionMode::LegacyRandom
            }),
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy-random" => Ok(SelectionMode::LegacyRandom),
            "pool-sequential" => Ok(SelectionMode::PoolSequential),
            "pool-random" => Ok(SelectionMode::PoolRandom),
            _ => Err(format!("Invalid payload mode: {}", s)),
        }
    }
}

impl From<String> for SelectionMode {
    fn from(value: String) -> Self {
        SelectionMode::resolve(Some(&value))
    }
}

/// Payload selection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadConfig {
    /// Selection strategy
    #[serde(default)]
    pub selection_mode: SelectionMode,

    /// Number of canonical payloads in the pool
    #[serde(
        default = "default_pool_size",
        deserialize_with = "deserialize_pool_size"
    )]
    pub pool_size: u64,
}

impl Default for PayloadConfig {
    fn default() -> Self {
        Self {
            selection_mode: SelectionMode::default(),
            pool_size: default_pool_size(),
        }
    }
}

impl Validatable for PayloadConfig {
    fn validate(&self) -> ConfigResult<()> {
        require_positive(self.pool_size, "pool_size")
            .map_err(|reason| self.validation_error(reason))
    }

    fn domain_name(&self) -> &'static str {
        "payload"
    }
}

pub(crate) fn default_pool_size() -> u64 {
    5000
}

fn deserialize_pool_size<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawScalar::deserialize(deserializer)?.into_string();
    Ok(parse_positive_int(Some(&raw), default_pool_size()))
}
