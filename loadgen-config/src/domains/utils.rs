//! Utility functions and helpers for configuration

use serde::{Deserialize, Deserializer, Serializer};
use std::time::Duration;

/// Serde helper module for Duration serialization as seconds
pub mod serde_duration {
    use super::*;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(seconds))
    }
}

/// A scalar that may arrive as either a YAML/JSON number or a string.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RawScalar {
    Int(i64),
    Str(String),
}

impl RawScalar {
    pub(crate) fn into_string(self) -> String {
        match self {
            RawScalar::Int(value) => value.to_string(),
            RawScalar::Str(value) => value,
        }
    }
}
