//! Domain-driven configuration for the nanofaas load generator
//!
//! Configuration is split by functional domain (target endpoint, payload
//! selection, logging), loaded once at startup from YAML and/or environment
//! variables, and treated as frozen afterwards. Malformed values never abort a
//! run: they fall back to their defaults with a warning.

pub mod error;
pub mod loader;
pub mod validation;

// Domain-specific configuration modules
pub mod domains;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use validation::parse_positive_int;

// Re-export domain configurations
pub use domains::{
    logging::{LogFormat, LogLevel, LoggingConfig},
    payload::{PayloadConfig, SelectionMode},
    target::{InvocationMode, TargetConfig},
    LoadgenConfig,
};

// Re-export utilities
pub use domains::utils::serde_duration;
