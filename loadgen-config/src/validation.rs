//! Configuration validation traits and utilities

use crate::error::{ConfigError, ConfigResult};

/// Trait for validatable configuration
pub trait Validatable {
    /// Validate the configuration
    fn validate(&self) -> ConfigResult<()>;

    /// Get the domain name for error reporting
    fn domain_name(&self) -> &'static str;

    /// Helper to create a domain-specific validation error
    fn validation_error(&self, message: impl Into<String>) -> ConfigError {
        ConfigError::DomainError {
            domain: self.domain_name().to_string(),
            message: message.into(),
        }
    }
}

/// Reject an empty string field
pub fn require_non_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }
    Ok(())
}

/// Reject values at or below zero
pub fn require_positive<T>(value: T, field_name: &str) -> Result<(), String>
where
    T: PartialOrd + Default + std::fmt::Display,
{
    if value <= T::default() {
        return Err(format!("{} must be greater than 0, got {}", field_name, value));
    }
    Ok(())
}

/// Require an http(s) URL
pub fn require_http_url(url: &str, field_name: &str) -> Result<(), String> {
    require_non_empty(url, field_name)?;

    let parsed = url::Url::parse(url)
        .map_err(|e| format!("{} has invalid URL format: {}", field_name, e))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(format!(
            "{} scheme '{}' not supported (only http/https)",
            field_name, scheme
        )),
    }
}

/// Parse a strictly positive base-10 integer, falling back on anything else.
///
/// Parsing follows prefix semantics: leading whitespace and an optional sign
/// are accepted and parsing stops at the first non-digit, so `"12abc"` yields
/// 12. Absent or empty input, input without leading digits, values below 1
/// and values that overflow all yield `fallback`.
pub fn parse_positive_int(raw: Option<&str>, fallback: u64) -> u64 {
    let Some(raw) = raw.filter(|value| !value.is_empty()) else {
        return fallback;
    };

    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 || negative {
        return fallback;
    }

    match unsigned[..digits_len].parse::<u64>() {
        Ok(value) if value >= 1 => value,
        _ => fallback,
    }
}
