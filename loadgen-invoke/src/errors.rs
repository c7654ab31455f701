//! Invocation error types

use loadgen_payload::WorkloadError;

/// Error type for preparing invocations.
///
/// Unexpected response shapes are not errors; they surface as failed checks.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unsupported URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Workload error: {0}")]
    Workload(#[from] WorkloadError),
}

pub type InvokeResult<T> = Result<T, InvokeError>;
