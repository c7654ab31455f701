//! Invocation endpoint paths

use loadgen_config::InvocationMode;

/// Prefix of every function endpoint on the control plane
pub const FUNCTIONS_API_PREFIX: &str = "/v1/functions/";

/// Endpoint verb for a mode: `invoke` runs synchronously, `enqueue` queues.
pub fn verb(mode: InvocationMode) -> &'static str {
    match mode {
        InvocationMode::Sync => "invoke",
        InvocationMode::Async => "enqueue",
    }
}

/// `{base_url}/v1/functions/{function_name}:{invoke|enqueue}`
///
/// The base URL is used as given, so a trailing slash yields a double slash.
pub fn invocation_path(function_name: &str, base_url: &str, mode: InvocationMode) -> String {
    format!(
        "{}{}{}:{}",
        base_url,
        FUNCTIONS_API_PREFIX,
        function_name,
        verb(mode)
    )
}
