//! `loadgen check`

use anyhow::{bail, Context, Result};
use loadgen_config::LoadgenConfig;
use loadgen_invoke::{InvocationContext, InvocationResponse, ResponseOutcome};
use std::path::Path;

/// Response body from the command line or a file
pub fn read_body(body: Option<&str>, body_file: Option<&Path>) -> Result<String> {
    match (body, body_file) {
        (Some(body), _) => Ok(body.to_string()),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read response body from {:?}", path)),
        (None, None) => bail!("A response body is required (--body or --body-file)"),
    }
}

pub fn run_check(
    config: &LoadgenConfig,
    function: &str,
    status: u16,
    body: String,
) -> Result<ResponseOutcome> {
    let context = InvocationContext::without_metrics(&config.target)
        .context("Failed to build invocation context")?;
    context
        .check_function(function, &InvocationResponse::new(status, body))
        .with_context(|| format!("Cannot check function '{}'", function))
}

pub fn handle_check(
    config: &LoadgenConfig,
    function: &str,
    status: u16,
    body: Option<&str>,
    body_file: Option<&Path>,
) -> Result<()> {
    let outcome = run_check(config, function, status, read_body(body, body_file)?)?;
    super::print_json(&outcome)?;
    if !outcome.passed {
        bail!(
            "Response failed checks: {}",
            outcome.failed_checks().collect::<Vec<_>>().join(", ")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadgen_config::InvocationMode;
    use std::io::Write;

    #[test]
    fn test_sync_check() {
        let config = LoadgenConfig::default();
        let outcome = run_check(
            &config,
            "word-stats-java",
            200,
            r#"{"output":{"wordCount":42}}"#.to_string(),
        )
        .unwrap();
        assert!(outcome.passed);
    }

    #[test]
    fn test_async_check_uses_configured_mode() {
        let mut config = LoadgenConfig::default();
        config.target.invocation_mode = InvocationMode::Async;
        let outcome = run_check(&config, "word-stats-java", 202, "{}".to_string()).unwrap();
        assert_eq!(outcome.failed_checks().collect::<Vec<_>>(), vec!["has executionId"]);
    }

    #[test]
    fn test_read_body_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"executionId":"abc"}}"#).unwrap();
        let body = read_body(None, Some(file.path())).unwrap();
        assert_eq!(body, r#"{"executionId":"abc"}"#);

        assert_eq!(read_body(Some("{}"), Some(file.path())).unwrap(), "{}");
        assert!(read_body(None, None).is_err());
    }
}
