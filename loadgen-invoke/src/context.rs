//! Frozen per-run invocation context

use crate::envelope::wrap;
use crate::errors::{InvokeError, InvokeResult};
use crate::metrics::{NoopSizeSink, SizeSink};
use crate::path::invocation_path;
use crate::predicates::{predicate_for, OutputPredicate};
use crate::request::InvocationRequest;
use crate::validator::{check_invocation_response, InvocationResponse, ResponseOutcome};
use loadgen_config::{InvocationMode, TargetConfig};
use loadgen_payload::Workload;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Target, mode, timeout and size sink, resolved once and shared by every
/// virtual user of a run.
#[derive(Clone)]
pub struct InvocationContext {
    base_url: String,
    mode: InvocationMode,
    timeout: Duration,
    sink: Arc<dyn SizeSink>,
}

impl InvocationContext {
    pub fn new(config: &TargetConfig, sink: Arc<dyn SizeSink>) -> InvokeResult<Self> {
        let parsed = Url::parse(&config.base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(InvokeError::UnsupportedScheme(parsed.scheme().to_string()));
        }
        debug!(
            "Invocation context for {} in {} mode with {}s timeout",
            config.base_url,
            config.invocation_mode,
            config.timeout.as_secs()
        );
        Ok(Self {
            base_url: config.base_url.clone(),
            mode: config.invocation_mode,
            timeout: config.timeout,
            sink,
        })
    }

    /// Context that discards payload sizes
    pub fn without_metrics(config: &TargetConfig) -> InvokeResult<Self> {
        Self::new(config, Arc::new(NoopSizeSink))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn mode(&self) -> InvocationMode {
        self.mode
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn path(&self, function_name: &str) -> String {
        invocation_path(function_name, &self.base_url, self.mode)
    }

    /// Wrap `input` and shape the POST for `function_name`
    pub fn prepare<T>(&self, function_name: &str, input: &T) -> InvokeResult<InvocationRequest>
    where
        T: Serialize + ?Sized,
    {
        let body = wrap(input, self.sink.as_ref())?;
        Ok(InvocationRequest::new(
            self.path(function_name),
            body,
            self.timeout,
        ))
    }

    pub fn check<P>(&self, response: &InvocationResponse, predicate: P) -> ResponseOutcome
    where
        P: Fn(&Value) -> bool,
    {
        check_invocation_response(response, self.mode, predicate)
    }

    /// Check a response using the predicate of the function's workload
    pub fn check_function(
        &self,
        function_name: &str,
        response: &InvocationResponse,
    ) -> InvokeResult<ResponseOutcome> {
        let predicate: OutputPredicate = predicate_for(Workload::for_function(function_name)?);
        Ok(self.check(response, predicate))
    }
}

impl fmt::Debug for InvocationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationContext")
            .field("base_url", &self.base_url)
            .field("mode", &self.mode)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{PayloadSizeTrend, PAYLOAD_SIZE_METRIC};
    use loadgen_payload::word_stats_from_seed;

    fn target(mode: InvocationMode) -> TargetConfig {
        TargetConfig {
            base_url: "http://gateway:8080".to_string(),
            invocation_mode: mode,
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_prepare_records_size() {
        let trend = Arc::new(PayloadSizeTrend::new());
        let context = InvocationContext::new(&target(InvocationMode::Async), trend.clone()).unwrap();

        let request = context
            .prepare("word-stats-python", &word_stats_from_seed(1))
            .unwrap();
        assert_eq!(
            request.url,
            "http://gateway:8080/v1/functions/word-stats-python:enqueue"
        );
        assert_eq!(request.timeout, Duration::from_secs(5));
        assert_eq!(
            trend.samples(PAYLOAD_SIZE_METRIC),
            vec![request.body.len() as u64]
        );
    }

    #[test]
    fn test_rejects_unusable_base_url() {
        let mut config = target(InvocationMode::Sync);
        config.base_url = "gateway".to_string();
        assert!(InvocationContext::without_metrics(&config).is_err());

        config.base_url = "ws://gateway".to_string();
        assert!(matches!(
            InvocationContext::without_metrics(&config),
            Err(InvokeError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_check_function_picks_predicate() {
        let context = InvocationContext::without_metrics(&target(InvocationMode::Sync)).unwrap();
        let response = InvocationResponse::new(200, r#"{"output":{"groups":{}}}"#);

        assert!(context.check_function("json-transform-exec", &response).unwrap().passed);
        assert!(!context.check_function("word-stats-exec", &response).unwrap().passed);
        assert!(context.check_function("thumbnail-exec", &response).is_err());
    }
}
