//! Request envelope

use crate::errors::InvokeResult;
use crate::metrics::{SizeSink, PAYLOAD_SIZE_METRIC};
use serde::Serialize;
use tracing::trace;

/// Body of every invocation: `{"input": <workload input>}`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InvocationEnvelope<'a, T: ?Sized> {
    pub input: &'a T,
}

impl<'a, T: Serialize + ?Sized> InvocationEnvelope<'a, T> {
    pub fn new(input: &'a T) -> Self {
        Self { input }
    }

    pub fn to_json(&self) -> InvokeResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Serialize the envelope around `input` and record its byte length under
/// [`PAYLOAD_SIZE_METRIC`].
pub fn wrap<T>(input: &T, sink: &dyn SizeSink) -> InvokeResult<String>
where
    T: Serialize + ?Sized,
{
    let body = InvocationEnvelope::new(input).to_json()?;
    trace!("Wrapped invocation payload of {} bytes", body.len());
    sink.record(PAYLOAD_SIZE_METRIC, body.len() as u64);
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::PayloadSizeTrend;
    use loadgen_payload::{word_stats_from_seed, PayloadIndex, Workload};

    #[test]
    fn test_wraps_under_input_key() {
        let trend = PayloadSizeTrend::new();
        let body = wrap(&serde_json::json!({"text": "a. b."}), &trend).unwrap();
        assert_eq!(body, r#"{"input":{"text":"a. b."}}"#);
        assert_eq!(trend.samples(PAYLOAD_SIZE_METRIC), vec![body.len() as u64]);
    }

    #[test]
    fn test_same_input_reports_same_length() {
        let trend = PayloadSizeTrend::new();
        let input = word_stats_from_seed(42);
        wrap(&input, &trend).unwrap();
        wrap(&input, &trend).unwrap();

        let samples = trend.samples(PAYLOAD_SIZE_METRIC);
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0], samples[1]);
    }

    #[test]
    fn test_untagged_input_is_not_nested() {
        let input = Workload::WordStats.build_input(PayloadIndex::Pooled(3), &mut || 0.0);
        let value: serde_json::Value =
            serde_json::from_str(&InvocationEnvelope::new(&input).to_json().unwrap()).unwrap();
        assert!(value["input"]["text"].is_string());
        assert!(value["input"]["topN"].is_u64());
    }
}
