//! Invocation envelope, request shaping and response validation
//!
//! Turns a workload input into the POST a load driver sends to the nanofaas
//! control plane, and decides whether the response counts as a success.

pub mod context;
pub mod envelope;
pub mod errors;
pub mod metrics;
pub mod path;
pub mod predicates;
pub mod request;
pub mod validator;

pub use context::InvocationContext;
pub use envelope::{wrap, InvocationEnvelope};
pub use errors::{InvokeError, InvokeResult};
pub use metrics::{NoopSizeSink, PayloadSizeTrend, SizeSink, TrendSummary, PAYLOAD_SIZE_METRIC};
pub use path::{invocation_path, FUNCTIONS_API_PREFIX};
pub use predicates::{has_groups, predicate_for, word_count_positive, OutputPredicate};
pub use request::{InvocationRequest, JSON_CONTENT_TYPE};
pub use validator::{
    check_invocation_response, is_truthy, CheckResult, InvocationResponse, ResponseOutcome,
};

pub use loadgen_config::InvocationMode;
