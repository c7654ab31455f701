//! Response validation
//!
//! Each named check is evaluated on its own and recorded, so a failing
//! status check does not hide a failing body check. Malformed bodies fail
//! checks; they are never errors.

use loadgen_config::InvocationMode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

pub const CHECK_STATUS_ACCEPTED: &str = "status is 202";
pub const CHECK_HAS_EXECUTION_ID: &str = "has executionId";
pub const CHECK_STATUS_OK: &str = "status is 200";
pub const CHECK_EXPECTED_OUTPUT: &str = "has expected output";

/// What came back from an invocation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResponse {
    pub status: u16,
    pub body: String,
}

impl InvocationResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Body parsed as JSON, `None` when it is not valid JSON
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Result of one named check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub passed: bool,
}

/// All checks of one response and their conjunction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseOutcome {
    pub passed: bool,
    pub checks: Vec<CheckResult>,
}

impl ResponseOutcome {
    fn from_checks(checks: Vec<CheckResult>) -> Self {
        Self {
            passed: checks.iter().all(|check| check.passed),
            checks,
        }
    }

    pub fn failed_checks(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checks
            .iter()
            .filter(|check| !check.passed)
            .map(|check| check.name)
    }
}

/// Truthiness of a JSON value in the loose sense: `null`, `false`, `0`, and
/// `""` are falsy, everything else (including empty containers) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn field_is_truthy(body: &Value, field: &str) -> bool {
    body.get(field).is_some_and(is_truthy)
}

/// Validate a response for the run's mode.
///
/// Async runs expect `202` with a truthy `executionId`. Sync runs expect
/// `200` with a truthy JSON body that carries no truthy `error` and satisfies
/// `predicate`. The predicate is not consulted in async mode.
pub fn check_invocation_response<P>(
    response: &InvocationResponse,
    mode: InvocationMode,
    predicate: P,
) -> ResponseOutcome
where
    P: Fn(&Value) -> bool,
{
    let body = response.json();
    let checks = match mode {
        InvocationMode::Async => vec![
            CheckResult {
                name: CHECK_STATUS_ACCEPTED,
                passed: response.status == 202,
            },
            CheckResult {
                name: CHECK_HAS_EXECUTION_ID,
                passed: body
                    .as_ref()
                    .is_some_and(|body| field_is_truthy(body, "executionId")),
            },
        ],
        InvocationMode::Sync => vec![
            CheckResult {
                name: CHECK_STATUS_OK,
                passed: response.status == 200,
            },
            CheckResult {
                name: CHECK_EXPECTED_OUTPUT,
                passed: body.as_ref().is_some_and(|body| {
                    is_truthy(body) && !field_is_truthy(body, "error") && predicate(body)
                }),
            },
        ],
    };

    let outcome = ResponseOutcome::from_checks(checks);
    if !outcome.passed {
        debug!(
            "Invocation response with status {} failed checks: {}",
            response.status,
            outcome.failed_checks().collect::<Vec<_>>().join(", ")
        );
    }
    outcome
}
