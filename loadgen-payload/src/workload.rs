//! Workload catalog
//!
//! Every benchmarked function is a workload (what the function computes)
//! deployed on a runtime, named `<workload>-<runtime>`, e.g.
//! `json-transform-java-lite`.

use crate::index::PayloadIndex;
use crate::json_transform::{build_json_transform_input, JsonTransformInput};
use crate::random::RandomSource;
use crate::word_stats::{build_word_stats_input, WordStatsInput};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while resolving workload and runtime names
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkloadError {
    #[error("unknown workloads: {}", .0.join(", "))]
    UnknownWorkloads(Vec<String>),

    #[error("unknown runtimes: {}", .0.join(", "))]
    UnknownRuntimes(Vec<String>),

    #[error("no workload matches function '{0}'")]
    UnknownFunction(String),
}

/// What a benchmarked function computes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Workload {
    WordStats,
    JsonTransform,
}

/// Runtime a function is deployed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Runtime {
    Java,
    JavaLite,
    Python,
    Exec,
}

/// Either input kind, serialized without a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvocationInput {
    WordStats(WordStatsInput),
    JsonTransform(JsonTransformInput),
}

impl Workload {
    /// Canonical order
    pub fn all() -> &'static [Workload] {
        &[Workload::WordStats, Workload::JsonTransform]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Workload::WordStats => "word-stats",
            Workload::JsonTransform => "json-transform",
        }
    }

    pub fn function_name(&self, runtime: Runtime) -> String {
        format!("{}-{}", self.as_str(), runtime.as_str())
    }

    /// Resolve the workload of a function name such as `word-stats-python`.
    pub fn for_function(function_name: &str) -> Result<Workload, WorkloadError> {
        let name = function_name.trim().to_lowercase();
        Workload::all()
            .iter()
            .copied()
            .find(|workload| {
                name == workload.as_str()
                    || name
                        .strip_prefix(workload.as_str())
                        .is_some_and(|rest| rest.starts_with('-'))
            })
            .ok_or_else(|| WorkloadError::UnknownFunction(function_name.to_string()))
    }

    /// Build this workload's input for `index`
    pub fn build_input<R>(&self, index: PayloadIndex, rng: &mut R) -> InvocationInput
    where
        R: RandomSource + ?Sized,
    {
        match self {
            Workload::WordStats => InvocationInput::WordStats(build_word_stats_input(index, rng)),
            Workload::JsonTransform => {
                InvocationInput::JsonTransform(build_json_transform_input(index, rng))
            }
        }
    }
}

impl Runtime {
    /// Canonical order
    pub fn all() -> &'static [Runtime] {
        &[Runtime::Java, Runtime::JavaLite, Runtime::Python, Runtime::Exec]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Runtime::Java => "java",
            Runtime::JavaLite => "java-lite",
            Runtime::Python => "python",
            Runtime::Exec => "exec",
        }
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Workload {
    type Err = WorkloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Workload::all()
            .iter()
            .copied()
            .find(|workload| workload.as_str() == name)
            .ok_or_else(|| WorkloadError::UnknownWorkloads(vec![name]))
    }
}

impl FromStr for Runtime {
    type Err = WorkloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Runtime::all()
            .iter()
            .copied()
            .find(|runtime| runtime.as_str() == name)
            .ok_or_else(|| WorkloadError::UnknownRuntimes(vec![name]))
    }
}

/// Trim, lowercase and dedup names, preserving first occurrence
fn normalize_names<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for raw in values {
        let item = raw.as_ref().trim().to_lowercase();
        if !item.is_empty() && !normalized.contains(&item) {
            normalized.push(item);
        }
    }
    normalized
}

/// Function names for every selected workload on every selected runtime.
///
/// Names are normalized and deduplicated, unknown names are reported all at
/// once, and the result follows canonical workload-major order regardless of
/// the order given.
pub fn test_matrix<S: AsRef<str>>(
    workloads: &[S],
    runtimes: &[S],
) -> Result<Vec<String>, WorkloadError> {
    let selected_workloads = normalize_names(workloads);
    let selected_runtimes = normalize_names(runtimes);

    let unknown_workloads: Vec<String> = selected_workloads
        .iter()
        .filter(|name| name.parse::<Workload>().is_err())
        .cloned()
        .collect();
    if !unknown_workloads.is_empty() {
        return Err(WorkloadError::UnknownWorkloads(unknown_workloads));
    }

    let unknown_runtimes: Vec<String> = selected_runtimes
        .iter()
        .filter(|name| name.parse::<Runtime>().is_err())
        .cloned()
        .collect();
    if !unknown_runtimes.is_empty() {
        return Err(WorkloadError::UnknownRuntimes(unknown_runtimes));
    }

    let mut matrix = Vec::new();
    for workload in Workload::all() {
        if !selected_workloads.iter().any(|name| name == workload.as_str()) {
            continue;
        }
        for runtime in Runtime::all() {
            if selected_runtimes.iter().any(|name| name == runtime.as_str()) {
                matrix.push(workload.function_name(*runtime));
            }
        }
    }
    Ok(matrix)
}
