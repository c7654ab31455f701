//! `loadgen matrix`

use anyhow::{Context, Result};
use loadgen_payload::{test_matrix, Runtime, Workload};

/// Function names for the selected workloads and runtimes; an empty
/// selection means all of them.
pub fn function_names(workloads: &[String], runtimes: &[String]) -> Result<Vec<String>> {
    let workloads = if workloads.is_empty() {
        Workload::all().iter().map(|w| w.as_str().to_string()).collect()
    } else {
        workloads.to_vec()
    };
    let runtimes = if runtimes.is_empty() {
        Runtime::all().iter().map(|r| r.as_str().to_string()).collect()
    } else {
        runtimes.to_vec()
    };
    test_matrix(&workloads, &runtimes).context("Failed to build test matrix")
}

pub fn handle_matrix(workloads: &[String], runtimes: &[String]) -> Result<()> {
    for name in function_names(workloads, runtimes)? {
        println!("{}", name);
    }
    Ok(())
}
