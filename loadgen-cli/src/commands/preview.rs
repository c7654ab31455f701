//! `loadgen preview`

use anyhow::{Context, Result};
use loadgen_config::LoadgenConfig;
use loadgen_invoke::{InvocationContext, PayloadSizeTrend, PAYLOAD_SIZE_METRIC};
use loadgen_payload::{FastRandom, PayloadIndex, PayloadModel, Workload};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// One iteration as a run would send it
#[derive(Debug, Serialize)]
pub struct PreviewRecord {
    pub iteration: u64,
    pub index: PayloadIndex,
    pub path: String,
    pub envelope: Value,
}

/// Build `count` consecutive iterations starting at `first_iteration`
pub fn build_preview(
    config: &LoadgenConfig,
    function: &str,
    first_iteration: u64,
    count: u64,
    rng: &mut FastRandom,
    trend: Arc<PayloadSizeTrend>,
) -> Result<Vec<PreviewRecord>> {
    let workload = Workload::for_function(function)
        .with_context(|| format!("Cannot preview function '{}'", function))?;
    let model = PayloadModel::from_config(&config.payload);
    let context = InvocationContext::new(&config.target, trend)
        .context("Failed to build invocation context")?;

    (first_iteration..first_iteration.saturating_add(count))
        .map(|iteration| -> Result<PreviewRecord> {
            let selected = model.next_input(workload, iteration, rng);
            let request = context
                .prepare(function, &selected.input)
                .context("Failed to wrap payload")?;
            Ok(PreviewRecord {
                iteration,
                index: selected.index,
                path: request.url,
                envelope: serde_json::from_str(&request.body)?,
            })
        })
        .collect()
}

pub fn handle_preview(
    config: &LoadgenConfig,
    function: &str,
    iteration: u64,
    count: u64,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => loadgen_payload::seeded(seed),
        None => FastRandom::new(),
    };
    let trend = Arc::new(PayloadSizeTrend::new());
    let records = build_preview(config, function, iteration, count, &mut rng, trend.clone())?;
    super::print_json(&records)?;

    if let Some(summary) = trend.summary(PAYLOAD_SIZE_METRIC) {
        info!(
            "{}: count={} min={} mean={:.1} max={}",
            PAYLOAD_SIZE_METRIC, summary.count, summary.min, summary.mean, summary.max
        );
    }
    Ok(())
}
