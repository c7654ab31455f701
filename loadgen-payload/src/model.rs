//! Frozen per-run payload model

use crate::index::PayloadIndex;
use crate::random::RandomSource;
use crate::selection::select_index;
use crate::workload::{InvocationInput, Workload};
use loadgen_config::{PayloadConfig, SelectionMode};
use serde::Serialize;
use tracing::{trace, warn};

/// The payload an iteration sends, with the pool slot it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedPayload {
    pub index: PayloadIndex,
    pub input: InvocationInput,
}

/// Selection mode and pool size, resolved once at startup.
///
/// The model holds no mutable state, so one instance can be shared by every
/// virtual user of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadModel {
    mode: SelectionMode,
    pool_size: u64,
}

impl PayloadModel {
    pub fn new(mode: SelectionMode, pool_size: u64) -> Self {
        if pool_size == 0 && mode != SelectionMode::LegacyRandom {
            warn!("Payload pool size is 0; every iteration will synthesize a fresh payload");
        }
        Self { mode, pool_size }
    }

    pub fn from_config(config: &PayloadConfig) -> Self {
        Self::new(config.selection_mode, config.pool_size)
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn pool_size(&self) -> u64 {
        self.pool_size
    }

    /// Pool slot for an iteration
    pub fn select<R>(&self, iteration_in_test: u64, rng: &mut R) -> PayloadIndex
    where
        R: RandomSource + ?Sized,
    {
        select_index(self.mode, self.pool_size, iteration_in_test, rng)
    }

    /// Select a slot and synthesize the workload's input for it
    pub fn next_input<R>(
        &self,
        workload: Workload,
        iteration_in_test: u64,
        rng: &mut R,
    ) -> SelectedPayload
    where
        R: RandomSource + ?Sized,
    {
        let index = self.select(iteration_in_test, rng);
        let input = workload.build_input(index, rng);
        trace!(
            "Iteration {} of {} selected payload index {} ({})",
            iteration_in_test,
            workload,
            index,
            self.mode
        );
        SelectedPayload { index, input }
    }
}

impl Default for PayloadModel {
    fn default() -> Self {
        Self::from_config(&PayloadConfig::default())
    }
}
