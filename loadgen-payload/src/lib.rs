//! Deterministic payload model for nanofaas load tests
//!
//! For every iteration of a load test the driver asks this crate which
//! canonical input to send. Pooled payloads are a pure function of their pool
//! index, so repeated runs against the same pool send identical payloads;
//! unpooled payloads are seeded from an injected [`RandomSource`].

pub mod index;
pub mod json_transform;
pub mod model;
pub mod random;
pub mod seed;
pub mod selection;
pub mod word_stats;
pub mod workload;

pub use index::PayloadIndex;
pub use json_transform::{
    build_json_transform_input, json_transform_from_seed, Department, GroupField,
    JsonTransformInput, Operation, Region, Row, Tier, ValueField,
};
pub use model::{PayloadModel, SelectedPayload};
pub use random::{seeded, FastRandom, RandomSource};
pub use seed::{effective_seed, pick};
pub use selection::select_index;
pub use word_stats::{build_word_stats_input, word_stats_from_seed, WordStatsInput};
pub use workload::{test_matrix, InvocationInput, Runtime, Workload, WorkloadError};

// Selection configuration lives with the rest of the run configuration
pub use loadgen_config::{parse_positive_int, SelectionMode};
