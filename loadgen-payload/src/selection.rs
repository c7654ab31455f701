//! Pool slot selection

use crate::index::PayloadIndex;
use crate::random::RandomSource;
use loadgen_config::SelectionMode;

/// Decide which payload an iteration sends.
///
/// * `pool-sequential` cycles: `iteration mod pool_size`, covering the whole
///   pool every `pool_size` iterations.
/// * `pool-random` samples `floor(draw * pool_size)`, clamped into the pool.
/// * `legacy-random` has no pool identity and yields
///   [`PayloadIndex::Unpooled`].
///
/// `rng` is only consulted in `pool-random` mode. A `pool_size` of zero has
/// no slots to choose from and also yields [`PayloadIndex::Unpooled`].
pub fn select_index<R>(
    mode: SelectionMode,
    pool_size: u64,
    iteration_in_test: u64,
    rng: &mut R,
) -> PayloadIndex
where
    R: RandomSource + ?Sized,
{
    if pool_size == 0 {
        return PayloadIndex::Unpooled;
    }

    match mode {
        SelectionMode::PoolSequential => PayloadIndex::Pooled(iteration_in_test % pool_size),
        SelectionMode::PoolRandom => {
            // saturating cast maps negative and NaN draws to 0
            let candidate = (rng.next_f64() * pool_size as f64).floor() as u64;
            PayloadIndex::Pooled(candidate.min(pool_size - 1))
        }
        SelectionMode::LegacyRandom => PayloadIndex::Unpooled,
    }
}
