//! Seed resolution and seeded pseudo-selection
//!
//! The arithmetic here is part of the payload contract: the same seed must
//! produce the same payload in every port of the harness, so results across
//! runs stay comparable. Products are computed in `u128` so no `u64` seed can
//! overflow.

use crate::index::PayloadIndex;
use crate::random::RandomSource;

/// Exclusive upper bound for seeds drawn from randomness
pub const FRESH_SEED_RANGE: u64 = 1_000_000;

/// `items[(seed * 31 + salt * 17) mod items.len()]`
///
/// # Panics
///
/// Panics if `items` is empty.
pub fn pick<T>(items: &[T], seed: u64, salt: u64) -> &T {
    let slot = (u128::from(seed) * 31 + u128::from(salt) * 17) % items.len() as u128;
    &items[slot as usize]
}

/// `(seed * seed_factor + i * i_factor) mod modulus`
pub(crate) fn spread(seed: u64, seed_factor: u64, i: u64, i_factor: u64, modulus: u64) -> u64 {
    let mixed = u128::from(seed) * u128::from(seed_factor) + u128::from(i) * u128::from(i_factor);
    (mixed % u128::from(modulus)) as u64
}

/// A pooled index is its own seed; otherwise a fresh seed in
/// `[0, FRESH_SEED_RANGE)` is drawn from `rng`.
pub fn effective_seed<R>(index: PayloadIndex, rng: &mut R) -> u64
where
    R: RandomSource + ?Sized,
{
    match index {
        PayloadIndex::Pooled(seed) => seed,
        PayloadIndex::Unpooled => {
            let draw = (rng.next_f64() * FRESH_SEED_RANGE as f64).floor() as u64;
            draw.min(FRESH_SEED_RANGE - 1)
        }
    }
}
