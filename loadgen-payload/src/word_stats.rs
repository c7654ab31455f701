//! Text-analysis inputs for the word-stats functions

use crate::index::PayloadIndex;
use crate::random::RandomSource;
use crate::seed::{effective_seed, pick};
use serde::{Deserialize, Serialize};

const ADJECTIVES: [&str; 7] = ["quick", "silent", "brisk", "patient", "curious", "bold", "calm"];
const NOUNS: [&str; 7] = ["fox", "dog", "engineer", "runner", "team", "service", "cluster"];
const VERBS: [&str; 7] = ["jumps", "analyzes", "builds", "observes", "tests", "measures", "scales"];
const ADVERBS: [&str; 7] = ["quickly", "carefully", "daily", "smoothly", "loudly", "correctly", "safely"];

/// Input of a word-stats invocation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordStatsInput {
    /// Period-delimited sentences
    pub text: String,
    /// How many most frequent words to report, in `[3, 8]`
    pub top_n: u32,
}

/// Build the word-stats input for `index`, drawing a fresh seed from `rng`
/// when the index is unpooled.
pub fn build_word_stats_input<R>(index: PayloadIndex, rng: &mut R) -> WordStatsInput
where
    R: RandomSource + ?Sized,
{
    word_stats_from_seed(effective_seed(index, rng))
}

/// Deterministic word-stats input for a seed.
///
/// Emits `3 + seed mod 5` distinct sentences, each repeated
/// `1 + ((seed + 3i) mod 4)` times to mimic bursty phrasing.
pub fn word_stats_from_seed(seed: u64) -> WordStatsInput {
    let sentence_count = 3 + seed % 5;
    let mut parts = Vec::new();

    for i in 0..sentence_count {
        let sentence = format!(
            "The {} {} {} {}",
            pick(&ADJECTIVES, seed, i + 1),
            pick(&NOUNS, seed, i + 7),
            pick(&VERBS, seed, i + 13),
            pick(&ADVERBS, seed, i + 19),
        );
        let repeat = 1 + (u128::from(seed) + u128::from(i) * 3) % 4;
        for _ in 0..repeat {
            parts.push(sentence.clone());
        }
    }

    WordStatsInput {
        text: format!("{}.", parts.join(". ")),
        top_n: 3 + (seed % 6) as u32,
    }
}
