//! Property tests for payload invariants

use loadgen_payload::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn word_stats_invariants(seed in 0u64..10_000_000) {
        let first = word_stats_from_seed(seed);
        let second = word_stats_from_seed(seed);
        prop_assert_eq!(&first, &second);
        prop_assert!((3..=8).contains(&first.top_n));
        prop_assert!(first.text.len() > 60);
        prop_assert!(first.text.starts_with("The "));
        prop_assert!(first.text.ends_with('.'));
    }

    #[test]
    fn word_stats_sentence_count(seed in 0u64..1_000_000) {
        let input = word_stats_from_seed(seed);
        let sentences = input.text.trim_end_matches('.').split(". ").count() as u64;
        // between one and four repetitions of 3..=7 distinct sentences
        prop_assert!((3..=28).contains(&sentences));
    }

    #[test]
    fn json_transform_invariants(seed in any::<u64>()) {
        let input = json_transform_from_seed(seed);
        prop_assert_eq!(&input, &json_transform_from_seed(seed));
        prop_assert!((8..=31).contains(&input.data.len()));
        prop_assert_eq!(input.value_field.is_some(), input.operation != Operation::Count);
        for row in &input.data {
            prop_assert!((40_000..130_000).contains(&row.salary));
            prop_assert!((22..57).contains(&row.age));
            prop_assert!((50..=100).contains(&row.score));
        }
    }

    #[test]
    fn pool_random_stays_in_pool(pool_size in 1u64..100_000, draw in 0.0f64..=1.0) {
        let index = select_index(SelectionMode::PoolRandom, pool_size, 0, &mut || draw);
        let slot = index.pooled().unwrap();
        prop_assert!(slot < pool_size);
    }

    #[test]
    fn pool_sequential_wraps(pool_size in 1u64..10_000, iteration in any::<u64>()) {
        let index = select_index(SelectionMode::PoolSequential, pool_size, iteration, &mut || 0.0);
        prop_assert_eq!(index, PayloadIndex::Pooled(iteration % pool_size));
    }

    #[test]
    fn fresh_seeds_stay_in_range(draw in 0.0f64..=1.0) {
        let seed = effective_seed(PayloadIndex::Unpooled, &mut || draw);
        prop_assert!(seed < 1_000_000);
    }
}
