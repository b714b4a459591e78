//! Property Tests
//!
//! Laws that must hold for every seed and input:
//! - shuffle and full-size sample are permutations
//! - bounded draws stay in range
//! - save/load round trips continue identically

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use repro_random::{Random, RandomError};

fn fail(err: RandomError) -> TestCaseError {
    TestCaseError::fail(err.to_string())
}

fn sorted(mut items: Vec<i32>) -> Vec<i32> {
    items.sort();
    items
}

proptest! {
    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>(), items in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut rng = Random::new(seed);
        let mut shuffled = items.clone();
        rng.shuffle(&mut shuffled);
        prop_assert_eq!(sorted(shuffled), sorted(items));
    }

    #[test]
    fn prop_same_seed_same_shuffle(seed in any::<u64>(), len in 0usize..100) {
        let mut a: Vec<usize> = (0..len).collect();
        let mut b = a.clone();
        Random::new(seed).shuffle(&mut a);
        Random::new(seed).shuffle(&mut b);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_sample_size_laws(seed in any::<u64>(), items in prop::collection::vec(any::<i32>(), 0..50), extra in 1usize..5) {
        let mut rng = Random::new(seed);

        prop_assert!(rng.sample(&items, 0).map_err(fail)?.is_empty());

        let full = rng.sample(&items, items.len()).map_err(fail)?;
        prop_assert_eq!(sorted(full), sorted(items.clone()));

        let too_many = rng.sample(&items, items.len() + extra);
        let is_invalid = matches!(too_many, Err(RandomError::InvalidArgument { .. }));
        prop_assert!(is_invalid);
    }

    #[test]
    fn prop_get_uint32_in_range(seed in any::<u64>(), max in 1u32..) {
        let mut rng = Random::new(seed);
        for _ in 0..100 {
            prop_assert!(rng.get_uint32(max) < max);
        }
    }

    #[test]
    fn prop_get_real64_in_range(seed in any::<u64>()) {
        let mut rng = Random::new(seed);
        for _ in 0..100 {
            let val = rng.get_real64();
            prop_assert!((0.0..1.0).contains(&val));
        }
    }

    #[test]
    fn prop_round_trip_continues_identically(seed in any::<u64>(), consumed in 0usize..1000) {
        let mut original = Random::new(seed);
        for _ in 0..consumed {
            original.get_uint32(1000);
        }

        let mut buf = Vec::new();
        original.save(&mut buf).map_err(fail)?;
        let mut restored = Random::new(0);
        restored.load(&mut buf.as_slice()).map_err(fail)?;

        prop_assert_eq!(&restored, &original);
        for _ in 0..50 {
            prop_assert_eq!(restored.get_real64(), original.get_real64());
        }
    }
}
