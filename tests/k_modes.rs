use std::collections::HashMap;

use kmodes::{checked_bound, k_modes_array, k_modes_stream, Error, IterProducer, KModes, Strategy};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const STRATEGIES: [Strategy; 2] = [Strategy::Linear, Strategy::Heap];

const ARRAY_INPUT: [i32; 38] = [
    3, 2, 9, 4, 5, 1, 2, 3, 5, 7, 9, 8, 9, 0, 9, 8, 7, 9, 5, 6, 2, 3, 4, 6, 5, 4, 5, 6, 0, 1,
    1, 1, 0, 0, 0, 0, 0, 0,
];

const STREAM_INPUT: [i32; 27] = [
    9, 5, 3, 5, 9, 8, 9, 0, 9, 8, 9, 5, 6, 2, 3, 5, 4, 5, 6, 0, 1, 0, 0, 0, 0, 0, 0,
];

fn counts(items: &[u32]) -> HashMap<u32, u64> {
    let mut counts = HashMap::new();
    for &item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Skewed input so that a handful of values dominate.
fn skewed(rng: &mut SmallRng, len: usize, domain: u32) -> Vec<u32> {
    (0..len)
        .map(|_| {
            let x: f64 = rng.random();
            (x * x * x * domain as f64) as u32
        })
        .collect()
}

#[test]
fn test_array_scenario() {
    for strategy in STRATEGIES {
        assert_eq!(k_modes_array(&ARRAY_INPUT, 3, strategy), vec![0, 5, 9]);
    }
}

#[test]
fn test_stream_scenario() {
    for strategy in STRATEGIES {
        let mut producer = IterProducer::new(STREAM_INPUT);
        assert_eq!(k_modes_stream(&mut producer, 3, strategy), vec![0, 5, 9]);
    }
}

#[test]
fn test_scenario_counts() {
    let mut modes = KModes::new(3, Strategy::Heap);
    for item in ARRAY_INPUT {
        modes.add(item);
    }
    assert_eq!(modes.count(&0), 8);
    assert_eq!(modes.count(&5), 5);
    assert_eq!(modes.count(&9), 5);
    assert_eq!(modes.count(&1), 4);
    assert!(!modes.query(&1));
    assert_eq!(modes.min_count(), Some(5));
}

#[test]
fn test_empty_input() {
    for strategy in STRATEGIES {
        for k in 0..4 {
            assert!(k_modes_array::<i32>(&[], k, strategy).is_empty());
            let mut producer = IterProducer::new(Vec::<i32>::new());
            assert!(k_modes_stream(&mut producer, k, strategy).is_empty());
        }
    }
}

#[test]
fn test_negative_bound_rejected() {
    assert_eq!(checked_bound(-3), Err(Error::InvalidBound(-3)));
    assert_eq!(checked_bound(3), Ok(3));
}

#[test]
fn test_strings_as_elements() {
    let words: Vec<String> = "the cat and the dog and the bird"
        .split_whitespace()
        .map(String::from)
        .collect();
    for strategy in STRATEGIES {
        assert_eq!(k_modes_array(&words, 2, strategy), vec!["and", "the"]);
    }
}

#[test]
fn test_strategies_agree_on_random_input() {
    let mut rng = SmallRng::seed_from_u64(0x6b6d6f646573);
    for round in 0..200 {
        let len = rng.random_range(0..400);
        let domain = rng.random_range(1..60);
        let k = rng.random_range(0..12);
        let items = skewed(&mut rng, len, domain);

        let linear = k_modes_array(&items, k, Strategy::Linear);
        let heap = k_modes_array(&items, k, Strategy::Heap);
        assert_eq!(linear, heap, "round {} k={} items={:?}", round, k, items);
    }
}

#[test]
fn test_cardinality_and_dominance() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..100 {
        let len = rng.random_range(1..300);
        let domain = rng.random_range(1..40);
        let k = rng.random_range(1..10);
        let items = skewed(&mut rng, len, domain);
        let counts = counts(&items);

        for strategy in STRATEGIES {
            let result = k_modes_array(&items, k, strategy);
            assert_eq!(result.len(), k.min(counts.len()));
            assert!(result.windows(2).all(|w| w[0] < w[1]), "not ascending: {:?}", result);

            // the tracked minimum never decreases, so nothing left out can exceed it
            let tracked_min = result.iter().map(|item| counts[item]).min().unwrap_or(0);
            let excluded_max = counts
                .iter()
                .filter(|(item, _)| !result.contains(*item))
                .map(|(_, &count)| count)
                .max()
                .unwrap_or(0);
            assert!(
                excluded_max <= tracked_min,
                "excluded count {} above tracked minimum {}",
                excluded_max,
                tracked_min
            );
        }
    }
}

#[test]
fn test_clear_winners_are_found() {
    // 100 occurrences of 1..=3 interleaved with a long tail of singletons
    let mut items = Vec::new();
    for i in 0..300u32 {
        items.push(i % 3 + 1);
        items.push(1_000 + i);
    }
    for strategy in STRATEGIES {
        assert_eq!(k_modes_array(&items, 3, strategy), vec![1, 2, 3]);
    }
}
