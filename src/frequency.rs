use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use ahash::RandomState;

/// Occurrence counts for every element seen during a run.
///
/// Counts only ever go up; there is no removal.
pub struct FrequencyTable<T> {
    counts: HashMap<T, u64, RandomState>,
    observed: u64,
}

impl<T: Hash + Eq> FrequencyTable<T> {
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    pub fn with_hasher(hasher: RandomState) -> Self {
        Self {
            counts: HashMap::with_hasher(hasher),
            observed: 0,
        }
    }

    /// Bumps the count for `item` and returns the new value.
    pub fn increment(&mut self, item: T) -> u64 {
        self.observed += 1;
        let count = self.counts.entry(item).or_insert(0);
        *count += 1;
        *count
    }

    /// Current count, 0 when `item` was never seen.
    pub fn get<Q>(&self, item: &Q) -> u64
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Number of distinct elements.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of increments.
    pub fn observed(&self) -> u64 {
        self.observed
    }
}

impl<T: Hash + Eq> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
