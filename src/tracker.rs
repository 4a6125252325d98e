use std::hash::Hash;

use crate::frequency::FrequencyTable;
use crate::heap::HeapTracker;
use crate::linear::LinearTracker;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub item: T,
    pub count: u64,
}

/// Maintains the bounded set of elements currently believed to be the k most frequent.
///
/// `observe` is called once per ingested element, after its count in the
/// table has been incremented. When the set is full and a newcomer beats
/// the minimum, the member with the smallest `(count, item)` pair is evicted.
pub trait Tracker<T> {
    fn observe(&mut self, item: &T, table: &FrequencyTable<T>);

    /// Tracked elements, ascending by value.
    fn snapshot(&self) -> Vec<T>;

    /// Tracked elements with their counts, highest count first.
    fn list(&self, table: &FrequencyTable<T>) -> Vec<Node<T>>;

    fn query(&self, item: &T) -> bool;

    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    /// Smallest count in the tracked set, `None` while it is empty.
    fn min_count(&self) -> Option<u64>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
}

/// Which minimum-maintenance scheme backs a tracker.
///
/// Both produce identical results for identical input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Strategy {
    /// Rescan every member for the minimum, O(k) per update.
    Linear,
    /// Binary min-heap keyed by count, O(log k) per update.
    #[default]
    Heap,
}

pub(crate) fn sort_by_count<T: Ord>(nodes: &mut [Node<T>]) {
    nodes.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.item.cmp(&b.item)));
}

/// A tracker picked at runtime through [`Strategy`].
pub enum Engine<T> {
    Linear(LinearTracker<T>),
    Heap(HeapTracker<T>),
}

impl<T: Ord + Clone + Hash> Engine<T> {
    pub fn new(strategy: Strategy, k: usize) -> Self {
        match strategy {
            Strategy::Linear => Engine::Linear(LinearTracker::new(k)),
            Strategy::Heap => Engine::Heap(HeapTracker::new(k)),
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Engine::Linear(_) => Strategy::Linear,
            Engine::Heap(_) => Strategy::Heap,
        }
    }
}

impl<T: Ord + Clone + Hash> Tracker<T> for Engine<T> {
    fn observe(&mut self, item: &T, table: &FrequencyTable<T>) {
        match self {
            Engine::Linear(t) => t.observe(item, table),
            Engine::Heap(t) => t.observe(item, table),
        }
    }

    fn snapshot(&self) -> Vec<T> {
        match self {
            Engine::Linear(t) => t.snapshot(),
            Engine::Heap(t) => t.snapshot(),
        }
    }

    fn list(&self, table: &FrequencyTable<T>) -> Vec<Node<T>> {
        match self {
            Engine::Linear(t) => t.list(table),
            Engine::Heap(t) => t.list(table),
        }
    }

    fn query(&self, item: &T) -> bool {
        match self {
            Engine::Linear(t) => t.query(item),
            Engine::Heap(t) => t.query(item),
        }
    }

    fn len(&self) -> usize {
        match self {
            Engine::Linear(t) => t.len(),
            Engine::Heap(t) => t.len(),
        }
    }

    fn capacity(&self) -> usize {
        match self {
            Engine::Linear(t) => t.capacity(),
            Engine::Heap(t) => t.capacity(),
        }
    }

    fn min_count(&self) -> Option<u64> {
        match self {
            Engine::Linear(t) => t.min_count(),
            Engine::Heap(t) => t.min_count(),
        }
    }
}
