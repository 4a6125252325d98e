use std::hash::Hash;

use log::info;

use crate::frequency::FrequencyTable;
use crate::tracker::{Engine, Node, Strategy, Tracker};

/// A source of elements pulled one at a time.
///
/// `None` signals exhaustion; every `Some` value is data, including zero or
/// empty values of the element type.
#[cfg_attr(test, mockall::automock)]
pub trait Producer<T> {
    fn pull(&mut self) -> Option<T>;
}

/// Adapts any iterator into a [`Producer`].
pub struct IterProducer<I>(I);

impl<I: Iterator> IterProducer<I> {
    pub fn new<S: IntoIterator<IntoIter = I>>(source: S) -> Self {
        IterProducer(source.into_iter())
    }
}

impl<I: Iterator> Producer<I::Item> for IterProducer<I> {
    fn pull(&mut self) -> Option<I::Item> {
        self.0.next()
    }
}

/// One run of the k-modes computation: a frequency table plus a tracker.
///
/// `add` is the unit of work; the count update and the tracker update
/// always happen together.
pub struct KModes<T> {
    table: FrequencyTable<T>,
    tracker: Engine<T>,
}

impl<T: Ord + Clone + Hash> KModes<T> {
    pub fn new(k: usize, strategy: Strategy) -> Self {
        Self {
            table: FrequencyTable::new(),
            tracker: Engine::new(strategy, k),
        }
    }

    pub fn add(&mut self, item: T) {
        self.table.increment(item.clone());
        self.tracker.observe(&item, &self.table);
    }

    /// Ingests everything from `producer` until it is exhausted.
    pub fn drain<P: Producer<T> + ?Sized>(&mut self, producer: &mut P) {
        while let Some(item) = producer.pull() {
            self.add(item);
        }
    }

    /// Total occurrences of `item` so far.
    pub fn count(&self, item: &T) -> u64 {
        self.table.get(item)
    }

    pub fn query(&self, item: &T) -> bool {
        self.tracker.query(item)
    }

    /// Tracked elements, ascending by value.
    pub fn snapshot(&self) -> Vec<T> {
        self.tracker.snapshot()
    }

    /// Tracked elements with their counts, highest first.
    pub fn list(&self) -> Vec<Node<T>> {
        self.tracker.list(&self.table)
    }

    pub fn len(&self) -> usize {
        self.tracker.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracker.is_empty()
    }

    pub fn k(&self) -> usize {
        self.tracker.capacity()
    }

    pub fn min_count(&self) -> Option<u64> {
        self.tracker.min_count()
    }

    pub fn strategy(&self) -> Strategy {
        self.tracker.strategy()
    }

    pub fn observed(&self) -> u64 {
        self.table.observed()
    }

    pub fn distinct(&self) -> usize {
        self.table.distinct()
    }

    fn finish(&self) -> Vec<T> {
        info!(
            "{:?} run done: {} elements, {} distinct, {} tracked (k={})",
            self.strategy(),
            self.observed(),
            self.distinct(),
            self.len(),
            self.k()
        );
        self.snapshot()
    }
}

/// The `k` most frequent elements of `items`, ascending by value.
pub fn k_modes_array<T: Ord + Clone + Hash>(items: &[T], k: usize, strategy: Strategy) -> Vec<T> {
    let mut modes = KModes::new(k, strategy);
    for item in items {
        modes.add(item.clone());
    }
    modes.finish()
}

/// The `k` most frequent elements pulled from `producer` before it ran dry.
pub fn k_modes_stream<T, P>(producer: &mut P, k: usize, strategy: Strategy) -> Vec<T>
where
    T: Ord + Clone + Hash,
    P: Producer<T> + ?Sized,
{
    let mut modes = KModes::new(k, strategy);
    modes.drain(producer);
    modes.finish()
}
