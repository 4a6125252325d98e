use std::hash::Hash;

use log::{debug, trace};

use crate::frequency::FrequencyTable;
use crate::priority_queue::TopKQueue;
use crate::tracker::{sort_by_count, Node, Tracker};

/// Tracker backed by a min-heap, so the eviction victim is always the root.
pub struct HeapTracker<T> {
    queue: TopKQueue<T>,
}

impl<T: Ord + Clone + Hash> HeapTracker<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: TopKQueue::with_capacity(capacity),
        }
    }
}

impl<T: Ord + Clone + Hash> Tracker<T> for HeapTracker<T> {
    fn observe(&mut self, item: &T, table: &FrequencyTable<T>) {
        let count = table.get(item);
        trace!("observe count={} tracked={}", count, self.queue.len());

        if self.queue.update(item, count) {
            return;
        }

        if self.queue.len() < self.queue.capacity() {
            self.queue.admit(item.clone(), count);
            debug!("admitted with count {} ({}/{})", count, self.queue.len(), self.queue.capacity());
        } else if self.min_count().is_some_and(|min| count > min) {
            if let Some((_, evicted)) = self.queue.evict_then_admit(item.clone(), count) {
                debug!("evicted a member at count {} for a newcomer at {}", evicted, count);
            }
        }
    }

    fn snapshot(&self) -> Vec<T> {
        let mut items: Vec<T> = self.queue.iter().map(|(item, _)| item.clone()).collect();
        items.sort_unstable();
        items
    }

    fn list(&self, _table: &FrequencyTable<T>) -> Vec<Node<T>> {
        let mut nodes: Vec<_> = self
            .queue
            .iter()
            .map(|(item, count)| Node { item: item.clone(), count })
            .collect();
        sort_by_count(&mut nodes);
        nodes
    }

    fn query(&self, item: &T) -> bool {
        self.queue.contains(item)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn capacity(&self) -> usize {
        self.queue.capacity()
    }

    fn min_count(&self) -> Option<u64> {
        self.queue.peek_min().map(|(_, count)| count)
    }
}
