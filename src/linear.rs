use std::hash::Hash;

use log::{debug, trace};

use crate::frequency::FrequencyTable;
use crate::tracker::{sort_by_count, Node, Tracker};

/// Tracker that keeps its members in a plain vector and rescans it for the
/// minimum after every observation.
pub struct LinearTracker<T> {
    members: Vec<T>,
    min_count: Option<u64>,
    capacity: usize,
}

impl<T> LinearTracker<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
            min_count: None,
            capacity,
        }
    }
}

impl<T: Ord + Clone + Hash> LinearTracker<T> {
    /// Position of the member with the smallest `(count, item)` pair.
    fn min_position(&self, table: &FrequencyTable<T>) -> Option<usize> {
        self.members
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| table.get(*a).cmp(&table.get(*b)).then_with(|| a.cmp(b)))
            .map(|(pos, _)| pos)
    }
}

impl<T: Ord + Clone + Hash> Tracker<T> for LinearTracker<T> {
    fn observe(&mut self, item: &T, table: &FrequencyTable<T>) {
        let count = table.get(item);
        trace!("observe count={} tracked={}", count, self.members.len());

        if self.members.contains(item) {
            // count lives in the table, nothing to move
        } else if self.members.len() < self.capacity {
            self.members.push(item.clone());
            debug!("admitted with count {} ({}/{})", count, self.members.len(), self.capacity);
        } else if self.min_count.is_some_and(|min| count > min) {
            if let Some(pos) = self.min_position(table) {
                self.members.swap_remove(pos);
                self.members.push(item.clone());
                debug!("evicted a member at count {:?} for a newcomer at {}", self.min_count, count);
            }
        }

        self.min_count = self.min_position(table).map(|pos| table.get(&self.members[pos]));
    }

    fn snapshot(&self) -> Vec<T> {
        let mut items = self.members.clone();
        items.sort_unstable();
        items
    }

    fn list(&self, table: &FrequencyTable<T>) -> Vec<Node<T>> {
        let mut nodes: Vec<_> = self
            .members
            .iter()
            .map(|item| Node { item: item.clone(), count: table.get(item) })
            .collect();
        sort_by_count(&mut nodes);
        nodes
    }

    fn query(&self, item: &T) -> bool {
        self.members.contains(item)
    }

    fn len(&self) -> usize {
        self.members.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn min_count(&self) -> Option<u64> {
        self.min_count
    }
}
