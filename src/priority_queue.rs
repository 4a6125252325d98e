use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;
use ahash::RandomState;

// Positions are 1-based: heap[0] is an unused sentinel, the root lives at 1.
const ROOT: usize = 1;
const SENTINEL: (u64, usize) = (0, usize::MAX);

/// A binary min-heap of tracked items keyed by `(count, item)`.
///
/// The `items` index maps each item to its heap position so membership
/// checks and count updates avoid scanning the heap.
pub(crate) struct TopKQueue<T> {
    items: HashMap<T, usize, RandomState>,  // item -> heap position
    heap: Vec<(u64, usize)>,  // (count, item_index)
    item_store: Vec<T>,  // Store actual items here
    free_slots: Vec<usize>,  // Track free slots in item_store
    capacity: usize,
}

impl<T: Ord + Clone + Hash> TopKQueue<T> {
    pub(crate) fn with_capacity_and_hasher(capacity: usize, hasher: RandomState) -> Self {
        let mut heap = Vec::with_capacity(capacity + 1);
        heap.push(SENTINEL);
        Self {
            items: HashMap::with_capacity_and_hasher(capacity, hasher),
            heap,
            item_store: Vec::with_capacity(capacity),
            free_slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len() - 1
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.contains_key(item)
    }

    /// The root entry, i.e. the next eviction victim.
    pub(crate) fn peek_min(&self) -> Option<(&T, u64)> {
        self.heap
            .get(ROOT)
            .map(|&(count, item_idx)| (&self.item_store[item_idx], count))
    }

    /// Inserts an item that is not yet tracked. The caller guarantees there is room.
    pub(crate) fn admit(&mut self, item: T, count: u64) {
        debug_assert!(!self.items.contains_key(&item));
        debug_assert!(self.len() < self.capacity);

        let item_idx = if let Some(idx) = self.free_slots.pop() {
            self.item_store[idx] = item.clone();
            idx
        } else {
            self.item_store.push(item.clone());
            self.item_store.len() - 1
        };

        let pos = self.heap.len();
        self.heap.push((count, item_idx));
        self.items.insert(item, pos);
        self.sift_up(pos);
    }

    /// Removes the root, moving the last entry into its place and sifting it down.
    pub(crate) fn pop_min(&mut self) -> Option<(T, u64)> {
        if self.len() == 0 {
            return None;
        }

        let (count, item_idx) = self.heap[ROOT];
        let last = self.heap.len() - 1;
        self.swap_nodes(ROOT, last);
        self.heap.pop();

        let item = self.item_store[item_idx].clone();
        self.items.remove(&item);
        self.free_slots.push(item_idx);

        if self.len() > 1 {
            self.sift_down(ROOT);
        }
        Some((item, count))
    }

    /// Drops the current minimum and admits `item` in its place, returning the evicted entry.
    pub(crate) fn evict_then_admit(&mut self, item: T, count: u64) -> Option<(T, u64)> {
        let evicted = self.pop_min();
        self.admit(item, count);
        evicted
    }

    /// Re-keys a tracked item. Returns false when the item is not tracked.
    pub(crate) fn update<Q>(&mut self, item: &Q, count: u64) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&pos) = self.items.get(item) else {
            return false;
        };
        let old_count = self.heap[pos].0;
        if count == old_count {
            return true;
        }

        self.heap[pos].0 = count;
        if count > old_count {
            self.sift_down(pos);
        } else {
            self.sift_up(pos);
        }
        true
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&T, u64)> {
        self.heap[ROOT..]
            .iter()
            .map(|&(count, item_idx)| (&self.item_store[item_idx], count))
    }

    fn parent(i: usize) -> usize { i >> 1 }
    fn left(i: usize) -> usize { 2 * i }
    fn right(i: usize) -> usize { 2 * i + 1 }

    fn key_cmp(&self, i: usize, j: usize) -> Ordering {
        let (count_i, idx_i) = self.heap[i];
        let (count_j, idx_j) = self.heap[j];
        count_i
            .cmp(&count_j)
            .then_with(|| self.item_store[idx_i].cmp(&self.item_store[idx_j]))
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.key_cmp(i, j) == Ordering::Less
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > ROOT {
            let parent = Self::parent(pos);
            if self.less(pos, parent) {
                self.swap_nodes(parent, pos);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let last = self.heap.len() - 1;
        loop {
            let left = Self::left(pos);
            let right = Self::right(pos);
            if left > last {
                break;
            }

            // keys are unique, so the children never compare equal
            let child = if right <= last && self.less(right, left) { right } else { left };
            if !self.less(child, pos) {
                break;
            }

            self.swap_nodes(pos, child);
            pos = child;
        }
    }

    fn swap_nodes(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        let (_, item_idx_i) = self.heap[i];
        let (_, item_idx_j) = self.heap[j];

        let item_i = &self.item_store[item_idx_i];
        let item_j = &self.item_store[item_idx_j];

        if let Some(pos_i) = self.items.get_mut(item_i) {
            *pos_i = i;
        }
        if let Some(pos_j) = self.items.get_mut(item_j) {
            *pos_j = j;
        }
    }
}
