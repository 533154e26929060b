//! Indexed binary min-heap with decrease-key
//!
//! A reverse index from key to heap slot gives O(1) position lookup, so
//! lowering the priority of an element already in the heap costs
//! O(log n) instead of a linear scan. A* relies on this to keep exactly one
//! frontier entry per vertex.
//!
//! Priorities only need [`Ord`]; tie-breaking is the priority type's job.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Errors raised by strict heap operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriorityQueueError {
    #[error("Element not found in priority queue: {0}")]
    ElementNotFound(String),

    #[error("Priority update would increase the key of {0}")]
    InvalidPriorityUpdate(String),
}

/// Outcome of a heap mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeapOperation<P> {
    /// New element inserted at `position`
    Inserted { position: usize },
    /// Existing element moved to a smaller priority
    Updated { old_priority: P, new_priority: P },
    /// Existing element kept its (already smaller or equal) priority
    Unchanged,
}

/// Indexed binary heap implementation
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<K, P> {
    heap: Vec<(K, P)>,
    positions: HashMap<K, usize>,
}

impl<K, P> IndexedPriorityQueue<K, P>
where
    K: Clone + Eq + Hash + Debug,
    P: Ord + Clone,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts `key`, or lowers its priority if it is already queued with a
    /// larger one
    pub fn push(&mut self, key: K, priority: P) -> HeapOperation<P> {
        match self.positions.get(&key).copied() {
            Some(position) if priority < self.heap[position].1 => {
                let old_priority = std::mem::replace(&mut self.heap[position].1, priority.clone());
                self.bubble_up(position);
                HeapOperation::Updated {
                    old_priority,
                    new_priority: priority,
                }
            }
            Some(_) => HeapOperation::Unchanged,
            None => {
                let position = self.heap.len();
                self.positions.insert(key.clone(), position);
                self.heap.push((key, priority));
                self.bubble_up(position);
                HeapOperation::Inserted { position }
            }
        }
    }

    /// Removes and returns the element with the smallest priority
    pub fn pop(&mut self) -> Option<(K, P)> {
        if self.heap.is_empty() {
            return None;
        }

        let last_idx = self.heap.len() - 1;
        self.swap_entries(0, last_idx);
        let (key, priority) = self.heap.pop()?;
        self.positions.remove(&key);

        if !self.heap.is_empty() {
            self.bubble_down(0);
        }

        Some((key, priority))
    }

    pub fn peek(&self) -> Option<(&K, &P)> {
        self.heap.first().map(|(key, priority)| (key, priority))
    }

    /// Strict decrease-key: fails if `key` is absent or the new priority is
    /// larger than the current one
    pub fn decrease_key(&mut self, key: &K, new_priority: P) -> Result<HeapOperation<P>, PriorityQueueError> {
        let position = self
            .positions
            .get(key)
            .copied()
            .ok_or_else(|| PriorityQueueError::ElementNotFound(format!("{key:?}")))?;

        if new_priority > self.heap[position].1 {
            return Err(PriorityQueueError::InvalidPriorityUpdate(format!("{key:?}")));
        }

        let old_priority = std::mem::replace(&mut self.heap[position].1, new_priority.clone());
        self.bubble_up(position);

        Ok(HeapOperation::Updated {
            old_priority,
            new_priority,
        })
    }

    /// Removes a specific element
    pub fn remove(&mut self, key: &K) -> Result<P, PriorityQueueError> {
        let position = self
            .positions
            .get(key)
            .copied()
            .ok_or_else(|| PriorityQueueError::ElementNotFound(format!("{key:?}")))?;

        let last_idx = self.heap.len() - 1;
        self.swap_entries(position, last_idx);
        let (removed_key, priority) = self
            .heap
            .pop()
            .ok_or_else(|| PriorityQueueError::ElementNotFound(format!("{key:?}")))?;
        self.positions.remove(&removed_key);

        if position < self.heap.len() {
            self.bubble_up(position);
            self.bubble_down(position);
        }

        Ok(priority)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Gets current priority of element
    pub fn priority(&self, key: &K) -> Option<&P> {
        self.positions.get(key).map(|&pos| &self.heap[pos].1)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
    }

    /// Checks the heap order and the reverse index
    pub fn validate(&self) -> bool {
        let ordered = (1..self.heap.len()).all(|child| self.heap[(child - 1) / 2].1 <= self.heap[child].1);
        let indexed = self.positions.len() == self.heap.len()
            && self
                .heap
                .iter()
                .enumerate()
                .all(|(pos, (key, _))| self.positions.get(key) == Some(&pos));
        ordered && indexed
    }

    fn bubble_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if self.heap[position].1 >= self.heap[parent].1 {
                break;
            }
            self.swap_entries(position, parent);
            position = parent;
        }
    }

    fn bubble_down(&mut self, mut position: usize) {
        let len = self.heap.len();

        loop {
            let mut smallest = position;
            let left = 2 * position + 1;
            let right = 2 * position + 2;

            if left < len && self.heap[left].1 < self.heap[smallest].1 {
                smallest = left;
            }
            if right < len && self.heap[right].1 < self.heap[smallest].1 {
                smallest = right;
            }
            if smallest == position {
                break;
            }

            self.swap_entries(position, smallest);
            position = smallest;
        }
    }

    fn swap_entries(&mut self, idx1: usize, idx2: usize) {
        if idx1 == idx2 {
            return;
        }
        self.heap.swap(idx1, idx2);
        if let Some(slot) = self.positions.get_mut(&self.heap[idx1].0) {
            *slot = idx1;
        }
        if let Some(slot) = self.positions.get_mut(&self.heap[idx2].0) {
            *slot = idx2;
        }
    }
}

impl<K, P> Default for IndexedPriorityQueue<K, P>
where
    K: Clone + Eq + Hash + Debug,
    P: Ord + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
