//! Frontier containers: the working set of discovered-but-unexpanded nodes.
//!
//! Two interchangeable expansion disciplines behind one capability contract:
//! a priority frontier (min extracted first) for the cost-guided searches,
//! and a FIFO frontier for breadth-first search. The engine touches nothing
//! beyond [`Frontier`]; container internals are opaque to it.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// Capability contract the expansion loop requires of a frontier.
///
/// `pop` order is the implementation's discipline: lowest item first for
/// [`PriorityFrontier`], insertion order for [`FifoFrontier`].
pub trait Frontier<T> {
    /// Add an item to the frontier.
    fn push(&mut self, item: T);

    /// Remove the next item per the frontier's discipline.
    fn pop(&mut self) -> Option<T>;

    /// Current frontier size.
    fn len(&self) -> usize;

    /// Whether the frontier is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// High-water mark of frontier size over the frontier's lifetime.
    fn high_water(&self) -> usize;
}

/// Min-first priority frontier.
///
/// `BinaryHeap` is a max-heap, so items are stored under `Reverse` to make
/// `pop` yield the minimum under `T: Ord` — the lowest priority value is
/// the most urgent. O(log k) push and pop.
#[derive(Debug)]
pub struct PriorityFrontier<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
    high_water: usize,
}

impl<T: Ord> PriorityFrontier<T> {
    /// Create a new empty priority frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            high_water: 0,
        }
    }
}

impl<T: Ord> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Frontier<T> for PriorityFrontier<T> {
    fn push(&mut self, item: T) {
        self.heap.push(Reverse(item));
        self.high_water = self.high_water.max(self.heap.len());
    }

    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(item)| item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// First-in-first-out frontier for breadth-first search.
///
/// Push at the tail, pop from the head, both O(1) amortized.
#[derive(Debug)]
pub struct FifoFrontier<T> {
    queue: VecDeque<T>,
    high_water: usize,
}

impl<T> FifoFrontier<T> {
    /// Create a new empty FIFO frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            high_water: 0,
        }
    }
}

impl<T> Default for FifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for FifoFrontier<T> {
    fn push(&mut self, item: T) {
        self.queue.push_back(item);
        self.high_water = self.high_water.max(self.queue.len());
    }

    fn pop(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}
