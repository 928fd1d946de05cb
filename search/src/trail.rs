//! Predecessor arena and path reconstruction.
//!
//! Every node discovered during a search is recorded as an arena entry
//! holding the node value and the index of the entry it was expanded from.
//! Entries are never mutated after creation and predecessors are always
//! chronologically earlier, so the entries form a tree rooted at the start
//! node — acyclic by construction, freed wholesale when the arena drops.

use std::cmp::Ordering;

use wayfind_kernel::cost::Cost;

/// Index of an entry within a [`Trail`].
pub type EntryId = usize;

#[derive(Debug)]
struct TrailEntry<N> {
    value: N,
    previous: Option<EntryId>,
}

/// The arena of discovered nodes for a single search invocation.
///
/// Owned exclusively by the invocation; nothing escapes it except the
/// [`Path`] produced by [`Trail::reconstruct`], which owns its values.
#[derive(Debug)]
pub struct Trail<N> {
    entries: Vec<TrailEntry<N>>,
}

impl<N> Trail<N> {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a discovered node and the entry it was expanded from
    /// (`None` for the start node). Returns the new entry's id.
    pub fn push(&mut self, value: N, previous: Option<EntryId>) -> EntryId {
        debug_assert!(
            previous.map_or(true, |p| p < self.entries.len()),
            "predecessor must already exist"
        );
        self.entries.push(TrailEntry { value, previous });
        self.entries.len() - 1
    }

    /// The node value recorded at `entry`.
    ///
    /// # Panics
    ///
    /// Panics if `entry` was not produced by this arena's `push`.
    #[must_use]
    pub fn value(&self, entry: EntryId) -> &N {
        &self.entries[entry].value
    }

    /// Number of entries recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Clone> Trail<N> {
    /// Reconstruct the start-to-goal path ending at `goal`.
    ///
    /// Walks `previous` links backward into a scratch buffer, then reverses
    /// it so the path reads forward from the start node to the goal node,
    /// both inclusive.
    #[must_use]
    pub fn reconstruct(&self, goal: EntryId) -> Path<N> {
        let mut nodes = Vec::new();
        let mut current = Some(goal);
        while let Some(entry) = current {
            nodes.push(self.entries[entry].value.clone());
            current = self.entries[entry].previous;
        }
        nodes.reverse();
        Path { nodes }
    }
}

impl<N> Default for Trail<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// An ordered, finite route from start to goal, inclusive.
///
/// Produced once per successful search; fully owned and independent of the
/// engine state it was reconstructed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<N> {
    nodes: Vec<N>,
}

impl<N> Path<N> {
    /// The route as a slice, start first.
    #[must_use]
    pub fn as_slice(&self) -> &[N] {
        &self.nodes
    }

    /// Number of nodes on the route (start and goal included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A path always contains at least the goal node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate the route forward.
    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }

    /// Consume the path into its node values.
    #[must_use]
    pub fn into_vec(self) -> Vec<N> {
        self.nodes
    }
}

impl<N> IntoIterator for Path<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a Path<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Priority-frontier item for the greedy heuristic search.
///
/// Ordered by priority under [`Cost::total_cmp`], ties broken by ascending
/// `sequence` (creation order) so extraction among equal priorities is
/// deterministic.
#[derive(Debug, Clone, Copy)]
pub struct GreedyItem<C: Cost> {
    /// Extraction priority: `heuristic(value)` at enqueue time.
    pub priority: C,
    /// Arena entry this item refers to.
    pub entry: EntryId,
    /// Global creation counter for tie-breaking.
    pub sequence: u64,
}

/// Priority-frontier item for A*.
///
/// Carries the accumulated path cost alongside the extraction priority
/// (`heuristic + cost`). Ordering matches [`GreedyItem`]: priority first,
/// creation order on ties.
#[derive(Debug, Clone, Copy)]
pub struct AstarItem<C: Cost> {
    /// Extraction priority: `heuristic(value) + cost` at enqueue time.
    pub priority: C,
    /// Accumulated cost of the path from the start node to this entry.
    pub cost: C,
    /// Arena entry this item refers to.
    pub entry: EntryId,
    /// Global creation counter for tie-breaking.
    pub sequence: u64,
}

macro_rules! impl_item_ord {
    ($item:ident) => {
        impl<C: Cost> PartialEq for $item<C> {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == Ordering::Equal
            }
        }

        impl<C: Cost> Eq for $item<C> {}

        impl<C: Cost> PartialOrd for $item<C> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<C: Cost> Ord for $item<C> {
            fn cmp(&self, other: &Self) -> Ordering {
                self.priority
                    .total_cmp(&other.priority)
                    .then(self.sequence.cmp(&other.sequence))
            }
        }
    };
}

impl_item_ord!(GreedyItem);
impl_item_ord!(AstarItem);
