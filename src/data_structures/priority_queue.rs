use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-ordered wrapper around BinaryHeap for shortest path frontiers.
///
/// Entries are `(priority, vertex)` pairs; equal priorities pop in ascending
/// vertex order. The same vertex may be pushed several times, callers discard
/// stale entries on pop.
#[derive(Debug)]
pub struct BinaryHeapWrapper<V, P>
where
    V: Clone + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> Default for BinaryHeapWrapper<V, P>
where
    V: Clone + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> BinaryHeapWrapper<V, P>
where
    V: Clone + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Pushes a vertex with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }
}
