use std::cmp::Ordering;
use std::collections::BinaryHeap;

use trove_core::Coord;

/// A frontier entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// smallest `(priority, heuristic, seq)` first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) pos: Coord,
    /// Accumulated cost when pushed.
    pub(crate) cost: usize,
    priority: usize,
    heuristic: usize,
    seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: lower keys are "greater".
        (other.priority, other.heuristic, other.seq).cmp(&(
            self.priority,
            self.heuristic,
            self.seq,
        ))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority frontier that tolerates duplicate coordinates.
///
/// Callers discard stale pops with their own finalized set; no
/// decrease-key is offered.
#[derive(Debug, Default)]
pub(crate) struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl PriorityFrontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, pos: Coord, cost: usize, priority: usize, heuristic: usize) {
        self.heap.push(Entry {
            pos,
            cost,
            priority,
            heuristic,
            seq: self.seq,
        });
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }
}
