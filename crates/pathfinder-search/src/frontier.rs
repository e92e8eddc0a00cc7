use std::collections::{BinaryHeap, VecDeque};

use pathfinder_core::Cost;

use crate::node::NodeId;

/// Removal discipline of a [`Frontier`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FrontierKind {
    /// Last in, first out.
    Stack,
    /// First in, first out.
    Queue,
    /// Smallest priority first, ties in insertion order.
    Priority,
}

/// Priority-queue entry, ordered by `priority` then insertion sequence.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    priority: Cost,
    seq: u64,
    id: NodeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority, then
        // oldest entry, first.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Clone)]
enum Inner {
    Stack(Vec<NodeId>),
    Queue(VecDeque<NodeId>),
    Priority { heap: BinaryHeap<Entry>, seq: u64 },
}

/// The set of discovered but not yet expanded nodes.
///
/// The frontier may hold several entries for the same state; deciding
/// which of them is still relevant is left to the explored set.
#[derive(Clone)]
pub struct Frontier {
    inner: Inner,
}

impl Frontier {
    /// Create an empty frontier with the given discipline.
    pub fn new(kind: FrontierKind) -> Self {
        let inner = match kind {
            FrontierKind::Stack => Inner::Stack(Vec::new()),
            FrontierKind::Queue => Inner::Queue(VecDeque::new()),
            FrontierKind::Priority => Inner::Priority {
                heap: BinaryHeap::new(),
                seq: 0,
            },
        };
        Self { inner }
    }

    /// Discipline of this frontier.
    pub fn kind(&self) -> FrontierKind {
        match self.inner {
            Inner::Stack(_) => FrontierKind::Stack,
            Inner::Queue(_) => FrontierKind::Queue,
            Inner::Priority { .. } => FrontierKind::Priority,
        }
    }

    /// Add a node. `priority` is ignored by stacks and queues.
    pub fn add(&mut self, id: NodeId, priority: Cost) {
        match &mut self.inner {
            Inner::Stack(v) => v.push(id),
            Inner::Queue(q) => q.push_back(id),
            Inner::Priority { heap, seq } => {
                heap.push(Entry {
                    priority,
                    seq: *seq,
                    id,
                });
                *seq += 1;
            }
        }
    }

    /// Remove the next node according to the discipline.
    pub fn pop(&mut self) -> Option<NodeId> {
        match &mut self.inner {
            Inner::Stack(v) => v.pop(),
            Inner::Queue(q) => q.pop_front(),
            Inner::Priority { heap, .. } => heap.pop().map(|e| e.id),
        }
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        match &self.inner {
            Inner::Stack(v) => v.len(),
            Inner::Queue(q) => q.len(),
            Inner::Priority { heap, .. } => heap.len(),
        }
    }

    /// Whether no entry is pending.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::SearchTree;
    use pathfinder_core::Point;

    fn ids(n: usize) -> Vec<NodeId> {
        let mut tree = SearchTree::new();
        (0..n).map(|i| tree.push_root(Point::new(i as i32, 0))).collect()
    }

    fn drain(f: &mut Frontier) -> Vec<usize> {
        std::iter::from_fn(|| f.pop()).map(NodeId::index).collect()
    }

    #[test]
    fn stack_is_lifo() {
        let ids = ids(3);
        let mut f = Frontier::new(FrontierKind::Stack);
        for &id in &ids {
            f.add(id, 0);
        }
        assert_eq!(f.len(), 3);
        assert_eq!(drain(&mut f), vec![2, 1, 0]);
        assert!(f.is_empty());
    }

    #[test]
    fn queue_is_fifo() {
        let ids = ids(3);
        let mut f = Frontier::new(FrontierKind::Queue);
        for &id in &ids {
            f.add(id, 0);
        }
        assert_eq!(drain(&mut f), vec![0, 1, 2]);
    }

    #[test]
    fn priority_pops_smallest_first() {
        let ids = ids(4);
        let mut f = Frontier::new(FrontierKind::Priority);
        f.add(ids[0], 5);
        f.add(ids[1], 1);
        f.add(ids[2], 9);
        f.add(ids[3], 3);
        assert_eq!(drain(&mut f), vec![1, 3, 0, 2]);
    }

    #[test]
    fn priority_ties_keep_insertion_order() {
        let ids = ids(5);
        let mut f = Frontier::new(FrontierKind::Priority);
        for &id in &ids {
            f.add(id, 2);
        }
        f.add(ids[4], 1);
        assert_eq!(drain(&mut f), vec![4, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn kind_round_trips() {
        for kind in [FrontierKind::Stack, FrontierKind::Queue, FrontierKind::Priority] {
            assert_eq!(Frontier::new(kind).kind(), kind);
        }
    }
}
