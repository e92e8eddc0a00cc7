use std::collections::HashMap;

use pathfinder_core::{Cost, Point};

use crate::node::NodeId;

/// When a state already in the [`ExploredSet`] may be recorded again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Replace {
    /// The first node recorded for a state is kept forever.
    Never,
    /// A node replaces the recorded one when its cost is strictly lower.
    IfCheaper,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Best {
    node: NodeId,
    cost: Cost,
}

/// Best node recorded so far for every state admitted by a search.
#[derive(Debug, Clone)]
pub struct ExploredSet {
    best: HashMap<Point, Best>,
    replace: Replace,
}

impl ExploredSet {
    /// Create an empty set with the given replacement rule.
    pub fn new(replace: Replace) -> Self {
        Self {
            best: HashMap::new(),
            replace,
        }
    }

    /// Replacement rule of this set.
    pub fn replace(&self) -> Replace {
        self.replace
    }

    /// Whether reaching `state` at `cost` should be admitted.
    pub fn admits(&self, state: Point, cost: Cost) -> bool {
        match (self.best.get(&state), self.replace) {
            (None, _) => true,
            (Some(_), Replace::Never) => false,
            (Some(b), Replace::IfCheaper) => cost < b.cost,
        }
    }

    /// Record `node` as the best node for `state` if [`admits`](Self::admits)
    /// allows it. Returns whether the node was recorded.
    pub fn record(&mut self, state: Point, node: NodeId, cost: Cost) -> bool {
        if !self.admits(state, cost) {
            return false;
        }
        self.best.insert(state, Best { node, cost });
        true
    }

    /// Whether `state` has been recorded.
    pub fn contains(&self, state: Point) -> bool {
        self.best.contains_key(&state)
    }

    /// Best node recorded for `state`.
    pub fn node(&self, state: Point) -> Option<NodeId> {
        self.best.get(&state).map(|b| b.node)
    }

    /// Lowest cost recorded for `state`.
    pub fn cost(&self, state: Point) -> Option<Cost> {
        self.best.get(&state).map(|b| b.cost)
    }

    /// Number of recorded states.
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Whether no state has been recorded.
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Recorded states in unspecified order.
    pub fn states(&self) -> impl Iterator<Item = Point> + '_ {
        self.best.keys().copied()
    }

    /// Recorded states in row-major order.
    pub fn sorted_states(&self) -> Vec<Point> {
        let mut states: Vec<Point> = self.states().collect();
        states.sort_unstable();
        states
    }
}
