use pathfinder_core::{Action, Cost, Point};

use crate::explored::ExploredSet;
use crate::node::{Node, NodeId, SearchTree};

/// One state on a reconstructed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// Action that led here, `None` for the start state.
    pub action: Option<Action>,
    pub state: Point,
    /// Accumulated cost up to and including this state.
    pub cost: Cost,
}

/// Counters collected during a search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes whose neighbors were enumerated.
    pub expanded: usize,
    /// Child nodes created (the root is not counted).
    pub generated: usize,
    /// Popped entries discarded because their state had already been
    /// expanded or recorded with a cheaper node.
    pub skipped: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

/// A path from the start to the goal.
#[derive(Debug, Clone)]
pub struct Solution {
    tree: SearchTree,
    goal: NodeId,
    explored: ExploredSet,
    stats: SearchStats,
}

impl Solution {
    pub(crate) fn new(
        tree: SearchTree,
        goal: NodeId,
        explored: ExploredSet,
        stats: SearchStats,
    ) -> Self {
        Self {
            tree,
            goal,
            explored,
            stats,
        }
    }

    /// The goal node.
    pub fn node(&self) -> &Node {
        &self.tree[self.goal]
    }

    /// Total path cost.
    pub fn cost(&self) -> Cost {
        self.node().cost()
    }

    /// Number of moves on the path.
    pub fn len(&self) -> usize {
        self.node().depth() as usize
    }

    /// Whether the path has no move (start == goal).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Start-to-goal path, start included.
    pub fn path(&self) -> Vec<Step> {
        self.tree.path_to(self.goal)
    }

    /// Start-to-goal states.
    pub fn states(&self) -> Vec<Point> {
        self.path().into_iter().map(|s| s.state).collect()
    }

    /// Start-to-goal actions.
    pub fn actions(&self) -> Vec<Action> {
        self.path().into_iter().filter_map(|s| s.action).collect()
    }

    /// States admitted during the search.
    pub fn explored(&self) -> &ExploredSet {
        &self.explored
    }

    /// Every node created during the search.
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// Counters of the run.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// The frontier was exhausted before the goal was reached.
#[derive(Debug, Clone)]
pub struct NoSolution {
    explored: ExploredSet,
    stats: SearchStats,
}

impl NoSolution {
    pub(crate) fn new(explored: ExploredSet, stats: SearchStats) -> Self {
        Self { explored, stats }
    }

    /// States admitted during the search.
    pub fn explored(&self) -> &ExploredSet {
        &self.explored
    }

    /// Counters of the run.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub enum Outcome {
    Found(Solution),
    NotFound(NoSolution),
}

impl Outcome {
    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    /// The solution, if a path was found.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Found(s) => Some(s),
            Outcome::NotFound(_) => None,
        }
    }

    /// Consume the outcome, keeping only the solution.
    pub fn into_solution(self) -> Option<Solution> {
        match self {
            Outcome::Found(s) => Some(s),
            Outcome::NotFound(_) => None,
        }
    }

    /// Path cost, if a path was found.
    pub fn cost(&self) -> Option<Cost> {
        self.solution().map(Solution::cost)
    }

    /// States admitted during the search.
    pub fn explored(&self) -> &ExploredSet {
        match self {
            Outcome::Found(s) => s.explored(),
            Outcome::NotFound(n) => n.explored(),
        }
    }

    /// Counters of the run.
    pub fn stats(&self) -> SearchStats {
        match self {
            Outcome::Found(s) => s.stats(),
            Outcome::NotFound(n) => n.stats(),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn step_round_trip() {
        let step = Step {
            action: Some(Action::Down),
            state: Point::new(3, 7),
            cost: 42,
        };
        let json = serde_json::to_string(&step).unwrap();
        let back: Step = serde_json::from_str(&json).unwrap();
        assert_eq!(step, back);
    }

    #[test]
    fn stats_round_trip() {
        let stats = SearchStats {
            expanded: 4,
            generated: 9,
            skipped: 1,
            max_frontier: 5,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: SearchStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, back);
    }
}
