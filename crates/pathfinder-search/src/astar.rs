use crate::algorithm::SearchAlgorithm;
use crate::config::{Priority, SearchConfig};
use crate::frontier::FrontierKind;

/// A\* search.
///
/// Expands nodes in order of path cost plus heuristic estimate. With the
/// default Manhattan heuristic and cells costing at least 1 the returned
/// path is the cheapest, and no more nodes are expanded than
/// [`UniformCostSearch`](crate::UniformCostSearch) would.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AStarSearch;

impl SearchConfig {
    /// Configuration of [`AStarSearch`].
    pub const fn astar() -> Self {
        Self::base(FrontierKind::Priority, Priority::PathCostPlusHeuristic)
    }
}

impl SearchAlgorithm for AStarSearch {
    fn config(&self) -> SearchConfig {
        SearchConfig::astar()
    }
}
