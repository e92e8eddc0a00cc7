use crate::algorithm::SearchAlgorithm;
use crate::config::{ActionOrder, GoalCheck, Marking, Priority, SearchConfig};
use crate::explored::Replace;
use crate::frontier::FrontierKind;

/// Depth-first search.
///
/// Explores the most recently discovered node first. States are marked on
/// expansion and never revisited. Finds *a* path, not necessarily the
/// cheapest or the shortest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DepthFirstSearch;

impl SearchConfig {
    /// Configuration of [`DepthFirstSearch`].
    pub const fn dfs() -> Self {
        let mut c = Self::base(FrontierKind::Stack, Priority::None);
        c.goal_check = GoalCheck::OnExpansion;
        c.marking = Marking::OnExpansion;
        c.replace = Replace::Never;
        c.order = ActionOrder::AsGiven;
        c
    }
}

impl SearchAlgorithm for DepthFirstSearch {
    fn config(&self) -> SearchConfig {
        SearchConfig::dfs()
    }
}
