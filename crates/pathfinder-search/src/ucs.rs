use crate::algorithm::SearchAlgorithm;
use crate::config::{Priority, SearchConfig};
use crate::frontier::FrontierKind;

/// Uniform-cost search.
///
/// Expands nodes in order of accumulated cost and tests the goal on
/// expansion, so the returned path is the cheapest one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UniformCostSearch;

impl SearchConfig {
    /// Configuration of [`UniformCostSearch`].
    pub const fn ucs() -> Self {
        Self::base(FrontierKind::Priority, Priority::PathCost)
    }
}

impl SearchAlgorithm for UniformCostSearch {
    fn config(&self) -> SearchConfig {
        SearchConfig::ucs()
    }
}
