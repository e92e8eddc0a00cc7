use pathfinder_core::Action;

use crate::algorithm::SearchAlgorithm;
use crate::config::{ActionOrder, GoalCheck, Marking, Priority, SearchConfig};
use crate::explored::Replace;
use crate::frontier::FrontierKind;

/// Action [`BreadthFirstSearch`] tries first from every node.
pub const BFS_PREFERRED_ACTION: Action = Action::Down;

/// Breadth-first search.
///
/// Explores nodes in the order they were discovered and tests the goal as
/// soon as a child is generated. Returns a path with the fewest steps; on
/// grids where cells have different costs this is not necessarily the
/// cheapest path. Use
/// `SearchConfig::bfs().with_goal_check(GoalCheck::OnExpansion)` for the
/// variant that tests the goal on expansion.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BreadthFirstSearch;

impl SearchConfig {
    /// Configuration of [`BreadthFirstSearch`].
    pub const fn bfs() -> Self {
        let mut c = Self::base(FrontierKind::Queue, Priority::None);
        c.goal_check = GoalCheck::OnGeneration;
        c.marking = Marking::OnGeneration;
        c.replace = Replace::Never;
        c.order = ActionOrder::Prefer(BFS_PREFERRED_ACTION);
        c
    }
}

impl SearchAlgorithm for BreadthFirstSearch {
    fn config(&self) -> SearchConfig {
        SearchConfig::bfs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgrid::{TestGrid, arb_grid};
    use crate::ucs::UniformCostSearch;
    use pathfinder_core::Point;
    use proptest::prelude::*;

    #[test]
    fn prefers_moving_down() {
        let grid = TestGrid::open(3, 3, Point::new(0, 0), Point::new(2, 2));
        let sol = BreadthFirstSearch.search(&grid).into_solution().unwrap();
        assert_eq!(
            sol.actions(),
            vec![Action::Down, Action::Down, Action::Right, Action::Right]
        );
        assert_eq!(sol.cost(), 4);
    }

    #[test]
    fn fewest_steps_is_not_cheapest() {
        let grid = TestGrid::parse(
            "\
A9B
...",
        );
        let bfs = BreadthFirstSearch.search(&grid).into_solution().unwrap();
        assert_eq!(bfs.len(), 2);
        assert_eq!(bfs.cost(), 10);

        let ucs = UniformCostSearch.search(&grid).into_solution().unwrap();
        assert_eq!(ucs.len(), 4);
        assert_eq!(ucs.cost(), 4);
    }

    #[test]
    fn expansion_check_variant_still_counts_steps() {
        let grid = TestGrid::parse(
            "\
A9B
...",
        );
        let config = SearchConfig::bfs().with_goal_check(GoalCheck::OnExpansion);
        let sol = config.search(&grid).into_solution().unwrap();
        assert_eq!(sol.len(), 2);
    }

    #[test]
    fn goal_found_at_generation_is_recorded() {
        let grid = TestGrid::open(2, 1, Point::new(0, 0), Point::new(1, 0));
        let outcome = BreadthFirstSearch.search(&grid);
        assert!(outcome.is_found());
        assert!(outcome.explored().contains(Point::new(1, 0)));
        assert_eq!(outcome.stats().expanded, 1);
    }

    proptest! {
        #[test]
        fn matches_ucs_on_uniform_cost(grid in arb_grid(1)) {
            let bfs = BreadthFirstSearch.search(&grid);
            let ucs = UniformCostSearch.search(&grid);
            prop_assert_eq!(bfs.cost(), ucs.cost());
            if let Some(sol) = bfs.solution() {
                prop_assert_eq!(sol.len() as u32, sol.cost());
            }
        }
    }
}
