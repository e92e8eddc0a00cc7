use crate::algorithm::SearchAlgorithm;
use crate::config::{Priority, SearchConfig};
use crate::frontier::FrontierKind;

/// Greedy best-first search.
///
/// Expands the node that looks closest to the goal according to the
/// heuristic alone. Path costs are still tracked so that a state reached
/// more cheaply is admitted again, but they do not drive the order, and
/// the returned path may be far from the cheapest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GreedyBestFirstSearch;

impl SearchConfig {
    /// Configuration of [`GreedyBestFirstSearch`].
    pub const fn gbfs() -> Self {
        Self::base(FrontierKind::Priority, Priority::Heuristic)
    }
}

impl SearchAlgorithm for GreedyBestFirstSearch {
    fn config(&self) -> SearchConfig {
        SearchConfig::gbfs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::AStarSearch;
    use crate::testgrid::TestGrid;
    use pathfinder_core::{Action, Point};

    const TRAP: &str = "\
A99B
....";

    #[test]
    fn heads_straight_for_the_goal() {
        let grid = TestGrid::parse(TRAP);
        let outcome = GreedyBestFirstSearch.search(&grid);
        let sol = outcome.solution().unwrap();
        assert_eq!(sol.actions(), vec![Action::Right; 3]);
        assert_eq!(sol.cost(), 19);
        assert_eq!(outcome.stats().expanded, 3);
    }

    #[test]
    fn can_be_beaten_by_astar() {
        let grid = TestGrid::parse(TRAP);
        let greedy = GreedyBestFirstSearch.search(&grid).cost().unwrap();
        let astar = AStarSearch.search(&grid).cost().unwrap();
        assert_eq!(astar, 5);
        assert!(greedy > astar);
    }

    #[test]
    fn readmits_state_reached_more_cheaply() {
        // The goal is unreachable, so the whole grid is explored. The greedy
        // order walks through the 9 first; the bottom row later lowers the
        // recorded costs of (1,1), (2,1) and (2,0).
        let grid = TestGrid::from_cells(
            3,
            2,
            vec![Some(1), Some(9), Some(1), Some(1), Some(1), Some(1)],
            Point::new(0, 0),
            Point::new(9, 0),
        );
        let outcome = GreedyBestFirstSearch.search(&grid);
        assert!(!outcome.is_found());
        let explored = outcome.explored();
        assert_eq!(explored.cost(Point::new(1, 0)), Some(9));
        assert_eq!(explored.cost(Point::new(1, 1)), Some(2));
        assert_eq!(explored.cost(Point::new(2, 1)), Some(3));
        assert_eq!(explored.cost(Point::new(2, 0)), Some(4));
        assert_eq!(outcome.stats().expanded, 9);
    }
}
