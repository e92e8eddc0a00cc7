use std::fmt;
use std::str::FromStr;

use crate::astar::AStarSearch;
use crate::bfs::BreadthFirstSearch;
use crate::config::SearchConfig;
use crate::dfs::DepthFirstSearch;
use crate::engine;
use crate::gbfs::GreedyBestFirstSearch;
use crate::solution::Outcome;
use crate::traits::Grid;
use crate::ucs::UniformCostSearch;

/// A search strategy: a [`SearchConfig`] applied to any [`Grid`].
pub trait SearchAlgorithm {
    /// Configuration driving the shared expansion loop.
    fn config(&self) -> SearchConfig;

    /// Search `grid` from its start to its end.
    fn search<G: Grid + ?Sized>(&self, grid: &G) -> Outcome {
        engine::search(grid, &self.config())
    }
}

impl SearchAlgorithm for SearchConfig {
    fn config(&self) -> SearchConfig {
        *self
    }
}

/// The five built-in strategies, selectable at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Dfs,
    Bfs,
    Ucs,
    Gbfs,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Ucs,
        Algorithm::Gbfs,
        Algorithm::AStar,
    ];

    /// Short name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Dfs => "dfs",
            Algorithm::Bfs => "bfs",
            Algorithm::Ucs => "ucs",
            Algorithm::Gbfs => "gbfs",
            Algorithm::AStar => "astar",
        }
    }

    /// Whether the strategy always returns a cheapest path.
    pub const fn is_optimal(self) -> bool {
        matches!(self, Algorithm::Ucs | Algorithm::AStar)
    }
}

impl SearchAlgorithm for Algorithm {
    fn config(&self) -> SearchConfig {
        match self {
            Algorithm::Dfs => DepthFirstSearch.config(),
            Algorithm::Bfs => BreadthFirstSearch.config(),
            Algorithm::Ucs => UniformCostSearch.config(),
            Algorithm::Gbfs => GreedyBestFirstSearch.config(),
            Algorithm::AStar => AStarSearch.config(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "a*" | "a-star" => return Ok(Algorithm::AStar),
            _ => {}
        }
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == lower)
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}

/// Returned when a string names no known strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown search algorithm \u{201c}{}\u{201d} (expected one of dfs, bfs, ucs, gbfs, astar)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgrid::{TestGrid, arb_grid};
    use pathfinder_core::Point;
    use proptest::prelude::*;

    #[test]
    fn start_equals_end() {
        let grid = TestGrid::open(3, 3, Point::new(1, 1), Point::new(1, 1));
        for algo in Algorithm::ALL {
            let sol = algo.search(&grid).into_solution().unwrap();
            assert_eq!(sol.cost(), 0, "{algo}");
            assert_eq!(sol.states(), vec![Point::new(1, 1)], "{algo}");
            assert!(sol.is_empty(), "{algo}");
        }
    }

    #[test]
    fn walled_off_goal() {
        let grid = TestGrid::parse(
            "\
A.#..
..#..
###.B",
        );
        for algo in Algorithm::ALL {
            let outcome = algo.search(&grid);
            assert!(!outcome.is_found(), "{algo}");
            assert!(outcome.explored().contains(Point::new(0, 0)), "{algo}");
            assert!(!outcome.explored().contains(Point::new(4, 2)), "{algo}");
        }
    }

    #[test]
    fn three_by_three_scenario() {
        let grid = TestGrid::open(3, 3, Point::new(0, 0), Point::new(2, 2));
        let bfs = Algorithm::Bfs.search(&grid).into_solution().unwrap();
        let ucs = Algorithm::Ucs.search(&grid).into_solution().unwrap();
        let astar = Algorithm::AStar.search(&grid).into_solution().unwrap();
        let dfs = Algorithm::Dfs.search(&grid).into_solution().unwrap();

        assert_eq!((bfs.len(), bfs.cost()), (4, 4));
        assert_eq!((ucs.len(), ucs.cost()), (4, 4));
        assert_eq!(astar.cost(), 4);
        assert!(astar.explored().len() <= ucs.explored().len());
        assert!(dfs.cost() >= 4);
        assert!(grid.is_valid_path(&dfs.states()));
    }

    #[test]
    fn runs_are_deterministic() {
        let grid = TestGrid::parse(
            "\
A..3....
.#.#.##.
.#...#2.
.####.#.
......#B",
        );
        for algo in Algorithm::ALL {
            let a = algo.search(&grid);
            let b = algo.search(&grid);
            assert_eq!(a.explored().len(), b.explored().len(), "{algo}");
            assert_eq!(a.stats(), b.stats(), "{algo}");
            assert_eq!(
                a.solution().map(|s| s.path()),
                b.solution().map(|s| s.path()),
                "{algo}"
            );
        }
    }

    #[test]
    fn parse_names() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.to_string().parse::<Algorithm>(), Ok(algo));
        }
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("BFS".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        let err = "dijkstra".parse::<Algorithm>().unwrap_err();
        assert!(err.to_string().contains("dijkstra"));
    }

    #[test]
    fn only_ucs_and_astar_are_optimal() {
        let optimal: Vec<Algorithm> = Algorithm::ALL.into_iter().filter(|a| a.is_optimal()).collect();
        assert_eq!(optimal, vec![Algorithm::Ucs, Algorithm::AStar]);
    }

    proptest! {
        #[test]
        fn paths_round_trip(grid in arb_grid(9)) {
            for algo in Algorithm::ALL {
                let outcome = algo.search(&grid);
                prop_assert_eq!(outcome.is_found(), grid.brute_force_cost().is_some());
                let Some(sol) = outcome.solution() else {
                    continue;
                };
                let states = sol.states();
                prop_assert_eq!(states.first(), Some(&grid.start()));
                prop_assert_eq!(states.last(), Some(&grid.end()));
                prop_assert!(grid.is_valid_path(&states));
                prop_assert_eq!(grid.path_cost(&states), sol.cost());
                prop_assert_eq!(sol.path().last().map(|s| s.cost), Some(sol.cost()));
            }
        }
    }
}
