//! Search strategies for weighted 2D grids.
//!
//! This crate finds a path between the start and goal cells of a [`Grid`]
//! with one of five interchangeable strategies:
//!
//! - **Depth-first** search ([`DepthFirstSearch`])
//! - **Breadth-first** search ([`BreadthFirstSearch`])
//! - **Uniform-cost** search ([`UniformCostSearch`])
//! - **Greedy best-first** search ([`GreedyBestFirstSearch`])
//! - **A\*** search ([`AStarSearch`])
//!
//! Every strategy is a [`SearchConfig`] value driving one shared expansion
//! loop. A search returns an [`Outcome`]: either a [`Solution`] carrying
//! the goal node, its path and the explored set, or a [`NoSolution`] when
//! the frontier was exhausted.
//!
//! # Strategy table
//!
//! | Strategy | Frontier | Priority | Goal check | Explored set |
//! |---|---|---|---|---|
//! | DFS | stack | none | on expansion | first wins, marked on expansion |
//! | BFS | queue | none | on generation | first wins, marked on generation |
//! | UCS | priority | path cost | on expansion | cheapest wins |
//! | GBFS | priority | heuristic | on expansion | cheapest wins |
//! | A* | priority | path cost + heuristic | on expansion | cheapest wins |
//!
//! Only UCS and A* guarantee a minimum-cost path. BFS guarantees the
//! minimum number of steps, which is the minimum cost only when every cell
//! costs the same.

mod algorithm;
mod astar;
mod bfs;
mod config;
mod dfs;
mod distance;
mod engine;
mod explored;
mod frontier;
mod gbfs;
mod node;
mod solution;
mod traits;
mod ucs;

#[cfg(test)]
mod testgrid;

pub use algorithm::{Algorithm, ParseAlgorithmError, SearchAlgorithm};
pub use astar::AStarSearch;
pub use bfs::{BFS_PREFERRED_ACTION, BreadthFirstSearch};
pub use config::{ActionOrder, GoalCheck, Heuristic, Marking, Priority, SearchConfig};
pub use dfs::DepthFirstSearch;
pub use distance::manhattan;
pub use engine::search;
pub use explored::{ExploredSet, Replace};
pub use frontier::{Frontier, FrontierKind};
pub use gbfs::GreedyBestFirstSearch;
pub use node::{Node, NodeId, SearchTree};
pub use solution::{NoSolution, Outcome, SearchStats, Solution, Step};
pub use traits::Grid;
pub use ucs::UniformCostSearch;

pub use pathfinder_core::{Action, Cost, Point};
