//! The expansion loop shared by every strategy.

use pathfinder_core::{Action, Point};

use crate::config::{GoalCheck, Marking, SearchConfig};
use crate::explored::ExploredSet;
use crate::frontier::Frontier;
use crate::node::{NodeId, SearchTree};
use crate::solution::{NoSolution, Outcome, SearchStats, Solution};
use crate::traits::Grid;

/// Search `grid` from its start to its end with the strategy described by
/// `config`.
///
/// Runs to completion: the loop only stops when the goal is reached or the
/// frontier is exhausted. With non-negative costs on a finite grid this
/// always terminates.
pub fn search<G: Grid + ?Sized>(grid: &G, config: &SearchConfig) -> Outcome {
    let start = grid.start();
    let goal = grid.end();
    log::debug!(
        "search {} -> {} ({:?} frontier, {:?} priority)",
        start,
        goal,
        config.frontier,
        config.priority
    );

    let mut tree = SearchTree::new();
    let mut explored = ExploredSet::new(config.replace);
    let mut frontier = Frontier::new(config.frontier);
    let mut stats = SearchStats::default();

    let root = tree.push_root(start);
    if config.marking == Marking::OnGeneration {
        explored.record(start, root, 0);
    }
    // Generation-time goal checks never see the root.
    if config.goal_check == GoalCheck::OnGeneration && start == goal {
        return found(tree, root, explored, stats);
    }
    frontier.add(root, config.priority_of(0, start, goal));
    stats.max_frontier = 1;

    let mut nbuf: Vec<(Action, Point)> = Vec::with_capacity(4);

    while let Some(id) = frontier.pop() {
        let (state, cost) = {
            let node = &tree[id];
            (node.state(), node.cost())
        };

        match config.marking {
            Marking::OnExpansion => {
                if !explored.record(state, id, cost) {
                    stats.skipped += 1;
                    continue;
                }
            }
            Marking::OnGeneration => {
                // Lazy deletion: a cheaper node was admitted after this one.
                if explored.node(state) != Some(id) {
                    stats.skipped += 1;
                    continue;
                }
            }
        }

        if config.goal_check == GoalCheck::OnExpansion && state == goal {
            return found(tree, id, explored, stats);
        }

        stats.expanded += 1;
        log::trace!("expand {}", tree[id].label());

        nbuf.clear();
        grid.neighbors(state, &mut nbuf);
        config.order.apply(&mut nbuf);

        for &(action, child) in nbuf.iter() {
            let child_cost = cost.saturating_add(grid.cost(child));
            if !explored.admits(child, child_cost) {
                continue;
            }
            let cid = tree.push_child(id, action, child, child_cost);
            stats.generated += 1;
            if config.marking == Marking::OnGeneration {
                explored.record(child, cid, child_cost);
            }
            if config.goal_check == GoalCheck::OnGeneration && child == goal {
                return found(tree, cid, explored, stats);
            }
            frontier.add(cid, config.priority_of(child_cost, child, goal));
        }
        stats.max_frontier = stats.max_frontier.max(frontier.len());
    }

    log::debug!(
        "no path: frontier exhausted after {} expansions, {} states explored",
        stats.expanded,
        explored.len()
    );
    Outcome::NotFound(NoSolution::new(explored, stats))
}

fn found(
    tree: SearchTree,
    goal: NodeId,
    explored: ExploredSet,
    stats: SearchStats,
) -> Outcome {
    let solution = Solution::new(tree, goal, explored, stats);
    log::debug!(
        "path found: cost {}, {} steps, {} expansions, {} states explored",
        solution.cost(),
        solution.len(),
        stats.expanded,
        solution.explored().len()
    );
    Outcome::Found(solution)
}
