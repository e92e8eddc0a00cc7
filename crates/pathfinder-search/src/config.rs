use pathfinder_core::{Action, Cost, Point};

use crate::distance;
use crate::explored::Replace;
use crate::frontier::FrontierKind;

/// Heuristic estimate of the remaining cost from a state to the goal.
pub type Heuristic = fn(Point, Point) -> Cost;

/// What a node is ordered by in a priority frontier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Constant priority (stack and queue frontiers).
    None,
    /// Accumulated path cost `g`.
    PathCost,
    /// Heuristic estimate `h` only.
    Heuristic,
    /// `g + h`.
    PathCostPlusHeuristic,
}

impl Priority {
    /// Evaluate the priority of a node at `state` with path cost `cost`.
    #[inline]
    pub fn eval(self, cost: Cost, state: Point, goal: Point, h: Heuristic) -> Cost {
        match self {
            Priority::None => 0,
            Priority::PathCost => cost,
            Priority::Heuristic => h(state, goal),
            Priority::PathCostPlusHeuristic => cost.saturating_add(h(state, goal)),
        }
    }
}

/// When the goal test is applied to a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GoalCheck {
    /// When the node is created, before it enters the frontier.
    OnGeneration,
    /// When the node is popped from the frontier.
    OnExpansion,
}

/// When a state is recorded in the explored set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Marking {
    /// When a node for the state is admitted into the frontier.
    OnGeneration,
    /// When a node for the state is popped; later pops of the same state are
    /// skipped.
    OnExpansion,
}

/// Order in which neighbors are considered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActionOrder {
    /// As yielded by [`Grid::neighbors`](crate::Grid::neighbors).
    #[default]
    AsGiven,
    /// The given action first, the rest in their original relative order.
    Prefer(Action),
}

impl ActionOrder {
    /// Reorder `buf` in place.
    pub fn apply(self, buf: &mut [(Action, Point)]) {
        if let ActionOrder::Prefer(first) = self {
            // Stable: non-preferred actions keep their relative order.
            buf.sort_by_key(|&(a, _)| a != first);
        }
    }
}

/// Complete description of a search strategy.
///
/// The five named strategies are constructors on this type
/// ([`dfs`](Self::dfs), [`bfs`](Self::bfs), [`ucs`](Self::ucs),
/// [`gbfs`](Self::gbfs), [`astar`](Self::astar)); the `with_*` methods
/// derive variants from them.
#[derive(Copy, Clone, Debug)]
pub struct SearchConfig {
    /// Order in which generated nodes leave the frontier.
    pub frontier: FrontierKind,
    /// Priority rule for [`FrontierKind::Priority`]; ignored otherwise.
    pub priority: Priority,
    /// When a node is compared against the goal.
    pub goal_check: GoalCheck,
    /// When a node is recorded in the explored set.
    pub marking: Marking,
    /// Whether a cheaper node may replace a recorded one.
    pub replace: Replace,
    /// Neighbor ordering applied before generation.
    pub order: ActionOrder,
    /// Estimate of the remaining cost, used by heuristic priorities.
    pub heuristic: Heuristic,
}

impl SearchConfig {
    pub(crate) const fn base(frontier: FrontierKind, priority: Priority) -> Self {
        Self {
            frontier,
            priority,
            goal_check: GoalCheck::OnExpansion,
            marking: Marking::OnGeneration,
            replace: Replace::IfCheaper,
            order: ActionOrder::AsGiven,
            heuristic: distance::manhattan,
        }
    }

    /// Same strategy, testing for the goal at another time.
    pub fn with_goal_check(mut self, goal_check: GoalCheck) -> Self {
        self.goal_check = goal_check;
        self
    }

    /// Same strategy with another neighbor ordering.
    pub fn with_order(mut self, order: ActionOrder) -> Self {
        self.order = order;
        self
    }

    /// Same strategy with another heuristic.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Priority of a node at `state` with path cost `cost`.
    #[inline]
    pub(crate) fn priority_of(&self, cost: Cost, state: Point, goal: Point) -> Cost {
        self.priority.eval(cost, state, goal, self.heuristic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefer_moves_action_first_and_keeps_rest() {
        let p = Point::ZERO;
        let mut buf: Vec<(Action, Point)> = Action::ALL.iter().map(|&a| (a, a.apply(p))).collect();
        ActionOrder::Prefer(Action::Down).apply(&mut buf);
        let order: Vec<Action> = buf.iter().map(|&(a, _)| a).collect();
        assert_eq!(order, vec![Action::Down, Action::Up, Action::Right, Action::Left]);
    }

    #[test]
    fn as_given_is_identity() {
        let p = Point::ZERO;
        let mut buf = vec![(Action::Left, Action::Left.apply(p)), (Action::Up, Action::Up.apply(p))];
        let before = buf.clone();
        ActionOrder::AsGiven.apply(&mut buf);
        assert_eq!(buf, before);
    }

    #[test]
    fn priority_rules() {
        let goal = Point::new(3, 4);
        let s = Point::new(0, 0);
        let h: Heuristic = distance::manhattan;
        assert_eq!(Priority::None.eval(5, s, goal, h), 0);
        assert_eq!(Priority::PathCost.eval(5, s, goal, h), 5);
        assert_eq!(Priority::Heuristic.eval(5, s, goal, h), 7);
        assert_eq!(Priority::PathCostPlusHeuristic.eval(5, s, goal, h), 12);
    }
}
