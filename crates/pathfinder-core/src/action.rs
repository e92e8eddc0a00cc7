//! Cardinal moves used as edge labels between grid cells.

use std::fmt;

use crate::geom::Point;

/// One of the four cardinal moves on a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action {
    Up,
    Right,
    Down,
    Left,
}

impl Action {
    /// All moves, clockwise from `Up`.
    pub const ALL: [Action; 4] = [Action::Up, Action::Right, Action::Down, Action::Left];

    /// Offset applied to a point by this move.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Action::Up => Point::new(0, -1),
            Action::Right => Point::new(1, 0),
            Action::Down => Point::new(0, 1),
            Action::Left => Point::new(-1, 0),
        }
    }

    /// Point reached by applying this move to `p`.
    #[inline]
    pub const fn apply(self, p: Point) -> Point {
        let d = self.delta();
        p.shift(d.x, d.y)
    }

    /// Lowercase label, e.g. `"down"`.
    pub const fn name(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Right => "right",
            Action::Down => "down",
            Action::Left => "left",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
