use pathfinder_core::{Action, Cost, Point};

/// A searchable grid: endpoints, a neighbor relation and per-cell costs.
///
/// The search engine does not validate the grid. Endpoints outside the
/// grid or inconsistent neighbors give unspecified (but terminating)
/// results.
pub trait Grid {
    /// Cell the search starts from.
    fn start(&self) -> Point;

    /// Cell the search tries to reach.
    fn end(&self) -> Point;

    /// Append the `(action, state)` pairs reachable from `p` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<(Action, Point)>);

    /// Cost of entering `p`.
    fn cost(&self, p: Point) -> Cost;
}

impl<G: Grid + ?Sized> Grid for &G {
    fn start(&self) -> Point {
        (**self).start()
    }

    fn end(&self) -> Point {
        (**self).end()
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<(Action, Point)>) {
        (**self).neighbors(p, buf)
    }

    fn cost(&self, p: Point) -> Cost {
        (**self).cost(p)
    }
}
