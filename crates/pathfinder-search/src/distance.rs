use pathfinder_core::{Cost, Point};

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent for four-directional movement when every cell
/// costs at least 1.
#[inline]
pub fn manhattan(a: Point, b: Point) -> Cost {
    a.manhattan(b)
}
