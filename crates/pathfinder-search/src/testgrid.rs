//! Small text-described grids for unit tests.

use pathfinder_core::{Action, Cost, Point, Range};
use proptest::prelude::*;

use crate::traits::Grid;

/// `#` is a wall, `.` costs 1, digits cost their value, `A` and `B` mark
/// the start and end (cost 1).
#[derive(Debug, Clone)]
pub(crate) struct TestGrid {
    range: Range,
    cells: Vec<Option<Cost>>,
    start: Point,
    end: Point,
}

impl TestGrid {
    pub(crate) fn parse(s: &str) -> Self {
        let lines: Vec<&str> = s.lines().collect();
        let width = lines.iter().map(|l| l.len()).max().unwrap_or(0) as i32;
        let range = Range::sized(width, lines.len() as i32);
        let mut cells = vec![None; range.len()];
        let mut start = Point::ZERO;
        let mut end = Point::ZERO;
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                let cost = match ch {
                    '#' => None,
                    'A' => {
                        start = p;
                        Some(1)
                    }
                    'B' => {
                        end = p;
                        Some(1)
                    }
                    d if d.is_ascii_digit() => d.to_digit(10),
                    _ => Some(1),
                };
                cells[range.index(p).unwrap()] = cost;
            }
        }
        Self {
            range,
            cells,
            start,
            end,
        }
    }

    /// An open `width` × `height` grid of unit cost.
    pub(crate) fn open(width: i32, height: i32, start: Point, end: Point) -> Self {
        let range = Range::sized(width, height);
        Self::from_cells(width, height, vec![Some(1); range.len()], start, end)
    }

    pub(crate) fn from_cells(
        width: i32,
        height: i32,
        cells: Vec<Option<Cost>>,
        start: Point,
        end: Point,
    ) -> Self {
        let range = Range::sized(width, height);
        assert_eq!(cells.len(), range.len());
        Self {
            range,
            cells,
            start,
            end,
        }
    }

    fn at(&self, p: Point) -> Option<Cost> {
        self.range.index(p).and_then(|i| self.cells[i])
    }

    /// Sum of entry costs along `states`, the first state excluded.
    pub(crate) fn path_cost(&self, states: &[Point]) -> Cost {
        states.iter().skip(1).map(|&p| self.cost(p)).sum()
    }

    /// Whether consecutive states are neighbors and every state is open.
    pub(crate) fn is_valid_path(&self, states: &[Point]) -> bool {
        states.iter().all(|&p| self.at(p).is_some())
            && states.windows(2).all(|w| w[0].manhattan(w[1]) == 1)
    }

    /// Minimum path cost by repeated relaxation over every cell.
    pub(crate) fn brute_force_cost(&self) -> Option<Cost> {
        let mut dist: Vec<Option<Cost>> = vec![None; self.range.len()];
        dist[self.range.index(self.start)?] = Some(0);
        let mut changed = true;
        while changed {
            changed = false;
            for p in self.range {
                let Some(d) = dist[self.range.index(p).unwrap()] else {
                    continue;
                };
                for a in Action::ALL {
                    let n = a.apply(p);
                    let Some(c) = self.at(n) else {
                        continue;
                    };
                    let ni = self.range.index(n).unwrap();
                    if dist[ni].is_none_or(|old| d + c < old) {
                        dist[ni] = Some(d + c);
                        changed = true;
                    }
                }
            }
        }
        dist[self.range.index(self.end)?]
    }
}

impl Grid for TestGrid {
    fn start(&self) -> Point {
        self.start
    }

    fn end(&self) -> Point {
        self.end
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<(Action, Point)>) {
        for a in Action::ALL {
            let n = a.apply(p);
            if self.at(n).is_some() {
                buf.push((a, n));
            }
        }
    }

    fn cost(&self, p: Point) -> Cost {
        self.at(p).unwrap_or(0)
    }
}

/// Random grids up to 6×6 with cell costs in `1..=max_cost`, about a quarter
/// of the cells walled, start at the top-left and end at the bottom-right.
pub(crate) fn arb_grid(max_cost: Cost) -> impl Strategy<Value = TestGrid> {
    (2i32..=6, 2i32..=6).prop_flat_map(move |(w, h)| {
        let cell = prop_oneof![
            1 => Just(None::<Cost>),
            3 => (1..=max_cost).prop_map(Some),
        ];
        proptest::collection::vec(cell, (w * h) as usize).prop_map(move |mut cells| {
            let last = cells.len() - 1;
            cells[0] = Some(1);
            cells[last] = Some(1);
            TestGrid::from_cells(w, h, cells, Point::new(0, 0), Point::new(w - 1, h - 1))
        })
    })
}
