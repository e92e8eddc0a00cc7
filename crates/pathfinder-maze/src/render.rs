//! ASCII rendering of mazes and search results.

use std::collections::HashSet;
use std::fmt;

use pathfinder_core::Point;
use pathfinder_search::{Grid, Outcome};

use crate::maze::{Cell, Maze};

/// Path cell.
pub const PATH: char = '*';
/// Explored cell that is not on the path.
pub const EXPLORED: char = 'o';
/// Open cell costing more than 9.
pub const EXPENSIVE: char = '+';

/// Cells to highlight when rendering a [`Maze`].
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    path: HashSet<Point>,
    explored: HashSet<Point>,
}

impl Overlay {
    /// An empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `states` as path cells.
    pub fn with_path(mut self, states: impl IntoIterator<Item = Point>) -> Self {
        self.path.extend(states);
        self
    }

    /// Mark `states` as explored cells.
    pub fn with_explored(mut self, states: impl IntoIterator<Item = Point>) -> Self {
        self.explored.extend(states);
        self
    }

    /// Overlay for a search outcome: its path, and optionally every
    /// explored state.
    pub fn from_outcome(outcome: &Outcome, show_explored: bool) -> Self {
        let mut overlay = Self::new();
        if let Some(sol) = outcome.solution() {
            overlay = overlay.with_path(sol.states());
        }
        if show_explored {
            overlay = overlay.with_explored(outcome.explored().states());
        }
        overlay
    }
}

impl Maze {
    /// Render the maze, one line per row, with `overlay` drawn on top.
    ///
    /// The start and goal are always drawn as `A` and `B`.
    pub fn render(&self, overlay: &Overlay) -> String {
        let mut out = String::with_capacity(self.range().len() + self.height() as usize);
        for p in self.range() {
            if p.x == 0 && p.y > 0 {
                out.push('\n');
            }
            out.push(self.glyph(p, overlay));
        }
        out
    }

    fn glyph(&self, p: Point, overlay: &Overlay) -> char {
        if p == self.start() {
            return 'A';
        }
        if p == self.end() {
            return 'B';
        }
        if overlay.path.contains(&p) {
            return PATH;
        }
        if overlay.explored.contains(&p) {
            return EXPLORED;
        }
        match self.at(p) {
            Some(Cell::Open(1)) => '.',
            Some(Cell::Open(c)) if c <= 9 => char::from_digit(c, 10).unwrap_or(EXPENSIVE),
            Some(Cell::Open(_)) => EXPENSIVE,
            Some(Cell::Wall) | None => '#',
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Overlay::default()))
    }
}
