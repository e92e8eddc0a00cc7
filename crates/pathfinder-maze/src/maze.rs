//! Rectangular cost maps built from text.
//!
//! | Character | Meaning |
//! |---|---|
//! | `#` | wall |
//! | `.` or space | open, cost 1 |
//! | `1`–`9` | open, cost of the digit |
//! | `A` | start, cost 1 |
//! | `B` | goal, cost 1 |

use std::fmt;

use pathfinder_core::{Action, Cost, Point, Range};
use pathfinder_search::Grid;

/// One maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Wall,
    /// Passable, entering costs the given amount.
    Open(Cost),
}

impl Cell {
    /// Whether the cell can be entered.
    pub const fn is_open(self) -> bool {
        matches!(self, Cell::Open(_))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Open(1)
    }
}

/// A rectangular maze with a start and a goal cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MazeRepr"))]
pub struct Maze {
    range: Range,
    cells: Vec<Cell>,
    start: Point,
    end: Point,
}

impl Maze {
    /// Create an open maze of unit cost, from the top-left corner to the
    /// bottom-right one.
    pub fn new(width: i32, height: i32) -> Self {
        let range = Range::sized(width.max(1), height.max(1));
        Self {
            range,
            cells: vec![Cell::default(); range.len()],
            start: range.min,
            end: Point::new(range.max.x - 1, range.max.y - 1),
        }
    }

    /// Parse a maze from text.
    ///
    /// Leading and trailing blank lines are ignored; every remaining line
    /// must have the same width. Exactly one `A` and one `B` are required.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let s = s.trim_matches(|c| c == '\n' || c == '\r');
        if s.is_empty() {
            return Err(MazeError::Empty);
        }

        let mut width: Option<usize> = None;
        let mut cells = Vec::with_capacity(s.len());
        let mut start: Option<Point> = None;
        let mut end: Option<Point> = None;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut x = 0;
            for ch in line.chars() {
                let pos = Point::new(x as i32, y as i32);
                let cell = match ch {
                    '#' => Cell::Wall,
                    '.' | ' ' => Cell::Open(1),
                    '1'..='9' => Cell::Open(ch as Cost - '0' as Cost),
                    'A' => {
                        if let Some(prev) = start.replace(pos) {
                            return Err(MazeError::DuplicateStart { first: prev, second: pos });
                        }
                        Cell::Open(1)
                    }
                    'B' => {
                        if let Some(prev) = end.replace(pos) {
                            return Err(MazeError::DuplicateEnd { first: prev, second: pos });
                        }
                        Cell::Open(1)
                    }
                    _ => return Err(MazeError::InvalidRune { ch, pos }),
                };
                cells.push(cell);
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(MazeError::InconsistentSize {
                        line: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height = y + 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 {
            return Err(MazeError::Empty);
        }
        Ok(Self {
            range: Range::sized(width as i32, height as i32),
            cells,
            start: start.ok_or(MazeError::MissingStart)?,
            end: end.ok_or(MazeError::MissingEnd)?,
        })
    }

    /// Width in cells.
    pub fn width(&self) -> i32 {
        self.range.width()
    }

    /// Height in cells.
    pub fn height(&self) -> i32 {
        self.range.height()
    }

    /// The maze rectangle.
    pub fn range(&self) -> Range {
        self.range
    }

    /// Cell at `p`, or `None` outside the maze.
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.range.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is inside the maze and open.
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_open)
    }

    /// Overwrite the cell at `p`. Walls on the start or goal are ignored.
    /// Returns whether the maze changed.
    pub fn set(&mut self, p: Point, cell: Cell) -> bool {
        let Some(i) = self.range.index(p) else {
            return false;
        };
        if !cell.is_open() && (p == self.start || p == self.end) {
            return false;
        }
        let changed = self.cells[i] != cell;
        self.cells[i] = cell;
        changed
    }

    /// Move the start to `p`, opening the cell if needed.
    pub fn set_start(&mut self, p: Point) -> Result<(), MazeError> {
        self.open_endpoint(p)?;
        self.start = p;
        Ok(())
    }

    /// Move the goal to `p`, opening the cell if needed.
    pub fn set_end(&mut self, p: Point) -> Result<(), MazeError> {
        self.open_endpoint(p)?;
        self.end = p;
        Ok(())
    }

    fn open_endpoint(&mut self, p: Point) -> Result<(), MazeError> {
        let i = self.range.index(p).ok_or(MazeError::OutOfBounds(p))?;
        if !self.cells[i].is_open() {
            self.cells[i] = Cell::Open(1);
        }
        Ok(())
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// Whether every open cell costs the same.
    pub fn is_uniform_cost(&self) -> bool {
        let mut costs = self.cells.iter().filter_map(|c| match c {
            Cell::Open(cost) => Some(*cost),
            Cell::Wall => None,
        });
        match costs.next() {
            Some(first) => costs.all(|c| c == first),
            None => true,
        }
    }
}

/// Unchecked serialized form of a [`Maze`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MazeRepr {
    range: Range,
    cells: Vec<Cell>,
    start: Point,
    end: Point,
}

#[cfg(feature = "serde")]
impl TryFrom<MazeRepr> for Maze {
    type Error = MazeError;

    fn try_from(r: MazeRepr) -> Result<Self, MazeError> {
        if r.range.is_empty() {
            return Err(MazeError::Empty);
        }
        if r.range.min != Point::ZERO {
            return Err(MazeError::NotAnchored(r.range.min));
        }
        if r.cells.len() != r.range.len() {
            return Err(MazeError::CellCount {
                expected: r.range.len(),
                found: r.cells.len(),
            });
        }
        for p in [r.start, r.end] {
            let i = r.range.index(p).ok_or(MazeError::OutOfBounds(p))?;
            if !r.cells[i].is_open() {
                return Err(MazeError::WalledEndpoint(p));
            }
        }
        Ok(Self {
            range: r.range,
            cells: r.cells,
            start: r.start,
            end: r.end,
        })
    }
}

impl Grid for Maze {
    fn start(&self) -> Point {
        self.start
    }

    fn end(&self) -> Point {
        self.end
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<(Action, Point)>) {
        for a in Action::ALL {
            let n = a.apply(p);
            if self.is_open(n) {
                buf.push((a, n));
            }
        }
    }

    /// Walls and cells outside the maze cost [`Cost::MAX`]; they are never
    /// yielded as neighbors.
    fn cost(&self, p: Point) -> Cost {
        match self.at(p) {
            Some(Cell::Open(c)) => c,
            _ => Cost::MAX,
        }
    }
}

/// Errors that can occur when building a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The text contains no cell.
    Empty,
    /// A line is not as wide as the first one.
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the maze alphabet was found.
    InvalidRune { ch: char, pos: Point },
    /// No `A` in the text.
    MissingStart,
    /// No `B` in the text.
    MissingEnd,
    /// More than one `A`.
    DuplicateStart { first: Point, second: Point },
    /// More than one `B`.
    DuplicateEnd { first: Point, second: Point },
    /// A point outside the maze was given as an endpoint.
    OutOfBounds(Point),
    /// The cell list does not cover the maze rectangle.
    CellCount { expected: usize, found: usize },
    /// The start or goal sits on a wall.
    WalledEndpoint(Point),
    /// The maze rectangle does not start at the origin.
    NotAnchored(Point),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: no cells"),
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "maze: line {} has width {found}, expected {expected}",
                line + 1
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "maze contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingStart => write!(f, "maze: no start cell (A)"),
            Self::MissingEnd => write!(f, "maze: no goal cell (B)"),
            Self::DuplicateStart { first, second } => {
                write!(f, "maze: start cell (A) at both {first} and {second}")
            }
            Self::DuplicateEnd { first, second } => {
                write!(f, "maze: goal cell (B) at both {first} and {second}")
            }
            Self::OutOfBounds(p) => write!(f, "maze: {p} is outside the maze"),
            Self::CellCount { expected, found } => {
                write!(f, "maze: {found} cells, expected {expected}")
            }
            Self::WalledEndpoint(p) => write!(f, "maze: endpoint {p} is a wall"),
            Self::NotAnchored(p) => write!(f, "maze: top-left corner at {p}, expected (0, 0)"),
        }
    }
}

impl std::error::Error for MazeError {}
