//! Random maze generation.
//!
//! [`MazeGen`] scatters walls and cell costs over a rectangle and can carve
//! a random monotone corridor from the start to the goal so that a path is
//! guaranteed to exist.

use pathfinder_core::{Cost, Point};
use pathfinder_search::Grid;
use rand::{Rng, RngExt};

use crate::maze::{Cell, Maze};

/// Parameters for [`MazeGen::generate`].
#[derive(Debug, Clone)]
pub struct MazeGenConfig {
    pub width: i32,
    pub height: i32,
    /// Probability (0.0–1.0) that a cell is a wall.
    pub wall_density: f64,
    /// Open cells cost a uniformly random amount in `1..=max_cost`.
    pub max_cost: Cost,
    /// Carve a corridor so that the goal is reachable.
    pub ensure_path: bool,
}

impl Default for MazeGenConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 10,
            wall_density: 0.25,
            max_cost: 1,
            ensure_path: true,
        }
    }
}

/// Random maze generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a maze from the top-left corner to the bottom-right one.
    pub fn generate(&mut self, cfg: &MazeGenConfig) -> Maze {
        let mut maze = Maze::new(cfg.width, cfg.height);
        let max_cost = cfg.max_cost.max(1);

        for p in maze.range() {
            let r: f64 = self.rng.random();
            let cell = if r < cfg.wall_density {
                Cell::Wall
            } else {
                Cell::Open(self.rng.random_range(1..=max_cost))
            };
            maze.set(p, cell);
        }

        if cfg.ensure_path {
            self.carve_corridor(&mut maze, max_cost);
        }
        maze
    }

    /// Open a random right/down walk from the start to the goal. Returns the
    /// number of walls removed.
    pub fn carve_corridor(&mut self, maze: &mut Maze, max_cost: Cost) -> usize {
        let goal = maze.end();
        let mut pos = maze.start();
        let mut carved = 0;

        while pos != goal {
            let dx = (goal.x - pos.x).signum();
            let dy = (goal.y - pos.y).signum();
            pos = match (dx, dy) {
                (0, _) => pos.shift(0, dy),
                (_, 0) => pos.shift(dx, 0),
                _ if self.rng.random_range(0..2u32) == 0 => pos.shift(dx, 0),
                _ => pos.shift(0, dy),
            };
            if !maze.is_open(pos) {
                maze.set(pos, Cell::Open(self.rng.random_range(1..=max_cost.max(1))));
                carved += 1;
            }
        }
        carved
    }

    /// Pick a random open cell, if any.
    pub fn random_open_cell(&mut self, maze: &Maze) -> Option<Point> {
        let open: Vec<Point> = maze.range().iter().filter(|&p| maze.is_open(p)).collect();
        if open.is_empty() {
            return None;
        }
        Some(open[self.rng.random_range(0..open.len())])
    }
}
