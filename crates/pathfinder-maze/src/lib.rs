//! Mazes for the pathfinder search engine.
//!
//! A [`Maze`] is a rectangular cost map parsed from ASCII art. It
//! implements [`pathfinder_search::Grid`], can render itself with a path
//! and explored set drawn on top, and can be generated at random with
//! [`MazeGen`].

pub mod mapgen;
pub mod maze;
pub mod render;

pub use mapgen::{MazeGen, MazeGenConfig};
pub use maze::{Cell, Maze, MazeError};
pub use render::Overlay;
