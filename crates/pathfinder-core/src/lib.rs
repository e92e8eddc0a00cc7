//! **pathfinder-core**: core types shared by the *pathfinder* crates.
//!
//! This crate provides the geometry primitives used to identify search
//! states ([`Point`], [`Range`]) and the four cardinal moves ([`Action`])
//! that label the edges of a grid.

pub mod action;
pub mod geom;

pub use action::Action;
pub use geom::{Point, Range, RangeIter};

/// Cost of entering a cell, and of a whole path.
///
/// Unsigned so that negative costs cannot be expressed.
pub type Cost = u32;
