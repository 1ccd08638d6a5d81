//! **trove-core**: the grid model for treasure-hunt puzzles.
//!
//! This crate provides the foundational types used across the *trove*
//! workspace: the [`Coord`] value type, the [`CellKind`] tags, the square
//! [`Grid`] and its ASCII layout format.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;

pub use cell::CellKind;
pub use error::GridError;
pub use geom::Coord;
pub use grid::{Grid, MIN_GRID_SIZE};
