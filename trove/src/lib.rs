//! Trove: treasure-hunt grids in the terminal.
//!
//! Generates (or loads) a grid, runs the search algorithms on demand and
//! draws the resulting path over the grid together with its metrics.

pub mod cli;
pub mod interactive;
pub mod palette;
pub mod render;
pub mod session;

pub use cli::Args;
pub use render::Renderer;
pub use session::{Report, Session};
