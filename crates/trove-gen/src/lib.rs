//! Random treasure-hunt grids that are always solvable.
//!
//! [`Generator`] places a start, treasures, traps and walls, then asks a
//! reachability [`Oracle`] whether any treasure can be reached from the
//! start. Unsolvable layouts are discarded and regenerated until the retry
//! budget in [`GenConfig`] runs out.

pub mod config;
pub mod error;
pub mod generator;

pub use config::{GenConfig, Oracle};
pub use error::GenError;
pub use generator::{Generator, is_solvable};
