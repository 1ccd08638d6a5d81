//! Search algorithms for treasure-hunt grids.
//!
//! Every search consumes a read-only [`SearchSpace`], a start and a goal,
//! and produces a [`SearchResult`] holding the path, the number of expanded
//! nodes and the elapsed time:
//!
//! - **BFS** ([`bfs`]) shortest path in edge count
//! - **DFS** ([`dfs`]) some path, visiting successors in fixed order
//! - **UCS** ([`ucs`]) cheapest path by accumulated cost
//! - **Greedy best-first** ([`greedy`], [`greedy_multi`]) heuristic-directed
//! - **A\*** ([`astar`]) cheapest path guided by Manhattan distance
//!
//! All five share the [`successors`] order (up, right, down, left) and the
//! [`build_path`] reconstructor. Each call allocates its own frontier,
//! visited set and parent map, so concurrent searches on one grid are
//! independent. The clock starts at function entry and stops after path
//! reconstruction.
//!
//! # Tie-breaking
//!
//! Priority frontiers order entries by `(priority, heuristic, insertion)`:
//! on equal priority the entry closer to the goal wins, then the one pushed
//! first.

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod distance;
mod frontier;
mod greedy;
mod neighbors;
mod path;
mod result;
mod traits;
mod ucs;

pub use algorithm::Algorithm;
pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use distance::manhattan;
pub use greedy::{greedy, greedy_multi};
pub use neighbors::successors;
pub use path::{ParentMap, build_path};
pub use result::SearchResult;
pub use traits::SearchSpace;
pub use ucs::ucs;
