use std::time::Instant;

use trove_core::Coord;

use crate::distance::manhattan;
use crate::result::SearchResult;
use crate::traits::SearchSpace;
use crate::ucs::cost_search;

/// A* search from `start` to `goal` on `f = g + manhattan(pos, goal)`.
///
/// Manhattan distance never overestimates on a 4-connected uniform-cost
/// grid, so the path is as short as the BFS one.
pub fn astar<S: SearchSpace + ?Sized>(space: &S, start: Coord, goal: Coord) -> SearchResult {
    let t0 = Instant::now();
    let (path, nodes_expanded) = cost_search(space, start, goal, |c| manhattan(c, goal));
    log::trace!(
        "astar {start} -> {goal}: {} steps, {nodes_expanded} expanded",
        path.len()
    );
    SearchResult::new(path, nodes_expanded, t0.elapsed())
}
