use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use trove_core::Coord;

use crate::neighbors::successors;
use crate::path::{ParentMap, build_path};
use crate::result::SearchResult;
use crate::traits::SearchSpace;

/// Breadth-first search from `start` to `goal`.
///
/// The FIFO frontier makes the returned path shortest in step count.
pub fn bfs<S: SearchSpace + ?Sized>(space: &S, start: Coord, goal: Coord) -> SearchResult {
    let t0 = Instant::now();
    let size = space.size();

    let mut frontier = VecDeque::from([start]);
    let mut visited = HashSet::from([start]);
    let mut parent = ParentMap::new();
    let mut nodes_expanded = 0;

    while let Some(current) = frontier.pop_front() {
        nodes_expanded += 1;
        if current == goal {
            break;
        }

        for nb in successors(current, size) {
            if space.is_blocked(nb) || !visited.insert(nb) {
                continue;
            }
            parent.insert(nb, current);
            frontier.push_back(nb);
        }
    }

    let path = build_path(&parent, start, goal);
    log::trace!(
        "bfs {start} -> {goal}: {} steps, {nodes_expanded} expanded",
        path.len()
    );
    SearchResult::new(path, nodes_expanded, t0.elapsed())
}
