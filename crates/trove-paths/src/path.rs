use std::collections::HashMap;

use trove_core::Coord;

/// Coordinate → the coordinate it was reached from, for one search run.
pub type ParentMap = HashMap<Coord, Coord>;

/// Rebuild the start→goal path by walking `parent` links back from `goal`.
///
/// Returns an empty path when `goal` was never reached, and `[start]` when
/// `start == goal`. `parent` must be acyclic, which holds for every map the
/// searches in this crate produce.
pub fn build_path(parent: &ParentMap, start: Coord, goal: Coord) -> Vec<Coord> {
    if goal != start && !parent.contains_key(&goal) {
        return Vec::new();
    }

    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match parent.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            // The chain does not lead back to `start`.
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}
