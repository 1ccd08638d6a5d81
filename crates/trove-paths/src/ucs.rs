use std::collections::{HashMap, HashSet};
use std::time::Instant;

use trove_core::Coord;

use crate::frontier::PriorityFrontier;
use crate::neighbors::successors;
use crate::path::{ParentMap, build_path};
use crate::result::SearchResult;
use crate::traits::SearchSpace;

/// Every step costs the same.
pub(crate) const STEP_COST: usize = 1;

/// Uniform-cost search from `start` to `goal`, ordered by accumulated cost.
pub fn ucs<S: SearchSpace + ?Sized>(space: &S, start: Coord, goal: Coord) -> SearchResult {
    let t0 = Instant::now();
    let (path, nodes_expanded) = cost_search(space, start, goal, |_| 0);
    log::trace!(
        "ucs {start} -> {goal}: {} steps, {nodes_expanded} expanded",
        path.len()
    );
    SearchResult::new(path, nodes_expanded, t0.elapsed())
}

/// Best-first search on `g + h(pos)` with lazy deletion.
///
/// A coordinate is finalized the first time it is popped; later pops of the
/// same coordinate are dropped. Its parent is overwritten whenever a cheaper
/// cost is found before that. Returns the path and the expansion count.
pub(crate) fn cost_search<S: SearchSpace + ?Sized>(
    space: &S,
    start: Coord,
    goal: Coord,
    h: impl Fn(Coord) -> usize,
) -> (Vec<Coord>, usize) {
    let size = space.size();

    let mut frontier = PriorityFrontier::new();
    let mut best: HashMap<Coord, usize> = HashMap::from([(start, 0)]);
    let mut finalized: HashSet<Coord> = HashSet::new();
    let mut parent = ParentMap::new();
    let mut nodes_expanded = 0;

    let h0 = h(start);
    frontier.push(start, 0, h0, h0);

    while let Some(entry) = frontier.pop() {
        let current = entry.pos;
        // Stale duplicate.
        if !finalized.insert(current) {
            continue;
        }
        nodes_expanded += 1;
        if current == goal {
            break;
        }

        let tentative = entry.cost + STEP_COST;
        for nb in successors(current, size) {
            if space.is_blocked(nb) || finalized.contains(&nb) {
                continue;
            }
            if best.get(&nb).is_some_and(|&g| tentative >= g) {
                continue;
            }
            best.insert(nb, tentative);
            parent.insert(nb, current);
            let hn = h(nb);
            frontier.push(nb, tentative, tentative + hn, hn);
        }
    }

    (build_path(&parent, start, goal), nodes_expanded)
}
