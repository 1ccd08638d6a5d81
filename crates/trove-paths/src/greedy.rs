use std::collections::HashSet;
use std::time::Instant;

use trove_core::Coord;

use crate::distance::manhattan;
use crate::frontier::PriorityFrontier;
use crate::neighbors::successors;
use crate::path::{ParentMap, build_path};
use crate::result::SearchResult;
use crate::traits::SearchSpace;

/// Greedy best-first search ordered by Manhattan distance to `goal` alone.
///
/// Accumulated cost is ignored, so the path is heuristically directed but
/// not necessarily shortest.
pub fn greedy<S: SearchSpace + ?Sized>(space: &S, start: Coord, goal: Coord) -> SearchResult {
    let t0 = Instant::now();
    let (path, nodes_expanded) = greedy_leg(space, start, goal);
    log::trace!(
        "greedy {start} -> {goal}: {} steps, {nodes_expanded} expanded",
        path.len()
    );
    SearchResult::new(path, nodes_expanded, t0.elapsed())
}

/// Visit `goals` in order, one independent greedy leg per goal.
///
/// Legs are joined without repeating the junction coordinate. If a leg
/// fails the tour stops and the path accumulated so far is returned, so
/// callers check [`SearchResult::reaches`] against the last goal. An empty
/// goal list yields `[start]`. Expansions are summed and the runtime spans
/// every leg.
pub fn greedy_multi<S: SearchSpace + ?Sized>(
    space: &S,
    start: Coord,
    goals: &[Coord],
) -> SearchResult {
    let t0 = Instant::now();
    let mut path = vec![start];
    let mut nodes_expanded = 0;
    let mut current = start;

    for (i, &goal) in goals.iter().enumerate() {
        let (leg, expanded) = greedy_leg(space, current, goal);
        nodes_expanded += expanded;
        if leg.is_empty() {
            log::debug!("greedy tour stopped at leg {i}: {current} -> {goal} unreachable");
            if i == 0 {
                path.clear();
            }
            break;
        }
        path.extend(leg.into_iter().skip(1));
        current = goal;
    }

    SearchResult::new(path, nodes_expanded, t0.elapsed())
}

/// One greedy leg with its own frontier, visited set and parent map.
fn greedy_leg<S: SearchSpace + ?Sized>(
    space: &S,
    start: Coord,
    goal: Coord,
) -> (Vec<Coord>, usize) {
    let size = space.size();

    let mut frontier = PriorityFrontier::new();
    let mut visited = HashSet::from([start]);
    let mut parent = ParentMap::new();
    let mut nodes_expanded = 0;

    let h0 = manhattan(start, goal);
    frontier.push(start, 0, h0, h0);

    while let Some(entry) = frontier.pop() {
        let current = entry.pos;
        nodes_expanded += 1;
        if current == goal {
            break;
        }

        for nb in successors(current, size) {
            if space.is_blocked(nb) || !visited.insert(nb) {
                continue;
            }
            parent.insert(nb, current);
            let h = manhattan(nb, goal);
            frontier.push(nb, entry.cost + 1, h, h);
        }
    }

    (build_path(&parent, start, goal), nodes_expanded)
}
