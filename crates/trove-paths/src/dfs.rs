use std::collections::HashSet;
use std::time::Instant;

use trove_core::Coord;

use crate::neighbors::successors;
use crate::path::{ParentMap, build_path};
use crate::result::SearchResult;
use crate::traits::SearchSpace;

/// Depth-first search from `start` to `goal`.
///
/// Successors are pushed in reverse so they are explored in the forward
/// order (up, right, down, left). The path found is not necessarily the
/// shortest.
pub fn dfs<S: SearchSpace + ?Sized>(space: &S, start: Coord, goal: Coord) -> SearchResult {
    let t0 = Instant::now();
    let size = space.size();

    let mut stack = vec![start];
    let mut visited = HashSet::from([start]);
    let mut parent = ParentMap::new();
    let mut nodes_expanded = 0;

    while let Some(current) = stack.pop() {
        nodes_expanded += 1;
        if current == goal {
            break;
        }

        for nb in successors(current, size).rev() {
            if space.is_blocked(nb) || !visited.insert(nb) {
                continue;
            }
            parent.insert(nb, current);
            stack.push(nb);
        }
    }

    let path = build_path(&parent, start, goal);
    log::trace!(
        "dfs {start} -> {goal}: {} steps, {nodes_expanded} expanded",
        path.len()
    );
    SearchResult::new(path, nodes_expanded, t0.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trove_core::Grid;

    #[test]
    fn explores_up_then_right_first() {
        let g = Grid::from_layout(
            "\
........
........
........
...S....
........
........
........
.......T",
        )
        .unwrap();
        let start = Coord::new(3, 3);
        let r = dfs(&g, start, Coord::new(0, 3));
        // Straight up: "up" is tried before any other direction.
        assert_eq!(
            r.path(),
            &[start, Coord::new(2, 3), Coord::new(1, 3), Coord::new(0, 3)]
        );
        assert_eq!(r.nodes_expanded(), 4);
    }

    #[test]
    fn finds_a_valid_path() {
        let g = Grid::from_layout(
            "\
S...#...
.##.#.#.
.#..#.#.
.#.##.#.
.#....#.
.####.#.
......#.
.....#.T",
        )
        .unwrap();
        let start = Coord::new(0, 0);
        let goal = Coord::new(7, 7);
        let r = dfs(&g, start, goal);
        assert!(r.reaches(goal));
        let path = r.path();
        assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])));
        assert!(path.iter().all(|&c| !g.is_blocked(c)));
    }

    #[test]
    fn start_is_goal() {
        let g = Grid::from_layout(
            "\
S.......
........
........
........
........
........
........
.......T",
        )
        .unwrap();
        let s = Coord::new(0, 0);
        let r = dfs(&g, s, s);
        assert_eq!(r.path(), &[s]);
        assert_eq!(r.nodes_expanded(), 1);
    }
}
