use trove_core::Coord;

/// Row/column offsets in successor order: up, right, down, left.
const DIRS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Lazily yield the in-bounds orthogonal neighbours of `pos` on a
/// `size`×`size` grid, in the order up, right, down, left.
///
/// Cell kinds are not consulted; callers skip blocked cells themselves.
pub fn successors(pos: Coord, size: usize) -> impl DoubleEndedIterator<Item = Coord> {
    DIRS.into_iter()
        .filter_map(move |(dr, dc)| pos.offset(dr, dc))
        .filter(move |c| c.row < size && c.col < size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_order() {
        let got: Vec<_> = successors(Coord::new(3, 3), 8).collect();
        assert_eq!(
            got,
            vec![
                Coord::new(2, 3),
                Coord::new(3, 4),
                Coord::new(4, 3),
                Coord::new(3, 2),
            ]
        );
    }

    #[test]
    fn corners_are_clipped() {
        let top_left: Vec<_> = successors(Coord::new(0, 0), 8).collect();
        assert_eq!(top_left, vec![Coord::new(0, 1), Coord::new(1, 0)]);

        let bottom_right: Vec<_> = successors(Coord::new(7, 7), 8).collect();
        assert_eq!(bottom_right, vec![Coord::new(6, 7), Coord::new(7, 6)]);
    }

    #[test]
    fn reversed_order() {
        let got: Vec<_> = successors(Coord::new(0, 3), 8).rev().collect();
        assert_eq!(
            got,
            vec![Coord::new(0, 2), Coord::new(1, 3), Coord::new(0, 4)]
        );
    }

    #[test]
    fn outside_grid_has_no_successors() {
        assert_eq!(successors(Coord::new(8, 8), 8).count(), 0);
    }
}
