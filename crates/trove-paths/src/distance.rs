use trove_core::Coord;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}
