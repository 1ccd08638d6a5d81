use trove_core::{Coord, Grid};

/// What a search needs to know about the world.
pub trait SearchSpace {
    /// Side length; valid coordinates are `[0, size)` on both axes.
    fn size(&self) -> usize;

    /// Whether a path may not step on `c`.
    fn is_blocked(&self, c: Coord) -> bool;
}

impl SearchSpace for Grid {
    #[inline]
    fn size(&self) -> usize {
        Grid::size(self)
    }

    #[inline]
    fn is_blocked(&self, c: Coord) -> bool {
        Grid::is_blocked(self, c)
    }
}
