//! The [`Grid`] type: a square matrix of [`CellKind`]s.
//!
//! A `Grid` owns its cells and carries its own side length, so independent
//! grids never share size information. Searches borrow it immutably.

use crate::cell::CellKind;
use crate::error::GridError;
use crate::geom::Coord;

/// Smallest supported side length.
pub const MIN_GRID_SIZE: usize = 8;

/// A square grid of [`CellKind`] values stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGrid")
)]
pub struct Grid {
    size: usize,
    cells: Vec<CellKind>,
}

/// Unchecked wire form of [`Grid`]; converted through [`Grid::from_cells`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    size: usize,
    cells: Vec<CellKind>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Grid::from_cells(raw.size, raw.cells)
    }
}

/// Number of cells in a `size`×`size` grid, if the side length is supported.
fn checked_area(size: usize) -> Result<usize, GridError> {
    if size < MIN_GRID_SIZE {
        return Err(GridError::TooSmall {
            size,
            min: MIN_GRID_SIZE,
        });
    }
    size.checked_mul(size).ok_or(GridError::TooLarge { size })
}

impl Grid {
    /// Create a new `size`×`size` grid filled with [`CellKind::Empty`].
    ///
    /// Fails with [`GridError::TooSmall`] when `size < MIN_GRID_SIZE` and
    /// with [`GridError::TooLarge`] when the area overflows `usize`.
    pub fn new(size: usize) -> Result<Self, GridError> {
        let area = checked_area(size)?;
        Ok(Self {
            size,
            cells: vec![CellKind::Empty; area],
        })
    }

    /// Build a grid from row-major `cells`, which must hold exactly
    /// `size * size` entries.
    pub fn from_cells(size: usize, cells: Vec<CellKind>) -> Result<Self, GridError> {
        let expected = checked_area(size)?;
        if cells.len() != expected {
            return Err(GridError::CellCount {
                size,
                cells: cells.len(),
                expected,
            });
        }
        Ok(Self { size, cells })
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row < self.size && c.col < self.size
    }

    #[inline]
    fn idx(&self, c: Coord) -> Option<usize> {
        self.contains(c).then(|| c.row * self.size + c.col)
    }

    /// Read the cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<CellKind> {
        self.idx(c).map(|i| self.cells[i])
    }

    /// Set the cell at `c`. Does nothing if out of bounds.
    pub fn set(&mut self, c: Coord, kind: CellKind) {
        if let Some(i) = self.idx(c) {
            self.cells[i] = kind;
        }
    }

    /// Overwrite every cell with `kind`.
    pub fn fill(&mut self, kind: CellKind) {
        self.cells.fill(kind);
    }

    /// Whether a search must not step on `c`. Out-of-bounds counts as blocked.
    #[inline]
    pub fn is_blocked(&self, c: Coord) -> bool {
        self.at(c).is_none_or(CellKind::is_blocked)
    }

    /// How many cells hold `kind`.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// The first start cell in row-major order.
    pub fn start(&self) -> Option<Coord> {
        self.iter()
            .find(|&(_, k)| k == CellKind::Start)
            .map(|(c, _)| c)
    }

    /// All treasure cells in row-major order.
    pub fn treasures(&self) -> Vec<Coord> {
        self.iter()
            .filter(|&(_, k)| k == CellKind::Treasure)
            .map(|(c, _)| c)
            .collect()
    }

    /// Iterate over `(Coord, CellKind)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellKind)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &k)| (Coord::new(i / size, i % size), k))
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> + '_ {
        self.cells.chunks(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_small_sizes() {
        assert_eq!(
            Grid::new(7),
            Err(GridError::TooSmall { size: 7, min: 8 })
        );
        assert!(Grid::new(0).is_err());
        assert!(Grid::new(MIN_GRID_SIZE).is_ok());
    }

    #[test]
    fn rejects_overflowing_area() {
        let size = 1usize << (usize::BITS / 2);
        assert_eq!(Grid::new(size), Err(GridError::TooLarge { size }));
        assert_eq!(
            Grid::new(usize::MAX),
            Err(GridError::TooLarge { size: usize::MAX })
        );
    }

    #[test]
    fn from_cells_checks_length() {
        let g = Grid::from_cells(8, vec![CellKind::Wall; 64]).unwrap();
        assert_eq!(g.count(CellKind::Wall), 64);
        assert_eq!(
            Grid::from_cells(8, Vec::new()),
            Err(GridError::CellCount {
                size: 8,
                cells: 0,
                expected: 64
            })
        );
        assert_eq!(
            Grid::from_cells(3, vec![CellKind::Empty; 9]),
            Err(GridError::TooSmall { size: 3, min: 8 })
        );
    }

    #[test]
    fn new_is_empty() {
        let g = Grid::new(10).unwrap();
        assert_eq!(g.size(), 10);
        assert_eq!(g.area(), 100);
        assert_eq!(g.count(CellKind::Empty), 100);
        assert_eq!(g.start(), None);
        assert!(g.treasures().is_empty());
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::new(8).unwrap();
        let c = Coord::new(2, 5);
        g.set(c, CellKind::Wall);
        assert_eq!(g.at(c), Some(CellKind::Wall));
        assert_eq!(g.at(Coord::new(5, 2)), Some(CellKind::Empty));
        assert_eq!(g.at(Coord::new(8, 0)), None);
        // Out of bounds writes are ignored.
        g.set(Coord::new(0, 8), CellKind::Trap);
        assert_eq!(g.count(CellKind::Trap), 0);
    }

    #[test]
    fn blocked_cells() {
        let mut g = Grid::new(8).unwrap();
        g.set(Coord::new(0, 1), CellKind::Trap);
        g.set(Coord::new(0, 2), CellKind::Wall);
        g.set(Coord::new(0, 3), CellKind::Treasure);
        assert!(g.is_blocked(Coord::new(0, 1)));
        assert!(g.is_blocked(Coord::new(0, 2)));
        assert!(!g.is_blocked(Coord::new(0, 3)));
        assert!(!g.is_blocked(Coord::new(0, 0)));
        assert!(g.is_blocked(Coord::new(0, 100)));
    }

    #[test]
    fn start_and_treasures_row_major() {
        let mut g = Grid::new(8).unwrap();
        g.set(Coord::new(4, 4), CellKind::Start);
        g.set(Coord::new(6, 1), CellKind::Treasure);
        g.set(Coord::new(1, 6), CellKind::Treasure);
        assert_eq!(g.start(), Some(Coord::new(4, 4)));
        assert_eq!(
            g.treasures(),
            vec![Coord::new(1, 6), Coord::new(6, 1)]
        );
    }

    #[test]
    fn fill_and_rows() {
        let mut g = Grid::new(9).unwrap();
        g.fill(CellKind::Wall);
        assert_eq!(g.count(CellKind::Wall), 81);
        assert_eq!(g.rows().count(), 9);
        assert!(g.rows().all(|r| r.len() == 9));
    }

    #[test]
    fn iter_coords() {
        let mut g = Grid::new(8).unwrap();
        g.set(Coord::new(1, 2), CellKind::Start);
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 64);
        assert_eq!(items[10], (Coord::new(1, 2), CellKind::Start));
    }
}
