//! Errors raised while building a [`Grid`](crate::Grid).

use thiserror::Error;

use crate::geom::Coord;

/// Grid construction or layout parsing failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The requested side length is below the supported minimum.
    #[error("grid size must be at least {min}, got {size}")]
    TooSmall { size: usize, min: usize },
    /// `size * size` does not fit in `usize`.
    #[error("grid size {size} is too large")]
    TooLarge { size: usize },
    /// The cell buffer does not hold `size * size` cells.
    #[error("grid of size {size} needs {expected} cells, got {cells}")]
    CellCount {
        size: usize,
        cells: usize,
        expected: usize,
    },
    /// Layout lines have different widths.
    #[error("layout: line {line} has width {width}, expected {expected}")]
    InconsistentSize {
        line: usize,
        width: usize,
        expected: usize,
    },
    /// Layout is rectangular but not square.
    #[error("layout: grid must be square, got {rows} rows of width {cols}")]
    NotSquare { rows: usize, cols: usize },
    /// A character with no cell-kind meaning.
    #[error("layout: invalid symbol {ch:?} at {pos}")]
    InvalidSymbol { ch: char, pos: Coord },
    /// No start cell.
    #[error("layout: no start cell")]
    MissingStart,
    /// More than one start cell.
    #[error("layout: second start cell at {0}")]
    MultipleStarts(Coord),
    /// No treasure cell.
    #[error("layout: no treasure cell")]
    MissingTreasure,
}
