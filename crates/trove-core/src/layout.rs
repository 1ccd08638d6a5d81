//! Fixed grids built from ASCII text.
//!
//! One line per row, all lines the same width, and as many rows as columns.
//! Symbols:
//!
//! | Char | Kind |
//! |---|---|
//! | `.` or space | [`CellKind::Empty`] |
//! | `T` | [`CellKind::Treasure`] |
//! | `X` | [`CellKind::Trap`] |
//! | `#` | [`CellKind::Wall`] |
//! | `S` | [`CellKind::Start`] |

use crate::cell::CellKind;
use crate::error::GridError;
use crate::geom::Coord;
use crate::grid::Grid;

impl CellKind {
    /// Layout character for this kind.
    pub const fn symbol(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Treasure => 'T',
            CellKind::Trap => 'X',
            CellKind::Wall => '#',
            CellKind::Start => 'S',
        }
    }

    /// Parse a layout character.
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '.' | ' ' => Some(CellKind::Empty),
            'T' => Some(CellKind::Treasure),
            'X' => Some(CellKind::Trap),
            '#' => Some(CellKind::Wall),
            'S' => Some(CellKind::Start),
            _ => None,
        }
    }
}

impl Grid {
    /// Build a grid from an ASCII layout.
    ///
    /// Leading and trailing blank lines are ignored. The result has exactly
    /// one start and at least one treasure; reachability is not checked.
    pub fn from_layout(s: &str) -> Result<Grid, GridError> {
        let lines: Vec<&str> = s
            .trim_matches(|c| c == '\n' || c == '\r')
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .collect();

        let expected = lines.first().map_or(0, |l| l.chars().count());
        for (line, l) in lines.iter().enumerate() {
            let width = l.chars().count();
            if width != expected {
                return Err(GridError::InconsistentSize {
                    line,
                    width,
                    expected,
                });
            }
        }
        if lines.len() != expected {
            return Err(GridError::NotSquare {
                rows: lines.len(),
                cols: expected,
            });
        }

        let mut grid = Grid::new(expected)?;
        let mut start = None;
        for (row, l) in lines.iter().enumerate() {
            for (col, ch) in l.chars().enumerate() {
                let pos = Coord::new(row, col);
                let kind = CellKind::from_symbol(ch)
                    .ok_or(GridError::InvalidSymbol { ch, pos })?;
                if kind == CellKind::Start && start.replace(pos).is_some() {
                    return Err(GridError::MultipleStarts(pos));
                }
                grid.set(pos, kind);
            }
        }

        if start.is_none() {
            return Err(GridError::MissingStart);
        }
        if grid.count(CellKind::Treasure) == 0 {
            return Err(GridError::MissingTreasure);
        }
        Ok(grid)
    }

    /// Render the grid in the format accepted by [`from_layout`](Self::from_layout).
    pub fn to_layout(&self) -> String {
        let mut out = String::with_capacity(self.area() + self.size());
        for row in self.rows() {
            out.extend(row.iter().map(|k| k.symbol()));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPEN: &str = "\
S.......
........
..#.....
..#..X..
........
........
........
.......T";

    #[test]
    fn parse_open_layout() {
        let g = Grid::from_layout(OPEN).unwrap();
        assert_eq!(g.size(), 8);
        assert_eq!(g.start(), Some(Coord::new(0, 0)));
        assert_eq!(g.treasures(), vec![Coord::new(7, 7)]);
        assert_eq!(g.at(Coord::new(2, 2)), Some(CellKind::Wall));
        assert_eq!(g.at(Coord::new(3, 5)), Some(CellKind::Trap));
        assert_eq!(g.count(CellKind::Empty), 59);
    }

    #[test]
    fn to_layout_is_inverse() {
        let g = Grid::from_layout(OPEN).unwrap();
        let text = g.to_layout();
        assert_eq!(text.trim_end(), OPEN);
        assert_eq!(Grid::from_layout(&text).unwrap(), g);
    }

    #[test]
    fn surrounding_newlines_are_ignored() {
        let padded = format!("\n\n{OPEN}\n\n");
        assert!(Grid::from_layout(&padded).is_ok());
    }

    #[test]
    fn inconsistent_width() {
        let bad = OPEN.replacen("........", ".........", 1);
        assert!(matches!(
            Grid::from_layout(&bad),
            Err(GridError::InconsistentSize { line: 1, width: 9, expected: 8 })
        ));
    }

    #[test]
    fn not_square() {
        let bad = format!("{OPEN}\n........");
        assert_eq!(
            Grid::from_layout(&bad),
            Err(GridError::NotSquare { rows: 9, cols: 8 })
        );
    }

    #[test]
    fn too_small() {
        let small = "S..\n...\n..T";
        assert_eq!(
            Grid::from_layout(small),
            Err(GridError::TooSmall { size: 3, min: 8 })
        );
    }

    #[test]
    fn invalid_symbol() {
        let bad = OPEN.replacen("..#.....", "..#..?..", 1);
        assert_eq!(
            Grid::from_layout(&bad),
            Err(GridError::InvalidSymbol {
                ch: '?',
                pos: Coord::new(2, 5)
            })
        );
    }

    #[test]
    fn start_and_treasure_required() {
        let no_start = OPEN.replacen('S', ".", 1);
        assert_eq!(Grid::from_layout(&no_start), Err(GridError::MissingStart));

        let no_treasure = OPEN.replacen('T', ".", 1);
        assert_eq!(
            Grid::from_layout(&no_treasure),
            Err(GridError::MissingTreasure)
        );

        let two_starts = OPEN.replacen(".......T", "S......T", 1);
        assert_eq!(
            Grid::from_layout(&two_starts),
            Err(GridError::MultipleStarts(Coord::new(7, 0)))
        );
    }
}
