//! Colours and symbols for each cell kind.

use crossterm::style::Color;
use trove_core::CellKind;

/// Background of a cell that lies on the displayed path.
pub const PATH: Color = Color::Rgb { r: 255, g: 112, b: 67 };

/// Foreground used for symbols.
pub const INK: Color = Color::Rgb { r: 0, g: 0, b: 0 };

/// Table headings.
pub const FRAME: Color = Color::Rgb { r: 166, g: 166, b: 166 };

/// Marker drawn on empty cells along the path.
pub const PATH_MARK: char = '*';

/// Background colour for a cell kind.
pub const fn color(kind: CellKind) -> Color {
    match kind {
        CellKind::Empty => Color::Rgb { r: 236, g: 239, b: 241 },
        CellKind::Treasure => Color::Rgb { r: 141, g: 215, b: 252 },
        CellKind::Trap => Color::Rgb { r: 247, g: 185, b: 250 },
        CellKind::Wall => Color::Rgb { r: 252, g: 186, b: 3 },
        CellKind::Start => Color::Rgb { r: 136, g: 231, b: 136 },
    }
}

/// Display symbol; `None` for cells drawn blank.
pub const fn symbol(kind: CellKind) -> Option<char> {
    match kind {
        CellKind::Empty => None,
        CellKind::Treasure => Some('T'),
        CellKind::Trap => Some('X'),
        CellKind::Wall => Some('#'),
        CellKind::Start => Some('S'),
    }
}
