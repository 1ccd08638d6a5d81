//! Drawing grids, path overlays and metrics tables.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use trove_core::{CellKind, Coord, Grid};

use crate::palette;
use crate::session::Report;

/// Writes grids and reports to a terminal or any other [`Write`].
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
    newline: &'static str,
}

impl Renderer {
    /// Plain text: layout symbols, `*` for the path, `\n` line ends.
    pub fn plain() -> Self {
        Self {
            color: false,
            newline: "\n",
        }
    }

    /// Coloured cells for a cooked-mode terminal.
    pub fn colored() -> Self {
        Self {
            color: true,
            newline: "\n",
        }
    }

    /// Use `\r\n` line ends, as raw-mode terminals need.
    pub fn raw(mut self) -> Self {
        self.newline = "\r\n";
        self
    }

    /// Draw `grid` with `path` highlighted.
    pub fn grid(&self, out: &mut impl Write, grid: &Grid, path: &[Coord]) -> io::Result<()> {
        let on_path: HashSet<Coord> = path.iter().copied().collect();
        for (row, cells) in grid.rows().enumerate() {
            for (col, &kind) in cells.iter().enumerate() {
                let pos = Coord::new(row, col);
                self.cell(out, kind, on_path.contains(&pos))?;
            }
            if self.color {
                queue!(out, ResetColor)?;
            }
            queue!(out, Print(self.newline))?;
        }
        Ok(())
    }

    fn cell(&self, out: &mut impl Write, kind: CellKind, on_path: bool) -> io::Result<()> {
        let ch = match palette::symbol(kind) {
            Some(ch) => ch,
            None if on_path => palette::PATH_MARK,
            None if self.color => ' ',
            None => kind.symbol(),
        };
        if !self.color {
            return queue!(out, Print(ch), Print(' '));
        }
        let bg = if on_path && kind == CellKind::Empty {
            palette::PATH
        } else {
            palette::color(kind)
        };
        queue!(
            out,
            SetBackgroundColor(bg),
            SetForegroundColor(palette::INK),
            Print(ch),
            Print(' ')
        )
    }

    /// Print one line per report: label, path length, expansions, runtime.
    pub fn table(&self, out: &mut impl Write, reports: &[Report]) -> io::Result<()> {
        let nl = self.newline;
        if self.color {
            queue!(out, SetForegroundColor(palette::FRAME))?;
        }
        queue!(
            out,
            Print(format!(
                "{:<12} {:>6} {:>9} {:>12}  {}",
                "algorithm", "steps", "expanded", "runtime(us)", "outcome"
            ))
        )?;
        if self.color {
            queue!(out, ResetColor)?;
        }
        queue!(out, Print(nl))?;
        for r in reports {
            let steps = r
                .result
                .edges()
                .map_or_else(|| "-".to_string(), |e| e.to_string());
            let outcome = if r.complete() {
                "reached"
            } else if r.result.found() {
                "partial"
            } else {
                "no path"
            };
            queue!(
                out,
                Print(format!(
                    "{:<12} {:>6} {:>9} {:>12.1}  {outcome}{nl}",
                    r.label,
                    steps,
                    r.result.nodes_expanded(),
                    r.result.runtime().as_secs_f64() * 1e6,
                ))
            )?;
        }
        Ok(())
    }
}
