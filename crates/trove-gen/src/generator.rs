//! Generate-and-test grid construction.

use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};
use trove_core::{CellKind, Coord, Grid};

use crate::config::{GenConfig, Oracle};
use crate::error::GenError;

/// Samples drawn per grid cell before an attempt gives up on finding an
/// empty cell.
const SAMPLES_PER_CELL: usize = 16;

/// Whether at least one treasure is reachable from the grid's start.
pub fn is_solvable(grid: &Grid, oracle: Oracle) -> bool {
    let Some(start) = grid.start() else {
        return false;
    };
    grid.treasures()
        .into_iter()
        .any(|t| oracle.reaches(grid, start, t))
}

/// Random grid generator.
pub struct Generator<R: Rng> {
    pub rng: R,
    config: GenConfig,
}

impl Generator<StdRng> {
    /// A generator with a reproducible random stream.
    pub fn seeded(config: GenConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(config: GenConfig, rng: R) -> Self {
        Self { rng, config }
    }

    /// Generate a grid on which some treasure is reachable from the start.
    ///
    /// Fails with [`GenError::Exhausted`] once `max_attempts` candidates have
    /// been rejected.
    pub fn generate(&mut self) -> Result<Grid, GenError> {
        let oracle = self.config.oracle;
        self.generate_until(|grid| is_solvable(grid, oracle))
    }

    /// Generate candidates until `accept` returns `true` for one.
    pub fn generate_until(
        &mut self,
        mut accept: impl FnMut(&Grid) -> bool,
    ) -> Result<Grid, GenError> {
        self.config.validate()?;
        let mut grid = Grid::new(self.config.size)?;
        let attempts = self.config.max_attempts;

        for attempt in 1..=attempts {
            grid.fill(CellKind::Empty);
            if !self.populate(&mut grid) {
                log::debug!("attempt {attempt}: ran out of empty-cell samples");
                continue;
            }
            if accept(&grid) {
                log::debug!("attempt {attempt}: accepted");
                return Ok(grid);
            }
            log::debug!("attempt {attempt}: no treasure reachable, retrying");
        }

        log::warn!(
            "gave up on a {0}x{0} grid after {attempts} attempts",
            self.config.size
        );
        Err(GenError::Exhausted { attempts })
    }

    /// Place start, treasures, traps and walls on an empty grid.
    ///
    /// Returns `false` if sampling failed to find room for some item.
    fn populate(&mut self, grid: &mut Grid) -> bool {
        let start = match self.config.start {
            Some(start) => start,
            None => match self.random_empty_cell(grid) {
                Some(c) => c,
                None => return false,
            },
        };
        grid.set(start, CellKind::Start);

        let treasures = self.rng.random_range(self.config.treasures.clone());
        let placements = [
            (CellKind::Treasure, treasures),
            (CellKind::Trap, self.config.traps),
            (CellKind::Wall, self.config.wall_count()),
        ];
        for (kind, count) in placements {
            for _ in 0..count {
                let Some(c) = self.random_empty_cell(grid) else {
                    return false;
                };
                grid.set(c, kind);
            }
        }
        true
    }

    /// Pick an empty cell uniformly at random by rejection sampling.
    fn random_empty_cell(&mut self, grid: &Grid) -> Option<Coord> {
        let size = grid.size();
        for _ in 0..grid.area().saturating_mul(SAMPLES_PER_CELL) {
            let c = Coord::new(
                self.rng.random_range(0..size),
                self.rng.random_range(0..size),
            );
            if grid.at(c) == Some(CellKind::Empty) {
                return Some(c);
            }
        }
        None
    }
}
