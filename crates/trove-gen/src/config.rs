//! Generator parameters.

use std::ops::RangeInclusive;

use trove_core::{Coord, Grid, MIN_GRID_SIZE};
use trove_paths::{bfs, dfs};

use crate::error::GenError;

/// The search used to decide whether a generated grid is solvable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Oracle {
    #[default]
    Bfs,
    Dfs,
}

impl Oracle {
    /// Whether `goal` can be reached from `start` over passable cells.
    pub fn reaches(self, grid: &Grid, start: Coord, goal: Coord) -> bool {
        let result = match self {
            Oracle::Bfs => bfs(grid, start, goal),
            Oracle::Dfs => dfs(grid, start, goal),
        };
        result.found()
    }
}

/// Parameters for [`Generator`](crate::Generator).
#[derive(Debug, Clone, PartialEq)]
pub struct GenConfig {
    /// Side length of the square grid.
    pub size: usize,
    /// Fixed start cell, or `None` to pick one at random.
    pub start: Option<Coord>,
    /// How many treasures to place; a single value range gives a fixed count.
    pub treasures: RangeInclusive<usize>,
    /// How many traps to place.
    pub traps: usize,
    /// Fraction of the grid area turned into walls (rounded down).
    pub wall_density: f64,
    /// Reachability check applied to each candidate grid.
    pub oracle: Oracle,
    /// Candidate grids tried before giving up.
    pub max_attempts: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            size: MIN_GRID_SIZE,
            start: None,
            treasures: 1..=1,
            traps: 1,
            wall_density: 0.2,
            oracle: Oracle::Bfs,
            max_attempts: 100,
        }
    }
}

impl GenConfig {
    /// Default parameters for a `size`×`size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_start(mut self, start: Coord) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_treasures(mut self, treasures: RangeInclusive<usize>) -> Self {
        self.treasures = treasures;
        self
    }

    pub fn with_traps(mut self, traps: usize) -> Self {
        self.traps = traps;
        self
    }

    pub fn with_wall_density(mut self, wall_density: f64) -> Self {
        self.wall_density = wall_density;
        self
    }

    pub fn with_oracle(mut self, oracle: Oracle) -> Self {
        self.oracle = oracle;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Number of walls placed per attempt.
    pub fn wall_count(&self) -> usize {
        (self.size.saturating_mul(self.size) as f64 * self.wall_density) as usize
    }

    /// Reject parameters that can never yield a grid.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.size < MIN_GRID_SIZE {
            return Err(trove_core::GridError::TooSmall {
                size: self.size,
                min: MIN_GRID_SIZE,
            }
            .into());
        }
        if *self.treasures.start() == 0 {
            return Err(invalid("at least one treasure is required"));
        }
        if self.treasures.is_empty() {
            return Err(invalid(format!(
                "empty treasure range {}..={}",
                self.treasures.start(),
                self.treasures.end()
            )));
        }
        if !(0.0..=1.0).contains(&self.wall_density) {
            return Err(invalid(format!(
                "wall density {} outside [0, 1]",
                self.wall_density
            )));
        }
        if let Some(start) = self.start {
            if start.row >= self.size || start.col >= self.size {
                return Err(invalid(format!(
                    "start {start} outside a {0}x{0} grid",
                    self.size
                )));
            }
        }
        if self.max_attempts == 0 {
            return Err(invalid("max_attempts must be positive"));
        }
        let area = self
            .size
            .checked_mul(self.size)
            .ok_or(trove_core::GridError::TooLarge { size: self.size })?;
        let needed = [*self.treasures.end(), self.traps, self.wall_count()]
            .into_iter()
            .try_fold(1usize, usize::checked_add)
            .ok_or_else(|| invalid("item counts overflow"))?;
        if needed > area {
            return Err(invalid(format!(
                "{needed} items do not fit in {area} cells"
            )));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> GenError {
    GenError::InvalidConfig(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_area() {
        let cfg = GenConfig::new(8);
        assert_eq!(cfg.wall_count(), 12);
        assert_eq!(GenConfig::new(10).wall_count(), 20);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn too_small() {
        assert_eq!(
            GenConfig::new(5).validate(),
            Err(GenError::Grid(trove_core::GridError::TooSmall { size: 5, min: 8 }))
        );
    }

    #[test]
    fn rejects_impossible_parameters() {
        let base = GenConfig::new(8);
        assert!(base.clone().with_treasures(0..=2).validate().is_err());
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = base.clone().with_treasures(3..=1);
        assert!(inverted.validate().is_err());
        assert!(base.clone().with_wall_density(1.5).validate().is_err());
        assert!(base.clone().with_start(Coord::new(8, 0)).validate().is_err());
        assert!(base.clone().with_max_attempts(0).validate().is_err());
        assert!(base.clone().with_traps(60).validate().is_err());
        assert!(base.with_wall_density(0.99).validate().is_err());
    }

    #[test]
    fn huge_values_are_errors_not_overflows() {
        assert_eq!(
            GenConfig::new(8).with_treasures(1..=usize::MAX).validate(),
            Err(invalid("item counts overflow"))
        );
        assert_eq!(
            GenConfig::new(8).with_traps(usize::MAX).validate(),
            Err(invalid("item counts overflow"))
        );
        let size = 1usize << (usize::BITS / 2);
        assert_eq!(
            GenConfig::new(size).validate(),
            Err(GenError::Grid(trove_core::GridError::TooLarge { size }))
        );
        assert!(GenConfig::new(usize::MAX).validate().is_err());
    }

    #[test]
    fn full_grid_is_allowed() {
        // 1 start + 1 treasure + 0 traps + 62 walls.
        let cfg = GenConfig::new(8)
            .with_traps(0)
            .with_wall_density(62.0 / 64.0);
        assert_eq!(cfg.wall_count(), 62);
        assert!(cfg.validate().is_ok());
    }
}
