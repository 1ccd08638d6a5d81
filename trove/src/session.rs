//! The current grid and the searches run on it.

use rand::rngs::StdRng;
use trove_core::{Coord, Grid};
use trove_gen::{GenConfig, GenError, Generator};
use trove_paths::{Algorithm, SearchResult, bfs};

/// One search run, ready for display.
#[derive(Debug, Clone)]
pub struct Report {
    pub label: String,
    pub goals: Vec<Coord>,
    pub result: SearchResult,
}

impl Report {
    /// Whether the path ends on the last requested goal.
    pub fn complete(&self) -> bool {
        self.goals.last().is_some_and(|&g| self.result.reaches(g))
    }
}

/// A grid plus the means to regenerate it.
pub struct Session {
    grid: Grid,
    generator: Option<Generator<StdRng>>,
}

impl Session {
    /// Start a session on a freshly generated grid.
    pub fn generate(config: GenConfig, seed: u64) -> Result<Self, GenError> {
        let mut generator = Generator::seeded(config, seed);
        let grid = generator.generate()?;
        Ok(Self {
            grid,
            generator: Some(generator),
        })
    }

    /// Start a session on a fixed grid. [`regenerate`](Self::regenerate)
    /// keeps it unchanged.
    pub fn fixed(grid: Grid) -> Self {
        Self {
            grid,
            generator: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether [`regenerate`](Self::regenerate) can produce a new grid.
    pub fn can_regenerate(&self) -> bool {
        self.generator.is_some()
    }

    /// Replace the grid with a new one from the same generator.
    pub fn regenerate(&mut self) -> Result<(), GenError> {
        if let Some(generator) = &mut self.generator {
            self.grid = generator.generate()?;
        }
        Ok(())
    }

    /// Goal for single-goal searches: the first treasure BFS can reach,
    /// else the first treasure.
    pub fn target(&self) -> Option<Coord> {
        let start = self.grid.start()?;
        let treasures = self.grid.treasures();
        treasures
            .iter()
            .copied()
            .find(|&t| bfs(&self.grid, start, t).found())
            .or_else(|| treasures.first().copied())
    }

    /// Run one algorithm from the start to [`target`](Self::target).
    pub fn run(&self, algorithm: Algorithm) -> Option<Report> {
        let start = self.grid.start()?;
        let goal = self.target()?;
        Some(Report {
            label: algorithm.name().to_string(),
            goals: vec![goal],
            result: algorithm.run(&self.grid, start, goal),
        })
    }

    /// Visit every treasure in row-major order with multi-goal greedy search.
    pub fn run_tour(&self) -> Option<Report> {
        let start = self.grid.start()?;
        let goals = self.grid.treasures();
        let result = Algorithm::run_multi(&self.grid, start, &goals);
        Some(Report {
            label: "greedy tour".to_string(),
            goals,
            result,
        })
    }

    /// Every single-goal algorithm followed by the tour.
    pub fn run_all(&self) -> Vec<Report> {
        Algorithm::ALL
            .into_iter()
            .filter_map(|a| self.run(a))
            .chain(self.run_tour())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_TREASURES: &str = "\
S.......
........
..T.....
........
.....#..
....#T#.
.....#..
........";

    #[test]
    fn target_skips_unreachable_treasure() {
        let grid = Grid::from_layout(&TWO_TREASURES.replacen("..T.....", "........", 1)).unwrap();
        let s = Session::fixed(grid);
        // Only the enclosed treasure is left, so it is used as a fallback.
        assert_eq!(s.target(), Some(Coord::new(5, 5)));

        let s = Session::fixed(Grid::from_layout(TWO_TREASURES).unwrap());
        assert_eq!(s.target(), Some(Coord::new(2, 2)));
    }

    #[test]
    fn run_all_reports_each_algorithm_and_tour() {
        let s = Session::fixed(Grid::from_layout(TWO_TREASURES).unwrap());
        let reports = s.run_all();
        let labels: Vec<_> = reports.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["bfs", "dfs", "ucs", "greedy", "astar", "greedy tour"]
        );
        assert!(reports[..5].iter().all(Report::complete));
        // The second treasure is walled in.
        assert!(!reports[5].complete());
        assert!(reports[5].result.reaches(Coord::new(2, 2)));
    }

    #[test]
    fn fixed_session_does_not_regenerate() {
        let grid = Grid::from_layout(TWO_TREASURES).unwrap();
        let mut s = Session::fixed(grid.clone());
        assert!(!s.can_regenerate());
        s.regenerate().unwrap();
        assert_eq!(s.grid(), &grid);
    }

    #[test]
    fn generated_session_regenerates() {
        let mut s = Session::generate(GenConfig::new(10), 5).unwrap();
        assert!(s.can_regenerate());
        assert!(s.run(Algorithm::Astar).is_some_and(|r| r.complete()));
        s.regenerate().unwrap();
        assert_eq!(s.grid().size(), 10);
        assert!(s.run(Algorithm::Bfs).is_some_and(|r| r.complete()));
    }

    #[test]
    fn bundled_layouts() {
        let corridors =
            Session::fixed(Grid::from_layout(include_str!("../layouts/corridors.txt")).unwrap());
        assert_eq!(corridors.grid().size(), 10);
        assert_eq!(corridors.grid().treasures().len(), 2);
        let tour = corridors.run_tour().unwrap();
        assert!(tour.complete());

        let walled =
            Session::fixed(Grid::from_layout(include_str!("../layouts/walled.txt")).unwrap());
        assert!(!walled.run_tour().unwrap().complete());
    }
}
