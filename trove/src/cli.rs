//! Command-line options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use trove_gen::{GenConfig, Oracle};
use trove_paths::Algorithm;

/// Which search to run in batch mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SearchChoice {
    Bfs,
    Dfs,
    Ucs,
    Greedy,
    Astar,
    /// Multi-goal greedy over every treasure.
    Tour,
    /// Every algorithm followed by the tour.
    All,
}

impl SearchChoice {
    /// The single-goal algorithm, if this choice names one.
    pub fn algorithm(self) -> Option<Algorithm> {
        match self {
            SearchChoice::Bfs => Some(Algorithm::Bfs),
            SearchChoice::Dfs => Some(Algorithm::Dfs),
            SearchChoice::Ucs => Some(Algorithm::Ucs),
            SearchChoice::Greedy => Some(Algorithm::Greedy),
            SearchChoice::Astar => Some(Algorithm::Astar),
            SearchChoice::Tour | SearchChoice::All => None,
        }
    }
}

/// Reachability check used while generating.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OracleChoice {
    Bfs,
    Dfs,
}

impl From<OracleChoice> for Oracle {
    fn from(o: OracleChoice) -> Self {
        match o {
            OracleChoice::Bfs => Oracle::Bfs,
            OracleChoice::Dfs => Oracle::Dfs,
        }
    }
}

/// Generate treasure-hunt grids and explore them with graph search.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// Side length of the grid (at least 8)
    #[arg(short, long, default_value_t = 8)]
    pub size: usize,

    /// Seed for a reproducible grid (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Load a fixed layout file instead of generating a grid
    #[arg(short, long)]
    pub layout: Option<PathBuf>,

    /// Fewest treasures to place
    #[arg(long, default_value_t = 1)]
    pub min_treasures: usize,

    /// Most treasures to place (defaults to --min-treasures)
    #[arg(long)]
    pub max_treasures: Option<usize>,

    /// Number of traps
    #[arg(long, default_value_t = 1)]
    pub traps: usize,

    /// Fraction of the grid covered by walls
    #[arg(long, default_value_t = 0.2)]
    pub wall_density: f64,

    /// Search used to check that a generated grid is solvable
    #[arg(value_enum, long, default_value_t = OracleChoice::Bfs)]
    pub oracle: OracleChoice,

    /// Candidate grids to try before giving up
    #[arg(long, default_value_t = 100)]
    pub attempts: usize,

    /// Search to run in batch mode
    #[arg(value_enum, short, long, default_value_t = SearchChoice::All)]
    pub algorithm: SearchChoice,

    /// Run the interactive terminal view
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,

    /// Print plain symbols without colours
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    /// Generator parameters described by the options.
    pub fn gen_config(&self) -> GenConfig {
        let max = self.max_treasures.unwrap_or(self.min_treasures);
        GenConfig::new(self.size)
            .with_treasures(self.min_treasures..=max)
            .with_traps(self.traps)
            .with_wall_density(self.wall_density)
            .with_oracle(self.oracle.into())
            .with_max_attempts(self.attempts)
    }
}
