use std::fmt;
use std::str::FromStr;

use trove_core::Coord;

use crate::result::SearchResult;
use crate::traits::SearchSpace;
use crate::{astar, bfs, dfs, greedy, greedy_multi, ucs};

/// The single-goal search algorithms, for callers that pick one at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
    Greedy,
    Astar,
}

impl Algorithm {
    /// Every algorithm, uninformed first.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::Greedy,
        Algorithm::Astar,
    ];

    /// Short lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Ucs => "ucs",
            Algorithm::Greedy => "greedy",
            Algorithm::Astar => "astar",
        }
    }

    /// Run the algorithm from `start` to `goal`.
    pub fn run<S: SearchSpace + ?Sized>(self, space: &S, start: Coord, goal: Coord) -> SearchResult {
        match self {
            Algorithm::Bfs => bfs(space, start, goal),
            Algorithm::Dfs => dfs(space, start, goal),
            Algorithm::Ucs => ucs(space, start, goal),
            Algorithm::Greedy => greedy(space, start, goal),
            Algorithm::Astar => astar(space, start, goal),
        }
    }

    /// Visit `goals` in order using multi-goal greedy search.
    pub fn run_multi<S: SearchSpace + ?Sized>(
        space: &S,
        start: Coord,
        goals: &[Coord],
    ) -> SearchResult {
        greedy_multi(space, start, goals)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == lower)
            .or(match lower.as_str() {
                "a*" => Some(Algorithm::Astar),
                _ => None,
            })
            .ok_or_else(|| format!("unknown algorithm \u{201c}{s}\u{201d}"))
    }
}
