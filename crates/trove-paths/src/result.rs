use std::time::Duration;

use trove_core::Coord;

/// Outcome of one search invocation.
///
/// An empty path means no route was found; a start-equals-goal search
/// yields the single-element path `[start]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    path: Vec<Coord>,
    nodes_expanded: usize,
    runtime: Duration,
}

impl SearchResult {
    pub fn new(path: Vec<Coord>, nodes_expanded: usize, runtime: Duration) -> Self {
        Self {
            path,
            nodes_expanded,
            runtime,
        }
    }

    /// The coordinates visited, start first.
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// Number of coordinates popped from the frontier and expanded.
    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// Wall-clock time spent in the search.
    pub fn runtime(&self) -> Duration {
        self.runtime
    }

    /// Whether any path was found.
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of steps in the path, or `None` if no path was found.
    pub fn edges(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    /// Whether the path ends on `goal`.
    ///
    /// For multi-goal runs this tells a completed tour from a partial one.
    pub fn reaches(&self, goal: Coord) -> bool {
        self.path.last() == Some(&goal)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_result_round_trip() {
        let r = SearchResult::new(
            vec![Coord::new(0, 0), Coord::new(1, 0)],
            2,
            Duration::from_nanos(1500),
        );
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
