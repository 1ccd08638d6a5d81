use thiserror::Error;
use trove_core::GridError;

/// Why a grid could not be generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    #[error(transparent)]
    Grid(#[from] GridError),
    /// The configuration can never produce a grid.
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),
    /// No solvable layout within the retry budget.
    #[error("no solvable grid found after {attempts} attempts")]
    Exhausted { attempts: usize },
}
