//! Error type for grid and generator operations.
//!
//! None of these are expected during correct operation. They exist to stop a run
//! as soon as a bookkeeping defect shows up instead of carving a broken maze.

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MazeError {
    /// The grid would have no cells (or more than `usize` can index).
    #[error("invalid maze dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// A coordinate fell outside the grid.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// The frontier collapsed, or lost its direction links, before every cell was visited.
    #[error("frontier collapsed after visiting {visited} of {total} cells")]
    Inconsistent { visited: usize, total: usize },

    /// `step()` was called before the first `reset()`.
    #[error("generator has not been reset")]
    NotStarted,
}
