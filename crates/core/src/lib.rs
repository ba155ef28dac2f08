//! Core maze logic - pure, deterministic, and testable
//!
//! This crate contains the grid model and the maze generator.
//! It has **no dependencies** on terminal I/O or input handling, making it:
//!
//! - **Deterministic**: Same seed produces the identical maze
//! - **Testable**: Every step of the walk can be inspected
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: `width x height` store of per-cell parent directions
//! - [`generator`]: randomized depth-first walk with an explicit frontier stack
//! - [`rng`]: the random-source seam plus a seeded LCG
//! - [`snapshot`]: read-only view handed to renderers between steps
//! - [`error`]: typed failures (bad dimensions, bookkeeping defects)
//!
//! # Example
//!
//! ```
//! use tui_maze_core::{MazeGenerator, SimpleRng};
//! use tui_maze_types::{Coord, StepStatus};
//!
//! let mut generator = MazeGenerator::new(8, 6, SimpleRng::new(12345)).unwrap();
//! generator.reset(Coord::new(0, 0)).unwrap();
//!
//! // Drive it one step at a time...
//! assert_ne!(generator.step().unwrap(), StepStatus::InProgress);
//!
//! // ...or finish the walk in one go.
//! generator.run_to_completion().unwrap();
//! assert!(generator.is_complete());
//! assert_eq!(generator.grid().edge_count(), 8 * 6 - 1);
//! ```

pub mod error;
pub mod generator;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use tui_maze_types as types;

pub use error::MazeError;
pub use generator::MazeGenerator;
pub use grid::Grid;
pub use rng::{RandAdapter, RandomSource, SimpleRng};
pub use snapshot::{CellPaint, MazeSnapshot};
