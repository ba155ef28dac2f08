//! TUI Maze (workspace facade crate).
//!
//! Re-exports the member crates under `tui_maze::{core,input,term,types}` and
//! holds the pieces shared by the binary and the integration tests: the
//! command-line [`config`] and the control-loop state in [`app`].

pub use tui_maze_core as core;
pub use tui_maze_input as input;
pub use tui_maze_term as term;
pub use tui_maze_types as types;

pub mod app;
pub mod config;

pub use app::MazeApp;
pub use config::Config;
