//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::MazeAction`]s; the control loop
//! decides what each action does to the generator.

pub mod map;

pub use tui_maze_types as types;

pub use map::{handle_key_event, should_quit};
