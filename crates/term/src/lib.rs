//! Terminal maze renderer.
//!
//! This is a small rendering layer for terminal output. A snapshot is painted
//! onto a pixel raster (cells, shared walls, openings), the raster is mapped
//! onto a framebuffer of styled character cells, and the framebuffer is
//! flushed to a terminal backend with diffing.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Read the generator only through `MazeSnapshot`, between steps
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per pixel)

pub mod fb;
pub mod maze_view;
pub mod raster;
pub mod renderer;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use maze_view::{paint_color, AnchorY, MazeView, StatusView, Viewport};
pub use raster::{paint_maze, raster_size, Paint, PixelSink, Raster};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
