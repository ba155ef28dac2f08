//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (generator, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Cells are addressed by `(x, y)` where `x` grows to the right and `y` grows
//! downwards. The root of a generation run is conventionally `(0, 0)`, the top
//! left cell.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_MAZE_WIDTH` | 50 | Maze width in cells |
//! | `DEFAULT_MAZE_HEIGHT` | 50 | Maze height in cells |
//! | `DEFAULT_PATH_WIDTH` | 1 | Cell interior width in raster pixels |
//! | `MAX_PATH_WIDTH` | 8 | Upper bound for the path width |
//! | `FRAME_MS` | 16 | Animation frame interval (~60 FPS) |
//! | `DEFAULT_STEPS_PER_FRAME` | 4 | Generator steps per animated frame |
//! | `MAX_STEPS_PER_FRAME` | 4096 | Upper bound for steps per frame |
//!
//! # Examples
//!
//! ```
//! use tui_maze_types::{Coord, Direction};
//!
//! let origin = Coord::new(0, 0);
//! assert_eq!(origin.step(Direction::Right), Some(Coord::new(1, 0)));
//! assert_eq!(origin.step(Direction::Up), None);
//!
//! assert_eq!(Direction::Left.reverse(), Direction::Right);
//! ```

/// Default maze width in cells.
pub const DEFAULT_MAZE_WIDTH: usize = 50;

/// Default maze height in cells.
pub const DEFAULT_MAZE_HEIGHT: usize = 50;

/// Default width of a cell interior, in raster pixels.
pub const DEFAULT_PATH_WIDTH: u16 = 1;

/// Largest accepted path width.
pub const MAX_PATH_WIDTH: u16 = 8;

/// Animation frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Generator steps taken per animated frame.
pub const DEFAULT_STEPS_PER_FRAME: u32 = 4;

/// Largest accepted steps-per-frame value.
pub const MAX_STEPS_PER_FRAME: u32 = 4096;

/// The four grid-axis directions.
///
/// The declaration order is the order in which neighbors are considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// All directions in neighbor enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// The opposite direction (Up↔Down, Left↔Right).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_maze_types::Direction;
    ///
    /// assert_eq!(Direction::Up.reverse(), Direction::Down);
    /// assert_eq!(Direction::Down.reverse(), Direction::Up);
    /// assert_eq!(Direction::Left.reverse(), Direction::Right);
    /// assert_eq!(Direction::Right.reverse(), Direction::Left);
    /// ```
    pub fn reverse(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit offset `(dx, dy)` of a single step in this direction.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
        }
    }
}

/// A grid cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Move one step in `direction`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// Upper bounds are the grid's concern.
    pub fn step(&self, direction: Direction) -> Option<Coord> {
        let (dx, dy) = direction.offset();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Coord { x, y })
    }
}

/// A cell's parent direction.
///
/// - `None`: unvisited (or the terminal cell of a finished run)
/// - `Some(Direction)`: the wall of this cell that is open
pub type ParentDirection = Option<Direction>;

/// Outcome of a single generator step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepStatus {
    /// Reset done, no step taken yet.
    InProgress,
    /// Carved into an unvisited neighbor.
    Advanced,
    /// Hit a dead end and popped the frontier.
    Backtracked,
    /// Every cell has been visited.
    Complete,
}

impl StepStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, StepStatus::Complete)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::InProgress => "in progress",
            StepStatus::Advanced => "advanced",
            StepStatus::Backtracked => "backtracked",
            StepStatus::Complete => "complete",
        }
    }
}

/// User-level actions driven by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeAction {
    /// Reset and carve a new maze with the next seed from the current stream.
    Regenerate,
    /// Reset and carve a new maze with a freshly drawn seed.
    Reseed,
    /// Switch between instant and animated carving.
    ToggleAnimation,
    /// Pause or resume an animated carve.
    Pause,
    /// Take more generator steps per frame.
    Faster,
    /// Take fewer generator steps per frame.
    Slower,
}
