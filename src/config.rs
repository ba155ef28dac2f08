//! Command-line and environment configuration.
//!
//! Every option can be given as a flag or through the matching `MAZE_*`
//! environment variable; flags win.

use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::Parser;

use crate::types::{
    DEFAULT_MAZE_HEIGHT, DEFAULT_MAZE_WIDTH, DEFAULT_PATH_WIDTH, DEFAULT_STEPS_PER_FRAME,
    FRAME_MS, MAX_PATH_WIDTH, MAX_STEPS_PER_FRAME,
};

/// Perfect-maze generator for the terminal
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Maze width in cells
    #[arg(long, env = "MAZE_WIDTH", default_value_t = DEFAULT_MAZE_WIDTH)]
    pub width: usize,

    /// Maze height in cells
    #[arg(long, env = "MAZE_HEIGHT", default_value_t = DEFAULT_MAZE_HEIGHT)]
    pub height: usize,

    /// Random seed (drawn at startup when omitted)
    #[arg(long, env = "MAZE_SEED")]
    pub seed: Option<u32>,

    /// Cell interior width in raster pixels
    #[arg(long, env = "MAZE_PATH_WIDTH", default_value_t = DEFAULT_PATH_WIDTH)]
    pub path_width: u16,

    /// Carve step by step instead of all at once
    #[arg(long, env = "MAZE_ANIMATE")]
    pub animate: bool,

    /// Generator steps per animated frame
    #[arg(long, env = "MAZE_STEPS_PER_FRAME", default_value_t = DEFAULT_STEPS_PER_FRAME)]
    pub steps_per_frame: u32,

    /// Frame interval in milliseconds
    #[arg(long, env = "MAZE_FRAME_MS", default_value_t = FRAME_MS)]
    pub frame_ms: u32,

    /// Carve a maze at startup instead of waiting for Enter
    #[arg(long)]
    pub generate: bool,

    /// Print one maze as text and exit
    #[arg(long)]
    pub print: bool,

    /// Write logs to this file (the terminal UI owns stdout/stderr)
    #[arg(long, env = "MAZE_LOG_PATH")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAZE_WIDTH,
            height: DEFAULT_MAZE_HEIGHT,
            seed: None,
            path_width: DEFAULT_PATH_WIDTH,
            animate: false,
            steps_per_frame: DEFAULT_STEPS_PER_FRAME,
            frame_ms: FRAME_MS,
            generate: false,
            print: false,
            log_file: None,
        }
    }
}

impl Config {
    /// Reject values the generator or renderer cannot work with.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width > 0 && self.height > 0,
            "maze size must be positive, got {}x{}",
            self.width,
            self.height
        );
        ensure!(
            self.width.checked_mul(self.height).is_some(),
            "maze size {}x{} is too large",
            self.width,
            self.height
        );
        ensure!(
            (1..=MAX_PATH_WIDTH).contains(&self.path_width),
            "path width must be in 1..={MAX_PATH_WIDTH}, got {}",
            self.path_width
        );
        ensure!(
            (1..=MAX_STEPS_PER_FRAME).contains(&self.steps_per_frame),
            "steps per frame must be in 1..={MAX_STEPS_PER_FRAME}, got {}",
            self.steps_per_frame
        );
        ensure!(self.frame_ms > 0, "frame interval must be positive");
        Ok(())
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}
