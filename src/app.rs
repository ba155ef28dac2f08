//! Control-loop state: one generator plus the user's run settings.
//!
//! The binary owns a `MazeApp`, feeds it [`MazeAction`]s from the input layer,
//! calls [`MazeApp::tick`] once per frame and renders [`MazeApp::snapshot`]
//! between ticks. Nothing here touches the terminal.

use anyhow::Result;
use log::{debug, info};

use crate::config::Config;
use crate::core::{MazeGenerator, MazeSnapshot, SimpleRng};
use crate::term::StatusView;
use crate::types::{Coord, MazeAction, MAX_STEPS_PER_FRAME};

pub struct MazeApp {
    generator: MazeGenerator<SimpleRng>,
    root: Coord,
    /// Seed that replays the current maze.
    seed: u32,
    animate: bool,
    paused: bool,
    steps_per_frame: u32,
}

impl MazeApp {
    /// Idle app over an un-generated `width x height` grid.
    pub fn new(width: usize, height: usize, seed: u32) -> Result<Self> {
        let rng = SimpleRng::new(seed);
        let seed = rng.seed();
        Ok(Self {
            generator: MazeGenerator::new(width, height, rng)?,
            root: Coord::new(0, 0),
            seed,
            animate: false,
            paused: false,
            steps_per_frame: 1,
        })
    }

    pub fn from_config(config: &Config, seed: u32) -> Result<Self> {
        let mut app = Self::new(config.width, config.height, seed)?;
        app.animate = config.animate;
        app.steps_per_frame = config.steps_per_frame.clamp(1, MAX_STEPS_PER_FRAME);
        Ok(app)
    }

    pub fn apply(&mut self, action: MazeAction) -> Result<()> {
        match action {
            MazeAction::Regenerate => self.regenerate()?,
            MazeAction::Reseed => self.reseed(rand::random())?,
            MazeAction::ToggleAnimation => {
                self.animate = !self.animate;
                self.paused = false;
                debug!("animation {}", if self.animate { "on" } else { "off" });
                if !self.animate {
                    self.finish()?;
                }
            }
            MazeAction::Pause => {
                if self.animate {
                    self.paused = !self.paused;
                }
            }
            MazeAction::Faster => {
                self.steps_per_frame = (self.steps_per_frame * 2).min(MAX_STEPS_PER_FRAME);
            }
            MazeAction::Slower => {
                self.steps_per_frame = (self.steps_per_frame / 2).max(1);
            }
        }
        Ok(())
    }

    /// Start a new maze from the current point of the random stream.
    ///
    /// In instant mode the maze is carved before this returns; in animated mode
    /// [`MazeApp::tick`] carves it.
    pub fn regenerate(&mut self) -> Result<()> {
        // Restart from the normalized state so `--seed <shown seed>` replays it.
        let rng = SimpleRng::new(self.generator.rng().seed());
        self.seed = rng.seed();
        self.generator.set_rng(rng);
        self.generator.reset(self.root)?;
        self.paused = false;
        info!(
            "generating {}x{} maze, seed {}",
            self.generator.grid().width(),
            self.generator.grid().height(),
            self.seed
        );
        if !self.animate {
            self.finish()?;
        }
        Ok(())
    }

    /// Restart the random stream at `seed`, then regenerate.
    pub fn reseed(&mut self, seed: u32) -> Result<()> {
        self.generator.set_rng(SimpleRng::new(seed));
        self.regenerate()
    }

    /// Carve whatever is left of the current maze. No-op before the first regenerate.
    pub fn finish(&mut self) -> Result<usize> {
        if !self.generator.is_started() {
            return Ok(0);
        }
        Ok(self.generator.run_to_completion()?)
    }

    /// Advance an animated run by one frame. Returns the number of steps taken.
    pub fn tick(&mut self) -> Result<usize> {
        if !self.is_animating() {
            return Ok(0);
        }
        let mut steps = 0usize;
        for _ in 0..self.steps_per_frame {
            steps += 1;
            if self.generator.step()?.is_complete() {
                break;
            }
        }
        Ok(steps)
    }

    /// True while an animated run still has work to do.
    pub fn is_animating(&self) -> bool {
        self.animate
            && !self.paused
            && self.generator.is_started()
            && !self.generator.is_complete()
    }

    pub fn generator(&self) -> &MazeGenerator<SimpleRng> {
        &self.generator
    }

    pub fn snapshot(&self) -> MazeSnapshot<'_> {
        self.generator.snapshot()
    }

    pub fn status_view(&self) -> StatusView {
        StatusView {
            seed: self.seed,
            animate: self.animate,
            paused: self.paused,
            steps_per_frame: self.steps_per_frame,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn steps_per_frame(&self) -> u32 {
        self.steps_per_frame
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}
