//! Randomized depth-first maze generator.
//!
//! The generator carves a spanning tree into a [`Grid`] with an explicit
//! frontier stack instead of recursion, one unit of work per [`MazeGenerator::step`].
//! That makes it easy to drive from a frame loop (one or a few steps per frame)
//! or to run to completion in one go.
//!
//! # Direction bookkeeping
//!
//! A cell's direction has two meanings over a run:
//!
//! - When the walk advances out of a cell, the cell records the *forward*
//!   direction it left through.
//! - When the walk backtracks out of a dead end, the popped cell is re-coded to
//!   the reverse of the new stack top's direction, so it points back at the
//!   cell that discovered it.
//!
//! Renderers read the final value as "the open wall of this cell". Cells still
//! on the stack when the last cell is reached keep their forward direction, and
//! the last cell keeps `None`: every tree edge is still opened from exactly one
//! side.

use arrayvec::ArrayVec;
use log::{debug, trace, warn};

use crate::error::MazeError;
use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::snapshot::MazeSnapshot;
use crate::types::{Coord, Direction, StepStatus};

/// Iterative randomized-DFS generator owning its grid and random source.
#[derive(Debug, Clone)]
pub struct MazeGenerator<R> {
    grid: Grid,
    /// Walk path from the root to the active cell (last element).
    frontier: Vec<Coord>,
    visited: usize,
    root: Coord,
    status: StepStatus,
    started: bool,
    rng: R,
}

impl<R: RandomSource> MazeGenerator<R> {
    /// Create an idle generator over a fresh `width x height` grid.
    ///
    /// Call [`MazeGenerator::reset`] before stepping.
    pub fn new(width: usize, height: usize, rng: R) -> Result<Self, MazeError> {
        let grid = Grid::new(width, height)?;
        Ok(Self {
            frontier: Vec::with_capacity(grid.len()),
            grid,
            visited: 0,
            root: Coord::default(),
            status: StepStatus::InProgress,
            started: false,
            rng,
        })
    }

    /// Clear the grid and seed the frontier with `root`.
    pub fn reset(&mut self, root: Coord) -> Result<(), MazeError> {
        self.grid.index(root)?;

        self.grid.clear();
        self.frontier.clear();
        self.frontier.push(root);
        self.visited = 1;
        self.root = root;
        self.status = StepStatus::InProgress;
        self.started = true;

        debug!(
            "reset {}x{} maze at root ({}, {})",
            self.grid.width(),
            self.grid.height(),
            root.x,
            root.y
        );
        Ok(())
    }

    /// Perform one unit of the walk.
    ///
    /// Returns `Complete` once every cell is visited, and keeps returning it
    /// (without touching the grid) until the next reset.
    pub fn step(&mut self) -> Result<StepStatus, MazeError> {
        if !self.started {
            return Err(MazeError::NotStarted);
        }
        if self.status.is_complete() {
            return Ok(StepStatus::Complete);
        }

        let Some(&current) = self.frontier.last() else {
            return Err(self.inconsistent());
        };

        let candidates = self.valid_neighbors(current);
        let status = if candidates.is_empty() {
            self.backtrack(current)?
        } else {
            let pick = self.rng.next_index(candidates.len());
            let Some(&(direction, next)) = candidates.get(pick) else {
                warn!("random source picked {pick} of {} candidates", candidates.len());
                return Err(self.inconsistent());
            };
            self.advance(current, direction, next)?
        };

        let status = if self.visited == self.grid.len() {
            StepStatus::Complete
        } else {
            status
        };
        self.status = status;

        trace!(
            "step at ({}, {}): {} ({}/{})",
            current.x,
            current.y,
            status.as_str(),
            self.visited,
            self.grid.len()
        );
        if status.is_complete() {
            debug!("maze complete, {} cells visited", self.visited);
        }
        Ok(status)
    }

    /// Step until the maze is complete. Returns the number of steps taken.
    pub fn run_to_completion(&mut self) -> Result<usize, MazeError> {
        if !self.started {
            return Err(MazeError::NotStarted);
        }

        // Every cell is pushed once and popped at most once.
        let limit = self.grid.len().saturating_mul(2);
        let mut steps = 0usize;
        while !self.status.is_complete() {
            if steps >= limit {
                return Err(self.inconsistent());
            }
            self.step()?;
            steps += 1;
        }
        Ok(steps)
    }

    /// The active cell (stack top), or `None` once the stack is empty.
    pub fn current_frontier(&self) -> Option<Coord> {
        self.frontier.last().copied()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The walk path, root first.
    pub fn frontier(&self) -> &[Coord] {
        &self.frontier
    }

    /// Number of visited cells.
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Number of cells in the grid.
    pub fn total(&self) -> usize {
        self.grid.len()
    }

    pub fn root(&self) -> Coord {
        self.root
    }

    pub fn status(&self) -> StepStatus {
        self.status
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_complete(&self) -> bool {
        self.started && self.status.is_complete()
    }

    /// Swap the random source; takes effect from the next step.
    pub fn set_rng(&mut self, rng: R) {
        self.rng = rng;
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Read-only view for renderers.
    pub fn snapshot(&self) -> MazeSnapshot<'_> {
        MazeSnapshot {
            grid: &self.grid,
            frontier: self.current_frontier(),
            complete: self.is_complete(),
            visited: self.visited,
            total: self.grid.len(),
        }
    }

    /// In-bounds unvisited neighbors of `cell`, in `Direction::ALL` order.
    fn valid_neighbors(&self, cell: Coord) -> ArrayVec<(Direction, Coord), 4> {
        let mut out = ArrayVec::new();
        for direction in Direction::ALL {
            let Some(next) = self.grid.neighbor(cell, direction) else {
                continue;
            };
            if matches!(self.grid.at(next), Ok(None)) {
                out.push((direction, next));
            }
        }
        out
    }

    fn advance(
        &mut self,
        current: Coord,
        direction: Direction,
        next: Coord,
    ) -> Result<StepStatus, MazeError> {
        self.grid.put(current, Some(direction))?;
        self.frontier.push(next);
        self.visited += 1;
        Ok(StepStatus::Advanced)
    }

    fn backtrack(&mut self, current: Coord) -> Result<StepStatus, MazeError> {
        self.frontier.pop();

        let Some(&previous) = self.frontier.last() else {
            if self.visited == self.grid.len() {
                return Ok(StepStatus::Complete);
            }
            return Err(self.inconsistent());
        };

        // `previous` last advanced into `current`; point `current` back at it.
        let Some(direction) = self.grid.at(previous)? else {
            return Err(self.inconsistent());
        };
        self.grid.put(current, Some(direction.reverse()))?;
        Ok(StepStatus::Backtracked)
    }

    fn inconsistent(&self) -> MazeError {
        let err = MazeError::Inconsistent {
            visited: self.visited,
            total: self.grid.len(),
        };
        warn!("{err}");
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    /// Always picks the first valid candidate.
    struct FirstChoice;

    impl RandomSource for FirstChoice {
        fn next_index(&mut self, _len: usize) -> usize {
            0
        }
    }

    #[test]
    fn step_before_reset_is_rejected() {
        let mut generator = MazeGenerator::new(3, 3, SimpleRng::new(1)).unwrap();
        assert_eq!(generator.step(), Err(MazeError::NotStarted));
        assert_eq!(generator.run_to_completion(), Err(MazeError::NotStarted));
        assert_eq!(generator.current_frontier(), None);
    }

    #[test]
    fn reset_rejects_root_outside_grid() {
        let mut generator = MazeGenerator::new(3, 2, SimpleRng::new(1)).unwrap();
        assert!(matches!(
            generator.reset(Coord::new(3, 0)),
            Err(MazeError::OutOfBounds { x: 3, y: 0, .. })
        ));
        assert!(!generator.is_started());
    }

    #[test]
    fn valid_neighbors_follow_enumeration_order() {
        let mut generator = MazeGenerator::new(3, 3, FirstChoice).unwrap();
        generator.reset(Coord::new(1, 1)).unwrap();

        let dirs: Vec<Direction> = generator
            .valid_neighbors(Coord::new(1, 1))
            .iter()
            .map(|(d, _)| *d)
            .collect();
        assert_eq!(
            dirs,
            vec![Direction::Up, Direction::Left, Direction::Down, Direction::Right]
        );

        // Corner only sees two.
        let dirs: Vec<Direction> = generator
            .valid_neighbors(Coord::new(0, 0))
            .iter()
            .map(|(d, _)| *d)
            .collect();
        assert_eq!(dirs, vec![Direction::Down, Direction::Right]);
    }

    #[test]
    fn backtrack_points_popped_cell_at_previous() {
        // 3x1 rooted in the middle, first-choice picks:
        // (1,0) Left -> (0,0) dead end, backtrack, then Right -> (2,0).
        let mut generator = MazeGenerator::new(3, 1, FirstChoice).unwrap();
        generator.reset(Coord::new(1, 0)).unwrap();

        assert_eq!(generator.step(), Ok(StepStatus::Advanced));
        assert_eq!(generator.grid().get(1, 0), Ok(Some(Direction::Left)));
        assert_eq!(generator.current_frontier(), Some(Coord::new(0, 0)));

        assert_eq!(generator.step(), Ok(StepStatus::Backtracked));
        assert_eq!(generator.grid().get(0, 0), Ok(Some(Direction::Right)));
        assert_eq!(generator.current_frontier(), Some(Coord::new(1, 0)));

        assert_eq!(generator.step(), Ok(StepStatus::Complete));
        assert_eq!(generator.grid().get(1, 0), Ok(Some(Direction::Right)));
        assert_eq!(generator.grid().get(2, 0), Ok(None));
    }

    #[test]
    fn step_after_completion_is_stable() {
        let mut generator = MazeGenerator::new(4, 4, SimpleRng::new(3)).unwrap();
        generator.reset(Coord::new(0, 0)).unwrap();
        generator.run_to_completion().unwrap();

        let grid = generator.grid().clone();
        let frontier = generator.frontier().to_vec();
        assert_eq!(generator.step(), Ok(StepStatus::Complete));
        assert_eq!(generator.grid(), &grid);
        assert_eq!(generator.frontier(), frontier.as_slice());
        assert_eq!(generator.run_to_completion(), Ok(0));
    }

    /// Answers one past the end of every range.
    struct OutOfRange;

    impl RandomSource for OutOfRange {
        fn next_index(&mut self, len: usize) -> usize {
            len
        }
    }

    #[test]
    fn out_of_range_choice_is_inconsistent() {
        let mut generator = MazeGenerator::new(3, 3, OutOfRange).unwrap();
        generator.reset(Coord::new(0, 0)).unwrap();

        assert_eq!(
            generator.step(),
            Err(MazeError::Inconsistent {
                visited: 1,
                total: 9
            })
        );
        assert!(generator.grid().cells().iter().all(|c| c.is_none()));
        assert!(matches!(
            generator.run_to_completion(),
            Err(MazeError::Inconsistent { .. })
        ));
    }

    #[test]
    fn frontier_emptied_early_is_inconsistent() {
        let mut generator = MazeGenerator::new(3, 1, FirstChoice).unwrap();
        generator.reset(Coord::new(0, 0)).unwrap();
        // The root's only neighbor looks visited, so the first step pops the root.
        generator.grid.put(Coord::new(1, 0), Some(Direction::Left)).unwrap();

        assert_eq!(
            generator.step(),
            Err(MazeError::Inconsistent {
                visited: 1,
                total: 3
            })
        );
        assert!(generator.frontier().is_empty());
        assert_eq!(
            generator.run_to_completion(),
            Err(MazeError::Inconsistent {
                visited: 1,
                total: 3
            })
        );
    }

    #[test]
    fn previous_cell_without_direction_is_inconsistent() {
        let mut generator = MazeGenerator::new(3, 1, FirstChoice).unwrap();
        generator.reset(Coord::new(0, 0)).unwrap();
        // (2,0) on top of a root that never advanced, with its only neighbor taken.
        generator.frontier.push(Coord::new(2, 0));
        generator.grid.put(Coord::new(1, 0), Some(Direction::Left)).unwrap();

        assert!(matches!(
            generator.step(),
            Err(MazeError::Inconsistent { .. })
        ));
        assert_eq!(generator.grid().get(2, 0), Ok(None));
    }

    #[test]
    fn runaway_walk_hits_step_limit() {
        let mut generator = MazeGenerator::new(3, 1, FirstChoice).unwrap();
        generator.reset(Coord::new(0, 0)).unwrap();
        // A stack of repeated dead ends that never visits anything new.
        generator.grid.put(Coord::new(0, 0), Some(Direction::Right)).unwrap();
        generator.grid.put(Coord::new(1, 0), Some(Direction::Left)).unwrap();
        generator.frontier = vec![Coord::new(0, 0); 10];

        assert_eq!(generator.step(), Ok(StepStatus::Backtracked));
        assert_eq!(
            generator.run_to_completion(),
            Err(MazeError::Inconsistent {
                visited: 1,
                total: 3
            })
        );
        // Limit is 2 * 3 steps on top of the one above.
        assert_eq!(generator.frontier().len(), 10 - 1 - 6);
    }
}
