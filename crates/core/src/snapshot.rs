//! Read-only generator view handed to renderers between steps.

use crate::grid::Grid;
use crate::types::{Coord, ParentDirection};

/// How a renderer should paint a cell interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellPaint {
    Unvisited,
    Settled,
    /// Active cell of an unfinished walk.
    Frontier,
}

/// Borrowed, read-only view of a generator between steps.
#[derive(Debug, Clone, Copy)]
pub struct MazeSnapshot<'a> {
    pub grid: &'a Grid,
    pub frontier: Option<Coord>,
    pub complete: bool,
    pub visited: usize,
    pub total: usize,
}

impl<'a> MazeSnapshot<'a> {
    /// View of a bare grid with no walk in progress.
    pub fn of_grid(grid: &'a Grid) -> Self {
        Self {
            grid,
            frontier: None,
            complete: false,
            visited: grid.edge_count(),
            total: grid.len(),
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Direction stored at `coord`; out-of-bounds reads as unvisited.
    pub fn direction(&self, coord: Coord) -> ParentDirection {
        self.grid.at(coord).ok().flatten()
    }

    /// Paint state of `coord`.
    ///
    /// The frontier highlight is dropped once the run is complete, and the
    /// final frontier cell (which never gets a direction) paints as settled.
    pub fn paint(&self, coord: Coord) -> CellPaint {
        if self.frontier == Some(coord) {
            if self.complete {
                return CellPaint::Settled;
            }
            return CellPaint::Frontier;
        }
        match self.direction(coord) {
            Some(_) => CellPaint::Settled,
            None if self.complete => CellPaint::Settled,
            None => CellPaint::Unvisited,
        }
    }
}
