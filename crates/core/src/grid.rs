//! Grid module - the cell store the generator carves into
//!
//! The grid is a `width x height` array of parent directions, one per cell.
//! Uses a flat vector in row-major order (`y * width + x`).
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges 0..height (top to bottom)

use crate::error::MazeError;
use crate::types::{Coord, Direction, ParentDirection};

/// The maze grid - flat storage of one parent direction per cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<ParentDirection>,
}

impl Grid {
    /// Create a new grid with every cell unvisited
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_maze_core::Grid;
    ///
    /// let grid = Grid::new(4, 3).unwrap();
    /// assert_eq!(grid.len(), 12);
    /// assert_eq!(grid.get(3, 2), Ok(None));
    /// assert!(Grid::new(0, 3).is_err());
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0)
            .ok_or(MazeError::InvalidDimension { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![None; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Raw row-major cell slice
    pub fn cells(&self) -> &[ParentDirection] {
        &self.cells
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    pub fn index(&self, coord: Coord) -> Result<usize, MazeError> {
        if !self.contains(coord) {
            return Err(self.out_of_bounds(coord));
        }
        Ok(coord.y * self.width + coord.x)
    }

    /// Coordinate of a flat index
    pub fn coord(&self, index: usize) -> Result<Coord, MazeError> {
        let coord = Coord::new(index % self.width, index / self.width);
        if index >= self.cells.len() {
            return Err(self.out_of_bounds(coord));
        }
        Ok(coord)
    }

    /// Get the parent direction at (x, y)
    pub fn get(&self, x: usize, y: usize) -> Result<ParentDirection, MazeError> {
        self.at(Coord::new(x, y))
    }

    /// Set the parent direction at (x, y)
    pub fn set(&mut self, x: usize, y: usize, direction: ParentDirection) -> Result<(), MazeError> {
        self.put(Coord::new(x, y), direction)
    }

    /// Coordinate form of [`Grid::get`]
    pub fn at(&self, coord: Coord) -> Result<ParentDirection, MazeError> {
        let idx = self.index(coord)?;
        Ok(self.cells[idx])
    }

    /// Coordinate form of [`Grid::set`]
    pub fn put(&mut self, coord: Coord, direction: ParentDirection) -> Result<(), MazeError> {
        let idx = self.index(coord)?;
        self.cells[idx] = direction;
        Ok(())
    }

    /// The in-bounds neighbor of `coord` in `direction`, if any
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        coord.step(direction).filter(|n| self.contains(*n))
    }

    /// Mark every cell unvisited
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Number of cells holding a direction, i.e. tree edges once a run is complete
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// True when every cell except `exempt` holds a direction.
    ///
    /// `exempt` may itself hold a direction or not.
    pub fn is_complete(&self, exempt: Coord) -> bool {
        let skip = self.index(exempt).ok();
        self.cells
            .iter()
            .enumerate()
            .all(|(i, cell)| cell.is_some() || Some(i) == skip)
    }

    fn out_of_bounds(&self, coord: Coord) -> MazeError {
        MazeError::OutOfBounds {
            x: coord.x,
            y: coord.y,
            width: self.width,
            height: self.height,
        }
    }
}
