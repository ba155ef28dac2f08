//! Pixel-level painting of a maze snapshot.
//!
//! The maze is laid out on a raster where every cell owns a `path_width`²
//! interior and shares one-pixel walls with its neighbors:
//!
//! ```text
//! #########   two cells, path_width = 3
//! #.......#   # wall, . interior
//! #.......#   cell (0,0) holds Right, so the wall column
//! #.......#   between the two interiors is open
//! #########
//! ```
//!
//! Cell `(x, y)` has its top-left interior pixel at
//! `(1 + x * (path_width + 1), 1 + y * (path_width + 1))`. Everything not
//! painted by a cell stays wall.

use tui_maze_core::{CellPaint, MazeSnapshot};

use crate::types::{Coord, Direction};

/// What a raster pixel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Paint {
    #[default]
    Wall,
    /// Carved interior or an opened wall.
    Path,
    Unvisited,
    Frontier,
}

impl From<CellPaint> for Paint {
    fn from(value: CellPaint) -> Self {
        match value {
            CellPaint::Unvisited => Paint::Unvisited,
            CellPaint::Settled => Paint::Path,
            CellPaint::Frontier => Paint::Frontier,
        }
    }
}

/// Anything that accepts painted pixels.
pub trait PixelSink {
    fn put(&mut self, x: usize, y: usize, paint: Paint);
}

/// Raster dimensions `(width, height)` in pixels for a maze of `cols x rows` cells.
pub fn raster_size(cols: usize, rows: usize, path_width: u16) -> (usize, usize) {
    let pitch = path_width as usize + 1;
    (
        cols.saturating_mul(pitch).saturating_add(1),
        rows.saturating_mul(pitch).saturating_add(1),
    )
}

/// Paint every cell of `snap` into `sink`.
///
/// The sink is expected to already read as [`Paint::Wall`] everywhere.
pub fn paint_maze<S: PixelSink>(snap: &MazeSnapshot<'_>, path_width: u16, sink: &mut S) {
    let pw = path_width.max(1) as usize;
    let pitch = pw + 1;

    for y in 0..snap.height() {
        for x in 0..snap.width() {
            let coord = Coord::new(x, y);
            let ox = 1 + x * pitch;
            let oy = 1 + y * pitch;

            let interior = Paint::from(snap.paint(coord));
            for dy in 0..pw {
                for dx in 0..pw {
                    sink.put(ox + dx, oy + dy, interior);
                }
            }

            let Some(direction) = snap.direction(coord) else {
                continue;
            };
            for i in 0..pw {
                let (px, py) = match direction {
                    Direction::Up => (ox + i, oy - 1),
                    Direction::Left => (ox - 1, oy + i),
                    Direction::Down => (ox + i, oy + pw),
                    Direction::Right => (ox + pw, oy + i),
                };
                sink.put(px, py, Paint::Path);
            }
        }
    }
}

/// An owned pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Paint>,
}

impl Raster {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Paint::Wall; width * height],
        }
    }

    /// Paint `snap` into a freshly sized raster.
    pub fn from_snapshot(snap: &MazeSnapshot<'_>, path_width: u16) -> Self {
        let (w, h) = raster_size(snap.width(), snap.height(), path_width);
        let mut raster = Self::new(w, h);
        paint_maze(snap, path_width, &mut raster);
        raster
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Paint> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Plain-text rendering, two characters per pixel to keep cells square-ish.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width * 2 + 1) * self.height * 3);
        for row in self.pixels.chunks(self.width.max(1)) {
            for paint in row {
                let ch = match paint {
                    Paint::Wall => '█',
                    Paint::Path => ' ',
                    Paint::Unvisited => '░',
                    Paint::Frontier => '●',
                };
                out.push(ch);
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl PixelSink for Raster {
    fn put(&mut self, x: usize, y: usize, paint: Paint) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = paint;
        }
    }
}
