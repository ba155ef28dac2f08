//! MazeView: maps a `core::MazeSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_maze_core::MazeSnapshot;

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::raster::{paint_maze, raster_size, Paint, PixelSink};
use crate::types::DEFAULT_PATH_WIDTH;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Run settings shown on the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusView {
    pub seed: u32,
    pub animate: bool,
    pub paused: bool,
    pub steps_per_frame: u32,
}

pub const WALL: Rgb = Rgb::new(0, 0, 0);
pub const PATH: Rgb = Rgb::new(235, 235, 235);
pub const UNVISITED: Rgb = Rgb::new(40, 60, 190);
pub const FRONTIER: Rgb = Rgb::new(60, 200, 90);

/// Color used for a raster pixel.
pub fn paint_color(paint: Paint) -> Rgb {
    match paint {
        Paint::Wall => WALL,
        Paint::Path => PATH,
        Paint::Unvisited => UNVISITED,
        Paint::Frontier => FRONTIER,
    }
}

/// Terminal renderer for a maze snapshot.
pub struct MazeView {
    /// Raster pixel width in terminal columns.
    cell_w: u16,
    /// Raster pixel height in terminal rows.
    cell_h: u16,
    path_width: u16,
    anchor_y: AnchorY,
}

impl Default for MazeView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            path_width: DEFAULT_PATH_WIDTH,
            anchor_y: AnchorY::Center,
        }
    }
}

impl MazeView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_path_width(mut self, path_width: u16) -> Self {
        self.path_width = path_width.max(1);
        self
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal columns and rows the maze itself occupies (status line excluded).
    pub fn maze_extent(&self, snap: &MazeSnapshot<'_>) -> (u16, u16) {
        let (rw, rh) = raster_size(snap.width(), snap.height(), self.path_width);
        let w = rw.saturating_mul(self.cell_w as usize);
        let h = rh.saturating_mul(self.cell_h as usize);
        (
            u16::try_from(w).unwrap_or(u16::MAX),
            u16::try_from(h).unwrap_or(u16::MAX),
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes. Mazes larger than the viewport are clipped.
    pub fn render_into(
        &self,
        snap: &MazeSnapshot<'_>,
        status: Option<&StatusView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (maze_w, maze_h) = self.maze_extent(snap);
        let status_rows = u16::from(status.is_some());

        let start_x = viewport.width.saturating_sub(maze_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport
                .height
                .saturating_sub(maze_h.saturating_add(status_rows))
                / 2,
            AnchorY::Top => 0,
        };

        fb.fill_rect(start_x, start_y, maze_w, maze_h, '█', CellStyle::solid(WALL));

        let mut sink = FbSink {
            fb: &mut *fb,
            origin_x: start_x,
            origin_y: start_y,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        };
        paint_maze(snap, self.path_width, &mut sink);

        if let Some(status) = status {
            let y = start_y.saturating_add(maze_h);
            if y < viewport.height {
                self.draw_status_line(fb, snap, status, start_x, y);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &MazeSnapshot<'_>,
        status: Option<&StatusView>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    fn draw_status_line(
        &self,
        fb: &mut FrameBuffer,
        snap: &MazeSnapshot<'_>,
        status: &StatusView,
        x: u16,
        y: u16,
    ) {
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();
        let hint = CellStyle {
            dim: true,
            ..CellStyle::default()
        };

        let mut cx = fb.put_str(x, y, "SEED ", label);
        cx = fb.put_usize(cx, y, status.seed as usize, value);
        cx = fb.put_str(cx, y, "  ", value);
        cx = fb.put_usize(cx, y, snap.visited, value);
        cx = fb.put_str(cx, y, "/", value);
        cx = fb.put_usize(cx, y, snap.total, value);
        cx = fb.put_str(cx, y, "  ", value);

        if status.animate {
            cx = fb.put_str(cx, y, "ANIMATED x", label);
            cx = fb.put_usize(cx, y, status.steps_per_frame as usize, label);
            if status.paused {
                cx = fb.put_str(cx, y, " PAUSED", label);
            }
        } else {
            cx = fb.put_str(cx, y, "INSTANT", label);
        }
        if snap.complete {
            cx = fb.put_str(cx, y, "  DONE", label);
        }

        fb.put_str(
            cx,
            y,
            "  enter: new maze  n: new seed  space: mode  p: pause  +/-: speed  q: quit",
            hint,
        );
    }
}

/// Writes raster pixels as `cell_w x cell_h` solid blocks.
struct FbSink<'a> {
    fb: &'a mut FrameBuffer,
    origin_x: u16,
    origin_y: u16,
    cell_w: u16,
    cell_h: u16,
}

impl PixelSink for FbSink<'_> {
    fn put(&mut self, x: usize, y: usize, paint: Paint) {
        let col = x
            .checked_mul(self.cell_w as usize)
            .and_then(|c| c.checked_add(self.origin_x as usize))
            .and_then(|c| u16::try_from(c).ok());
        let row = y
            .checked_mul(self.cell_h as usize)
            .and_then(|r| r.checked_add(self.origin_y as usize))
            .and_then(|r| u16::try_from(r).ok());
        let (Some(col), Some(row)) = (col, row) else {
            return;
        };
        if col >= self.fb.width() || row >= self.fb.height() {
            return;
        }
        self.fb.fill_rect(
            col,
            row,
            self.cell_w,
            self.cell_h,
            '█',
            CellStyle::solid(paint_color(paint)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_maze_core::Grid;

    #[test]
    fn pixels_are_two_columns_wide() {
        let grid = Grid::new(1, 1).unwrap();
        let snap = MazeSnapshot::of_grid(&grid);
        let fb = MazeView::default()
            .with_anchor_y(AnchorY::Top)
            .render(&snap, None, Viewport::new(6, 3));

        // Interior pixel (1,1) lands on columns 2..4 of row 1.
        assert_eq!(fb.get(2, 1).unwrap().style.bg, UNVISITED);
        assert_eq!(fb.get(3, 1).unwrap().style.bg, UNVISITED);
        assert_eq!(fb.get(1, 1).unwrap().style.bg, WALL);
        assert_eq!(fb.get(4, 1).unwrap().style.bg, WALL);
    }

    #[test]
    fn extent_matches_raster() {
        let grid = Grid::new(4, 2).unwrap();
        let snap = MazeSnapshot::of_grid(&grid);
        assert_eq!(MazeView::default().maze_extent(&snap), (18, 5));
        assert_eq!(
            MazeView::new(1, 1).with_path_width(3).maze_extent(&snap),
            (17, 9)
        );
    }
}
