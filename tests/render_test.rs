//! Rendering tests - generator snapshots through the raster and terminal view

use tui_maze::core::{MazeGenerator, MazeSnapshot, SimpleRng};
use tui_maze::term::maze_view::{FRONTIER, PATH, UNVISITED, WALL};
use tui_maze::term::{AnchorY, MazeView, Paint, Raster, Rgb, StatusView, Viewport};
use tui_maze::types::{Coord, StepStatus};

fn started(width: usize, height: usize) -> MazeGenerator<SimpleRng> {
    let mut generator = MazeGenerator::new(width, height, SimpleRng::new(17)).unwrap();
    generator.reset(Coord::new(0, 0)).unwrap();
    generator
}

/// Top-left interior pixel of a cell at path width 1.
fn interior(x: usize, y: usize) -> (usize, usize) {
    (1 + 2 * x, 1 + 2 * y)
}

#[test]
fn frontier_is_highlighted_while_carving() {
    let mut generator = started(4, 4);
    assert_eq!(generator.step().unwrap(), StepStatus::Advanced);

    let raster = Raster::from_snapshot(&generator.snapshot(), 1);
    let top = generator.current_frontier().unwrap();
    let (fx, fy) = interior(top.x, top.y);
    assert_eq!(raster.get(fx, fy), Some(Paint::Frontier));

    let (rx, ry) = interior(0, 0);
    assert_eq!(raster.get(rx, ry), Some(Paint::Path));

    let (ux, uy) = interior(3, 3);
    assert_eq!(raster.get(ux, uy), Some(Paint::Unvisited));
}

#[test]
fn completed_maze_has_no_highlight_or_unvisited_pixels() {
    let mut generator = started(6, 5);
    generator.run_to_completion().unwrap();

    let raster = Raster::from_snapshot(&generator.snapshot(), 2);
    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let p = raster.get(x, y).unwrap();
            assert!(
                p == Paint::Wall || p == Paint::Path,
                "pixel ({}, {}) is {:?}",
                x,
                y,
                p
            );
        }
    }
}

#[test]
fn completed_maze_opens_one_wall_per_edge() {
    let mut generator = started(5, 5);
    generator.run_to_completion().unwrap();

    let raster = Raster::from_snapshot(&generator.snapshot(), 1);
    let mut openings = 0;
    // Wall pixels between two horizontally or vertically adjacent interiors.
    for y in 0..5 {
        for x in 0..5 {
            let (ix, iy) = interior(x, y);
            if x + 1 < 5 && raster.get(ix + 1, iy) == Some(Paint::Path) {
                openings += 1;
            }
            if y + 1 < 5 && raster.get(ix, iy + 1) == Some(Paint::Path) {
                openings += 1;
            }
        }
    }
    assert_eq!(openings, 24);
}

#[test]
fn text_export_matches_raster_size() {
    let mut generator = started(3, 2);
    generator.run_to_completion().unwrap();
    let text = Raster::from_snapshot(&generator.snapshot(), 1).to_text();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|l| l.chars().count() == 14));
    assert!(lines[0].chars().all(|c| c == '█'));
    assert!(!text.contains('░'));
    assert!(!text.contains('●'));
}

#[test]
fn view_colors_follow_paint_states() {
    let mut generator = started(3, 3);
    generator.step().unwrap();
    let snap = generator.snapshot();

    let view = MazeView::default().with_anchor_y(AnchorY::Top);
    let (w, h) = view.maze_extent(&snap);
    let fb = view.render(&snap, None, Viewport::new(w, h));

    let bg = |px: usize, py: usize| fb.get((px * 2) as u16, py as u16).unwrap().style.bg;
    let top = generator.current_frontier().unwrap();
    let (fx, fy) = interior(top.x, top.y);
    assert_eq!(bg(fx, fy), FRONTIER);
    assert_eq!(bg(1, 1), PATH);
    assert_eq!(bg(5, 5), UNVISITED);
    assert_eq!(bg(0, 0), WALL);
}

#[test]
fn view_draws_status_line_below_maze() {
    let mut generator = started(4, 3);
    generator.run_to_completion().unwrap();
    let snap = generator.snapshot();

    let status = StatusView {
        seed: 17,
        animate: false,
        paused: false,
        steps_per_frame: 4,
    };
    let view = MazeView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Some(&status), Viewport::new(120, 10));

    let text = fb.to_text();
    let status_row = text.lines().nth(7).unwrap();
    assert!(status_row.contains("SEED 17"));
    assert!(status_row.contains("12/12"));
    assert!(status_row.contains("INSTANT"));
    assert!(status_row.contains("DONE"));
}

#[test]
fn view_centers_small_maze() {
    let generator = started(1, 1);
    let snap = generator.snapshot();
    let fb = MazeView::default().render(&snap, None, Viewport::new(10, 7));

    // Maze is 6x3 => start_x = 2, start_y = 2.
    assert_eq!(fb.get(1, 2).unwrap().style.bg, Rgb::new(0, 0, 0));
    assert_eq!(fb.get(4, 3).unwrap().style.bg, FRONTIER);
}

#[test]
fn bare_grid_renders_all_unvisited() {
    let grid = tui_maze::core::Grid::new(2, 2).unwrap();
    let raster = Raster::from_snapshot(&MazeSnapshot::of_grid(&grid), 1);
    assert_eq!(raster.get(1, 1), Some(Paint::Unvisited));
    assert_eq!(raster.get(3, 3), Some(Paint::Unvisited));
    assert_eq!(raster.get(2, 1), Some(Paint::Wall));
}
