use ggez::graphics::Rect;

use crate::basic::{GridGeometry, Point};
use crate::color::Color;
use crate::rendering::surface::{Paint, Surface};

pub const BACKGROUND: Color = Color(ggez::graphics::Color::new(0.08, 0.09, 0.1, 1.));
const LINES: Color = Color(ggez::graphics::Color::new(0.14, 0.15, 0.17, 1.));
const LINE_WIDTH: f32 = 1.;

/// Board background with cell lines and a border
pub fn draw_grid(surface: &mut dyn Surface, grid: &GridGeometry) {
    let size = grid.board_size();
    let board = Rect::new(0., 0., size.x, size.y);
    surface.rect(board, 0., Paint::Fill, BACKGROUND);

    for col in 1..grid.cols() {
        let x = col as f32 * grid.cell_size;
        surface.line(
            &[Point { x, y: 0. }, Point { x, y: size.y }],
            LINE_WIDTH,
            LINES,
        );
    }
    for row in 1..grid.rows() {
        let y = row as f32 * grid.cell_size;
        surface.line(
            &[Point { x: 0., y }, Point { x: size.x, y }],
            LINE_WIDTH,
            LINES,
        );
    }
    surface.rect(board, 0., Paint::Stroke(2.), Color::GREY);
}

#[test]
fn test_grid_lines() {
    use crate::rendering::surface::recording::{Primitive, RecordingSurface};

    let grid = GridGeometry::new(10., 4, 3);
    let mut surface = RecordingSurface::default();
    draw_grid(&mut surface, &grid);
    let lines = surface
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Line(..)))
        .count();
    assert_eq!(lines, 3 + 2);
    assert!(matches!(
        surface.primitives.last(),
        Some(Primitive::Rect(r, _, Paint::Stroke(_), _)) if r.w == 40. && r.h == 30.
    ));
}
