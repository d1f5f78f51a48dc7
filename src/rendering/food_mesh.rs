use hsl::HSL;

use crate::basic::{Cell, GridGeometry, Point};
use crate::color::to_color::ToColor;
use crate::color::Color;
use crate::rendering::surface::Surface;
use crate::snake::Millis;

/// A slowly hue-cycling disc with a leaf on top
pub fn draw_food(surface: &mut dyn Surface, grid: &GridGeometry, cell: Cell, now: Millis) {
    let center = grid.cell_center(cell);
    let hue = 360. * (now as f64 / 4000. % 1.);
    let color = HSL { h: hue, s: 0.8, l: 0.5 }.to_color();
    // gentle pulse
    let pulse = 1. + 0.08 * (now as f32 / 1000. * 6.).sin();
    let radius = grid.cell_size * 0.38 * pulse;

    surface.fill_circle(center, radius, color);
    surface.fill_circle(
        center + Point { x: -radius * 0.35, y: -radius * 0.35 },
        radius * 0.25,
        Color::WHITE.with_alpha(0.6),
    );
    let stem = center - Point { x: 0., y: radius };
    surface.line(
        &[stem, stem + Point { x: radius * 0.3, y: -radius * 0.4 }],
        (grid.cell_size * 0.08).max(1.),
        Color::from_rgb(46, 125, 50),
    );
}

#[test]
fn test_food_is_drawn_on_its_cell() {
    use crate::rendering::surface::recording::RecordingSurface;

    let grid = GridGeometry::new(20., 10, 10);
    let mut surface = RecordingSurface::default();
    draw_food(&mut surface, &grid, Cell::new(3, 4), 0);
    let circles = surface.circles();
    assert_eq!(circles[0].0, Point { x: 70., y: 90. });
    assert!((circles[0].1 - 7.6).abs() < 1e-4);
}
