use std::f32::consts::PI;

use super::{ShapePoints, ShapeStyle};
use crate::basic::Point;
use crate::rendering::surface::Surface;

/// Flat-topped, circumradius 1
fn unit_hexagon() -> ShapePoints {
    (0..6)
        .map(|i| Point::polar(Point::zero(), 1., PI / 6. + i as f32 * PI / 3.))
        .collect::<Vec<_>>()
        .into()
}

pub fn draw(surface: &mut dyn Surface, style: &ShapeStyle) {
    let outer = style.fixed(unit_hexagon().scale(0.95));
    let inner = style.fixed(unit_hexagon().scale(0.65));
    surface.fill_polygon(&outer, style.dark);
    surface.fill_polygon(&inner, style.base);
}
