use std::f32::consts::PI;

use super::{ShapePoints, ShapeStyle};
use crate::basic::Point;
use crate::rendering::surface::Surface;

const INNER_RADIUS: f32 = 0.42;

/// Five pointed star with the top point straight up
fn unit_star() -> ShapePoints {
    (0..10)
        .map(|i| {
            let radius = if i % 2 == 0 { 1. } else { INNER_RADIUS };
            Point::polar(Point::zero(), radius, i as f32 * PI / 5.)
        })
        .collect::<Vec<_>>()
        .into()
}

pub fn draw(surface: &mut dyn Surface, style: &ShapeStyle) {
    surface.fill_polygon(&style.fixed(unit_star()), style.dark);
    surface.fill_polygon(&style.fixed(unit_star().scale(0.7)), style.base);
    surface.fill_circle(style.center, style.radius * 0.15, style.dark);
}
