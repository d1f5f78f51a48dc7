use std::f32::consts::PI;

use super::{p, ShapeStyle};
use crate::basic::Point;
use crate::rendering::surface::Surface;

const HALF_WIDTH: f32 = 0.62;
const STEPS: usize = 10;

fn outline() -> Vec<Point> {
    // right edge from the stem up to the tip, then back down the left edge
    let right = (0..=STEPS).map(|i| {
        let t = i as f32 / STEPS as f32;
        p(HALF_WIDTH * (PI * t).sin(), 0.95 - 1.9 * t)
    });
    let left: Vec<_> = right.clone().skip(1).take(STEPS - 1).map(|pt| p(-pt.x, pt.y)).collect();
    right.chain(left.into_iter().rev()).collect()
}

pub fn draw(surface: &mut dyn Surface, style: &ShapeStyle) {
    surface.fill_polygon(&style.oriented(outline()), style.base);

    let width = style.radius * 0.08;
    surface.line(&style.oriented([p(0., 0.95), p(0., -0.8)]), width, style.dark);
    for y in [0.45, -0.05] {
        surface.line(&style.oriented([p(-0.35, y - 0.3), p(0., y), p(0.35, y - 0.3)]), width, style.dark);
    }
}
