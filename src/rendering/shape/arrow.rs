use super::{p, ShapeStyle};
use crate::basic::Point;
use crate::rendering::surface::Surface;

const ARROW_UP: [Point; 7] = [
    p(0., -1.),
    p(0.85, -0.1),
    p(0.35, -0.1),
    p(0.35, 0.9),
    p(-0.35, 0.9),
    p(-0.35, -0.1),
    p(-0.85, -0.1),
];

pub fn draw(surface: &mut dyn Surface, style: &ShapeStyle) {
    let arrow = style.oriented(ARROW_UP);
    surface.fill_polygon(&arrow, style.base);
    surface.line(&arrow.closed(), style.radius * 0.1, style.dark);
}
