use super::{p, ShapeStyle};
use crate::basic::Point;
use crate::rendering::surface::Surface;

const BOLT: [Point; 6] = [
    p(0.25, -1.),
    p(-0.55, 0.12),
    p(-0.05, 0.12),
    p(-0.3, 1.),
    p(0.55, -0.18),
    p(0.05, -0.18),
];

pub fn draw(surface: &mut dyn Surface, style: &ShapeStyle) {
    let bolt = style.oriented(BOLT);
    surface.fill_polygon(&bolt, style.base);
    surface.line(&bolt.closed(), style.radius * 0.1, style.dark);
}
