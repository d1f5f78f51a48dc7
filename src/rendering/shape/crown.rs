use super::{p, ShapeStyle};
use crate::basic::Point;
use crate::rendering::surface::Surface;

const CROWN: [Point; 7] = [
    p(-0.9, 0.55),
    p(0.9, 0.55),
    p(0.9, -0.45),
    p(0.45, 0.),
    p(0., -0.7),
    p(-0.45, 0.),
    p(-0.9, -0.45),
];
const BAND: [Point; 4] = [p(-0.9, 0.55), p(0.9, 0.55), p(0.9, 0.3), p(-0.9, 0.3)];
const JEWELS: [Point; 3] = [p(-0.9, -0.45), p(0., -0.7), p(0.9, -0.45)];

pub fn draw(surface: &mut dyn Surface, style: &ShapeStyle) {
    surface.fill_polygon(&style.fixed(CROWN), style.base);
    surface.fill_polygon(&style.fixed(BAND), style.dark);
    for jewel in JEWELS {
        surface.fill_circle(style.fixed_point(jewel), style.radius * 0.14, style.dark);
    }
}
