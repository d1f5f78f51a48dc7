use super::{p, ShapeStyle};
use crate::basic::Point;
use crate::rendering::surface::Surface;

const NOTE_HEAD: Point = p(-0.25, 0.55);
const STEM: [Point; 4] = [p(0.03, 0.55), p(0.17, 0.55), p(0.17, -0.95), p(0.03, -0.95)];
const FLAG: [Point; 4] = [p(0.17, -0.95), p(0.7, -0.55), p(0.7, -0.3), p(0.17, -0.62)];

pub fn draw(surface: &mut dyn Surface, style: &ShapeStyle) {
    surface.fill_circle(style.oriented_point(NOTE_HEAD), style.radius * 0.4, style.dark);
    surface.fill_circle(style.oriented_point(NOTE_HEAD), style.radius * 0.3, style.base);
    surface.fill_polygon(&style.oriented(STEM), style.dark);
    surface.fill_polygon(&style.oriented(FLAG), style.base);
    surface.line(&style.oriented(FLAG).closed(), style.radius * 0.06, style.dark);
}
