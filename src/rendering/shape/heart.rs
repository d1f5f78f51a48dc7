use super::{p, ShapePoints, ShapeStyle};
use crate::basic::Point;
use crate::color::Color;
use crate::rendering::surface::Surface;

const LOBES: [Point; 2] = [p(-0.45, -0.3), p(0.45, -0.3)];
const LOBE_RADIUS: f32 = 0.5;
const POINT: [Point; 3] = [p(-0.92, -0.12), p(0.92, -0.12), p(0., 0.95)];

fn heart(surface: &mut dyn Surface, style: &ShapeStyle, scale: f32, color: Color) {
    for lobe in LOBES {
        surface.fill_circle(style.fixed_point(lobe * scale), style.radius * LOBE_RADIUS * scale, color);
    }
    surface.fill_polygon(&style.fixed(ShapePoints::from(POINT).scale(scale)), color);
}

pub fn draw(surface: &mut dyn Surface, style: &ShapeStyle) {
    heart(surface, style, 1., style.dark);
    heart(surface, style, 0.72, style.base);
}
