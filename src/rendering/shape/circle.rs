use super::{p, ShapeStyle};
use crate::color::Color;
use crate::rendering::surface::Surface;

pub fn draw(surface: &mut dyn Surface, style: &ShapeStyle) {
    let ShapeStyle { center, radius, base, dark, .. } = *style;
    surface.fill_circle(center, radius * 0.95, dark);
    surface.fill_circle(center, radius * 0.75, base);
    // shine
    surface.fill_circle(style.fixed_point(p(-0.3, -0.3)), radius * 0.2, Color::WHITE.with_alpha(0.5));
}
