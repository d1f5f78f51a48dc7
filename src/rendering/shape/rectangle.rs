use ggez::graphics::Rect;

use super::ShapeStyle;
use crate::basic::Point;
use crate::rendering::surface::{Paint, Surface};

fn square(center: Point, half_side: f32) -> Rect {
    Rect::new(center.x - half_side, center.y - half_side, 2. * half_side, 2. * half_side)
}

pub fn draw(surface: &mut dyn Surface, style: &ShapeStyle) {
    let ShapeStyle { center, radius, base, dark, .. } = *style;
    surface.rect(square(center, radius * 0.95), radius * 0.25, Paint::Fill, dark);
    surface.rect(square(center, radius * 0.7), radius * 0.15, Paint::Fill, base);
}
