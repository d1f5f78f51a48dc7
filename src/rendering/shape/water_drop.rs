use std::f32::consts::PI;

use super::{p, ShapeStyle};
use crate::basic::Point;
use crate::color::Color;
use crate::rendering::clean_arc::CleanArc;
use crate::rendering::surface::Surface;

const TIP: Point = p(0., -1.);
const BOWL: Point = p(0., 0.3);
const BOWL_RADIUS: f32 = 0.62;

pub fn draw(surface: &mut dyn Surface, style: &ShapeStyle) {
    // the sides touch the bowl where they are tangent to it
    let tangent = (BOWL_RADIUS / (BOWL - TIP).magnitude()).acos();
    let sides = [
        TIP,
        Point::polar(BOWL, BOWL_RADIUS, tangent),
        Point::polar(BOWL, BOWL_RADIUS, -tangent),
    ];
    surface.fill_polygon(&style.oriented(sides), style.base);
    surface.fill_circle(style.oriented_point(BOWL), style.radius * BOWL_RADIUS, style.base);

    let shade = CleanArc {
        center: BOWL,
        radius: BOWL_RADIUS * 0.8,
        start_angle: 0.1 * PI,
        end_angle: 0.45 * PI,
    };
    surface.arc(style.oriented_arc(shade), style.radius * 0.12, style.dark);
    surface.fill_circle(
        style.oriented_point(p(-0.22, 0.2)),
        style.radius * 0.14,
        Color::WHITE.with_alpha(0.6),
    );
}
