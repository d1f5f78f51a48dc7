use std::f32::consts::FRAC_PI_2;

use super::{p, ShapeStyle};
use crate::basic::Point;
use crate::rendering::clean_arc::CleanArc;
use crate::rendering::surface::Surface;

const PIVOT: Point = p(0., 0.75);
const BLADE: f32 = 1.6;
/// Half the opening of the fan
const SPREAD: f32 = 0.7;
const RIBS: usize = 8;

pub fn draw(surface: &mut dyn Surface, style: &ShapeStyle) {
    let rim: Vec<_> = (0..=RIBS)
        .map(|i| {
            let angle = -SPREAD + 2. * SPREAD * i as f32 / RIBS as f32;
            Point::polar(PIVOT, BLADE, angle)
        })
        .collect();

    let mut outline = vec![PIVOT];
    outline.extend(&rim);
    surface.fill_polygon(&style.oriented(outline), style.base);

    let width = style.radius * 0.1;
    for tip in rim.iter().step_by(2) {
        surface.line(&style.oriented(vec![PIVOT, *tip]), width, style.dark);
    }
    // CleanArc angles start at +x, up is a quarter turn counterclockwise
    let edge = CleanArc {
        center: PIVOT,
        radius: BLADE,
        start_angle: -FRAC_PI_2 - SPREAD,
        end_angle: -FRAC_PI_2 + SPREAD,
    };
    surface.arc(style.oriented_arc(edge), width * 1.5, style.dark);
    surface.fill_circle(style.oriented_point(PIVOT), style.radius * 0.18, style.dark);
}
