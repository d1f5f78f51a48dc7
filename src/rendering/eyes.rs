use crate::basic::{Dir, Point};
use crate::color::Color;
use crate::rendering::surface::Surface;

/// Offsets and size as fractions of the cell size
const SIDE: f32 = 0.22;
const FORWARD: f32 = 0.2;
const EYE_RADIUS: f32 = 0.12;

/// Two eyes looking towards `dir`, each with a small highlight
pub fn draw_eyes(surface: &mut dyn Surface, center: Point, dir: Dir, cell_size: f32) {
    let side = dir.perpendicular() * (SIDE * cell_size);
    let forward = dir.unit() * (FORWARD * cell_size);
    let radius = (EYE_RADIUS * cell_size).max(1.5);
    for eye in [center + side + forward, center - side + forward] {
        surface.fill_circle(eye, radius, Color::BLACK);
        surface.fill_circle(eye + Point::square(1.), radius * 0.4, Color::WHITE);
    }
}

#[test]
fn test_eyes_look_ahead() {
    use crate::basic::assert_close;
    use crate::rendering::surface::recording::RecordingSurface;

    let center = Point { x: 100., y: 100. };
    let mut surface = RecordingSurface::default();
    draw_eyes(&mut surface, center, Dir::R, 20.);

    let circles = surface.circles();
    assert_eq!(circles.len(), 4);
    let (left, right) = (circles[0], circles[2]);
    assert_eq!(left.2, Color::BLACK);
    assert_eq!(circles[1].2, Color::WHITE);
    assert_close(left.0, Point { x: 104., y: 104.4 });
    assert_close(right.0, Point { x: 104., y: 95.6 });
    assert_close(circles[1].0, left.0 + Point::square(1.));
}
