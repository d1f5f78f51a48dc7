use std::iter;

use itertools::chain;
use lyon_geom::{Angle, Arc};

use crate::basic::Point;

/// Circular arc, angles in radians measured clockwise from the positive x axis
/// (screen coordinates)
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CleanArc {
    pub center: Point,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
}

impl CleanArc {
    fn extreme_points(self) -> (Point, Point) {
        let Self {
            center,
            radius,
            start_angle,
            end_angle,
        } = self;
        let starting_point = center + Point { x: radius, y: 0.0 };
        let first_point = starting_point.rotate_clockwise(center, start_angle);
        let last_point = starting_point.rotate_clockwise(center, end_angle);
        (first_point, last_point)
    }

    pub fn flattened(&self, tolerance: f32) -> impl Iterator<Item = Point> {
        let (first, last) = self.extreme_points();

        let arc = Arc {
            center: self.center.into(),
            radii: Point::square(self.radius).into(),
            start_angle: Angle { radians: self.start_angle },
            sweep_angle: Angle {
                radians: self.end_angle - self.start_angle,
            },
            x_rotation: Angle { radians: 0. },
        };

        chain!(
            iter::once(first),
            arc.flattened(tolerance).map(Into::into),
            iter::once(last),
        )
    }
}

#[test]
fn test_flattened_stays_on_circle() {
    use std::f32::consts::PI;
    let arc = CleanArc {
        center: Point { x: 10., y: 10. },
        radius: 5.,
        start_angle: 0.,
        end_angle: PI,
    };
    let points: Vec<_> = arc.flattened(0.01).collect();
    assert!(points.len() > 3);
    for p in &points {
        assert!(((*p - arc.center).magnitude() - 5.).abs() < 0.05);
    }
    // clockwise on screen from the right goes through the bottom
    assert!(points.iter().any(|p| p.y > 14.));
}
