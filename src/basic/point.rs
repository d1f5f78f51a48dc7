use ggez::mint::{Point2, Vector2};
use lyon_geom::euclid::default::{Point2D, Vector2D};
use std::marker::PhantomData;
use std::ops::{Div, Mul, Neg};

/// A more convenient version of mint::Point2<f32>
#[derive(Copy, Clone, Debug, PartialEq, Default, Add, AddAssign, Sub, SubAssign)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<Point> for Point2<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Point2 { x, y }
    }
}

impl From<Point2<f32>> for Point {
    fn from(Point2 { x, y }: Point2<f32>) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Vector2<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Vector2 { x, y }
    }
}

impl From<Point2D<f32>> for Point {
    fn from(Point2D { x, y, _unit }: Point2D<f32>) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Point2D<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Point2D { x, y, _unit: PhantomData }
    }
}

impl From<Point> for Vector2D<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Vector2D { x, y, _unit: PhantomData }
    }
}

impl Mul<f32> for Point {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl Mul<Point> for f32 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Point {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self { x: self.x / rhs, y: self.y / rhs }
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { x: -self.x, y: -self.y }
    }
}

impl Point {
    pub const fn zero() -> Self {
        Self { x: 0., y: 0. }
    }

    /// Equal x and y
    pub fn square(side: f32) -> Self {
        Self { x: side, y: side }
    }

    /// Point at `radius` from `center` in the direction of `angle`, angles are
    /// measured clockwise from straight up (screen coordinates, y down)
    pub fn polar(center: Self, radius: f32, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: center.x + radius * sin,
            y: center.y - radius * cos,
        }
    }

    #[must_use]
    pub fn rotate_clockwise(mut self, origin: Self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        self -= origin;
        self = Point {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        };
        self + origin
    }

    #[must_use]
    pub fn magnitude(self) -> f32 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }
}

#[cfg(test)]
pub fn assert_close(a: Point, b: Point) {
    assert!((a - b).magnitude() < 1e-3, "{:?} != {:?}", a, b);
}

#[test]
fn test_rotate_clockwise_quarter_turn() {
    use std::f32::consts::FRAC_PI_2;
    // up rotated a quarter turn clockwise points right (y grows downwards)
    let up = Point { x: 0., y: -1. };
    assert_close(up.rotate_clockwise(Point::zero(), FRAC_PI_2), Point { x: 1., y: 0. });
    assert_close(Point::polar(Point::zero(), 1., FRAC_PI_2), Point { x: 1., y: 0. });
}
