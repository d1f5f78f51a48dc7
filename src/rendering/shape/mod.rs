use std::ops::Deref;

use crate::basic::{Dir, Point};
use crate::color::Color;
use crate::rendering::clean_arc::CleanArc;
use crate::rendering::surface::Surface;
use crate::skin::Shape;

mod arrow;
mod circle;
mod crown;
mod fan;
mod heart;
mod hexagon;
mod leaf;
mod lightning_bolt;
mod music_note;
mod pentagram;
mod rectangle;
mod water_drop;

/// Everything a shape renderer needs to draw one segment
#[derive(Copy, Clone, Debug)]
pub struct ShapeStyle {
    pub center: Point,
    /// Half the side of the cell
    pub radius: f32,
    pub base: Color,
    pub dark: Color,
    pub dir: Dir,
}

pub type ShapeFn = fn(&mut dyn Surface, &ShapeStyle);

pub fn renderer(shape: Shape) -> ShapeFn {
    match shape {
        Shape::Rectangle => rectangle::draw,
        Shape::Circle => circle::draw,
        Shape::Hexagon => hexagon::draw,
        Shape::Pentagram => pentagram::draw,
        Shape::Fan => fan::draw,
        Shape::Heart => heart::draw,
        Shape::Leaf => leaf::draw,
        Shape::WaterDrop => water_drop::draw,
        Shape::MusicNote => music_note::draw,
        Shape::LightningBolt => lightning_bolt::draw,
        Shape::Crown => crown::draw,
        Shape::Arrow => arrow::draw,
    }
}

pub fn draw_shape(surface: &mut dyn Surface, shape: Shape, style: &ShapeStyle) {
    renderer(shape)(surface, style)
}

/// A polygon that can be moved around as a whole
#[derive(Clone, Debug, PartialEq)]
pub struct ShapePoints {
    points: Vec<Point>,
    center: Point,
}

impl From<&[Point]> for ShapePoints {
    fn from(points: &[Point]) -> Self {
        Self { points: points.to_vec(), center: Point::zero() }
    }
}

impl<const N: usize> From<[Point; N]> for ShapePoints {
    fn from(points: [Point; N]) -> Self {
        Self { points: points.to_vec(), center: Point::zero() }
    }
}

impl From<Vec<Point>> for ShapePoints {
    fn from(points: Vec<Point>) -> Self {
        Self { points, center: Point::zero() }
    }
}

impl ShapePoints {
    #[cfg(test)]
    pub fn center(&self) -> Point {
        self.center
    }

    pub fn scale(mut self, factor: f32) -> Self {
        let center = self.center;
        self.points
            .iter_mut()
            .for_each(|point| *point = center + (*point - center) * factor);
        self
    }

    pub fn rotate_clockwise(mut self, origin: Point, angle: f32) -> Self {
        self.points
            .iter_mut()
            .for_each(|point| *point = point.rotate_clockwise(origin, angle));
        self.center = self.center.rotate_clockwise(origin, angle);
        self
    }

    pub fn translate(mut self, delta: Point) -> Self {
        self.points.iter_mut().for_each(|point| *point += delta);
        self.center += delta;
        self
    }

    /// Mirrors the shape in the vertical line through `x`
    #[cfg(test)]
    pub fn flip_horizontally(mut self, x: f32) -> Self {
        self.points.iter_mut().for_each(|point| point.x = 2. * x - point.x);
        self.center.x = 2. * x - self.center.x;
        self
    }

    /// The outline closed back onto its first point, for stroking
    pub fn closed(&self) -> Vec<Point> {
        let mut points = self.points.clone();
        if let Some(first) = self.points.first() {
            points.push(*first);
        }
        points
    }
}

impl Deref for ShapePoints {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

/// Shapes are authored in unit space: centered on the origin, extending
/// roughly from -1 to 1 on both axes and, if oriented, pointing up
impl ShapeStyle {
    fn place(&self, points: ShapePoints, angle: f32) -> ShapePoints {
        points
            .scale(self.radius)
            .rotate_clockwise(Point::zero(), angle)
            .translate(self.center)
    }

    /// Unit space to screen, ignoring the direction
    pub fn fixed(&self, points: impl Into<ShapePoints>) -> ShapePoints {
        self.place(points.into(), 0.)
    }

    /// Unit space to screen, turned from up towards `dir`
    pub fn oriented(&self, points: impl Into<ShapePoints>) -> ShapePoints {
        self.place(points.into(), self.dir.clockwise_angle())
    }

    pub fn fixed_point(&self, point: Point) -> Point {
        self.center + point * self.radius
    }

    pub fn oriented_point(&self, point: Point) -> Point {
        (self.center + point * self.radius).rotate_clockwise(self.center, self.dir.clockwise_angle())
    }

    /// Arcs are authored in unit space too, the angles turn with the direction
    pub fn oriented_arc(&self, arc: CleanArc) -> CleanArc {
        let angle = self.dir.clockwise_angle();
        CleanArc {
            center: self.oriented_point(arc.center),
            radius: arc.radius * self.radius,
            start_angle: arc.start_angle + angle,
            end_angle: arc.end_angle + angle,
        }
    }
}

/// Shorthand for unit space literals
const fn p(x: f32, y: f32) -> Point {
    Point { x, y }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::basic::assert_close;
    use crate::rendering::surface::recording::{Primitive, RecordingSurface};

    fn style(dir: Dir) -> ShapeStyle {
        ShapeStyle {
            center: Point { x: 100., y: 60. },
            radius: 10.,
            base: Color::from_rgb(200, 40, 40),
            dark: Color::from_rgb(90, 10, 10),
            dir,
        }
    }

    fn record(shape: Shape, dir: Dir) -> RecordingSurface {
        let mut surface = RecordingSurface::default();
        draw_shape(&mut surface, shape, &style(dir));
        surface
    }

    #[test]
    fn test_every_shape_draws_inside_its_cell() {
        for shape in Shape::ALL {
            let surface = record(shape, Dir::U);
            assert!(!surface.primitives.is_empty(), "{:?} drew nothing", shape);
            for point in surface.points() {
                let offset = point - style(Dir::U).center;
                assert!(
                    offset.x.abs() <= 15. && offset.y.abs() <= 15.,
                    "{:?} strays to {:?}",
                    shape,
                    point
                );
            }
        }
    }

    #[test]
    fn test_fixed_shapes_ignore_direction() {
        for shape in Shape::ALL.into_iter().filter(|s| !s.is_oriented()) {
            let up = record(shape, Dir::U);
            for dir in [Dir::R, Dir::D, Dir::L] {
                assert_eq!(up.primitives, record(shape, dir).primitives, "{:?}", shape);
            }
        }
    }

    #[test]
    fn test_oriented_shapes_turn_clockwise() {
        let center = style(Dir::U).center;
        for shape in Shape::ALL.into_iter().filter(|s| s.is_oriented()) {
            let up = record(shape, Dir::U).points();
            for dir in [Dir::R, Dir::D, Dir::L] {
                let turned = record(shape, dir).points();
                assert_eq!(up.len(), turned.len());
                let angle = dir.quarter_turns() as f32 * FRAC_PI_2;
                for (a, b) in up.iter().zip(&turned) {
                    assert_close(a.rotate_clockwise(center, angle), *b);
                }
            }
            assert_ne!(up, record(shape, Dir::R).points(), "{:?}", shape);
        }
    }

    #[test]
    fn test_oriented_shapes_avoid_axis_aligned_rects() {
        for shape in Shape::ALL.into_iter().filter(|s| s.is_oriented()) {
            let surface = record(shape, Dir::R);
            assert!(
                !surface.primitives.iter().any(|p| matches!(p, Primitive::Rect(..))),
                "{:?}",
                shape
            );
        }
    }

    #[test]
    fn test_shape_points_transformations() {
        let square = ShapePoints::from(vec![p(-1., -1.), p(1., -1.), p(1., 1.), p(-1., 1.)]);
        let moved = square
            .clone()
            .scale(2.)
            .rotate_clockwise(Point::zero(), FRAC_PI_2)
            .translate(p(5., 0.));
        assert_eq!(moved.center(), p(5., 0.));
        assert_close(moved[0], p(7., -2.));
        let flipped = square.flip_horizontally(0.);
        assert_eq!(flipped[0], p(1., -1.));
        assert_eq!(flipped.closed().len(), 5);
    }
}
