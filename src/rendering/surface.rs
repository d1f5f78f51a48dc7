use std::collections::HashMap;

use ggez::graphics::{Canvas, DrawMode, DrawParam, Image, ImageFormat, Mesh, MeshBuilder, Rect};
use ggez::{Context, GameError};

use crate::basic::Point;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::rendering::clean_arc::CleanArc;
use crate::rendering::sprite::{Sprite, SpriteKey};

/// Maximum distance between a flattened curve and the real one, in pixels
pub const TOLERANCE: f32 = 0.1;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Paint {
    Fill,
    Stroke(f32),
}

impl From<Paint> for DrawMode {
    fn from(paint: Paint) -> Self {
        match paint {
            Paint::Fill => DrawMode::fill(),
            Paint::Stroke(width) => DrawMode::stroke(width),
        }
    }
}

/// The 2D primitives everything in the game is drawn with
pub trait Surface {
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    /// `corner_radius` of 0 gives sharp corners
    fn rect(&mut self, bounds: Rect, corner_radius: f32, paint: Paint, color: Color);

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    fn arc(&mut self, arc: CleanArc, width: f32, color: Color);

    /// Open polyline
    fn line(&mut self, points: &[Point], width: f32, color: Color);

    /// Draw a sprite centered at `center`, sprites are already rotated
    fn blit(&mut self, sprite: &Sprite, center: Point);
}

enum Layer {
    Mesh(Mesh),
    Sprite(Image, Point),
}

/// ggez backend, shapes are accumulated into a mesh and sprites are
/// interleaved so that draw order is preserved
pub struct MeshSurface<'a> {
    ctx: &'a Context,
    /// Uploaded sprites, kept across frames by the owner
    images: &'a mut HashMap<SpriteKey, Image>,
    builder: MeshBuilder,
    builder_empty: bool,
    layers: Vec<Layer>,
    /// Offset applied to everything drawn
    origin: Point,
    error: Option<GameError>,
}

impl<'a> MeshSurface<'a> {
    pub fn new(ctx: &'a Context, images: &'a mut HashMap<SpriteKey, Image>, origin: Point) -> Self {
        Self {
            ctx,
            images,
            builder: MeshBuilder::new(),
            builder_empty: true,
            layers: vec![],
            origin,
            error: None,
        }
    }

    fn record(&mut self, res: ggez::GameResult<()>) {
        match res {
            Ok(_) => self.builder_empty = false,
            Err(e) => {
                self.error.get_or_insert(e);
            }
        }
    }

    fn shifted(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|p| *p + self.origin).collect()
    }

    fn flush_mesh(&mut self) {
        if !self.builder_empty {
            let builder = std::mem::replace(&mut self.builder, MeshBuilder::new());
            self.layers.push(Layer::Mesh(Mesh::from_data(self.ctx, builder.build())));
            self.builder_empty = true;
        }
    }

    /// Draw everything accumulated so far, the first failed primitive
    /// is reported here
    pub fn finish(mut self, canvas: &mut Canvas) -> Result {
        if let Some(e) = self.error.take() {
            return Err(Error::from(e).with_trace_step("MeshSurface::finish"));
        }
        self.flush_mesh();
        for layer in &self.layers {
            match layer {
                Layer::Mesh(mesh) => canvas.draw(mesh, DrawParam::default()),
                Layer::Sprite(image, dest) => canvas.draw(image, DrawParam::default().dest(*dest)),
            }
        }
        Ok(())
    }
}

impl Surface for MeshSurface<'_> {
    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        if points.len() < 3 {
            return;
        }
        let points = self.shifted(points);
        let res = self.builder.polygon(DrawMode::fill(), &points, *color).map(|_| ());
        self.record(res);
    }

    fn rect(&mut self, mut bounds: Rect, corner_radius: f32, paint: Paint, color: Color) {
        bounds.translate(self.origin);
        let res = if corner_radius > 0. {
            self.builder
                .rounded_rectangle(paint.into(), bounds, corner_radius, *color)
                .map(|_| ())
        } else {
            self.builder.rectangle(paint.into(), bounds, *color).map(|_| ())
        };
        self.record(res);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        if radius <= 0. {
            return;
        }
        let res = self
            .builder
            .circle(DrawMode::fill(), center + self.origin, radius, TOLERANCE, *color)
            .map(|_| ());
        self.record(res);
    }

    fn arc(&mut self, arc: CleanArc, width: f32, color: Color) {
        let points: Vec<_> = arc.flattened(TOLERANCE).collect();
        self.line(&points, width, color);
    }

    fn line(&mut self, points: &[Point], width: f32, color: Color) {
        if points.len() < 2 {
            return;
        }
        let points = self.shifted(points);
        let res = self.builder.line(&points, width, *color).map(|_| ());
        self.record(res);
    }

    fn blit(&mut self, sprite: &Sprite, center: Point) {
        self.flush_mesh();
        let ctx = self.ctx;
        let image = self
            .images
            .entry(sprite.key.clone())
            .or_insert_with(|| {
                let pixels = &sprite.pixels;
                Image::from_pixels(
                    ctx,
                    pixels.as_raw(),
                    ImageFormat::Rgba8UnormSrgb,
                    pixels.width(),
                    pixels.height(),
                )
            })
            .clone();
        let half = Point {
            x: sprite.pixels.width() as f32 / 2.,
            y: sprite.pixels.height() as f32 / 2.,
        };
        self.layers.push(Layer::Sprite(image, center + self.origin - half));
    }
}

#[cfg(test)]
pub mod recording {
    use super::*;

    /// Records primitives instead of drawing them
    #[derive(Clone, Debug, PartialEq)]
    pub enum Primitive {
        Polygon(Vec<Point>, Color),
        Rect(Rect, f32, Paint, Color),
        Circle(Point, f32, Color),
        Arc(CleanArc, Color),
        Line(Vec<Point>, Color),
        Blit(SpriteKey, Point),
    }

    #[derive(Default)]
    pub struct RecordingSurface {
        pub primitives: Vec<Primitive>,
    }

    impl RecordingSurface {
        pub fn circles(&self) -> Vec<(Point, f32, Color)> {
            self.primitives
                .iter()
                .filter_map(|p| match p {
                    Primitive::Circle(center, radius, color) => Some((*center, *radius, *color)),
                    _ => None,
                })
                .collect()
        }

        pub fn blits(&self) -> Vec<(SpriteKey, Point)> {
            self.primitives
                .iter()
                .filter_map(|p| match p {
                    Primitive::Blit(key, center) => Some((key.clone(), *center)),
                    _ => None,
                })
                .collect()
        }

        /// Every point mentioned by any primitive
        pub fn points(&self) -> Vec<Point> {
            self.primitives
                .iter()
                .flat_map(|p| match p {
                    Primitive::Polygon(points, _) | Primitive::Line(points, _) => points.clone(),
                    Primitive::Rect(r, ..) => vec![
                        Point { x: r.x, y: r.y },
                        Point { x: r.x + r.w, y: r.y + r.h },
                    ],
                    Primitive::Circle(c, ..) | Primitive::Blit(_, c) => vec![*c],
                    Primitive::Arc(arc, _) => vec![arc.center],
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn fill_polygon(&mut self, points: &[Point], color: Color) {
            self.primitives.push(Primitive::Polygon(points.to_vec(), color));
        }

        fn rect(&mut self, bounds: Rect, corner_radius: f32, paint: Paint, color: Color) {
            self.primitives.push(Primitive::Rect(bounds, corner_radius, paint, color));
        }

        fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
            self.primitives.push(Primitive::Circle(center, radius, color));
        }

        fn arc(&mut self, arc: CleanArc, _width: f32, color: Color) {
            self.primitives.push(Primitive::Arc(arc, color));
        }

        fn line(&mut self, points: &[Point], _width: f32, color: Color) {
            self.primitives.push(Primitive::Line(points.to_vec(), color));
        }

        fn blit(&mut self, sprite: &Sprite, center: Point) {
            self.primitives.push(Primitive::Blit(sprite.key.clone(), center));
        }
    }
}
