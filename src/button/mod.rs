use ggez::graphics::{Canvas, DrawParam, PxScale, Rect, Text, TextLayout};

use crate::basic::Point;
use crate::color::Color;
use crate::rendering::surface::{Paint, Surface};
use crate::support::text_layout::TextLayoutExtension;

pub use dropdown::Dropdown;

mod dropdown;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Normal,
    Hover,
    Pressed,
}

#[derive(Copy, Clone, Debug)]
pub struct TriColor {
    pub normal: Color,
    pub hover: Color,
    pub click: Color,
}

impl TriColor {
    pub const BUTTON: Self = Self {
        normal: Color(ggez::graphics::Color::new(0.2, 0.22, 0.26, 1.)),
        hover: Color(ggez::graphics::Color::new(0.27, 0.3, 0.36, 1.)),
        click: Color(ggez::graphics::Color::new(0.16, 0.55, 0.33, 1.)),
    };

    pub fn get(&self, state: State) -> Color {
        match state {
            State::Normal => self.normal,
            State::Hover => self.hover,
            State::Pressed => self.click,
        }
    }
}

pub type RenderFn = fn(&Widget, &mut dyn Surface, State);
pub type HitFn = fn(&Widget, Point) -> bool;

/// Anything clickable on a menu screen
///
/// Widgets only differ by how they are drawn and hit-tested, the label is
/// drawn separately as text on top of the shapes
#[derive(Clone)]
pub struct Widget {
    pub bounds: Rect,
    pub label: String,
    pub font_size: f32,
    /// Drawn with the click color regardless of the mouse
    pub highlighted: bool,
    /// Left-aligned label instead of centered
    pub align_left: bool,
    render: RenderFn,
    hit: HitFn,
}

pub fn hit_rect(widget: &Widget, point: Point) -> bool {
    widget.bounds.contains(point)
}

pub fn hit_nothing(_: &Widget, _: Point) -> bool {
    false
}

fn render_button(widget: &Widget, surface: &mut dyn Surface, state: State) {
    let fill = TriColor::BUTTON.get(state);
    let radius = widget.bounds.h.min(widget.bounds.w) * 0.25;
    surface.rect(widget.bounds, radius, Paint::Fill, fill);
    surface.rect(widget.bounds, radius, Paint::Stroke(2.), Color::GREY);
}

fn render_row(widget: &Widget, surface: &mut dyn Surface, state: State) {
    let fill = match state {
        State::Normal => Color::TRANSPARENT,
        _ => TriColor::BUTTON.get(state).with_alpha(0.8),
    };
    surface.rect(widget.bounds, 4., Paint::Fill, fill);
    let bottom = widget.bounds.y + widget.bounds.h;
    surface.line(
        &[
            Point { x: widget.bounds.x, y: bottom },
            Point { x: widget.bounds.x + widget.bounds.w, y: bottom },
        ],
        1.,
        Color::GREY.with_alpha(0.4),
    );
}

fn render_nothing(_: &Widget, _: &mut dyn Surface, _: State) {}

impl Widget {
    pub const DEFAULT_FONT_SIZE: f32 = 28.;

    fn new(bounds: Rect, label: &str, render: RenderFn, hit: HitFn) -> Self {
        Self {
            bounds,
            label: label.to_string(),
            font_size: Self::DEFAULT_FONT_SIZE,
            highlighted: false,
            align_left: false,
            render,
            hit,
        }
    }

    pub fn button(bounds: Rect, label: &str) -> Self {
        Self::new(bounds, label, render_button, hit_rect)
    }

    /// Full-width list entry, label on the left
    pub fn row(bounds: Rect, label: &str) -> Self {
        let mut row = Self::new(bounds, label, render_row, hit_rect);
        row.align_left = true;
        row.font_size = 24.;
        row
    }

    /// Text only, never clicked
    pub fn label(bounds: Rect, label: &str) -> Self {
        Self::new(bounds, label, render_nothing, hit_nothing)
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.hit)(self, point)
    }

    pub fn state(&self, mouse: Point, pressed: bool) -> State {
        if self.highlighted {
            State::Pressed
        } else if self.contains(mouse) {
            if pressed {
                State::Pressed
            } else {
                State::Hover
            }
        } else {
            State::Normal
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface, mouse: Point, pressed: bool) {
        (self.render)(self, surface, self.state(mouse, pressed))
    }

    /// Text goes straight to the canvas, after the shapes
    pub fn draw_label(&self, canvas: &mut Canvas, color: Color) {
        let mut text = Text::new(self.label.as_str());
        text.set_scale(PxScale::from(self.font_size));
        let Rect { x, y, w, h } = self.bounds;
        let dest = if self.align_left {
            text.set_layout(TextLayout::center_left());
            Point { x: x + 12., y: y + h / 2. }
        } else {
            text.set_layout(TextLayout::center());
            Point { x: x + w / 2., y: y + h / 2. }
        };
        canvas.draw(&text, DrawParam::default().dest(dest).color(color));
    }
}

/// `n` rects of equal size stacked vertically with `gap` between them
pub fn column(top_left: Point, size: Point, gap: f32, n: usize) -> Vec<Rect> {
    (0..n)
        .map(|i| Rect::new(top_left.x, top_left.y + i as f32 * (size.y + gap), size.x, size.y))
        .collect()
}
