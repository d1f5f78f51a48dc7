use std::time::{Duration, Instant};

use ggez::graphics::{Canvas, DrawParam, PxScale, Text, TextLayout};

use crate::basic::Point;
use crate::color::Color;
use crate::support::text_layout::TextLayoutExtension;

/// Short-lived text like "Bought Ghost" or "Not enough coins", anchored
/// to the bottom of the window
pub struct Message {
    pub text: String,
    pub font_size: f32,
    pub color: Color,
    pub disappear: Instant,
}

impl Message {
    pub const MARGIN: f32 = 16.;
    pub const FONT_SIZE: f32 = 26.;
    const FADE: Duration = Duration::from_millis(300);

    pub fn new(text: impl Into<String>, color: Color, duration: Duration) -> Self {
        Self {
            text: text.into(),
            font_size: Self::FONT_SIZE,
            color,
            disappear: Instant::now() + duration,
        }
    }

    pub fn notification(text: impl Into<String>, color: Color) -> Self {
        Self::new(text, color, Duration::from_secs(2))
    }

    /// Opacity at `now`, None once the message has expired
    pub fn alpha(&self, now: Instant) -> Option<f32> {
        let left = self.disappear.checked_duration_since(now)?;
        if left.is_zero() {
            return None;
        }
        if left >= Self::FADE {
            return Some(1.);
        }
        let t = left.as_secs_f32() / Self::FADE.as_secs_f32();
        Some(ezing::quad_out(t))
    }

    /// Returns false once the message has expired and should be dropped
    pub fn draw(&self, canvas: &mut Canvas, window: Point) -> bool {
        let Some(alpha) = self.alpha(Instant::now()) else {
            return false;
        };
        let dest = Point { x: window.x / 2., y: window.y - Self::MARGIN };
        let mut text = Text::new(self.text.as_str());
        text.set_scale(PxScale::from(self.font_size))
            .set_bounds([window.x - 2. * Self::MARGIN, window.y / 2.])
            .set_layout(TextLayout::bottom_middle());
        let color = self.color.with_alpha(self.color.a * alpha);
        canvas.draw(&text, DrawParam::default().dest(dest).color(color));
        true
    }
}

/// Keeps the latest notification, drawing drops it once it expires
#[derive(Default)]
pub struct Notifications {
    current: Option<Message>,
}

impl Notifications {
    pub fn show(&mut self, message: Message) {
        self.current = Some(message);
    }

    pub fn draw(&mut self, canvas: &mut Canvas, window: Point) {
        if let Some(message) = &self.current {
            if !message.draw(canvas, window) {
                self.current = None;
            }
        }
    }
}

#[test]
fn test_message_fades_out() {
    let start = Instant::now();
    let message = Message::new("Bought", Color::WHITE, Duration::from_secs(1));
    let deadline = message.disappear;
    assert_eq!(message.alpha(start), Some(1.));
    let fading = message.alpha(deadline - Duration::from_millis(150)).unwrap();
    assert!(fading > 0. && fading < 1.);
    assert_eq!(message.alpha(deadline), None);
    assert_eq!(message.alpha(deadline + Duration::from_millis(1)), None);

    let notification = Message::notification("Equipped", Color::WHITE);
    assert!(notification.disappear >= start + Duration::from_secs(2));
}
