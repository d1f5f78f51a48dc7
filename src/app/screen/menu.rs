use ggez::graphics::{Canvas, TextLayout};
use ggez::input::keyboard::KeyCode;
use ggez::Context;
use hsl::HSL;
use rand::rngs::ThreadRng;

use super::{draw_labels, draw_text, draw_widgets, mouse, GOLD, TEXT};
use crate::app::bubbles::Bubbles;
use crate::app::{Command, ScreenKind, Services, View, MARGIN};
use crate::basic::Point;
use crate::button::{column, Widget};
use crate::color::to_color::ToColor;
use crate::error::Result;
use crate::rendering::surface::MeshSurface;
use crate::support::text_layout::TextLayoutExtension;

const BUTTON_SIZE: Point = Point { x: 240., y: 52. };

/// Background hue at `seconds`, one full turn every two minutes
pub fn background_hue(seconds: f32) -> f64 {
    (seconds as f64 * 3.) % 360.
}

pub struct Menu {
    buttons: Vec<(Widget, Command)>,
    bubbles: Bubbles,
    rng: ThreadRng,
}

impl Menu {
    pub fn new(services: &Services) -> Self {
        let window = services.window();
        let targets = [
            ("Play", Command::Goto(ScreenKind::Game)),
            ("Shop", Command::Goto(ScreenKind::Shop)),
            ("Backpack", Command::Goto(ScreenKind::Backpack)),
            ("Help", Command::Goto(ScreenKind::Help)),
            ("Quit", Command::Quit),
        ];
        let top_left = Point { x: (window.x - BUTTON_SIZE.x) / 2., y: window.y * 0.3 };
        let buttons = column(top_left, BUTTON_SIZE, 14., targets.len())
            .into_iter()
            .zip(targets)
            .map(|(bounds, (label, command))| (Widget::button(bounds, label), command))
            .collect();
        let mut rng = rand::thread_rng();
        Self {
            buttons,
            bubbles: Bubbles::new(40, window, &mut rng),
            rng,
        }
    }
}

impl View for Menu {
    fn update(&mut self, ctx: &mut Context, _services: &mut Services) -> Result<Command> {
        let dt = ctx.time.delta().as_secs_f32().min(0.1);
        self.bubbles.update(dt, &mut self.rng);
        Ok(Command::None)
    }

    fn draw(&mut self, ctx: &mut Context, services: &mut Services) -> Result {
        let window = services.window();
        let (mouse, pressed) = mouse(ctx);
        let seconds = ctx.time.time_since_start().as_secs_f32();
        let background = HSL { h: background_hue(seconds), s: 0.35, l: 0.12 }.to_color();
        let mut canvas = Canvas::from_frame(ctx, background.0);

        let widgets: Vec<_> = self.buttons.iter().map(|(widget, _)| widget).collect();
        let mut surface = MeshSurface::new(ctx, &mut services.images, Point::zero());
        self.bubbles.draw(&mut surface);
        draw_widgets(&mut surface, &widgets, mouse, pressed);
        surface.finish(&mut canvas)?;
        draw_labels(&mut canvas, &widgets);

        // the title bobs gently
        let phase = (seconds / 1.5) % 2.;
        let t = if phase < 1. { phase } else { 2. - phase };
        let title_y = window.y * 0.15 + ezing::sine_inout(t) * 8.;
        draw_text(&mut canvas, "Skin Snake", Point { x: window.x / 2., y: title_y }, 72., TextLayout::center(), TEXT);
        draw_text(
            &mut canvas,
            &format!("Coins: {}", services.profile.balance()),
            Point { x: window.x - MARGIN, y: MARGIN },
            26.,
            TextLayout::top_right(),
            GOLD,
        );

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down(&mut self, _ctx: &mut Context, _services: &mut Services, key: KeyCode, _repeated: bool) -> Command {
        match key {
            KeyCode::Return | KeyCode::Space => Command::Goto(ScreenKind::Game),
            KeyCode::Escape => Command::Quit,
            _ => Command::None,
        }
    }

    fn mouse_down(&mut self, _ctx: &mut Context, _services: &mut Services, point: Point) -> Command {
        self.buttons
            .iter()
            .find(|(widget, _)| widget.contains(point))
            .map_or(Command::None, |(_, command)| *command)
    }
}

#[test]
fn test_background_hue_wraps() {
    assert_eq!(background_hue(0.), 0.);
    assert_eq!(background_hue(60.), 180.);
    assert!(background_hue(130.) < 360.);
}
