use ggez::graphics::{Canvas, Rect, TextLayout};
use ggez::input::keyboard::KeyCode;
use ggez::Context;

use super::{draw_labels, draw_text, draw_widgets, mouse, DIM_TEXT, MENU_BACKGROUND, TEXT};
use crate::app::{Command, ScreenKind, Services, View, MARGIN};
use crate::basic::Point;
use crate::button::Widget;
use crate::error::Result;
use crate::rendering::surface::MeshSurface;
use crate::support::text_layout::TextLayoutExtension;

const HELP: &[&str] = &[
    "Arrow keys or WASD steer the snake",
    "P or Space pauses, Esc goes back to the menu",
    "",
    "The board wraps around at every edge",
    "Eat the food to grow and score points",
    "Running into yourself ends the run",
    "",
    "Every finished run turns points into coins",
    "Spend coins on new skins in the shop",
    "Equip the skins you own from the backpack",
];

pub struct Help {
    back: Widget,
}

impl Help {
    pub fn new(_services: &Services) -> Self {
        Self {
            back: Widget::button(Rect::new(MARGIN, MARGIN, 120., 44.), "Back").font_size(24.),
        }
    }
}

impl View for Help {
    fn draw(&mut self, ctx: &mut Context, services: &mut Services) -> Result {
        let window = services.window();
        let (mouse, pressed) = mouse(ctx);
        let mut canvas = Canvas::from_frame(ctx, MENU_BACKGROUND.0);

        let widgets = [&self.back];
        let mut surface = MeshSurface::new(ctx, &mut services.images, Point::zero());
        draw_widgets(&mut surface, &widgets, mouse, pressed);
        surface.finish(&mut canvas)?;
        draw_labels(&mut canvas, &widgets);

        draw_text(&mut canvas, "How to play", Point { x: window.x / 2., y: 40. }, 48., TextLayout::center(), TEXT);
        let left = window.x / 2. - 260.;
        for (i, line) in HELP.iter().enumerate() {
            let dest = Point { x: left, y: 120. + i as f32 * 34. };
            draw_text(&mut canvas, line, dest, 24., TextLayout::top_left(), DIM_TEXT);
        }
        let speed = format!("Speed: {} moves per second", services.settings.speed);
        let dest = Point { x: window.x / 2., y: window.y - MARGIN };
        draw_text(&mut canvas, &speed, dest, 20., TextLayout::bottom_middle(), DIM_TEXT);

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down(&mut self, _ctx: &mut Context, _services: &mut Services, key: KeyCode, _repeated: bool) -> Command {
        match key {
            KeyCode::Escape | KeyCode::Return => Command::Goto(ScreenKind::Menu),
            _ => Command::None,
        }
    }

    fn mouse_down(&mut self, _ctx: &mut Context, _services: &mut Services, point: Point) -> Command {
        if self.back.contains(point) {
            Command::Goto(ScreenKind::Menu)
        } else {
            Command::None
        }
    }
}
