use ggez::event::MouseButton;
use ggez::graphics::{Canvas, DrawParam, PxScale, Rect, Text, TextLayout};
use ggez::Context;

use crate::basic::{Dir, Point};
use crate::button::Widget;
use crate::color::Color;
use crate::rendering::image_skin::rotation_angle;
use crate::rendering::shape::{draw_shape, ShapeStyle};
use crate::rendering::sprite::SpriteCache;
use crate::rendering::surface::Surface;
use crate::skin::{Skin, SkinDescriptor};

pub use backpack::Backpack;
pub use game::Game;
pub use help::Help;
pub use menu::Menu;
pub use shop::Shop;

mod backpack;
mod game;
mod help;
mod menu;
mod shop;
mod skin_list;

pub const TEXT: Color = Color(ggez::graphics::Color::new(0.93, 0.93, 0.9, 1.));
pub const DIM_TEXT: Color = Color(ggez::graphics::Color::new(0.65, 0.67, 0.7, 1.));
pub const GOLD: Color = Color(ggez::graphics::Color::new(1., 0.8, 0.25, 1.));
pub const MENU_BACKGROUND: Color = Color(ggez::graphics::Color::new(0.08, 0.09, 0.11, 1.));

pub fn mouse(ctx: &Context) -> (Point, bool) {
    (ctx.mouse.position().into(), ctx.mouse.button_pressed(MouseButton::Left))
}

pub fn draw_text(canvas: &mut Canvas, text: &str, dest: Point, size: f32, layout: TextLayout, color: Color) {
    let mut text = Text::new(text);
    text.set_scale(PxScale::from(size)).set_layout(layout);
    canvas.draw(&text, DrawParam::default().dest(dest).color(color));
}

/// Shapes only, labels go on top afterwards with `draw_labels`
pub fn draw_widgets(surface: &mut dyn Surface, widgets: &[&Widget], mouse: Point, pressed: bool) {
    for widget in widgets {
        widget.draw(surface, mouse, pressed);
    }
}

pub fn draw_labels(canvas: &mut Canvas, widgets: &[&Widget]) {
    for widget in widgets {
        widget.draw_label(canvas, TEXT);
    }
}

/// A skin as it looks in a menu, heads face right
pub fn draw_preview(surface: &mut dyn Surface, sprites: &mut SpriteCache, skin: &Skin, bounds: Rect) {
    let center = Point { x: bounds.x + bounds.w / 2., y: bounds.y + bounds.h / 2. };
    let side = bounds.w.min(bounds.h);
    match &skin.descriptor {
        SkinDescriptor::Procedural { shape, base, dark } => {
            let style = ShapeStyle {
                center,
                radius: side / 2.,
                base: *base,
                dark: *dark,
                dir: Dir::R,
            };
            draw_shape(surface, *shape, &style);
        }
        SkinDescriptor::Image { head_sprite, .. } => {
            let size = side.round().max(1.) as u32;
            let sprite = sprites
                .rotated(head_sprite, size, rotation_angle(Dir::R, true), true)
                .unwrap_or_else(|| sprites.placeholder(size));
            surface.blit(&sprite, center);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::surface::recording::RecordingSurface;
    use crate::skin::SkinCatalog;

    #[test]
    fn test_previews() {
        let image_skins = r#"{
            "ghost": {"name": "Ghost", "price": 50, "head_image": "ghost_head.png",
                      "body_image": "ghost_body.png", "type": "image"}
        }"#;
        let catalog = SkinCatalog::parse("{}", image_skins);
        let mut sprites = SpriteCache::new(std::env::temp_dir().join("skin_snake_no_sprites"));
        let bounds = Rect::new(100., 10., 30., 30.);

        let mut surface = RecordingSurface::default();
        draw_preview(&mut surface, &mut sprites, catalog.default_skin(), bounds);
        assert!(!surface.primitives.is_empty());
        assert!(surface.blits().is_empty());

        // no sprite files at all, so a placeholder stands in
        let mut surface = RecordingSurface::default();
        let ghost = catalog.get("ghost").unwrap();
        draw_preview(&mut surface, &mut sprites, ghost, bounds);
        let blits = surface.blits();
        assert_eq!(blits.len(), 1);
        assert_eq!(blits[0].0.name, "");
        assert_eq!(blits[0].0.size, 30);
        assert_eq!(blits[0].1, Point { x: 115., y: 25. });
    }
}
