use ggez::graphics::{Canvas, Rect, TextLayout};
use ggez::input::keyboard::KeyCode;
use ggez::Context;
use tracing::info;

use super::skin_list::{Entry, SkinList};
use super::{draw_labels, draw_text, draw_widgets, mouse, DIM_TEXT, GOLD, MENU_BACKGROUND, TEXT};
use crate::app::message::{Message, Notifications};
use crate::app::{Command, ScreenKind, Services, View, MARGIN};
use crate::basic::Point;
use crate::button::Widget;
use crate::color::Color;
use crate::error::Result;
use crate::rendering::surface::MeshSurface;
use crate::skin::profile::ProfileStore;
use crate::skin::SkinCatalog;
use crate::support::text_layout::TextLayoutExtension;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Purchase {
    Bought,
    NotEnoughCoins,
    AlreadyOwned,
    Unknown,
}

/// Spends the price and grants the skin, nothing changes unless it is bought
pub fn buy(profile: &mut ProfileStore, catalog: &SkinCatalog, id: &str) -> Purchase {
    let Some(skin) = catalog.get(id) else {
        return Purchase::Unknown;
    };
    if profile.owns(id) {
        return Purchase::AlreadyOwned;
    }
    if !profile.spend(skin.price) {
        return Purchase::NotEnoughCoins;
    }
    profile.grant(id);
    Purchase::Bought
}

/// Every skin the player does not own yet, cheapest first per kind
fn for_sale(services: &Services) -> Vec<Entry> {
    services
        .catalog
        .iter()
        .filter(|skin| !services.profile.owns(&skin.id))
        .map(|skin| Entry {
            id: skin.id.clone(),
            label: format!("{}   {} coins", skin.name, skin.price),
            highlighted: false,
        })
        .collect()
}

pub struct Shop {
    list: SkinList,
    back: Widget,
    notifications: Notifications,
}

impl Shop {
    pub fn new(services: &Services) -> Self {
        let window = services.window();
        let area = Rect::new(MARGIN * 4., 110., window.x - MARGIN * 8., window.y - 240.);
        let mut list = SkinList::new(area);
        list.set_entries(for_sale(services));
        Self {
            list,
            back: Widget::button(Rect::new(MARGIN, MARGIN, 120., 44.), "Back").font_size(24.),
            notifications: Notifications::default(),
        }
    }
}

impl View for Shop {
    fn draw(&mut self, ctx: &mut Context, services: &mut Services) -> Result {
        let window = services.window();
        let (mouse, pressed) = mouse(ctx);
        let mut canvas = Canvas::from_frame(ctx, MENU_BACKGROUND.0);

        let mut widgets = self.list.widgets();
        widgets.push(&self.back);
        let mut surface = MeshSurface::new(ctx, &mut services.images, Point::zero());
        draw_widgets(&mut surface, &widgets, mouse, pressed);
        self.list.draw_previews(&mut surface, &services.catalog, &mut services.sprites);
        surface.finish(&mut canvas)?;
        draw_labels(&mut canvas, &widgets);

        draw_text(&mut canvas, "Shop", Point { x: window.x / 2., y: 40. }, 48., TextLayout::center(), TEXT);
        draw_text(
            &mut canvas,
            &format!("Coins: {}", services.profile.balance()),
            Point { x: window.x - MARGIN, y: 40. },
            26.,
            TextLayout::center_right(),
            GOLD,
        );
        if self.list.is_empty() {
            let center = Point { x: window.x / 2., y: window.y / 2. };
            draw_text(&mut canvas, "You own every skin", center, 30., TextLayout::center(), DIM_TEXT);
        }
        self.notifications.draw(&mut canvas, window);

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down(&mut self, _ctx: &mut Context, _services: &mut Services, key: KeyCode, _repeated: bool) -> Command {
        match key {
            KeyCode::Escape => Command::Goto(ScreenKind::Menu),
            _ => Command::None,
        }
    }

    fn mouse_down(&mut self, _ctx: &mut Context, services: &mut Services, point: Point) -> Command {
        if self.back.contains(point) {
            return Command::Goto(ScreenKind::Menu);
        }
        let Some(id) = self.list.click(point) else {
            return Command::None;
        };
        let name = services.catalog.get_or_default(&id).name.clone();
        let message = match buy(&mut services.profile, &services.catalog, &id) {
            Purchase::Bought => {
                info!("bought {:?}, {} coins left", id, services.profile.balance());
                self.list.set_entries(for_sale(services));
                Message::notification(format!("Bought {}", name), GOLD)
            }
            Purchase::NotEnoughCoins => Message::notification("Not enough coins", Color::RED),
            Purchase::AlreadyOwned | Purchase::Unknown => return Command::None,
        };
        self.notifications.show(message);
        Command::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skin::profile::Profile;
    use std::collections::BTreeSet;

    const SKINS: &str = r#"{
        "hex": {"name": "Hex", "price": 30, "shape": "hexagon",
                "colors": [[60, 120, 220], [30, 60, 110]]}
    }"#;

    #[test]
    fn test_buying() {
        let catalog = SkinCatalog::parse(SKINS, "{}");
        let mut profile = ProfileStore::in_memory(Profile { coins: 40, ..Profile::default() });

        assert_eq!(buy(&mut profile, &catalog, "nope"), Purchase::Unknown);
        assert_eq!(buy(&mut profile, &catalog, "hex"), Purchase::Bought);
        assert_eq!(profile.balance(), 10);
        assert!(profile.owns("hex"));
        assert_eq!(buy(&mut profile, &catalog, "hex"), Purchase::AlreadyOwned);
        assert_eq!(profile.balance(), 10);
    }

    #[test]
    fn test_too_expensive_changes_nothing() {
        let catalog = SkinCatalog::parse(SKINS, "{}");
        let mut profile = ProfileStore::in_memory(Profile { coins: 29, ..Profile::default() });
        assert_eq!(buy(&mut profile, &catalog, "hex"), Purchase::NotEnoughCoins);
        assert_eq!(profile.balance(), 29);
        assert_eq!(profile.profile().owned_skins, BTreeSet::from([crate::skin::DEFAULT_SKIN.to_string()]));
    }
}
