use ggez::graphics::{Canvas, Rect, TextLayout};
use ggez::input::keyboard::KeyCode;
use ggez::Context;
use tracing::info;

use super::skin_list::{Entry, SkinList};
use super::{draw_labels, draw_text, draw_widgets, mouse, DIM_TEXT, MENU_BACKGROUND, TEXT};
use crate::app::message::{Message, Notifications};
use crate::app::{Command, ScreenKind, Services, View, MARGIN};
use crate::basic::Point;
use crate::button::{Dropdown, Widget};
use crate::error::Result;
use crate::rendering::surface::MeshSurface;
use crate::skin::profile::ProfileStore;
use crate::skin::{Skin, SkinCatalog};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Procedural,
    Image,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Procedural, Filter::Image];

    pub fn name(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Procedural => "Procedural",
            Filter::Image => "Image",
        }
    }

    pub fn keeps(self, skin: &Skin) -> bool {
        match self {
            Filter::All => true,
            Filter::Procedural => !skin.descriptor.is_image(),
            Filter::Image => skin.descriptor.is_image(),
        }
    }
}

/// Owned skins in catalog order, owned ids missing from the catalog are
/// left out
pub fn owned_skins<'c>(catalog: &'c SkinCatalog, profile: &ProfileStore, filter: Filter) -> Vec<&'c Skin> {
    catalog
        .iter()
        .filter(|skin| profile.owns(&skin.id) && filter.keeps(skin))
        .collect()
}

pub struct Backpack {
    list: SkinList,
    filter: Dropdown,
    back: Widget,
    notifications: Notifications,
}

impl Backpack {
    pub fn new(services: &Services) -> Self {
        let window = services.window();
        let area = Rect::new(MARGIN * 4., 110., window.x - MARGIN * 8., window.y - 240.);
        let names = Filter::ALL.map(Filter::name);
        let mut backpack = Self {
            list: SkinList::new(area),
            filter: Dropdown::new(Rect::new(window.x - MARGIN - 180., MARGIN, 180., 40.), &names),
            back: Widget::button(Rect::new(MARGIN, MARGIN, 120., 44.), "Back").font_size(24.),
            notifications: Notifications::default(),
        };
        backpack.refresh(services);
        backpack
    }

    fn filter(&self) -> Filter {
        Filter::ALL[self.filter.selected()]
    }

    fn refresh(&mut self, services: &Services) {
        let equipped = services.profile.equipped();
        let entries = owned_skins(&services.catalog, &services.profile, self.filter())
            .into_iter()
            .map(|skin| Entry {
                id: skin.id.clone(),
                label: if skin.id == equipped {
                    format!("{}   (equipped)", skin.name)
                } else {
                    skin.name.clone()
                },
                highlighted: skin.id == equipped,
            })
            .collect();
        self.list.set_entries(entries);
    }
}

impl View for Backpack {
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

        draw_text(&mut canvas, "Backpack", Point { x: window.x / 2., y: 40. }, 48., TextLayout::center(), TEXT);
        if self.list.is_empty() {
            let center = Point { x: window.x / 2., y: window.y / 2. };
            draw_text(&mut canvas, "Nothing here yet", center, 30., TextLayout::center(), DIM_TEXT);
        }

        // the open list covers the rows below it
        let dropdown: Vec<_> = self.filter.widgets().collect();
        let mut surface = MeshSurface::new(ctx, &mut services.images, Point::zero());
        draw_widgets(&mut surface, &dropdown, mouse, pressed);
        surface.finish(&mut canvas)?;
        draw_labels(&mut canvas, &dropdown);

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
        if self.filter.is_open() || self.filter.contains(point) {
            if self.filter.click(point) {
                self.refresh(services);
            }
            return Command::None;
        }
        if self.back.contains(point) {
            return Command::Goto(ScreenKind::Menu);
        }
        let Some(id) = self.list.click(point) else {
            return Command::None;
        };
        if id != services.profile.equipped() && services.profile.equip(&id) {
            info!("equipped {:?}", id);
            let name = &services.catalog.get_or_default(&id).name;
            self.notifications.show(Message::notification(format!("Equipped {}", name), TEXT));
            self.refresh(services);
        }
        Command::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skin::profile::Profile;
    use crate::skin::DEFAULT_SKIN;
    use std::collections::BTreeSet;

    #[test]
    fn test_owned_skins_by_filter() {
        let procedural = r#"{
            "hex": {"name": "Hex", "price": 30, "shape": "hexagon", "colors": [[60, 120, 220], [30, 60, 110]]},
            "leaf": {"name": "Leaf", "price": 20, "shape": "leaf", "colors": [[60, 180, 60], [30, 90, 30]]}
        }"#;
        let image = r#"{
            "ghost": {"name": "Ghost", "price": 50, "head_image": "h.png", "body_image": "b.png", "type": "image"}
        }"#;
        let catalog = SkinCatalog::parse(procedural, image);
        let profile = ProfileStore::in_memory(Profile {
            coins: 0,
            owned_skins: BTreeSet::from(["hex".to_string(), "ghost".to_string(), "retired".to_string()]),
            equipped_skin: "ghost".to_string(),
        });

        let ids = |filter| {
            owned_skins(&catalog, &profile, filter)
                .into_iter()
                .map(|skin| skin.id.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(Filter::All), [DEFAULT_SKIN, "hex", "ghost"]);
        assert_eq!(ids(Filter::Procedural), [DEFAULT_SKIN, "hex"]);
        assert_eq!(ids(Filter::Image), ["ghost"]);
    }
}
