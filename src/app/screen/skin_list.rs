use ggez::graphics::Rect;

use crate::basic::Point;
use crate::button::Widget;
use crate::rendering::sprite::SpriteCache;
use crate::rendering::surface::Surface;
use crate::skin::{SkinCatalog, SkinId};

use super::draw_preview;

const ROW_HEIGHT: f32 = 44.;
const PREVIEW_PADDING: f32 = 7.;

pub struct Entry {
    pub id: SkinId,
    pub label: String,
    pub highlighted: bool,
}

/// Paged list of skins with a live preview at the end of every row
pub struct SkinList {
    area: Rect,
    entries: Vec<Entry>,
    page: usize,
    rows: Vec<Widget>,
    prev: Widget,
    next: Widget,
    page_label: Widget,
}

impl SkinList {
    /// Rows fill `area`, the page buttons sit just below it
    pub fn new(area: Rect) -> Self {
        let below = area.y + area.h + 8.;
        Self {
            area,
            entries: vec![],
            page: 0,
            rows: vec![],
            prev: Widget::button(Rect::new(area.x, below, 48., 36.), "<"),
            next: Widget::button(Rect::new(area.x + area.w - 48., below, 48., 36.), ">"),
            page_label: Widget::label(Rect::new(area.x + 48., below, area.w - 96., 36.), "").font_size(20.),
        }
    }

    pub fn per_page(&self) -> usize {
        ((self.area.h / ROW_HEIGHT) as usize).max(1)
    }

    pub fn pages(&self) -> usize {
        ((self.entries.len() + self.per_page() - 1) / self.per_page()).max(1)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces the contents, staying on the current page if it still exists
    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        self.page = self.page.min(self.pages() - 1);
        self.layout();
    }

    fn layout(&mut self) {
        let start = self.page * self.per_page();
        let area = self.area;
        self.rows = self.entries[start..]
            .iter()
            .take(self.per_page())
            .enumerate()
            .map(|(i, entry)| {
                let bounds = Rect::new(area.x, area.y + i as f32 * ROW_HEIGHT, area.w, ROW_HEIGHT);
                let mut row = Widget::row(bounds, &entry.label);
                row.highlighted = entry.highlighted;
                row
            })
            .collect();
        self.page_label.label = format!("{} / {}", self.page + 1, self.pages());
    }

    fn turn_page(&mut self, forward: bool) {
        let page = if forward {
            (self.page + 1).min(self.pages() - 1)
        } else {
            self.page.saturating_sub(1)
        };
        if page != self.page {
            self.page = page;
            self.layout();
        }
    }

    /// Flips pages itself, returns the skin whose row was clicked
    pub fn click(&mut self, point: Point) -> Option<SkinId> {
        if self.pages() > 1 {
            if self.prev.contains(point) {
                self.turn_page(false);
                return None;
            }
            if self.next.contains(point) {
                self.turn_page(true);
                return None;
            }
        }
        let start = self.page * self.per_page();
        let index = self.rows.iter().position(|row| row.contains(point))?;
        Some(self.entries[start + index].id.clone())
    }

    pub fn widgets(&self) -> Vec<&Widget> {
        let mut widgets: Vec<_> = self.rows.iter().collect();
        if self.pages() > 1 {
            widgets.extend([&self.prev, &self.page_label, &self.next]);
        }
        widgets
    }

    pub fn draw_previews(&self, surface: &mut dyn Surface, catalog: &SkinCatalog, sprites: &mut SpriteCache) {
        let start = self.page * self.per_page();
        for (row, entry) in self.rows.iter().zip(&self.entries[start..]) {
            let Some(skin) = catalog.get(&entry.id) else {
                continue;
            };
            let side = row.bounds.h - 2. * PREVIEW_PADDING;
            let bounds = Rect::new(
                row.bounds.x + row.bounds.w - side - 2. * PREVIEW_PADDING,
                row.bounds.y + PREVIEW_PADDING,
                side,
                side,
            );
            draw_preview(surface, sprites, skin, bounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<Entry> {
        (0..n)
            .map(|i| Entry {
                id: format!("skin_{}", i),
                label: format!("Skin {}", i),
                highlighted: i == 6,
            })
            .collect()
    }

    fn row_center(i: usize) -> Point {
        Point { x: 100., y: 20. + i as f32 * ROW_HEIGHT + ROW_HEIGHT / 2. }
    }

    #[test]
    fn test_paging() {
        // room for 5 rows
        let mut list = SkinList::new(Rect::new(0., 20., 400., 5.5 * ROW_HEIGHT));
        list.set_entries(entries(12));
        assert_eq!(list.per_page(), 5);
        assert_eq!(list.pages(), 3);
        assert_eq!(list.click(row_center(2)).as_deref(), Some("skin_2"));

        let next = Point { x: 390., y: 20. + 5.5 * ROW_HEIGHT + 20. };
        assert_eq!(list.click(next), None);
        assert_eq!(list.page(), 1);
        assert_eq!(list.click(row_center(0)).as_deref(), Some("skin_5"));
        assert!(list.widgets()[1].highlighted);

        list.click(next);
        list.click(next);
        assert_eq!(list.page(), 2);
        // the last page only has two rows
        assert_eq!(list.click(row_center(3)), None);

        list.set_entries(entries(4));
        assert_eq!(list.page(), 0);
        assert_eq!(list.pages(), 1);
        assert_eq!(list.widgets().len(), 4);
    }
}
