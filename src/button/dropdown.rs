use ggez::graphics::Rect;

use super::Widget;
use crate::basic::Point;

/// A button that unfolds into a list of options below it
pub struct Dropdown {
    header: Widget,
    names: Vec<String>,
    options: Vec<Widget>,
    selected: usize,
    open: bool,
}

impl Dropdown {
    pub fn new(bounds: Rect, names: &[&str]) -> Self {
        assert!(!names.is_empty(), "dropdown without options");
        let options = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let y = bounds.y + (i + 1) as f32 * bounds.h;
                Widget::button(Rect::new(bounds.x, y, bounds.w, bounds.h), name).font_size(22.)
            })
            .collect();
        let mut dropdown = Self {
            header: Widget::button(bounds, "").font_size(22.),
            names: names.iter().map(|name| name.to_string()).collect(),
            options,
            selected: 0,
            open: false,
        };
        dropdown.select(0);
        dropdown
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.header.label = format!("{} v", self.names[index]);
        for (i, option) in self.options.iter_mut().enumerate() {
            option.highlighted = i == index;
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the click landed on the dropdown at all
    pub fn contains(&self, point: Point) -> bool {
        self.header.contains(point) || (self.open && self.options.iter().any(|o| o.contains(point)))
    }

    /// Toggles the list or picks an option, returns true if the selection
    /// changed. Any click closes an open list.
    pub fn click(&mut self, point: Point) -> bool {
        if self.header.contains(point) {
            self.open = !self.open;
            return false;
        }
        if !self.open {
            return false;
        }
        self.open = false;
        match self.options.iter().position(|option| option.contains(point)) {
            Some(index) if index != self.selected => {
                self.select(index);
                true
            }
            _ => false,
        }
    }

    /// Header first, then the options if the list is open
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        let options = if self.open { &self.options[..] } else { &[] };
        std::iter::once(&self.header).chain(options)
    }
}

#[test]
fn test_dropdown() {
    let mut dropdown = Dropdown::new(Rect::new(0., 0., 100., 30.), &["All", "Procedural", "Image"]);
    let header = Point { x: 50., y: 15. };
    let third = Point { x: 50., y: 3. * 30. + 15. };

    assert_eq!(dropdown.widgets().count(), 1);
    // closed lists ignore clicks where the options would be
    assert!(!dropdown.click(third));
    assert!(!dropdown.contains(third));

    assert!(!dropdown.click(header));
    assert!(dropdown.is_open());
    assert_eq!(dropdown.widgets().count(), 4);
    assert!(dropdown.click(third));
    assert_eq!(dropdown.selected(), 2);
    assert!(!dropdown.is_open());
    assert_eq!(dropdown.widgets().next().map(|w| w.label.as_str()), Some("Image v"));

    // picking the same option again is not a change
    dropdown.click(header);
    assert!(!dropdown.click(third));
    assert_eq!(dropdown.selected(), 2);
}
