use serde::Deserialize;

pub use catalog::SkinCatalog;
pub use profile::{Profile, ProfileStore};

use crate::color::Color;

mod catalog;
pub(crate) mod profile;

pub type SkinId = String;

/// Always present in the catalog and always owned
pub const DEFAULT_SKIN: &str = "default_rectangle";

/// Procedural shape tags, each has its own renderer
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Rectangle,
    Circle,
    Hexagon,
    Pentagram,
    Fan,
    Heart,
    Leaf,
    WaterDrop,
    MusicNote,
    LightningBolt,
    Crown,
    Arrow,
}

impl Shape {
    #[cfg(test)]
    pub const ALL: [Shape; 12] = [
        Shape::Rectangle,
        Shape::Circle,
        Shape::Hexagon,
        Shape::Pentagram,
        Shape::Fan,
        Shape::Heart,
        Shape::Leaf,
        Shape::WaterDrop,
        Shape::MusicNote,
        Shape::LightningBolt,
        Shape::Crown,
        Shape::Arrow,
    ];

    /// Whether the shape turns with the segment's direction
    #[cfg(test)]
    pub fn is_oriented(self) -> bool {
        use Shape::*;
        match self {
            Rectangle | Circle | Hexagon | Pentagram | Heart | Crown => false,
            Fan | Leaf | WaterDrop | MusicNote | LightningBolt | Arrow => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AudioDescriptor {
    /// Relative to the resource root
    pub background_music: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SkinDescriptor {
    Procedural {
        shape: Shape,
        base: Color,
        dark: Color,
    },
    Image {
        head_sprite: String,
        body_sprite: String,
        audio: Option<AudioDescriptor>,
    },
}

impl SkinDescriptor {
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }
}

/// A catalog entry, `name` and `price` are only shown in menus
#[derive(Clone, Debug, PartialEq)]
pub struct Skin {
    pub id: SkinId,
    pub name: String,
    pub price: u32,
    pub descriptor: SkinDescriptor,
}

impl Skin {
    pub fn default_rectangle() -> Self {
        Self {
            id: DEFAULT_SKIN.to_string(),
            name: "Classic".to_string(),
            price: 0,
            descriptor: SkinDescriptor::Procedural {
                shape: Shape::Rectangle,
                base: Color::from_rgb(46, 204, 113),
                dark: Color::from_rgb(30, 132, 73),
            },
        }
    }
}

#[test]
fn test_shape_tags() {
    let tags = r#"["rectangle", "water_drop", "music_note", "lightning_bolt", "crown"]"#;
    let shapes: Vec<Shape> = serde_json::from_str(tags).unwrap();
    assert_eq!(
        shapes,
        [Shape::Rectangle, Shape::WaterDrop, Shape::MusicNote, Shape::LightningBolt, Shape::Crown]
    );
    assert!(serde_json::from_str::<Shape>(r#""triangle""#).is_err());
    assert_eq!(Shape::ALL.iter().filter(|s| s.is_oriented()).count(), 6);
}
