use ggez::graphics;
use serde::{Deserialize, Deserializer};

pub mod to_color;

#[derive(Deref, DerefMut, Copy, Clone, Debug, PartialEq)]
pub struct Color(pub graphics::Color);

impl Color {
    pub const TRANSPARENT: Self = Self(graphics::Color::new(0., 0., 0., 0.));
    pub const WHITE: Self = Self(graphics::Color::WHITE);
    pub const BLACK: Self = Self(graphics::Color::BLACK);
    pub const RED: Self = Self(graphics::Color::RED);
    pub const GREY: Self = Self(graphics::Color::new(0.5, 0.5, 0.5, 1.));

    #[inline(always)]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(graphics::Color::from_rgb(r, g, b))
    }

    #[inline(always)]
    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    #[cfg(test)]
    pub fn to_rgb(self) -> [u8; 3] {
        let (r, g, b) = self.0.to_rgb();
        [r, g, b]
    }
}

/// Catalog colors are written as `[r, g, b]`
impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [r, g, b] = <[u8; 3]>::deserialize(deserializer)?;
        Ok(Self::from_rgb(r, g, b))
    }
}

impl From<Color> for graphics::Color {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[test]
fn test_deserialize_rgb_triple() {
    let color: Color = serde_json::from_str("[255, 0, 128]").unwrap();
    assert_eq!(color.to_rgb(), [255, 0, 128]);
    assert!(serde_json::from_str::<Color>("[255, 0]").is_err());
}
