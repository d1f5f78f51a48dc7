use crate::basic::{Dir, Point};
use crate::rendering::sprite::SpriteCache;
use crate::rendering::surface::Surface;
use crate::skin::{SkinCatalog, SkinDescriptor};

/// Counterclockwise rotation applied to a sprite drawn for a segment facing
/// `dir`. Head art is authored facing down and body art facing up, hence
/// the half turn between the two tables.
pub fn rotation_angle(dir: Dir, is_head: bool) -> u16 {
    use Dir::*;
    match (dir, is_head) {
        (U, false) => 180,
        (R, false) => 90,
        (D, false) => 0,
        (L, false) => 270,
        (U, true) => 0,
        (R, true) => 270,
        (D, true) => 180,
        (L, true) => 90,
    }
}

/// Sprites are a third larger than a cell so neighbours overlap and hide
/// the grid lines
pub fn sprite_size(cell_size: f32) -> u32 {
    (cell_size * 4. / 3.).round().max(1.) as u32
}

/// Draws segments of image skins with rotated sprites
pub struct ImageSkinRenderer<'a> {
    catalog: &'a SkinCatalog,
    sprites: &'a mut SpriteCache,
    cell_size: f32,
}

impl<'a> ImageSkinRenderer<'a> {
    pub fn new(catalog: &'a SkinCatalog, sprites: &'a mut SpriteCache, cell_size: f32) -> Self {
        Self { catalog, sprites, cell_size }
    }

    /// Returns false if the skin is not an image skin or its sprite could
    /// not be loaded, the caller is expected to draw something else instead
    pub fn draw_segment(
        &mut self,
        surface: &mut dyn Surface,
        center: Point,
        dir: Dir,
        skin_id: &str,
        is_head: bool,
    ) -> bool {
        let Some(SkinDescriptor::Image { head_sprite, body_sprite, .. }) =
            self.catalog.descriptor(skin_id)
        else {
            return false;
        };

        let name = if is_head { head_sprite } else { body_sprite };
        let size = sprite_size(self.cell_size);
        let angle = rotation_angle(dir, is_head);
        match self.sprites.rotated(name, size, angle, is_head) {
            Some(sprite) => {
                surface.blit(&sprite, center);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::sprite::test_sprites::{facing, sprite_dir};
    use crate::rendering::surface::recording::RecordingSurface;
    use crate::skin::DEFAULT_SKIN;

    const IMAGE_SKINS: &str = r#"{
        "robo": {"name": "Robo", "price": 90, "head_image": "robo_head.png",
                 "body_image": "robo_body.png", "type": "image"},
        "ghost": {"name": "Ghost", "price": 50, "head_image": "ghost_head.png",
                  "body_image": "ghost_body.png", "type": "image"}
    }"#;

    fn catalog() -> SkinCatalog {
        SkinCatalog::parse("{}", IMAGE_SKINS)
    }

    #[test]
    fn test_head_rotations_are_opposite() {
        assert_eq!((rotation_angle(Dir::U, true) + 180) % 360, rotation_angle(Dir::D, true));
        assert_eq!((rotation_angle(Dir::L, true) + 180) % 360, rotation_angle(Dir::R, true));
        for dir in Dir::iter() {
            let head = rotation_angle(dir, true);
            let body = rotation_angle(dir, false);
            assert_eq!((head + 180) % 360, body, "{:?}", dir);
        }
    }

    #[test]
    fn test_draws_rotated_sprites() {
        let dir = sprite_dir("image_skin", &["robo_head.png", "robo_body.png"]);
        let catalog = catalog();
        let mut sprites = SpriteCache::new(&dir);
        let mut surface = RecordingSurface::default();
        let center = Point { x: 30., y: 50. };

        let mut renderer = ImageSkinRenderer::new(&catalog, &mut sprites, 12.);
        assert!(renderer.draw_segment(&mut surface, center, Dir::R, "robo", false));
        assert!(renderer.draw_segment(&mut surface, center, Dir::R, "robo", true));

        let blits = surface.blits();
        assert_eq!(blits.len(), 2);
        assert_eq!(blits[0].0.name, "robo_body.png");
        assert_eq!(blits[0].0.size, 16);
        assert_eq!(blits[0].1, center);
        assert_eq!(blits[1].0.name, "robo_head.png");

        // body art faces up and ends up trailing when moving right, the same
        // image used as a head (authored facing down) ends up the other way
        let body = sprites.rotated("robo_body.png", 16, 90, false).unwrap();
        let head = sprites.rotated("robo_head.png", 16, 270, true).unwrap();
        assert_eq!(facing(&body.pixels), "left");
        assert_eq!(facing(&head.pixels), "right");
    }

    #[test]
    fn test_missing_head_sprite_falls_back() {
        let dir = sprite_dir("image_skin_missing", &["ghost_body.png"]);
        let catalog = catalog();
        let mut sprites = SpriteCache::new(&dir);
        let mut surface = RecordingSurface::default();
        let mut renderer = ImageSkinRenderer::new(&catalog, &mut sprites, 20.);

        assert!(!renderer.draw_segment(&mut surface, Point::zero(), Dir::U, "ghost", true));
        assert!(renderer.draw_segment(&mut surface, Point::zero(), Dir::U, "ghost", false));
        // procedural and unknown skins are not handled here
        assert!(!renderer.draw_segment(&mut surface, Point::zero(), Dir::U, DEFAULT_SKIN, false));
        assert!(!renderer.draw_segment(&mut surface, Point::zero(), Dir::U, "nope", false));
        assert_eq!(surface.blits().len(), 1);
    }
}
