use crate::basic::{Dir, GridGeometry, Point};
use crate::rendering::eyes::draw_eyes;
use crate::rendering::image_skin::ImageSkinRenderer;
use crate::rendering::shape::{draw_shape, ShapeStyle};
use crate::rendering::sprite::SpriteCache;
use crate::rendering::surface::Surface;
use crate::skin::{Skin, SkinCatalog, SkinDescriptor};
use crate::snake::{segment_dirs, Millis, Snake};

/// Sideways sway as a fraction of the cell size
const WAVE_AMPLITUDE: f32 = 0.09;

/// Presentation-only sideways offset of the segment at `index`,
/// perpendicular to the snake's direction
pub fn wave_offset(dir: Dir, index: usize, now: Millis, cell_size: f32) -> Point {
    let t = now as f32 / 1000.;
    let sway = (t * 12. + index as f32 * 0.6).sin() * WAVE_AMPLITUDE * cell_size;
    dir.perpendicular() * sway
}

/// Draws a procedural skin, image skins are left alone
fn draw_procedural(surface: &mut dyn Surface, skin: &Skin, center: Point, dir: Dir, cell_size: f32) {
    let SkinDescriptor::Procedural { shape, base, dark } = skin.descriptor else {
        return;
    };
    let style = ShapeStyle {
        center,
        radius: cell_size / 2.,
        base,
        dark,
        dir,
    };
    draw_shape(surface, shape, &style);
}

/// Draws the snake from tail to head in the equipped skin
///
/// Image skin segments whose sprite is unavailable are drawn with the
/// default skin instead. The head always gets eyes, whatever it was drawn with.
pub fn draw_snake(
    surface: &mut dyn Surface,
    snake: &Snake,
    grid: &GridGeometry,
    catalog: &SkinCatalog,
    sprites: &mut SpriteCache,
    skin_id: &str,
    now: Millis,
) {
    let skin = catalog.get_or_default(skin_id);
    let fallback = catalog.default_skin();
    let dirs = segment_dirs(snake.cells(), snake.dir());
    let mut images = ImageSkinRenderer::new(catalog, sprites, grid.cell_size);

    for (i, (cell, dir)) in snake.cells().iter().zip(dirs).enumerate().rev() {
        let is_head = i == 0;
        let center = grid.cell_center(*cell) + wave_offset(snake.dir(), i, now, grid.cell_size);

        if !skin.descriptor.is_image() {
            draw_procedural(surface, skin, center, dir, grid.cell_size);
        } else if !images.draw_segment(surface, center, dir, &skin.id, is_head) {
            draw_procedural(surface, fallback, center, dir, grid.cell_size);
        }

        if is_head {
            draw_eyes(surface, center, dir, grid.cell_size);
        }
    }
}
