use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use tracing::{debug, warn};

use crate::error::{Error, ErrorConversion, Result};

/// Identifies one memoized bitmap, the same name can be cached at several
/// sizes and rotations and as a head or a body sprite
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpriteKey {
    pub name: String,
    pub size: u32,
    /// Counterclockwise rotation in degrees, a multiple of 90
    pub angle: u16,
    pub is_head: bool,
}

/// A bitmap ready to be drawn, already scaled and rotated
#[derive(Clone, Debug)]
pub struct Sprite {
    pub key: SpriteKey,
    pub pixels: Arc<RgbaImage>,
}

/// On-demand loading and scaling of sprite files with memoized rotations
///
/// Insertions are monotonic, a sprite that failed to load is remembered
/// and never retried (and never logged twice)
pub struct SpriteCache {
    dir: PathBuf,
    scaled: HashMap<(String, u32), Arc<RgbaImage>>,
    rotated: HashMap<SpriteKey, Sprite>,
    failed: HashSet<String>,
}

fn load_scaled(path: &Path, size: u32) -> Result<RgbaImage> {
    let image = image::open(path)
        .map_err(Error::from)
        .with_trace_step(path.display())?;
    Ok(imageops::resize(&image.to_rgba8(), size, size, FilterType::Triangle))
}

/// Clockwise quarter turns equivalent to a counterclockwise angle
fn clockwise_quarter_turns(angle: u16) -> u16 {
    (4 - (angle / 90) % 4) % 4
}

impl SpriteCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            scaled: HashMap::new(),
            rotated: HashMap::new(),
            failed: HashSet::new(),
        }
    }

    /// The sprite scaled to `size`x`size`, None if it can't be loaded
    pub fn scaled(&mut self, name: &str, size: u32) -> Option<Arc<RgbaImage>> {
        if self.failed.contains(name) {
            return None;
        }
        let key = (name.to_string(), size);
        if let Some(image) = self.scaled.get(&key) {
            return Some(image.clone());
        }

        match load_scaled(&self.dir.join(name), size.max(1)) {
            Ok(image) => {
                debug!("loaded sprite {:?} at {}px", name, size);
                let image = Arc::new(image);
                self.scaled.insert(key, image.clone());
                Some(image)
            }
            Err(e) => {
                warn!("could not load sprite {:?}: {}", name, e);
                self.failed.insert(name.to_string());
                None
            }
        }
    }

    /// The sprite scaled and rotated counterclockwise by `angle` degrees
    pub fn rotated(&mut self, name: &str, size: u32, angle: u16, is_head: bool) -> Option<Sprite> {
        debug_assert_eq!(angle % 90, 0, "only quarter turns are supported");
        let key = SpriteKey {
            name: name.to_string(),
            size,
            angle: angle % 360,
            is_head,
        };
        if let Some(sprite) = self.rotated.get(&key) {
            return Some(sprite.clone());
        }

        let scaled = self.scaled(name, size)?;
        let pixels = match clockwise_quarter_turns(key.angle) {
            0 => scaled,
            1 => Arc::new(imageops::rotate90(&*scaled)),
            2 => Arc::new(imageops::rotate180(&*scaled)),
            _ => Arc::new(imageops::rotate270(&*scaled)),
        };
        let sprite = Sprite { key: key.clone(), pixels };
        self.rotated.insert(key, sprite.clone());
        Some(sprite)
    }

    /// Grey square shown where a sprite is missing in menus
    pub fn placeholder(&mut self, size: u32) -> Sprite {
        let key = SpriteKey {
            name: String::new(),
            size,
            angle: 0,
            is_head: false,
        };
        self.rotated
            .entry(key.clone())
            .or_insert_with(|| Sprite {
                key,
                pixels: Arc::new(RgbaImage::from_pixel(size, size, Rgba([128, 128, 128, 255]))),
            })
            .clone()
    }

    #[cfg(test)]
    pub fn is_cached(&self, key: &SpriteKey) -> bool {
        self.rotated.contains_key(key)
    }
}

#[cfg(test)]
pub mod test_sprites {
    use std::fs;

    use super::*;

    /// A fresh directory with a 4x4 sprite whose top row is red and the rest
    /// blue, so it "faces up"
    pub fn sprite_dir(test: &str, names: &[&str]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("skin_snake_sprites_{}_{}", test, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let mut image = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));
        for x in 0..4 {
            image.put_pixel(x, 0, Rgba([255, 0, 0, 255]));
        }
        for name in names {
            image.save(dir.join(name)).unwrap();
        }
        dir
    }

    /// Which side of the sprite carries the red marker: "up", "right", "down", "left"
    pub fn facing(image: &RgbaImage) -> &'static str {
        let (w, h) = image.dimensions();
        let red = |x: u32, y: u32| image.get_pixel(x, y)[0] > 128;
        if red(w / 2, 0) {
            "up"
        } else if red(w - 1, h / 2) {
            "right"
        } else if red(w / 2, h - 1) {
            "down"
        } else {
            "left"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_sprites::*;
    use super::*;

    #[test]
    fn test_missing_sprite_is_remembered() {
        let dir = sprite_dir("missing", &[]);
        let mut cache = SpriteCache::new(&dir);
        assert!(cache.scaled("head.png", 8).is_none());
        assert!(cache.failed.contains("head.png"));
        assert!(cache.rotated("head.png", 8, 90, true).is_none());
    }

    #[test]
    fn test_scaling_and_rotation() {
        let dir = sprite_dir("rotation", &["body.png"]);
        let mut cache = SpriteCache::new(&dir);
        let scaled = cache.scaled("body.png", 8).unwrap();
        assert_eq!(scaled.dimensions(), (8, 8));

        for (angle, expected) in [(0, "up"), (90, "left"), (180, "down"), (270, "right")] {
            let sprite = cache.rotated("body.png", 8, angle, false).unwrap();
            assert_eq!(facing(&sprite.pixels), expected, "angle {}", angle);
            assert!(cache.is_cached(&sprite.key));
        }
        // head and body variants are cached separately
        let head = cache.rotated("body.png", 8, 90, true).unwrap();
        assert!(head.key.is_head);
        assert_eq!(cache.rotated.len(), 5);
    }

    #[test]
    fn test_placeholder() {
        let mut cache = SpriteCache::new(std::env::temp_dir());
        let sprite = cache.placeholder(6);
        assert_eq!(sprite.pixels.dimensions(), (6, 6));
        assert_eq!(sprite.pixels.get_pixel(3, 3), &Rgba([128, 128, 128, 255]));
    }
}
