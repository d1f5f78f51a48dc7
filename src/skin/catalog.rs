use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use static_assertions::assert_impl_all;
use tracing::{info, warn};

use super::{AudioDescriptor, Shape, Skin, SkinDescriptor, SkinId, DEFAULT_SKIN};
use crate::color::Color;
use crate::error::{Error, ErrorConversion, Result};

#[derive(Deserialize)]
struct ProceduralRecord {
    name: String,
    price: u32,
    colors: (Color, Color),
    shape: Shape,
}

#[derive(Deserialize)]
struct ImageRecord {
    name: String,
    price: u32,
    head_image: String,
    body_image: String,
    #[serde(rename = "type")]
    kind: String,
    audio: Option<AudioDescriptor>,
}

/// Read-only after loading
#[derive(Clone, Debug)]
pub struct SkinCatalog {
    procedural: BTreeMap<SkinId, Skin>,
    image: BTreeMap<SkinId, Skin>,
}

assert_impl_all!(SkinCatalog: Send, Sync);

/// A record that does not fit `T` is logged and skipped, only a file that
/// is not a JSON object at all is an error
fn parse_records<T: DeserializeOwned>(json: &str) -> Result<BTreeMap<SkinId, T>> {
    let raw: BTreeMap<SkinId, serde_json::Value> = serde_json::from_str(json)?;
    let records = raw
        .into_iter()
        .filter_map(|(id, value)| match serde_json::from_value(value) {
            Ok(record) => Some((id, record)),
            Err(e) => {
                warn!("skipping malformed skin {:?}: {}", id, e);
                None
            }
        })
        .collect();
    Ok(records)
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<BTreeMap<SkinId, T>> {
    let json = fs::read_to_string(path)
        .map_err(Error::from)
        .with_trace_step(path.display())?;
    parse_records(&json).with_trace_step(path.display())
}

impl SkinCatalog {
    /// Load both catalog records, a file that cannot be read or parsed
    /// contributes no skins
    pub fn load(procedural_path: &Path, image_path: &Path) -> Self {
        let procedural = read_records(procedural_path)
            .map_err(|e| warn!("procedural skins unavailable: {}", e))
            .unwrap_or_default();
        let image = read_records(image_path)
            .map_err(|e| warn!("image skins unavailable: {}", e))
            .unwrap_or_default();
        let catalog = Self::from_records(procedural, image);
        info!(
            "loaded {} procedural and {} image skins",
            catalog.procedural.len(),
            catalog.image.len()
        );
        catalog
    }

    /// Same as [`SkinCatalog::load`] for in-memory records
    pub fn parse(procedural_json: &str, image_json: &str) -> Self {
        let procedural = parse_records(procedural_json)
            .map_err(|e| warn!("procedural skins unavailable: {}", e))
            .unwrap_or_default();
        let image = parse_records(image_json)
            .map_err(|e| warn!("image skins unavailable: {}", e))
            .unwrap_or_default();
        Self::from_records(procedural, image)
    }

    fn from_records(
        procedural: BTreeMap<SkinId, ProceduralRecord>,
        image: BTreeMap<SkinId, ImageRecord>,
    ) -> Self {
        let mut procedural: BTreeMap<_, _> = procedural
            .into_iter()
            .map(|(id, record)| {
                let (base, dark) = record.colors;
                let skin = Skin {
                    id: id.clone(),
                    name: record.name,
                    price: record.price,
                    descriptor: SkinDescriptor::Procedural { shape: record.shape, base, dark },
                };
                (id, skin)
            })
            .collect();
        procedural
            .entry(DEFAULT_SKIN.to_string())
            .or_insert_with(Skin::default_rectangle);

        let image = image
            .into_iter()
            .filter_map(|(id, record)| {
                if record.kind != "image" {
                    warn!("skipping image skin {:?} with type {:?}", id, record.kind);
                    return None;
                }
                if procedural.contains_key(&id) {
                    warn!("image skin {:?} shadows a procedural skin, skipping", id);
                    return None;
                }
                let skin = Skin {
                    id: id.clone(),
                    name: record.name,
                    price: record.price,
                    descriptor: SkinDescriptor::Image {
                        head_sprite: record.head_image,
                        body_sprite: record.body_image,
                        audio: record.audio,
                    },
                };
                Some((id, skin))
            })
            .collect();

        Self { procedural, image }
    }

    pub fn get(&self, id: &str) -> Option<&Skin> {
        self.procedural.get(id).or_else(|| self.image.get(id))
    }

    pub fn descriptor(&self, id: &str) -> Option<&SkinDescriptor> {
        self.get(id).map(|skin| &skin.descriptor)
    }

    pub fn is_image(&self, id: &str) -> bool {
        self.image.contains_key(id)
    }

    pub fn default_skin(&self) -> &Skin {
        &self.procedural[DEFAULT_SKIN]
    }

    /// Look up a skin, substituting the default one for unknown ids
    pub fn get_or_default(&self, id: &str) -> &Skin {
        self.get(id).unwrap_or_else(|| self.default_skin())
    }

    /// Every skin, procedural ones first, each group sorted by price then id
    pub fn iter(&self) -> impl Iterator<Item = &Skin> {
        let mut procedural: Vec<_> = self.procedural.values().collect();
        let mut image: Vec<_> = self.image.values().collect();
        procedural.sort_by_key(|skin| skin.price);
        image.sort_by_key(|skin| skin.price);
        procedural.into_iter().chain(image)
    }

    pub fn len(&self) -> usize {
        self.procedural.len() + self.image.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROCEDURAL: &str = r#"{
        "default_rectangle": {"name": "Classic", "price": 0, "colors": [[0, 200, 0], [0, 100, 0]], "shape": "rectangle"},
        "ruby_heart": {"name": "Ruby Heart", "price": 40, "colors": [[220, 20, 60], [120, 0, 30]], "shape": "heart"}
    }"#;

    const IMAGE: &str = r#"{
        "robot": {"name": "Robot", "price": 120, "head_image": "robot_head.png", "body_image": "robot_body.png", "type": "image",
                  "audio": {"background_music": "audio/robot.ogg"}},
        "ghost": {"name": "Ghost", "price": 90, "head_image": "g_head.png", "body_image": "g_body.png", "type": "procedural"}
    }"#;

    #[test]
    fn test_lookup_and_classification() {
        let catalog = SkinCatalog::parse(PROCEDURAL, IMAGE);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_image("ruby_heart"));
        assert!(catalog.is_image("robot"));
        assert!(catalog.get("ghost").is_none());

        match catalog.descriptor("ruby_heart") {
            Some(SkinDescriptor::Procedural { shape, base, .. }) => {
                assert_eq!(*shape, Shape::Heart);
                assert_eq!(base.to_rgb(), [220, 20, 60]);
            }
            other => panic!("unexpected descriptor {:?}", other),
        }
        match catalog.descriptor("robot") {
            Some(SkinDescriptor::Image { head_sprite, audio, .. }) => {
                assert_eq!(head_sprite, "robot_head.png");
                assert_eq!(audio.as_ref().unwrap().background_music, "audio/robot.ogg");
            }
            other => panic!("unexpected descriptor {:?}", other),
        }
    }

    #[test]
    fn test_malformed_records_fall_back_to_default() {
        let catalog = SkinCatalog::parse("{ not json", "[]");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.default_skin().id, DEFAULT_SKIN);
        assert_eq!(catalog.get_or_default("missing").id, DEFAULT_SKIN);
    }

    #[test]
    fn test_bad_record_spares_the_rest() {
        let procedural = r#"{
            "ruby_heart": {"name": "Ruby Heart", "price": 40, "colors": [[220, 20, 60], [120, 0, 30]], "shape": "heart"},
            "pointy": {"name": "Pointy", "price": 10, "colors": [[1, 2, 3], [4, 5, 6]], "shape": "triangle"},
            "mint_leaf": {"name": "Mint Leaf", "price": 25, "colors": [[150, 255, 200], [60, 140, 90]], "shape": "leaf"}
        }"#;
        let image = r#"{
            "robot": {"name": "Robot", "price": 120, "head_image": "robot_head.png", "body_image": "robot_body.png", "type": "image"},
            "untyped": {"name": "Untyped", "price": 5, "head_image": "a.png", "body_image": "b.png"}
        }"#;
        let catalog = SkinCatalog::parse(procedural, image);
        assert!(catalog.get("pointy").is_none());
        assert!(catalog.get("untyped").is_none());
        for id in ["ruby_heart", "mint_leaf", "robot", DEFAULT_SKIN] {
            assert!(catalog.get(id).is_some(), "{} was dropped", id);
        }
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_missing_files() {
        let dir = std::env::temp_dir().join("skin_snake_catalog_missing");
        let catalog = SkinCatalog::load(&dir.join("nope.json"), &dir.join("nope_either.json"));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get(DEFAULT_SKIN).is_some());
    }

    #[test]
    fn test_iteration_order() {
        let catalog = SkinCatalog::parse(PROCEDURAL, IMAGE);
        let ids: Vec<_> = catalog.iter().map(|skin| skin.id.as_str()).collect();
        assert_eq!(ids, ["default_rectangle", "ruby_heart", "robot"]);
    }
}
