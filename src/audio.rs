use std::collections::HashSet;

use ggez::audio::{self, SoundSource};
use ggez::Context;
use tracing::{debug, warn};

use crate::error::{Error, ErrorConversion, Result};
use crate::skin::{SkinCatalog, SkinDescriptor, SkinId};

/// Background music of the equipped skin, only image skins can have any
#[derive(Default)]
pub struct AudioSystem {
    playing: Option<(SkinId, audio::Source)>,
    /// Tracks that failed to load, they are not retried
    failed: HashSet<String>,
}

/// Path of a skin's music in the ggez filesystem, which is rooted at the
/// resource directory
pub fn track(catalog: &SkinCatalog, skin_id: &str) -> Option<String> {
    match catalog.descriptor(skin_id)? {
        SkinDescriptor::Image { audio: Some(audio), .. } => {
            Some(format!("/{}", audio.background_music.trim_start_matches('/')))
        }
        _ => None,
    }
}

fn start(ctx: &Context, track: &str) -> Result<audio::Source> {
    let mut source = audio::Source::new(ctx, track)
        .map_err(Error::from)
        .with_trace_step(format!("load {}", track))?;
    source.set_repeat(true);
    source.play(ctx).map_err(Error::from).with_trace_step("play")?;
    Ok(source)
}

impl AudioSystem {
    /// Starts looping the skin's music unless it is already playing,
    /// skins without music stop whatever was playing
    pub fn play_for(&mut self, ctx: &Context, catalog: &SkinCatalog, skin_id: &str) {
        if matches!(&self.playing, Some((id, _)) if id == skin_id) {
            return;
        }
        self.stop(ctx);

        let Some(track) = track(catalog, skin_id) else {
            return;
        };
        if self.failed.contains(&track) {
            return;
        }
        match start(ctx, &track) {
            Ok(source) => {
                debug!("playing {}", track);
                self.playing = Some((skin_id.to_string(), source));
            }
            Err(e) => {
                warn!("no music for skin {:?}: {}", skin_id, e);
                self.failed.insert(track);
            }
        }
    }

    pub fn stop(&mut self, ctx: &Context) {
        if let Some((_, mut source)) = self.playing.take() {
            if let Err(e) = source.stop(ctx) {
                warn!("could not stop music: {}", e);
            }
        }
    }
}

#[test]
fn test_tracks() {
    let image_skins = r#"{
        "robo": {"name": "Robo", "price": 90, "head_image": "h.png", "body_image": "b.png",
                 "type": "image", "audio": {"background_music": "music/robo.ogg"}},
        "ghost": {"name": "Ghost", "price": 50, "head_image": "h.png", "body_image": "b.png",
                  "type": "image"}
    }"#;
    let catalog = SkinCatalog::parse("{}", image_skins);
    assert_eq!(track(&catalog, "robo").as_deref(), Some("/music/robo.ogg"));
    assert_eq!(track(&catalog, "ghost"), None);
    assert_eq!(track(&catalog, crate::skin::DEFAULT_SKIN), None);
    assert_eq!(track(&catalog, "unknown"), None);
}
