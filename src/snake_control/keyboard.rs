use ggez::input::keyboard::KeyCode::{self, *};

use crate::basic::Dir;

/// What a key press asks the game to do
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Intent {
    Turn(Dir),
    TogglePause,
}

/// One set of four direction keys
#[derive(Copy, Clone, Debug)]
pub struct Controls {
    pub u: KeyCode,
    pub r: KeyCode,
    pub d: KeyCode,
    pub l: KeyCode,
}

impl Controls {
    pub const ARROWS: Self = Self { u: Up, r: Right, d: Down, l: Left };
    pub const WASD: Self = Self { u: W, r: D, d: S, l: A };

    fn dir(&self, key: KeyCode) -> Option<Dir> {
        match key {
            k if k == self.u => Some(Dir::U),
            k if k == self.r => Some(Dir::R),
            k if k == self.d => Some(Dir::D),
            k if k == self.l => Some(Dir::L),
            _ => None,
        }
    }
}

/// Converts key presses into intents, one intent per press
pub struct InputMapper {
    schemes: Vec<Controls>,
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new(vec![Controls::ARROWS, Controls::WASD])
    }
}

impl InputMapper {
    pub fn new(schemes: Vec<Controls>) -> Self {
        Self { schemes }
    }

    pub fn map(&self, key: KeyCode) -> Option<Intent> {
        if matches!(key, P | Space) {
            return Some(Intent::TogglePause);
        }
        self.schemes
            .iter()
            .find_map(|controls| controls.dir(key))
            .map(Intent::Turn)
    }
}

#[test]
fn test_key_mapping() {
    let mapper = InputMapper::default();
    assert_eq!(mapper.map(Up), Some(Intent::Turn(Dir::U)));
    assert_eq!(mapper.map(A), Some(Intent::Turn(Dir::L)));
    assert_eq!(mapper.map(S), Some(Intent::Turn(Dir::D)));
    assert_eq!(mapper.map(Space), Some(Intent::TogglePause));
    assert_eq!(mapper.map(P), Some(Intent::TogglePause));
    assert_eq!(mapper.map(Q), None);

    let arrows_only = InputMapper::new(vec![Controls::ARROWS]);
    assert_eq!(arrows_only.map(W), None);
}
