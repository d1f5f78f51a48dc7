use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use ggez::conf::{FullscreenType, NumSamples, WindowMode, WindowSetup};
use ggez::event::{ErrorOrigin, EventHandler, MouseButton};
use ggez::graphics::Image;
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::Context;
use tracing::{debug, error, info};

use crate::app::screen::{Backpack, Game, Help, Menu, Shop};
use crate::audio::AudioSystem;
use crate::basic::Point;
use crate::config::{Resources, Settings};
use crate::error::{Error, Result};
use crate::rendering::sprite::{SpriteCache, SpriteKey};
use crate::skin::profile::ProfileStore;
use crate::skin::SkinCatalog;

mod bubbles;
mod control;
mod message;
mod screen;

/// Height of the strip above the board holding the score
pub const HUD_HEIGHT: f32 = 48.;
pub const MARGIN: f32 = 16.;
const MIN_WINDOW: Point = Point { x: 640., y: 560. };

/// Window big enough for the board plus the HUD, menus need a minimum
pub fn window_size(settings: &Settings) -> Point {
    let board = settings.geometry().board_size();
    Point {
        x: (board.x + 2. * MARGIN).max(MIN_WINDOW.x),
        y: (board.y + HUD_HEIGHT + MARGIN).max(MIN_WINDOW.y),
    }
}

/// Top left corner of the board, centered horizontally under the HUD
pub fn board_origin(settings: &Settings) -> Point {
    let window = window_size(settings);
    let board = settings.geometry().board_size();
    Point { x: ((window.x - board.x) / 2.).floor(), y: HUD_HEIGHT }
}

pub fn window_mode(settings: &Settings) -> WindowMode {
    let size = window_size(settings);
    WindowMode {
        width: size.x,
        height: size.y,
        maximized: false,
        fullscreen_type: FullscreenType::Windowed,
        borderless: false,
        resizable: false,
        ..WindowMode::default()
    }
}

pub fn window_setup() -> WindowSetup {
    WindowSetup {
        title: "Skin Snake".to_string(),
        samples: NumSamples::One,
        vsync: true,
        icon: "".to_string(),
        srgb: true,
    }
}

/// Everything loaded at startup and shared by the screens
pub struct Services {
    pub settings: Settings,
    pub resources: Resources,
    pub catalog: SkinCatalog,
    pub profile: ProfileStore,
    pub sprites: SpriteCache,
    /// GPU copies of sprites, keyed like the sprite cache
    pub images: HashMap<SpriteKey, Image>,
    pub audio: AudioSystem,
}

impl Services {
    pub fn load(resources: Resources) -> Self {
        let settings = Settings::load(&resources.settings());
        let catalog = SkinCatalog::load(&resources.procedural_skins(), &resources.image_skins());
        let profile = ProfileStore::load(resources.profile());
        info!(
            "{} skins, {} coins, wearing {:?}",
            catalog.len(),
            profile.balance(),
            profile.equipped()
        );
        Self {
            sprites: SpriteCache::new(resources.sprites()),
            settings,
            resources,
            catalog,
            profile,
            images: HashMap::new(),
            audio: AudioSystem::default(),
        }
    }

    pub fn window(&self) -> Point {
        window_size(&self.settings)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScreenKind {
    Menu,
    Game,
    Shop,
    Backpack,
    Help,
}

/// What a screen asks the app to do after handling an event
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    None,
    Goto(ScreenKind),
    Quit,
}

/// One screen's share of the event loop, services are lent for each call
pub trait View {
    fn update(&mut self, _ctx: &mut Context, _services: &mut Services) -> Result<Command> {
        Ok(Command::None)
    }

    fn draw(&mut self, ctx: &mut Context, services: &mut Services) -> Result;

    fn key_down(&mut self, _ctx: &mut Context, _services: &mut Services, _key: KeyCode, _repeated: bool) -> Command {
        Command::None
    }

    fn mouse_down(&mut self, _ctx: &mut Context, _services: &mut Services, _point: Point) -> Command {
        Command::None
    }
}

pub enum Screen {
    Menu(Menu),
    Game(Game),
    Shop(Shop),
    Backpack(Backpack),
    Help(Help),
}

impl Screen {
    fn open(kind: ScreenKind, ctx: &mut Context, services: &mut Services) -> Result<Self> {
        Ok(match kind {
            ScreenKind::Menu => Screen::Menu(Menu::new(services)),
            ScreenKind::Game => Screen::Game(Game::new(ctx, services)?),
            ScreenKind::Shop => Screen::Shop(Shop::new(services)),
            ScreenKind::Backpack => Screen::Backpack(Backpack::new(services)),
            ScreenKind::Help => Screen::Help(Help::new(services)),
        })
    }

    fn kind(&self) -> ScreenKind {
        match self {
            Screen::Menu(_) => ScreenKind::Menu,
            Screen::Game(_) => ScreenKind::Game,
            Screen::Shop(_) => ScreenKind::Shop,
            Screen::Backpack(_) => ScreenKind::Backpack,
            Screen::Help(_) => ScreenKind::Help,
        }
    }
}

impl Deref for Screen {
    type Target = dyn View;

    fn deref(&self) -> &Self::Target {
        use Screen::*;
        match self {
            Menu(x) => x,
            Game(x) => x,
            Shop(x) => x,
            Backpack(x) => x,
            Help(x) => x,
        }
    }
}

impl DerefMut for Screen {
    fn deref_mut(&mut self) -> &mut Self::Target {
        use Screen::*;
        match self {
            Menu(x) => x,
            Game(x) => x,
            Shop(x) => x,
            Backpack(x) => x,
            Help(x) => x,
        }
    }
}

pub struct App {
    screen: Screen,
    services: Services,
}

impl App {
    pub fn new(services: Services) -> Self {
        let screen = Screen::Menu(Menu::new(&services));
        Self { screen, services }
    }

    fn apply(&mut self, ctx: &mut Context, command: Command) -> Result {
        match command {
            Command::None => {}
            Command::Goto(kind) => {
                debug!("{:?} -> {:?}", self.screen.kind(), kind);
                if self.screen.kind() == ScreenKind::Game {
                    self.services.audio.stop(ctx);
                }
                self.screen = Screen::open(kind, ctx, &mut self.services)?;
            }
            Command::Quit => {
                info!("quitting");
                self.services.audio.stop(ctx);
                ctx.request_quit();
            }
        }
        Ok(())
    }
}

impl EventHandler<Error> for App {
    fn update(&mut self, ctx: &mut Context) -> Result {
        let command = self.screen.update(ctx, &mut self.services)?;
        self.apply(ctx, command)
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        self.screen.draw(ctx, &mut self.services)
    }

    fn mouse_button_down_event(&mut self, ctx: &mut Context, button: MouseButton, x: f32, y: f32) -> Result {
        if button != MouseButton::Left {
            return Ok(());
        }
        let command = self.screen.mouse_down(ctx, &mut self.services, Point { x, y });
        self.apply(ctx, command)
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeated: bool) -> Result {
        let Some(key) = input.keycode else {
            return Ok(());
        };
        let command = self.screen.key_down(ctx, &mut self.services, key, repeated);
        self.apply(ctx, command)
    }

    fn on_error(&mut self, _ctx: &mut Context, origin: ErrorOrigin, e: Error) -> bool {
        error!("{:?} failed: {}", origin, e);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_fits_board() {
        let settings = Settings::default();
        // 40x30 cells of 20px
        assert_eq!(window_size(&settings), Point { x: 832., y: 664. });
        assert_eq!(board_origin(&settings), Point { x: 16., y: HUD_HEIGHT });

        let small = Settings { cols: 10, rows: 10, ..Settings::default() };
        assert_eq!(window_size(&small), MIN_WINDOW);
        assert_eq!(board_origin(&small), Point { x: 220., y: HUD_HEIGHT });
    }
}
