use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::basic::GridGeometry;
use crate::error::{Error, ErrorConversion, Result};
use crate::snake::DEFAULT_SPEED;

/// Overrides the location of the resource directory
pub const RESOURCES_ENV: &str = "SKIN_SNAKE_RESOURCES";

/// Largest number of columns or rows a board may have
pub const MAX_BOARD_SIDE: i32 = 500;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Side of a cell in pixels
    pub cell_size: f32,
    pub cols: i32,
    pub rows: i32,
    /// Ticks per second
    pub speed: u64,
    pub allow_cross_self: bool,
    /// Score for eating one food
    pub food_points: u32,
    /// Points needed for one coin
    pub coins_per_point: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_size: 20.,
            cols: 40,
            rows: 30,
            speed: DEFAULT_SPEED,
            allow_cross_self: false,
            food_points: 10,
            coins_per_point: 10,
        }
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    let json = fs::read_to_string(path)
        .map_err(Error::from)
        .with_trace_step("read_settings")?;
    Ok(serde_json::from_str(&json)?)
}

impl Settings {
    /// Missing or malformed settings fall back to the defaults
    pub fn load(path: &Path) -> Self {
        let settings = match read_settings(path) {
            Ok(settings) => settings,
            Err(e) if e.is_not_found() => {
                info!("no settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("could not read settings: {}", e);
                Self::default()
            }
        };
        settings.sanitized()
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.cell_size >= 4.) {
            warn!("cell_size {} is too small", self.cell_size);
            self.cell_size = defaults.cell_size;
        }
        if self.cols < 4 || self.rows < 4 {
            warn!("board {}x{} is too small", self.cols, self.rows);
            self.cols = defaults.cols;
            self.rows = defaults.rows;
        }
        if self.cols > MAX_BOARD_SIDE || self.rows > MAX_BOARD_SIDE {
            warn!("board {}x{} is too large", self.cols, self.rows);
            self.cols = self.cols.min(MAX_BOARD_SIDE);
            self.rows = self.rows.min(MAX_BOARD_SIDE);
        }
        self.speed = self.speed.clamp(1, 1000);
        self.coins_per_point = self.coins_per_point.max(1);
        self
    }

    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(self.cell_size, self.cols, self.rows)
    }

    /// Coins awarded for a finished run
    pub fn coins_for(&self, score: u32) -> u32 {
        score / self.coins_per_point.max(1)
    }
}

/// Locations of everything loaded from disk
#[derive(Clone, Debug)]
pub struct Resources {
    root: PathBuf,
}

impl Resources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `$SKIN_SNAKE_RESOURCES`, else `resources` next to the executable,
    /// else `resources` in the working directory
    pub fn locate() -> Self {
        if let Some(dir) = env::var_os(RESOURCES_ENV) {
            debug!("resources from ${}", RESOURCES_ENV);
            return Self::new(dir);
        }
        let next_to_exe = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("resources")))
            .filter(|dir| dir.is_dir());
        match next_to_exe {
            Some(dir) => Self::new(dir),
            None => Self::new("resources"),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> PathBuf {
        self.root.join("settings.json")
    }

    pub fn procedural_skins(&self) -> PathBuf {
        self.root.join("skins.json")
    }

    pub fn image_skins(&self) -> PathBuf {
        self.root.join("image_skins.json")
    }

    pub fn sprites(&self) -> PathBuf {
        self.root.join("sprites")
    }

    /// The per-user data directory if there is one, else the resource root
    pub fn profile(&self) -> PathBuf {
        match ProjectDirs::from("", "", "skin_snake") {
            Some(dirs) => dirs.data_dir().join("profile.json"),
            None => {
                warn!("no user data directory, keeping the profile with the resources");
                self.root.join("profile.json")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(test: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("skin_snake_config_{}_{}", test, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_and_partial_settings() {
        let dir = temp_dir("partial");
        let path = dir.join("settings.json");
        assert_eq!(Settings::load(&path), Settings::default());

        fs::write(&path, r#"{"speed": 12, "allow_cross_self": true}"#).unwrap();
        let settings = Settings::load(&path);
        assert_eq!(settings.speed, 12);
        assert!(settings.allow_cross_self);
        assert_eq!(settings.cols, 40);

        fs::write(&path, "speed = 12").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_settings_are_sanitized() {
        let dir = temp_dir("sanitized");
        let path = dir.join("settings.json");
        fs::write(&path, r#"{"cell_size": 0, "cols": 2, "speed": 0, "coins_per_point": 0}"#).unwrap();
        let settings = Settings::load(&path);
        assert_eq!(settings.cell_size, 20.);
        assert_eq!((settings.cols, settings.rows), (40, 30));
        assert_eq!(settings.speed, 1);
        assert_eq!(settings.coins_for(25), 25);

        fs::write(&path, r#"{"cols": 2000000000, "rows": 60}"#).unwrap();
        let settings = Settings::load(&path);
        assert_eq!((settings.cols, settings.rows), (MAX_BOARD_SIDE, 60));
    }

    #[test]
    fn test_resource_paths() {
        let resources = Resources::new("/games/snake");
        assert_eq!(resources.procedural_skins(), Path::new("/games/snake/skins.json"));
        assert_eq!(resources.sprites().join("a.png"), Path::new("/games/snake/sprites/a.png"));
        assert_eq!(resources.profile().file_name().unwrap(), "profile.json");
        assert_eq!(Settings::default().coins_for(95), 9);
    }
}
