use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use super::{SkinId, DEFAULT_SKIN};
use crate::error::{Error, ErrorConversion, Result};

/// Persistent player data
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub coins: u32,
    pub owned_skins: BTreeSet<SkinId>,
    pub equipped_skin: SkinId,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            coins: 0,
            owned_skins: BTreeSet::from([DEFAULT_SKIN.to_string()]),
            equipped_skin: DEFAULT_SKIN.to_string(),
        }
    }
}

impl Profile {
    /// The default skin is always owned and the equipped skin must be owned
    fn normalize(&mut self) {
        self.owned_skins.insert(DEFAULT_SKIN.to_string());
        if !self.owned_skins.contains(&self.equipped_skin) {
            warn!("equipped skin {:?} is not owned, using default", self.equipped_skin);
            self.equipped_skin = DEFAULT_SKIN.to_string();
        }
    }
}

/// Every mutation is written back immediately by replacing the whole
/// record, a failed write is logged and the in-memory state is kept
pub struct ProfileStore {
    profile: Profile,
    /// None keeps the profile in memory only
    path: Option<PathBuf>,
}

fn read_profile(path: &Path) -> Result<Profile> {
    let json = fs::read_to_string(path)
        .map_err(Error::from)
        .with_trace_step("read_profile")?;
    Ok(serde_json::from_str(&json)?)
}

fn save_atomic(path: &Path, profile: &Profile) -> Result {
    let tmp = path.with_extension("json.tmp");
    let data = serde_json::to_vec_pretty(profile)?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&tmp, data)?;
    // rename replaces the destination on the same filesystem
    fs::rename(&tmp, path)?;
    Ok(())
}

impl ProfileStore {
    /// A missing file yields the default profile, a malformed one is
    /// logged and also replaced by the default
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut profile = match read_profile(&path) {
            Ok(profile) => profile,
            Err(e) if e.is_not_found() => {
                info!("no profile at {}, starting fresh", path.display());
                Profile::default()
            }
            Err(e) => {
                error!("could not read profile: {}", e);
                Profile::default()
            }
        };
        profile.normalize();
        Self { profile, path: Some(path) }
    }

    pub fn in_memory(mut profile: Profile) -> Self {
        profile.normalize();
        Self { profile, path: None }
    }

    #[cfg(test)]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn balance(&self) -> u32 {
        self.profile.coins
    }

    pub fn equipped(&self) -> &str {
        &self.profile.equipped_skin
    }

    pub fn owns(&self, id: &str) -> bool {
        self.profile.owned_skins.contains(id)
    }

    /// Returns false and leaves the balance alone if there are not enough coins
    pub fn spend(&mut self, amount: u32) -> bool {
        if self.profile.coins < amount {
            debug!("cannot spend {} with a balance of {}", amount, self.profile.coins);
            return false;
        }
        self.profile.coins -= amount;
        self.persist();
        true
    }

    pub fn earn(&mut self, amount: u32) {
        self.profile.coins = self.profile.coins.saturating_add(amount);
        self.persist();
    }

    pub fn grant(&mut self, id: &str) {
        self.profile.owned_skins.insert(id.to_string());
        self.persist();
    }

    /// Returns false if the skin is not owned
    pub fn equip(&mut self, id: &str) -> bool {
        if !self.owns(id) {
            return false;
        }
        self.profile.equipped_skin = id.to_string();
        self.persist();
        true
    }

    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };
        if let Err(e) = save_atomic(path, &self.profile).with_trace_step("ProfileStore::persist") {
            error!("could not save profile to {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_profile_path(test: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("skin_snake_{}_{}", test, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir.join("profile.json")
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let store = ProfileStore::load(temp_profile_path("missing"));
        assert_eq!(store.profile(), &Profile::default());
        assert_eq!(store.equipped(), DEFAULT_SKIN);
        assert_eq!(store.balance(), 0);
    }

    #[test]
    fn test_grant_equip_reload() {
        let path = temp_profile_path("round_trip");
        let mut store = ProfileStore::load(&path);
        assert!(!store.equip("neon_fan"));
        store.grant("neon_fan");
        assert!(store.equip("neon_fan"));

        let reloaded = ProfileStore::load(&path);
        assert_eq!(reloaded.equipped(), "neon_fan");
        assert!(reloaded.owns(DEFAULT_SKIN));
    }

    #[test]
    fn test_economy() {
        let path = temp_profile_path("economy");
        let mut store = ProfileStore::load(&path);
        store.earn(50);
        assert_eq!(store.balance(), 50);

        assert!(store.spend(30));
        assert_eq!(store.balance(), 20);
        store.grant("skin_x");
        assert!(store.equip("skin_x"));

        let mut reloaded = ProfileStore::load(&path);
        assert_eq!(reloaded.equipped(), "skin_x");
        assert_eq!(reloaded.balance(), 20);
        assert!(!reloaded.spend(30));
        assert_eq!(reloaded.balance(), 20);
    }

    #[test]
    fn test_malformed_and_inconsistent_records() {
        let path = temp_profile_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();

        fs::write(&path, "{\"coins\": -3").unwrap();
        assert_eq!(ProfileStore::load(&path).profile(), &Profile::default());

        fs::write(
            &path,
            r#"{"coins": 7, "owned_skins": ["a"], "equipped_skin": "b"}"#,
        )
        .unwrap();
        let store = ProfileStore::load(&path);
        assert_eq!(store.balance(), 7);
        assert!(store.owns("a"));
        assert!(store.owns(DEFAULT_SKIN));
        assert_eq!(store.equipped(), DEFAULT_SKIN);
    }

    #[test]
    fn test_persist_failure_keeps_memory_state() {
        // a directory where the file should be makes every write fail
        let path = temp_profile_path("unwritable");
        fs::create_dir_all(path.with_extension("json.tmp")).unwrap();
        let mut store = ProfileStore::load(&path);
        store.earn(5);
        store.grant("x");
        assert!(store.equip("x"));
        assert_eq!(store.balance(), 5);
        assert!(!path.exists());
    }
}
