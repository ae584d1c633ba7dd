use crate::error::{PokeboxError, Result};
use crate::sprites::{normalize_ext, DEFAULT_CACHE_SIZE, DEFAULT_EXT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "pokebox.json";
const DEFAULT_COLLECTION_FILE: &str = "pokemon_collection.csv";
const DEFAULT_INDEX_FILE: &str = "pokemon_id_name.csv";
const DEFAULT_SPRITES_DIR: &str = "sprites";

/// Keys accepted by [`PokeboxConfig::get`] and [`PokeboxConfig::set`].
pub const KEYS: [&str; 5] = [
    "collection-file",
    "index-file",
    "sprites-dir",
    "sprite-ext",
    "sprite-cache-size",
];

/// Configuration for pokebox, stored in `<root>/pokebox.json`.
///
/// Relative paths are resolved against the data root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokeboxConfig {
    #[serde(default = "default_collection_file")]
    pub collection_file: String,

    #[serde(default = "default_index_file")]
    pub index_file: String,

    #[serde(default = "default_sprites_dir")]
    pub sprites_dir: String,

    /// Sprite file extension (e.g. ".png", ".gif")
    #[serde(default = "default_sprite_ext")]
    pub sprite_ext: String,

    /// Maximum number of sprites held in memory, 0 disables the cache
    #[serde(default = "default_sprite_cache_size")]
    pub sprite_cache_size: usize,
}

fn default_collection_file() -> String {
    DEFAULT_COLLECTION_FILE.to_string()
}

fn default_index_file() -> String {
    DEFAULT_INDEX_FILE.to_string()
}

fn default_sprites_dir() -> String {
    DEFAULT_SPRITES_DIR.to_string()
}

fn default_sprite_ext() -> String {
    DEFAULT_EXT.to_string()
}

fn default_sprite_cache_size() -> usize {
    DEFAULT_CACHE_SIZE
}

impl Default for PokeboxConfig {
    fn default() -> Self {
        Self {
            collection_file: default_collection_file(),
            index_file: default_index_file(),
            sprites_dir: default_sprites_dir(),
            sprite_ext: default_sprite_ext(),
            sprite_cache_size: default_sprite_cache_size(),
        }
    }
}

impl PokeboxConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PokeboxError::Io)?;
        let config: PokeboxConfig =
            serde_json::from_str(&content).map_err(PokeboxError::Serialization)?;
        Ok(config)
    }

    /// Whether a config file has been written to the given directory
    pub fn exists<P: AsRef<Path>>(config_dir: P) -> bool {
        config_dir.as_ref().join(CONFIG_FILENAME).exists()
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PokeboxError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PokeboxError::Serialization)?;
        fs::write(config_path, content).map_err(PokeboxError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "collection-file" => Some(self.collection_file.clone()),
            "index-file" => Some(self.index_file.clone()),
            "sprites-dir" => Some(self.sprites_dir.clone()),
            "sprite-ext" => Some(self.sprite_ext.clone()),
            "sprite-cache-size" => Some(self.sprite_cache_size.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        if value.trim().is_empty() && key != "sprite-cache-size" {
            return Err(format!("{} cannot be empty", key));
        }
        match key {
            "collection-file" => self.collection_file = value.to_string(),
            "index-file" => self.index_file = value.to_string(),
            "sprites-dir" => self.sprites_dir = value.to_string(),
            "sprite-ext" => self.sprite_ext = normalize_ext(value),
            "sprite-cache-size" => {
                self.sprite_cache_size = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("sprite-cache-size must be a number, got {:?}", value))?;
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn collection_path(&self, root: &Path) -> PathBuf {
        root.join(&self.collection_file)
    }

    pub fn index_path(&self, root: &Path) -> PathBuf {
        root.join(&self.index_file)
    }

    pub fn sprites_path(&self, root: &Path) -> PathBuf {
        root.join(&self.sprites_dir)
    }
}
