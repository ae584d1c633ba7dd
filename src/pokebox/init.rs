use crate::api::{CmdMessage, PokeboxApi, PokeboxPaths};
use crate::config::PokeboxConfig;
use crate::index::IdentifierIndex;
use crate::sprites::SpriteCatalog;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "POKEBOX_HOME";

pub struct PokeboxContext {
    pub api: PokeboxApi<FileStore>,
    pub config: PokeboxConfig,
    /// Problems found while opening the data root that did not stop startup.
    pub warnings: Vec<CmdMessage>,
}

/// Picks the data root: an explicit path, then `POKEBOX_HOME`, then the
/// working directory. The platform data directory is the last resort when the
/// working directory cannot be read.
pub fn resolve_root(
    explicit: Option<PathBuf>,
    env_home: Option<String>,
    cwd: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if let Some(home) = env_home.filter(|h| !h.trim().is_empty()) {
        return PathBuf::from(home);
    }
    if let Some(cwd) = cwd {
        return cwd;
    }
    ProjectDirs::from("com", "pokebox", "pokebox")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn data_root(explicit: Option<PathBuf>) -> PathBuf {
    resolve_root(
        explicit,
        std::env::var(HOME_ENV).ok(),
        std::env::current_dir().ok(),
    )
}

/// Wires config, store, identifier index and sprite catalog for `root`.
///
/// The collection itself is not loaded here; call [`PokeboxApi::load`].
pub fn initialize(root: &Path) -> PokeboxContext {
    let mut warnings = Vec::new();

    let config = match PokeboxConfig::load(root) {
        Ok(config) => config,
        Err(e) => {
            warnings.push(CmdMessage::warning(format!(
                "Ignoring unreadable config, using defaults: {}",
                e
            )));
            PokeboxConfig::default()
        }
    };

    let index = match IdentifierIndex::load_or_empty(&config.index_path(root)) {
        Ok((index, warning)) => {
            warnings.extend(warning);
            index
        }
        Err(e) => {
            tracing::warn!(error = %e, "identifier index unreadable");
            warnings.push(CmdMessage::warning(format!(
                "Could not read identifier file: {}",
                e
            )));
            IdentifierIndex::new()
        }
    };

    let sprites = SpriteCatalog::new(config.sprites_path(root))
        .with_ext(&config.sprite_ext)
        .with_capacity(config.sprite_cache_size);
    let store = FileStore::new(config.collection_path(root));
    let api = PokeboxApi::new(store, index, sprites, PokeboxPaths::new(root));

    PokeboxContext {
        api,
        config,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let root = resolve_root(
            Some(PathBuf::from("/explicit")),
            Some("/env".into()),
            Some(PathBuf::from("/cwd")),
        );
        assert_eq!(root, PathBuf::from("/explicit"));
    }

    #[test]
    fn env_beats_cwd_unless_blank() {
        let root = resolve_root(None, Some("/env".into()), Some(PathBuf::from("/cwd")));
        assert_eq!(root, PathBuf::from("/env"));

        let root = resolve_root(None, Some("  ".into()), Some(PathBuf::from("/cwd")));
        assert_eq!(root, PathBuf::from("/cwd"));
    }

    #[test]
    fn missing_index_is_a_warning() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize(temp.path());

        assert_eq!(ctx.warnings.len(), 1);
        assert!(ctx.api.index().is_empty());
    }

    #[test]
    fn uses_configured_files() {
        let temp = TempDir::new().unwrap();
        let mut config = PokeboxConfig::default();
        config.set("index-file", "names.csv").unwrap();
        config.save(temp.path()).unwrap();
        fs::write(temp.path().join("names.csv"), "025,Pikachu\n").unwrap();

        let mut ctx = initialize(temp.path());
        ctx.api.load().unwrap();

        assert!(ctx.warnings.is_empty());
        assert_eq!(ctx.api.resolve_name("025"), Some("Pikachu"));
        assert!(temp.path().join("pokemon_collection.csv").exists());
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pokebox.json"), "{ not json").unwrap();
        fs::write(temp.path().join("pokemon_id_name.csv"), "025,Pikachu\n").unwrap();

        let ctx = initialize(temp.path());

        assert_eq!(ctx.config, PokeboxConfig::default());
        assert_eq!(ctx.warnings.len(), 1);
    }
}
