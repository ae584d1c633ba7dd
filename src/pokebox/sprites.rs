//! Sprite lookup.
//!
//! A record's sprite lives at `<sprites_dir>/<ID><ext>`. Sprites are decoration
//! only: a missing file is the normal "no image" state, not an error.
//!
//! Loaded sprites are kept in a small FIFO cache so repeated lookups of the
//! same identifier do not hit the disk. The cache holds at most `capacity`
//! sprites and evicts the oldest first; a capacity of zero disables it.

use crate::error::{PokeboxError, Result};
use std::collections::VecDeque;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub const DEFAULT_EXT: &str = ".png";
pub const DEFAULT_CACHE_SIZE: usize = 64;

/// A sprite file read into memory. Decoding and resizing are left to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub id: String,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

pub struct SpriteCatalog {
    dir: PathBuf,
    ext: String,
    capacity: usize,
    cache: VecDeque<Rc<Sprite>>,
}

/// Makes sure an extension starts with a dot.
pub fn normalize_ext(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

impl SpriteCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ext: DEFAULT_EXT.to_string(),
            capacity: DEFAULT_CACHE_SIZE,
            cache: VecDeque::new(),
        }
    }

    pub fn with_ext(mut self, ext: &str) -> Self {
        self.ext = normalize_ext(ext);
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self.cache.truncate(capacity);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn ext(&self) -> &str {
        &self.ext
    }

    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// Where the sprite for `id` would be, whether or not it exists.
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}{}", id, self.ext))
    }

    /// The sprite path for `id`, if the file exists.
    pub fn locate(&self, id: &str) -> Option<PathBuf> {
        let path = self.path_for(id);
        path.is_file().then_some(path)
    }

    /// Loads the sprite for `id`. Returns `Ok(None)` when there is no file.
    pub fn lookup(&mut self, id: &str) -> Result<Option<Rc<Sprite>>> {
        if let Some(hit) = self.cache.iter().find(|s| s.id == id) {
            return Ok(Some(Rc::clone(hit)));
        }

        let path = self.path_for(id);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "sprite not found");
                return Ok(None);
            }
            Err(e) => return Err(PokeboxError::Io(e)),
        };
        tracing::debug!(path = %path.display(), size = bytes.len(), "loading sprite");

        let sprite = Rc::new(Sprite {
            id: id.to_string(),
            path,
            bytes,
        });
        if self.capacity > 0 {
            if self.cache.len() >= self.capacity {
                self.cache.pop_front();
            }
            self.cache.push_back(Rc::clone(&sprite));
        }
        Ok(Some(sprite))
    }
}
