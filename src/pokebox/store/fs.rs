use super::{codec, DataStore};
use crate::error::{PokeboxError, Result};
use crate::model::Record;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// The collection file on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PokeboxError::Io)?;
            }
        }
        Ok(())
    }

    fn write(&self, records: &[Record]) -> Result<()> {
        self.ensure_parent()?;
        let file = fs::File::create(&self.path).map_err(PokeboxError::Io)?;
        codec::write_records(BufWriter::new(file), records)
    }
}

impl DataStore for FileStore {
    fn load_records(&mut self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "creating collection file");
            self.write(&[])?;
            return Ok(Vec::new());
        }

        let file = fs::File::open(&self.path).map_err(PokeboxError::Io)?;
        let records = codec::read_records(file)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded collection");
        Ok(records)
    }

    fn save_records(&mut self, records: &[Record]) -> Result<()> {
        self.write(records)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "saved collection");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
