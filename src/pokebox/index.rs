//! # Identifier Index
//!
//! The reference table that maps a species identifier (`025`) to its canonical
//! name (`Pikachu`). It is read once at startup from a two-column file with no
//! header and never changes afterwards.
//!
//! ## Lookup Rules
//!
//! - Forward (`resolve_name`): a direct lookup. When the file repeats an
//!   identifier the last row wins, but the entry keeps the position of its
//!   first occurrence.
//! - Reverse (`resolve_id`): a linear scan in entry order, returning the first
//!   identifier whose name matches. If the file lists the same name under two
//!   identifiers, the earlier one is returned.
//!
//! A missing reference file is not fatal. [`IdentifierIndex::load_or_empty`]
//! returns an empty index together with a warning for the caller to show.

use crate::commands::CmdMessage;
use crate::error::{PokeboxError, Result};
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct IdentifierIndex {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl IdentifierIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut index = Self::new();
        for (id, name) in pairs {
            index.insert(id.into(), name.into());
        }
        index
    }

    /// Reads the reference file. A missing file is [`PokeboxError::NotFound`].
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PokeboxError::NotFound(path.to_path_buf()));
        }
        let file = fs::File::open(path).map_err(PokeboxError::Io)?;
        let index = Self::read(file)?;
        tracing::debug!(path = %path.display(), entries = index.len(), "loaded identifier index");
        Ok(index)
    }

    /// Like [`load`](Self::load), but a missing file degrades to an empty
    /// index plus a warning.
    pub fn load_or_empty(path: &Path) -> Result<(Self, Option<CmdMessage>)> {
        match Self::load(path) {
            Ok(index) => Ok((index, None)),
            Err(PokeboxError::NotFound(missing)) => {
                tracing::warn!(path = %missing.display(), "identifier index not found");
                let warning = CmdMessage::warning(format!(
                    "{} file not found, names will not be filled in",
                    missing.display()
                ));
                Ok((Self::new(), Some(warning)))
            }
            Err(e) => Err(e),
        }
    }

    /// Parses `identifier,name` rows. Rows with fewer than two columns are skipped.
    pub fn read<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut index = Self::new();
        for row in rdr.records() {
            let row = row?;
            match (row.get(0), row.get(1)) {
                (Some(id), Some(name)) => index.insert(id.to_string(), name.to_string()),
                _ => tracing::warn!(
                    line = row.position().map(|p| p.line()),
                    "skipping identifier row without a name"
                ),
            }
        }
        Ok(index)
    }

    fn insert(&mut self, id: String, name: String) {
        match self.positions.get(&id) {
            Some(&pos) => self.entries[pos].1 = name,
            None => {
                self.positions.insert(id.clone(), self.entries.len());
                self.entries.push((id, name));
            }
        }
    }

    pub fn resolve_name(&self, id: &str) -> Option<&str> {
        self.positions
            .get(id)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn resolve_id(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, n)| n == name)
            .map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }
}
