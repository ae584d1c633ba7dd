//! # Storage Layer
//!
//! This module defines the storage abstraction for pokebox. The [`DataStore`]
//! trait lets the API work against the collection file in production and an
//! in-memory buffer in tests.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the collection file on disk
//! - [`memory::InMemoryStore`]: an in-memory buffer for testing
//!
//! Both go through [`codec`], so they produce the same bytes for the same
//! records.
//!
//! ## Storage Format
//!
//! ```text
//! pokemon_collection.csv
//! ID,Name,Sprite,isShiny,Game,...,Note,Method     <- header, mandatory
//! 025,Pikachu,,no,Yellow,...,,Gift               <- one record per line
//! ```
//!
//! The store never diffs. `load_records` reads the whole file and
//! `save_records` truncates and rewrites it. There is no backup or atomic
//! rename, so a failure halfway through a save can leave a truncated file.

use crate::error::Result;
use crate::model::Record;

pub mod codec;
pub mod fs;
pub mod memory;

/// Abstract interface for the collection's durable storage.
pub trait DataStore {
    /// Read every record. A store that does not exist yet is created holding
    /// only the header, and yields no records.
    fn load_records(&mut self) -> Result<Vec<Record>>;

    /// Replace the stored contents with `records`, in order.
    fn save_records(&mut self, records: &[Record]) -> Result<()>;

    /// Human-readable location, used in messages.
    fn location(&self) -> String;
}
