use crate::config::PokeboxConfig;
use crate::model::Record;
use std::path::{Path, PathBuf};

pub mod config;
pub mod create;
pub mod delete;
pub mod init;
pub mod list;
pub mod lookup;
pub mod sprite;
pub mod update;
pub mod view;

/// Where pokebox keeps its files.
#[derive(Debug, Clone)]
pub struct PokeboxPaths {
    pub root: PathBuf,
}

impl PokeboxPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A record as shown to the user: its 1-based position in the collection and
/// its sprite, if one exists on disk.
#[derive(Debug, Clone)]
pub struct DisplayRecord {
    pub position: usize,
    pub record: Record,
    pub sprite: Option<PathBuf>,
}

/// The outcome of an identifier/name lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub query: String,
    pub id: String,
    pub name: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<DisplayRecord>,
    pub sprite_paths: Vec<PathBuf>,
    pub resolved: Vec<Resolution>,
    pub config: Option<PokeboxConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_sprite_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.sprite_paths = paths;
        self
    }

    pub fn with_config(mut self, config: PokeboxConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// New field values for every record carrying `id`.
#[derive(Debug, Clone)]
pub struct RecordUpdate {
    pub id: String,
    pub changes: Record,
}

impl RecordUpdate {
    pub fn new(id: impl Into<String>, changes: Record) -> Self {
        Self {
            id: id.into(),
            changes,
        }
    }
}
