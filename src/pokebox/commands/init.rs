use crate::commands::{CmdMessage, CmdResult, PokeboxPaths};
use crate::config::PokeboxConfig;
use crate::error::Result;
use crate::store::DataStore;
use std::fs;

/// Creates the data root, a default config, the collection file and the
/// sprites directory. Existing files are left alone.
pub fn run<S: DataStore>(
    store: &mut S,
    paths: &PokeboxPaths,
    config: &PokeboxConfig,
) -> Result<CmdResult> {
    let root = paths.root();
    fs::create_dir_all(root)?;
    let mut result = CmdResult::default();

    if !PokeboxConfig::exists(root) {
        config.save(root)?;
    }

    let records = store.load_records()?;
    fs::create_dir_all(config.sprites_path(root))?;

    if !config.index_path(root).exists() {
        result.add_message(CmdMessage::warning(format!(
            "No identifier file at {}, add one to enable name lookup",
            config.index_path(root).display()
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Initialized pokebox at {} ({} records in {})",
        root.display(),
        records.len(),
        store.location()
    )));
    Ok(result)
}
