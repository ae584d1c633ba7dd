use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult, DisplayRecord};
use crate::error::Result;
use crate::sprites::SpriteCatalog;

pub fn run<I: AsRef<str>>(
    collection: &Collection,
    sprites: &SpriteCatalog,
    ids: &[I],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let id = id.as_ref();
        let before = result.listed_records.len();
        result
            .listed_records
            .extend(collection.find(id).map(|(position, record)| DisplayRecord {
                position,
                record: record.clone(),
                sprite: sprites.locate(id),
            }));
        if result.listed_records.len() == before {
            result.add_message(CmdMessage::warning(format!("No record with ID {}", id)));
        }
    }

    Ok(result)
}
