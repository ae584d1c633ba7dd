use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::IdentifierIndex;
use crate::model::Record;

use super::lookup::autofill;

pub fn run(
    collection: &mut Collection,
    index: &IdentifierIndex,
    mut record: Record,
) -> Result<CmdResult> {
    autofill(index, &mut record);
    record.fill_schema();

    let mut result = CmdResult::default();
    let existing = collection.count_id(record.id());
    if existing > 0 {
        result.add_message(CmdMessage::warning(format!(
            "ID {} was already in the collection ({} record(s))",
            record.id(),
            existing
        )));
    }

    let created = collection.create(record).clone();
    result.add_message(CmdMessage::success(format!(
        "Record created ({}): {}",
        created.id(),
        created.name()
    )));
    result.affected_records.push(created);
    Ok(result)
}
