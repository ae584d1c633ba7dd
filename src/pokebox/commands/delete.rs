use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run<I: AsRef<str>>(collection: &mut Collection, ids: &[I]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let id = id.as_ref();
        let removed = collection.delete(id);
        if removed.is_empty() {
            result.add_message(CmdMessage::info(format!(
                "No record with ID {}, nothing deleted",
                id
            )));
            continue;
        }

        result.add_message(CmdMessage::success(format!(
            "Record(s) deleted ({}): {}",
            id,
            removed.len()
        )));
        result.affected_records.extend(removed);
    }

    Ok(result)
}
