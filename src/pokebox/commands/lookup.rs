use crate::commands::{CmdMessage, CmdResult, Resolution};
use crate::error::Result;
use crate::index::IdentifierIndex;
use crate::model::{Record, ID, NAME};

/// Completes a record's identifier or name from the other one.
///
/// A known `ID` fills an empty `Name`. A known `Name` fills an empty `ID`.
/// Values the user typed are never replaced.
pub fn autofill(index: &IdentifierIndex, record: &mut Record) {
    let id = record.id().to_string();
    let name = record.name().to_string();

    if !id.is_empty() && name.is_empty() {
        if let Some(found) = index.resolve_name(&id) {
            record.set(NAME, found);
        }
    } else if id.is_empty() && !name.is_empty() {
        if let Some(found) = index.resolve_id(&name) {
            record.set(ID, found);
        }
    }
}

/// Resolves each query as an identifier first, then as a name.
pub fn run<I: AsRef<str>>(index: &IdentifierIndex, queries: &[I]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for query in queries {
        let query = query.as_ref();
        let resolution = if let Some(name) = index.resolve_name(query) {
            Some((query.to_string(), name.to_string()))
        } else {
            index
                .resolve_id(query)
                .map(|id| (id.to_string(), query.to_string()))
        };

        match resolution {
            Some((id, name)) => result.resolved.push(Resolution {
                query: query.to_string(),
                id,
                name,
            }),
            None => result.add_message(CmdMessage::info(format!(
                "No identifier or name matches {:?}",
                query
            ))),
        }
    }

    Ok(result)
}
