use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult, RecordUpdate};
use crate::error::Result;

pub fn run(collection: &mut Collection, updates: &[RecordUpdate]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for update in updates {
        // Positions survive the merge even when the update rewrites the ID.
        let positions: Vec<usize> = collection.find(&update.id).map(|(p, _)| p).collect();
        let touched = collection.update(&update.id, &update.changes);

        if touched == 0 {
            result.add_message(CmdMessage::info(format!(
                "No record with ID {}, nothing updated",
                update.id
            )));
            continue;
        }

        result.add_message(CmdMessage::success(format!(
            "Record(s) updated ({}): {}",
            update.id, touched
        )));
        result.affected_records.extend(
            positions
                .into_iter()
                .map(|p| collection.records()[p - 1].clone()),
        );
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::{Record, ID, NAME};

    fn eevees() -> Collection {
        Collection::from_records(vec![
            Record::new().with(ID, "133").with(NAME, "Eevee").with("Level", "5"),
            Record::new().with(ID, "025").with(NAME, "Pikachu"),
            Record::new().with(ID, "133").with(NAME, "Eevee").with("Level", "9"),
        ])
    }

    #[test]
    fn merges_into_every_match() {
        let mut collection = eevees();
        let update = RecordUpdate::new("133", Record::new().with("Nature", "Bold"));

        let result = run(&mut collection, &[update]).unwrap();

        assert_eq!(result.affected_records.len(), 2);
        assert_eq!(result.affected_records[0].get("Level"), "5");
        assert_eq!(result.affected_records[1].get("Level"), "9");
        assert!(result
            .affected_records
            .iter()
            .all(|r| r.get("Nature") == "Bold"));
    }

    #[test]
    fn can_change_the_id() {
        let mut collection = eevees();
        let update = RecordUpdate::new(
            "133",
            Record::new().with(ID, "134").with(NAME, "Vaporeon"),
        );

        let result = run(&mut collection, &[update]).unwrap();

        assert_eq!(collection.count_id("133"), 0);
        assert_eq!(collection.count_id("134"), 2);
        assert_eq!(result.affected_records[0].name(), "Vaporeon");
    }

    #[test]
    fn unknown_id_is_a_silent_noop() {
        let mut collection = eevees();
        let update = RecordUpdate::new("999", Record::new().with("Level", "1"));

        let result = run(&mut collection, &[update]).unwrap();

        assert!(result.affected_records.is_empty());
        assert_eq!(collection, eevees());
        assert!(matches!(result.messages[0].level, MessageLevel::Info));
    }
}
