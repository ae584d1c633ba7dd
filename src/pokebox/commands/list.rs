use crate::collection::Collection;
use crate::commands::{CmdResult, DisplayRecord};
use crate::error::Result;
use crate::sprites::SpriteCatalog;

pub fn run(collection: &Collection, sprites: &SpriteCatalog) -> Result<CmdResult> {
    let listed = collection
        .records()
        .iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord {
            position: i + 1,
            record: record.clone(),
            sprite: sprites.locate(record.id()),
        })
        .collect();

    Ok(CmdResult::default().with_listed_records(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Record, ID};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_in_collection_order_with_sprites() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("025.png"), b"png").unwrap();
        let sprites = SpriteCatalog::new(temp.path());
        let collection = Collection::from_records(vec![
            Record::new().with(ID, "133"),
            Record::new().with(ID, "025"),
        ]);

        let result = run(&collection, &sprites).unwrap();

        assert_eq!(result.listed_records.len(), 2);
        assert_eq!(result.listed_records[0].position, 1);
        assert!(result.listed_records[0].sprite.is_none());
        assert_eq!(result.listed_records[1].record.id(), "025");
        assert_eq!(
            result.listed_records[1].sprite,
            Some(temp.path().join("025.png"))
        );
    }

    #[test]
    fn empty_collection_lists_nothing() {
        let result = run(&Collection::new(), &SpriteCatalog::new("sprites")).unwrap();
        assert!(result.listed_records.is_empty());
    }
}
