//! The in-memory record collection.
//!
//! A [`Collection`] is an ordered list of [`Record`]s in insertion/load order.
//! It knows nothing about files: the caller loads it from a
//! [`DataStore`](crate::store::DataStore) and saves it back after each mutation.
//!
//! `ID` is the matching key for update and delete but is not unique. Both
//! operations act on every record carrying the given identifier.

use crate::model::Record;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    records: Vec<Record>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record. Duplicate identifiers are accepted.
    pub fn create(&mut self, record: Record) -> &Record {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Merges `changes` into every record whose ID is `id`.
    ///
    /// Returns the number of records touched; zero is not an error.
    pub fn update(&mut self, id: &str, changes: &Record) -> usize {
        let mut touched = 0;
        for record in self.records.iter_mut().filter(|r| r.id() == id) {
            record.merge(changes);
            touched += 1;
        }
        touched
    }

    /// Removes every record whose ID is `id`, returning them in their old order.
    pub fn delete(&mut self, id: &str) -> Vec<Record> {
        let (removed, kept): (Vec<Record>, Vec<Record>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|r| r.id() == id);
        self.records = kept;
        removed
    }

    /// Records with the given ID, paired with their 1-based position.
    pub fn find<'a>(&'a self, id: &'a str) -> impl Iterator<Item = (usize, &'a Record)> + 'a {
        self.records
            .iter()
            .enumerate()
            .filter(move |(_, r)| r.id() == id)
            .map(|(i, r)| (i + 1, r))
    }

    pub fn count_id(&self, id: &str) -> usize {
        self.records.iter().filter(|r| r.id() == id).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ID, NAME};

    fn mon(id: &str, name: &str) -> Record {
        Record::new().with(ID, id).with(NAME, name)
    }

    #[test]
    fn create_appends_at_the_end() {
        let mut collection = Collection::new();
        collection.create(mon("001", "Bulbasaur"));
        let last = collection.create(mon("001", "Bulbasaur")).clone();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.records().last(), Some(&last));
    }

    #[test]
    fn update_touches_every_match() {
        let mut collection = Collection::from_records(vec![
            mon("133", "Eevee"),
            mon("025", "Pikachu"),
            mon("133", "Eevee"),
        ]);

        let touched = collection.update("133", &Record::new().with("Level", "30"));

        assert_eq!(touched, 2);
        assert!(collection.find("133").all(|(_, r)| r.get("Level") == "30"));
        assert_eq!(collection.records()[1].get("Level"), "");
    }

    #[test]
    fn update_of_unknown_id_is_noop() {
        let mut collection = Collection::from_records(vec![mon("025", "Pikachu")]);
        let before = collection.clone();

        assert_eq!(collection.update("999", &Record::new().with("Level", "1")), 0);
        assert_eq!(collection, before);
    }

    #[test]
    fn delete_removes_every_match_and_keeps_order() {
        let mut collection = Collection::from_records(vec![
            mon("133", "Eevee"),
            mon("001", "Bulbasaur"),
            mon("133", "Eevee"),
            mon("004", "Charmander"),
        ]);

        let removed = collection.delete("133");

        assert_eq!(removed.len(), 2);
        let ids: Vec<&str> = collection.records().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["001", "004"]);
    }

    #[test]
    fn find_reports_positions() {
        let collection = Collection::from_records(vec![
            mon("133", "Eevee"),
            mon("001", "Bulbasaur"),
            mon("133", "Eevee"),
        ]);
        let positions: Vec<usize> = collection.find("133").map(|(p, _)| p).collect();
        assert_eq!(positions, vec![1, 3]);
        assert_eq!(collection.count_id("001"), 1);
    }
}
