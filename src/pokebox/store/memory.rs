use super::{codec, DataStore};
use crate::error::Result;
use crate::model::Record;

/// In-memory storage for testing and development.
/// Holds the encoded file contents, so it exercises the same codec as
/// [`FileStore`](super::fs::FileStore).
#[derive(Default)]
pub struct InMemoryStore {
    contents: Option<Vec<u8>>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose "file" already holds `contents`.
    pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Some(contents.into()),
            saves: 0,
        }
    }

    /// The bytes a file store would have written, if anything was written yet.
    pub fn contents(&self) -> Option<&[u8]> {
        self.contents.as_deref()
    }

    /// How many times the records were saved.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_records(&mut self) -> Result<Vec<Record>> {
        match &self.contents {
            Some(bytes) => codec::read_records(bytes.as_slice()),
            None => {
                let mut bytes = Vec::new();
                codec::write_records(&mut bytes, &[])?;
                self.contents = Some(bytes);
                Ok(Vec::new())
            }
        }
    }

    fn save_records(&mut self, records: &[Record]) -> Result<()> {
        let mut bytes = Vec::new();
        codec::write_records(&mut bytes, records)?;
        self.contents = Some(bytes);
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{ID, NAME};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        records: Vec<Record>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                records: Vec::new(),
            }
        }

        pub fn with_record(mut self, id: &str, name: &str) -> Self {
            let mut record = Record::new().with(ID, id).with(NAME, name);
            record.fill_schema();
            self.records.push(record);
            self
        }

        pub fn with_records(mut self, count: usize) -> Self {
            for i in 0..count {
                let id = format!("{:03}", i + 1);
                let name = format!("Test Mon {}", i + 1);
                self = self.with_record(&id, &name);
            }
            self
        }

        /// Writes the collected records into the store and hands it over.
        pub fn build(mut self) -> InMemoryStore {
            let mut bytes = Vec::new();
            codec::write_records(&mut bytes, &self.records).unwrap();
            self.store.contents = Some(bytes);
            self.store
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::model::METHOD;

    #[test]
    fn first_load_writes_header() {
        let mut store = InMemoryStore::new();
        assert!(store.load_records().unwrap().is_empty());
        assert!(store.contents().is_some());
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn fixture_records_load_back() {
        let mut store = StoreFixture::new()
            .with_records(2)
            .with_record("133", "Eevee")
            .build();

        let records = store.load_records().unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[2].name(), "Eevee");
        assert!(records.iter().all(|r| r.contains(METHOD)));
    }

    #[test]
    fn save_replaces_contents() {
        let mut store = StoreFixture::new().with_records(3).build();
        store.save_records(&[]).unwrap();
        assert!(store.load_records().unwrap().is_empty());
        assert_eq!(store.saves(), 1);
    }
}
