use std::collections::HashMap;

pub const ID: &str = "ID";
pub const NAME: &str = "Name";
pub const METHOD: &str = "Method";

/// The collection schema, in the column order used when writing the file.
pub const FIELDS: [&str; 21] = [
    ID,
    NAME,
    "Sprite",
    "isShiny",
    "Game",
    "Save",
    "Evolution",
    "Gender",
    "Forme majeur",
    "Forme mineur",
    "PID",
    "Ball",
    "Level",
    "IVs",
    "EVs",
    "Nature",
    "Ability",
    "Date",
    "Location",
    "Note",
    METHOD,
];

/// Maps user input to the schema's spelling of a field, ignoring case.
pub fn canonical_field(name: &str) -> Option<&'static str> {
    let name = name.trim();
    FIELDS
        .iter()
        .copied()
        .find(|field| field.eq_ignore_ascii_case(name))
}

/// One collection entry. Values are free-form text and never coerced.
///
/// Fields that were never set read back as `""`, the same as a blank cell in
/// the collection file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new();
        for (field, value) in pairs {
            record.set(field, value);
        }
        record
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    pub fn id(&self) -> &str {
        self.get(ID)
    }

    pub fn name(&self) -> &str {
        self.get(NAME)
    }

    /// Overwrites the fields present in `changes`, keeping everything else.
    pub fn merge(&mut self, changes: &Record) {
        for (field, value) in &changes.values {
            self.values.insert(field.clone(), value.clone());
        }
    }

    /// Gives every schema field an explicit value, `""` where none was set.
    pub fn fill_schema(&mut self) {
        for field in FIELDS {
            self.values.entry(field.to_string()).or_default();
        }
    }

    /// Number of fields holding a value, blank or not.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates the fields that are set, schema fields first in schema order,
    /// then any extra columns sorted by name.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut extras: Vec<&String> = self
            .values
            .keys()
            .filter(|k| !FIELDS.contains(&k.as_str()))
            .collect();
        extras.sort();

        FIELDS
            .iter()
            .copied()
            .filter(|f| self.values.contains_key(*f))
            .chain(extras.into_iter().map(String::as_str))
            .map(|f| (f, self.get(f)))
    }
}
