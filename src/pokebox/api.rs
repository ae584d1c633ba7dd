//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Any UI (the
//! bundled CLI, or a windowed front end) talks to pokebox through
//! [`PokeboxApi`] and nothing else.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the collection, the identifier index and the sprite catalog
//! - **Dispatches** to the appropriate command function
//! - **Persists** after every mutation, so a mutating call returns only once
//!   the collection file has been rewritten
//!
//! There is no global state: a UI holds one `PokeboxApi` and passes it around
//! by reference.
//!
//! ## Load and Save
//!
//! [`PokeboxApi::load`] replaces the in-memory collection with the file
//! contents. If loading fails the previous collection is kept and the error
//! is returned. [`PokeboxApi::save`] rewrites the whole file and is idempotent.
//! The in-memory collection and the file only differ between a mutation and
//! its save, or after a save that failed.
//!
//! ## Generic Over DataStore
//!
//! - Production: `PokeboxApi<FileStore>`
//! - Testing: `PokeboxApi<InMemoryStore>`

use crate::collection::Collection;
use crate::commands;
use crate::error::Result;
use crate::index::IdentifierIndex;
use crate::model::Record;
use crate::sprites::{Sprite, SpriteCatalog};
use crate::store::DataStore;
use std::rc::Rc;

pub struct PokeboxApi<S: DataStore> {
    store: S,
    collection: Collection,
    index: IdentifierIndex,
    sprites: SpriteCatalog,
    paths: commands::PokeboxPaths,
}

impl<S: DataStore> PokeboxApi<S> {
    pub fn new(
        store: S,
        index: IdentifierIndex,
        sprites: SpriteCatalog,
        paths: commands::PokeboxPaths,
    ) -> Self {
        Self {
            store,
            collection: Collection::new(),
            index,
            sprites,
            paths,
        }
    }

    /// Reads the collection from the store, returning how many records it holds.
    pub fn load(&mut self) -> Result<usize> {
        let records = self.store.load_records()?;
        self.collection = Collection::from_records(records);
        Ok(self.collection.len())
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save_records(self.collection.records())
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn index(&self) -> &IdentifierIndex {
        &self.index
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create_record(&mut self, record: Record) -> Result<commands::CmdResult> {
        let result = commands::create::run(&mut self.collection, &self.index, record)?;
        self.save()?;
        Ok(result)
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.collection, &self.sprites)
    }

    pub fn view_records<I: AsRef<str>>(&self, ids: &[I]) -> Result<commands::CmdResult> {
        commands::view::run(&self.collection, &self.sprites, ids)
    }

    pub fn update_records(
        &mut self,
        updates: &[commands::RecordUpdate],
    ) -> Result<commands::CmdResult> {
        let result = commands::update::run(&mut self.collection, updates)?;
        self.save()?;
        Ok(result)
    }

    pub fn delete_records<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.collection, ids)?;
        self.save()?;
        Ok(result)
    }

    pub fn resolve_name(&self, id: &str) -> Option<&str> {
        self.index.resolve_name(id)
    }

    pub fn resolve_id(&self, name: &str) -> Option<&str> {
        self.index.resolve_id(name)
    }

    pub fn lookup<I: AsRef<str>>(&self, queries: &[I]) -> Result<commands::CmdResult> {
        commands::lookup::run(&self.index, queries)
    }

    /// Loads the sprite for one identifier, `None` when there is no file.
    pub fn sprite(&mut self, id: &str) -> Result<Option<Rc<Sprite>>> {
        self.sprites.lookup(id)
    }

    pub fn sprite_paths<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        commands::sprite::run(&mut self.sprites, ids)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&mut self, config: &crate::config::PokeboxConfig) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store, &self.paths, config)
    }

    pub fn paths(&self) -> &commands::PokeboxPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CmdMessage, CmdResult, DisplayRecord, MessageLevel, PokeboxPaths, RecordUpdate, Resolution,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FIELDS, ID, METHOD, NAME};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api_with(store: InMemoryStore) -> PokeboxApi<InMemoryStore> {
        let index = IdentifierIndex::from_pairs([("025", "Pikachu"), ("133", "Eevee")]);
        let mut api = PokeboxApi::new(
            store,
            index,
            SpriteCatalog::new("sprites"),
            PokeboxPaths::new("."),
        );
        api.load().unwrap();
        api
    }

    fn reload(api: PokeboxApi<InMemoryStore>) -> PokeboxApi<InMemoryStore> {
        let bytes = api.store().contents().unwrap().to_vec();
        api_with(InMemoryStore::with_contents(bytes))
    }

    #[test]
    fn load_bootstraps_empty_store() {
        let api = api_with(InMemoryStore::new());
        assert!(api.collection().is_empty());
        let header = format!("{}\r\n", FIELDS.join(","));
        assert_eq!(api.store().contents(), Some(header.as_bytes()));
    }

    #[test]
    fn create_persists_and_reloads() {
        let mut api = api_with(InMemoryStore::new());
        let record = Record::new()
            .with(ID, "025")
            .with("Game", "Yellow")
            .with("Level", "5")
            .with(METHOD, "Gift");

        api.create_record(record).unwrap();
        assert_eq!(api.store().saves(), 1);

        let api = reload(api);
        let matches: Vec<_> = api.collection().find("025").collect();
        assert_eq!(matches.len(), 1);
        let (_, loaded) = matches[0];
        assert_eq!(loaded.name(), "Pikachu");
        assert_eq!(loaded.get("Game"), "Yellow");
        assert_eq!(loaded.get("Level"), "5");
        assert_eq!(loaded.get(METHOD), "Gift");
    }

    #[test]
    fn delete_removes_all_matches_after_reload() {
        let store = StoreFixture::new()
            .with_record("133", "Eevee")
            .with_record("025", "Pikachu")
            .with_record("133", "Eevee")
            .build();
        let mut api = api_with(store);

        api.delete_records(&["133"]).unwrap();

        let api = reload(api);
        assert_eq!(api.collection().count_id("133"), 0);
        assert_eq!(api.collection().len(), 1);
    }

    #[test]
    fn update_persists_merge() {
        let store = StoreFixture::new().with_record("133", "Eevee").build();
        let mut api = api_with(store);

        let update = RecordUpdate::new("133", Record::new().with("Level", "42"));
        api.update_records(&[update]).unwrap();

        let api = reload(api);
        let record = &api.collection().records()[0];
        assert_eq!(record.get("Level"), "42");
        assert_eq!(record.name(), "Eevee");
    }

    #[test]
    fn save_is_idempotent() {
        let store = StoreFixture::new().with_records(3).build();
        let mut api = api_with(store);

        api.save().unwrap();
        let first = api.store().contents().unwrap().to_vec();
        api.save().unwrap();
        let second = api.store().contents().unwrap().to_vec();

        assert_eq!(first, second);
    }

    #[test]
    fn failed_load_keeps_previous_collection() {
        let mut api = api_with(StoreFixture::new().with_records(2).build());
        let mut broken = b"ID,Name\n025,".to_vec();
        broken.extend_from_slice(&[0xff, 0xfe, b'\n']);
        api.store = InMemoryStore::with_contents(broken);

        assert!(api.load().is_err());
        assert_eq!(api.collection().len(), 2);
    }

    #[test]
    fn resolves_through_index() {
        let api = api_with(InMemoryStore::new());
        assert_eq!(api.resolve_name("025"), Some("Pikachu"));
        assert_eq!(api.resolve_id("Pikachu"), Some("025"));
        assert_eq!(api.resolve_id("Mew"), None);
        assert_eq!(api.lookup(&["Eevee"]).unwrap().resolved[0].id, "133");
    }

    #[test]
    fn listing_uses_load_order() {
        let store = StoreFixture::new()
            .with_record("133", "Eevee")
            .with_record("025", "Pikachu")
            .build();
        let api = api_with(store);

        let names: Vec<String> = api
            .list_records()
            .unwrap()
            .listed_records
            .into_iter()
            .map(|d| d.record.get(NAME).to_string())
            .collect();
        assert_eq!(names, vec!["Eevee", "Pikachu"]);
    }

    #[test]
    fn sprite_lookup_goes_through_catalog() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("025.png"), b"img").unwrap();
        let mut api = PokeboxApi::new(
            InMemoryStore::new(),
            IdentifierIndex::new(),
            SpriteCatalog::new(temp.path()),
            PokeboxPaths::new(temp.path()),
        );

        let sprite = api.sprite("025").unwrap().unwrap();
        assert_eq!(sprite.bytes, b"img".to_vec());
        assert!(api.sprite("133").unwrap().is_none());
        assert_eq!(api.sprite_paths(&["025"]).unwrap().sprite_paths.len(), 1);
    }
}
