//! # Pokebox Architecture
//!
//! Pokebox keeps a personal Pokémon collection in a plain CSV file. It is a
//! **UI-agnostic library** with a small CLI client; a windowed front end would
//! sit on the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns collection, identifier index, sprite catalog        │
//! │  - Saves after every mutation                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure operations on the in-memory collection              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, FileStore (CSV), InMemoryStore (tests)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Records
//!
//! A [`model::Record`] is a set of free-text fields following a fixed schema
//! ([`model::FIELDS`]). Nothing is validated or coerced: a level of `"fifty"`
//! is stored as typed. The `ID` field is the matching key for update and
//! delete but duplicates are allowed, and both operations act on every match.
//!
//! ## Data Root
//!
//! ```text
//! <root>/
//! ├── pokebox.json            # Optional configuration
//! ├── pokemon_collection.csv  # The collection (created on first load)
//! ├── pokemon_id_name.csv     # Identifier → name table, no header
//! └── sprites/<ID>.png        # Optional sprite per identifier
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`collection`]: The in-memory record list
//! - [`store`]: Storage abstraction and the CSV codec
//! - [`model`]: Schema and [`model::Record`]
//! - [`index`]: Identifier ↔ name reference table
//! - [`sprites`]: Sprite lookup with a bounded cache
//! - [`config`]: Configuration management
//! - [`init`]: Data root resolution and context wiring
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod logging;
pub mod model;
pub mod sprites;
pub mod store;
