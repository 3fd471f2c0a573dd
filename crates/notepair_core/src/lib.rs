//! Core domain logic for the notepair writer/reader pair.
//! This crate is the single source of truth for the sync contract.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod store;
pub mod sync;
pub mod view;

pub use config::{ConfigError, UiConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{next_note_id, Note, NoteId};
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError, StoreResult};
pub use sync::{
    decode_notes, encode_notes, PeriodicTask, Reader, Writer, NOTES_KEY, SYNC_INTERVAL,
};
pub use view::{render_reader_page, render_writer_page};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
