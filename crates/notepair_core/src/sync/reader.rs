//! Reader role: read-only mirror of the persisted collection.
//!
//! # Responsibility
//! - Poll the store and replace the displayed snapshot in full.
//!
//! # Invariants
//! - The reader never writes to the store.
//! - Each load is a full redraw of the snapshot, no diffing.
//! - The snapshot reflects the last persisted value, never the writer's
//!   live unsaved edits.

use super::{codec, now_epoch_ms, NOTES_KEY};
use crate::model::note::Note;
use crate::store::{KeyValueStore, StoreResult};
use log::debug;

/// Read-only view over the shared store. No mutating API exists here.
pub struct Reader<S: KeyValueStore> {
    store: S,
    snapshot: Vec<Note>,
    last_fetched_ms: Option<u64>,
}

impl<S: KeyValueStore> Reader<S> {
    /// Creates a reader with an empty snapshot; the first poll fills it.
    pub fn new(store: S) -> Self {
        Self {
            store,
            snapshot: Vec::new(),
            last_fetched_ms: None,
        }
    }

    /// Fetches the current persisted value and replaces the snapshot
    /// entirely. Absence and malformed content both yield an empty
    /// snapshot, not an error.
    ///
    /// # Side effects
    /// - Updates the last-fetched timestamp for user feedback.
    pub fn load_notes(&mut self) -> StoreResult<()> {
        let raw = self.store.get(NOTES_KEY)?;
        self.snapshot = codec::decode_notes(raw.as_deref());
        self.last_fetched_ms = Some(now_epoch_ms());
        debug!(
            "event=notes_fetch module=reader status=ok count={}",
            self.snapshot.len()
        );
        Ok(())
    }

    /// One elapsed refresh interval: re-fetch the snapshot.
    pub fn tick(&mut self) -> StoreResult<()> {
        self.load_notes()
    }

    /// Most recently fetched snapshot, in persisted order.
    pub fn notes(&self) -> &[Note] {
        &self.snapshot
    }

    /// Epoch-ms timestamp of the most recent fetch, if any.
    pub fn last_fetched_ms(&self) -> Option<u64> {
        self.last_fetched_ms
    }
}
