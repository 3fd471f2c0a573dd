//! Writer role: authoritative, mutating side of the note pair.
//!
//! # Responsibility
//! - Own the in-memory collection and allocate note ids.
//! - Flush full snapshots to the store, on mutation and on each tick.
//!
//! # Invariants
//! - Ids are unique within the collection at every point.
//! - `add_note`/`delete_note` flush immediately; `edit_note` does not.
//! - An in-place edit reaches the store only on the next tick, so it can
//!   be lost if the session ends inside the interval window. Accepted
//!   behavior, kept observable rather than papered over.

use super::{codec, now_epoch_ms, NOTES_KEY};
use crate::model::note::{next_note_id, Note, NoteId};
use crate::store::{KeyValueStore, StoreResult};
use log::{debug, info};

/// Editable note list persisting full snapshots to an injected store.
pub struct Writer<S: KeyValueStore> {
    store: S,
    notes: Vec<Note>,
    last_saved_ms: Option<u64>,
}

impl<S: KeyValueStore> Writer<S> {
    /// Opens a writer session: loads the persisted collection (empty when
    /// absent or malformed) and takes ownership of it.
    pub fn open(store: S) -> StoreResult<Self> {
        let mut writer = Self {
            store,
            notes: Vec::new(),
            last_saved_ms: None,
        };
        writer.load_notes()?;
        Ok(writer)
    }

    /// Appends a note under a freshly allocated id and flushes immediately.
    ///
    /// # Contract
    /// - The new id is `max(existing ids, default 0) + 1`.
    /// - Always succeeds apart from store transport failures.
    pub fn add_note(&mut self, initial_text: &str) -> StoreResult<NoteId> {
        let id = next_note_id(&self.notes);
        self.notes.push(Note::new(id, initial_text));
        info!("event=note_add module=writer status=ok id={id}");
        self.save_notes()?;
        Ok(id)
    }

    /// Removes the note with `id` and flushes immediately.
    ///
    /// Deleting an absent id is a silent no-op, not an error. Returns
    /// whether a note was actually removed.
    pub fn delete_note(&mut self, id: NoteId) -> StoreResult<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let removed = self.notes.len() != before;
        debug!("event=note_delete module=writer status=ok id={id} removed={removed}");
        self.save_notes()?;
        Ok(removed)
    }

    /// Updates a note's message in place. Does NOT flush; the change
    /// reaches the store on the next tick or mutation-triggered save.
    ///
    /// Returns whether a note with `id` exists.
    pub fn edit_note(&mut self, id: NoteId, new_text: &str) -> bool {
        match self.notes.iter_mut().find(|note| note.id == id) {
            Some(note) => {
                note.message = new_text.to_string();
                true
            }
            None => false,
        }
    }

    /// Serializes the current collection and overwrites the store value
    /// entirely (full-snapshot semantics, not incremental).
    ///
    /// # Side effects
    /// - Updates the last-saved timestamp for user feedback.
    pub fn save_notes(&mut self) -> StoreResult<()> {
        let encoded = codec::encode_notes(&self.notes);
        self.store.set(NOTES_KEY, &encoded)?;
        self.last_saved_ms = Some(now_epoch_ms());
        debug!(
            "event=notes_save module=writer status=ok count={}",
            self.notes.len()
        );
        Ok(())
    }

    /// Reloads the collection from the store, replacing in-memory state.
    ///
    /// Called once at session start; the writer is the sole producer of
    /// the persisted value afterwards.
    pub fn load_notes(&mut self) -> StoreResult<()> {
        let raw = self.store.get(NOTES_KEY)?;
        self.notes = codec::decode_notes(raw.as_deref());
        info!(
            "event=notes_load module=writer status=ok count={}",
            self.notes.len()
        );
        Ok(())
    }

    /// One elapsed save interval: flush the current collection.
    ///
    /// The periodic driver calls this on the wall clock; tests call it
    /// directly to drive time deterministically.
    pub fn tick(&mut self) -> StoreResult<()> {
        self.save_notes()
    }

    /// Current in-memory collection, in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Epoch-ms timestamp of the most recent flush, if any.
    pub fn last_saved_ms(&self) -> Option<u64> {
        self.last_saved_ms
    }
}
