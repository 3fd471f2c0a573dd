//! Note domain model.
//!
//! # Responsibility
//! - Define the `{id, message}` record that is persisted and displayed.
//! - Provide id allocation over an existing collection.
//!
//! # Invariants
//! - `id` is unique within a collection at the time it is saved.
//! - A freshly allocated id is always `max(existing ids, default 0) + 1`.

use serde::{Deserialize, Serialize};

/// Stable integer identifier for one note within a collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = u64;

/// Canonical record for one note.
///
/// The wire shape is exactly `{"id": <int>, "message": <string>}`; the
/// presentation layers never participate in serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Collection-unique id, used to address edits and deletes.
    pub id: NoteId,
    /// Free-form note text. Mutable in place on the writer side.
    pub message: String,
}

impl Note {
    /// Creates a note with a caller-provided id.
    ///
    /// Id allocation is the collection's concern, see [`next_note_id`].
    pub fn new(id: NoteId, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}

/// Returns the next free id for a collection: `max(ids) + 1`, or `1` when
/// the collection is empty.
pub fn next_note_id(notes: &[Note]) -> NoteId {
    notes.iter().map(|note| note.id).max().unwrap_or(0) + 1
}
