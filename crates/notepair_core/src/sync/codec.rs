//! Persisted-collection encoding.
//!
//! # Responsibility
//! - Serialize the note collection to the single-value JSON wire shape.
//! - Decode store snapshots, degrading to empty on absence or damage.
//!
//! # Invariants
//! - Encoding is deterministic: equal collections encode to equal strings.
//! - Decoding never returns an error; malformed text yields `[]` plus a
//!   warn-level log event.

use crate::model::note::Note;
use log::warn;

/// Encodes the full collection as one JSON array string.
pub fn encode_notes(notes: &[Note]) -> String {
    // Plain integers and strings; JSON encoding cannot fail on this shape.
    serde_json::to_string(notes).expect("note collection encodes as JSON")
}

/// Decodes a store snapshot into a note collection.
///
/// `None` (absent key) and malformed text both decode to an empty
/// collection; the malformed case is logged and otherwise swallowed.
pub fn decode_notes(raw: Option<&str>) -> Vec<Note> {
    let Some(text) = raw else {
        return Vec::new();
    };

    match serde_json::from_str(text) {
        Ok(notes) => notes,
        Err(err) => {
            warn!(
                "event=notes_decode module=sync status=malformed len={} error={}",
                text.len(),
                err
            );
            Vec::new()
        }
    }
}
