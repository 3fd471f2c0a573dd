//! Writer/reader synchronization over the shared store.
//!
//! # Responsibility
//! - Own the persisted-collection contract: one JSON array under one key.
//! - Provide the writer role (authoritative, mutating) and the reader role
//!   (snapshot-only) plus the periodic driver both roles poll with.
//!
//! # Invariants
//! - `NOTES_KEY` is the only key either role touches.
//! - The writer is the sole producer of the persisted value; the reader
//!   only observes snapshots.
//! - Absent or malformed persisted content degrades to an empty collection,
//!   never to an error.

use std::time::{SystemTime, UNIX_EPOCH};

mod codec;
mod poll;
mod reader;
mod writer;

pub use codec::{decode_notes, encode_notes};
pub use poll::{PeriodicTask, SYNC_INTERVAL};
pub use reader::Reader;
pub use writer::Writer;

/// Fixed store key holding the serialized note collection.
pub const NOTES_KEY: &str = "notes";

/// Current wall-clock time as Unix epoch milliseconds.
///
/// Used for the last-saved/last-fetched feedback timestamps only; sync
/// correctness never depends on it.
pub(crate) fn now_epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
