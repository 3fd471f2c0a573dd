//! Domain model for the writer/reader note pair.
//!
//! # Responsibility
//! - Define the canonical note record shared by the writer and reader views.
//!
//! # Invariants
//! - A note is identified by an integer `NoteId`, unique within a collection.
//! - Only the message is mutable; identity never changes after creation.

pub mod note;
