use notepair_core::{KeyValueStore, MemoryStore, Note, Reader, Writer, NOTES_KEY};
use std::sync::Arc;

#[test]
fn reader_starts_with_empty_snapshot_until_first_poll() {
    let store = Arc::new(MemoryStore::new());
    store
        .set(NOTES_KEY, r#"[{"id":1,"message":"waiting"}]"#)
        .unwrap();

    let mut reader = Reader::new(Arc::clone(&store));
    assert!(reader.notes().is_empty());
    assert_eq!(reader.last_fetched_ms(), None);

    reader.tick().unwrap();
    assert_eq!(reader.notes(), &[Note::new(1, "waiting")]);
    assert!(reader.last_fetched_ms().is_some());
}

#[test]
fn absent_key_reads_as_empty_snapshot() {
    let store = Arc::new(MemoryStore::new());
    let mut reader = Reader::new(store);
    reader.load_notes().unwrap();
    assert!(reader.notes().is_empty());
}

#[test]
fn malformed_value_reads_as_empty_snapshot_not_an_error() {
    let store = Arc::new(MemoryStore::new());
    store.set(NOTES_KEY, "not json").unwrap();

    let mut reader = Reader::new(store);
    reader.load_notes().unwrap();
    assert!(reader.notes().is_empty());
}

#[test]
fn snapshot_is_replaced_in_full_each_poll() {
    let store = Arc::new(MemoryStore::new());
    let mut writer = Writer::open(Arc::clone(&store)).unwrap();
    let mut reader = Reader::new(Arc::clone(&store));

    writer.add_note("a").unwrap();
    writer.add_note("b").unwrap();
    reader.tick().unwrap();
    assert_eq!(reader.notes().len(), 2);

    writer.delete_note(1).unwrap();
    reader.tick().unwrap();
    assert_eq!(reader.notes(), &[Note::new(2, "b")]);
}

#[test]
fn reader_sees_persisted_value_not_live_unsaved_edit() {
    let store = Arc::new(MemoryStore::new());
    let mut writer = Writer::open(Arc::clone(&store)).unwrap();
    let mut reader = Reader::new(Arc::clone(&store));

    writer.add_note("published").unwrap();
    reader.tick().unwrap();
    assert_eq!(reader.notes()[0].message, "published");

    // In-place edit has not been flushed yet; polls keep showing the last
    // persisted value until the writer's next periodic save.
    writer.edit_note(1, "unsaved draft");
    reader.tick().unwrap();
    assert_eq!(reader.notes()[0].message, "published");

    writer.tick().unwrap();
    reader.tick().unwrap();
    assert_eq!(reader.notes()[0].message, "unsaved draft");
}

#[test]
fn last_writer_wins_when_roles_share_a_store() {
    let store = Arc::new(MemoryStore::new());
    let mut writer = Writer::open(Arc::clone(&store)).unwrap();
    let mut reader = Reader::new(Arc::clone(&store));

    writer.add_note("v1").unwrap();
    store
        .set(NOTES_KEY, r#"[{"id":1,"message":"external"}]"#)
        .unwrap();
    reader.tick().unwrap();
    assert_eq!(reader.notes()[0].message, "external");

    // The writer's next flush overwrites the external value in full.
    writer.tick().unwrap();
    reader.tick().unwrap();
    assert_eq!(reader.notes()[0].message, "v1");
}
