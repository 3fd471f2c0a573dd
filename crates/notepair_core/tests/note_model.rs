use notepair_core::{decode_notes, encode_notes, next_note_id, Note};

#[test]
fn note_new_sets_fields() {
    let note = Note::new(7, "hello");
    assert_eq!(note.id, 7);
    assert_eq!(note.message, "hello");
}

#[test]
fn next_id_is_one_for_empty_collection() {
    assert_eq!(next_note_id(&[]), 1);
}

#[test]
fn next_id_is_max_plus_one_even_with_gaps() {
    let notes = vec![Note::new(1, "a"), Note::new(5, "b"), Note::new(3, "c")];
    assert_eq!(next_note_id(&notes), 6);
}

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let note = Note::new(2, "world");

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], 2);
    assert_eq!(json["message"], "world");

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn encode_decode_roundtrip_preserves_ids_and_messages() {
    let notes = vec![Note::new(1, "first"), Note::new(2, "second line\nwith break")];

    let encoded = encode_notes(&notes);
    let decoded = decode_notes(Some(&encoded));

    assert_eq!(decoded, notes);
}

#[test]
fn encoding_is_deterministic() {
    let notes = vec![Note::new(1, "same"), Note::new(2, "thing")];
    assert_eq!(encode_notes(&notes), encode_notes(&notes));
}

#[test]
fn decode_of_absent_value_is_empty() {
    assert!(decode_notes(None).is_empty());
}

#[test]
fn decode_of_malformed_value_is_empty_not_an_error() {
    assert!(decode_notes(Some("not json")).is_empty());
    assert!(decode_notes(Some("{\"id\":1}")).is_empty());
    assert!(decode_notes(Some("")).is_empty());
}

#[test]
fn decode_accepts_the_original_wire_shape() {
    let decoded = decode_notes(Some(r#"[{"id":1,"message":"hello"},{"id":2,"message":"world"}]"#));
    assert_eq!(
        decoded,
        vec![Note::new(1, "hello"), Note::new(2, "world")]
    );
}
