use pretty_assertions::assert_eq;
use stagehand_types::{Ident, Key, KeyError, KeySegment};

fn user_key(id: i64) -> Key {
    Key::top_level(KeySegment::id("User", id))
}

// ── Encoding ─────────────────────────────────────────────────────

#[test]
fn encode_single_id_segment() {
    assert_eq!(user_key(42).encode().unwrap(), "User:42");
}

#[test]
fn encode_single_name_segment() {
    let key = Key::top_level(KeySegment::name("User", "bq0avu3b9mg0090jcip0"));
    assert_eq!(key.encode().unwrap(), "User:bq0avu3b9mg0090jcip0");
}

#[test]
fn encode_nested_path() {
    let key = Key::top_level(KeySegment::name("Project", "infra"))
        .child(KeySegment::id("Deployment", 7));
    assert_eq!(key.encode().unwrap(), "Project:infra/Deployment:7");
}

#[test]
fn encode_incomplete_final_segment() {
    let key = Key::top_level(KeySegment::name("Project", "infra"))
        .child(KeySegment::incomplete("Deployment"));
    assert_eq!(key.encode().unwrap(), "Project:infra/Deployment:");
}

#[test]
fn encode_rejects_empty_key() {
    let err = Key::new(vec![]).encode().unwrap_err();
    assert!(matches!(err, KeyError::InvalidKey(_)));
}

#[test]
fn encode_rejects_incomplete_non_final_segment() {
    let key = Key::top_level(KeySegment::incomplete("Project"))
        .child(KeySegment::id("Deployment", 7));
    let err = key.encode().unwrap_err();
    assert!(matches!(err, KeyError::InvalidKey(_)));
}

#[test]
fn encode_rejects_empty_kind() {
    let err = Key::top_level(KeySegment::id("", 1)).encode().unwrap_err();
    assert!(matches!(err, KeyError::InvalidKey(_)));
}

#[test]
fn encode_rejects_separator_in_kind() {
    let err = Key::top_level(KeySegment::id("Us/er", 1)).encode().unwrap_err();
    assert!(matches!(err, KeyError::InvalidKey(_)));
}

#[test]
fn encode_rejects_separator_in_name() {
    let err = Key::top_level(KeySegment::name("User", "a:b"))
        .encode()
        .unwrap_err();
    assert!(matches!(err, KeyError::InvalidKey(_)));
}

// ── Decoding ─────────────────────────────────────────────────────

#[test]
fn decode_id_segment() {
    let key = Key::decode("User:42").unwrap();
    assert_eq!(key, user_key(42));
}

#[test]
fn decode_name_segment() {
    let key = Key::decode("User:alice").unwrap();
    assert_eq!(
        key.segments[0].ident,
        Some(Ident::Name("alice".to_string()))
    );
}

#[test]
fn decode_negative_id() {
    let key = Key::decode("Counter:-5").unwrap();
    assert_eq!(key.segments[0].ident, Some(Ident::Id(-5)));
}

#[test]
fn decode_zero_padded_identifier_stays_a_name() {
    let key = Key::decode("User:007").unwrap();
    assert_eq!(key.segments[0].ident, Some(Ident::Name("007".to_string())));
    assert_eq!(key.encode().unwrap(), "User:007");
}

#[test]
fn decode_nested_path() {
    let key = Key::decode("Project:infra/Deployment:7").unwrap();
    assert_eq!(key.segments.len(), 2);
    assert_eq!(key.segments[1], KeySegment::id("Deployment", 7));
}

#[test]
fn decode_incomplete_final_segment() {
    let key = Key::decode("Deployment:").unwrap();
    assert_eq!(key.segments[0], KeySegment::incomplete("Deployment"));
    assert!(!key.is_complete());
}

#[test]
fn decode_rejects_empty_input() {
    assert!(matches!(
        Key::decode("").unwrap_err(),
        KeyError::MalformedKey(_)
    ));
}

#[test]
fn decode_rejects_segment_without_ident_separator() {
    assert!(matches!(
        Key::decode("User").unwrap_err(),
        KeyError::MalformedKey(_)
    ));
    assert!(matches!(
        Key::decode("Project:1/Deployment").unwrap_err(),
        KeyError::MalformedKey(_)
    ));
}

#[test]
fn decode_rejects_empty_kind() {
    assert!(matches!(
        Key::decode(":42").unwrap_err(),
        KeyError::MalformedKey(_)
    ));
}

#[test]
fn decode_rejects_incomplete_non_final_segment() {
    assert!(matches!(
        Key::decode("Project:/Deployment:7").unwrap_err(),
        KeyError::MalformedKey(_)
    ));
}

#[test]
fn decode_rejects_doubled_ident_separator() {
    assert!(matches!(
        Key::decode("User:alice:extra").unwrap_err(),
        KeyError::MalformedKey(_)
    ));
}

#[test]
fn from_str_parses() {
    let key: Key = "User:42".parse().unwrap();
    assert_eq!(key, user_key(42));
}

// ── Round-trip ───────────────────────────────────────────────────

#[test]
fn round_trip_well_formed_keys() {
    let keys = vec![
        user_key(1),
        Key::top_level(KeySegment::name("User", "alice")),
        Key::top_level(KeySegment::name("Project", "infra"))
            .child(KeySegment::id("Deployment", 7))
            .child(KeySegment::name("Replica", "eu-west")),
        Key::top_level(KeySegment::name("Project", "infra"))
            .child(KeySegment::incomplete("Deployment")),
    ];
    for key in keys {
        let encoded = key.encode().unwrap();
        assert_eq!(Key::decode(&encoded).unwrap(), key, "for {encoded:?}");
    }
}

// ── Accessors ────────────────────────────────────────────────────

#[test]
fn last_kind_of_nested_key() {
    let key = Key::decode("Project:infra/Deployment:7").unwrap();
    assert_eq!(key.last_kind(), Some("Deployment"));
}

#[test]
fn last_kind_of_empty_key() {
    assert_eq!(Key::new(vec![]).last_kind(), None);
}

#[test]
fn prettify_uses_identifier_when_assigned() {
    assert_eq!(user_key(42).prettify(), "42");
    let named = Key::top_level(KeySegment::name("User", "alice"));
    assert_eq!(named.prettify(), "alice");
}

#[test]
fn prettify_falls_back_to_kind_when_unassigned() {
    let key = Key::top_level(KeySegment::incomplete("User"));
    assert_eq!(key.prettify(), "User");
}

#[test]
fn is_complete() {
    assert!(user_key(1).is_complete());
    assert!(!Key::top_level(KeySegment::incomplete("User")).is_complete());
    assert!(!Key::new(vec![]).is_complete());
}
