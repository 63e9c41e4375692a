use pretty_assertions::assert_eq;
use stagehand_types::{
    FieldValue, Key, KeySegment, MetaEntity, MetaOperation, OperationResult, TransactionResponse,
};

fn sample_entity() -> MetaEntity {
    MetaEntity::with_values(
        Some(Key::top_level(KeySegment::id("User", 9))),
        vec![
            FieldValue::string(1, "alice@example.com"),
            FieldValue::boolean(2, true),
        ],
    )
}

// ── Variant shape ────────────────────────────────────────────────

#[test]
fn is_mutation() {
    let create = MetaOperation::Create {
        kind_name: "User".to_string(),
        entity: MetaEntity::new(None),
    };
    let get = MetaOperation::Get {
        key: Key::top_level(KeySegment::id("User", 9)),
    };
    let list = MetaOperation::List {
        kind_name: "User".to_string(),
        limit: Some(10),
    };
    assert!(create.is_mutation());
    assert!(!get.is_mutation());
    assert!(!list.is_mutation());
    assert!(!MetaOperation::Unknown.is_mutation());
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serde_round_trip_preserves_variant_and_payload() {
    let ops = vec![
        MetaOperation::Create {
            kind_name: "User".to_string(),
            entity: MetaEntity::new(None),
        },
        MetaOperation::Update {
            entity: sample_entity(),
        },
        MetaOperation::Delete {
            key: Key::top_level(KeySegment::id("User", 9)),
        },
        MetaOperation::Get {
            key: Key::top_level(KeySegment::name("User", "alice")),
        },
        MetaOperation::List {
            kind_name: "User".to_string(),
            limit: None,
        },
    ];
    for op in ops {
        let json = serde_json::to_string(&op).unwrap();
        let parsed: MetaOperation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, op, "round-trip failed for {json}");
    }
}

#[test]
fn serde_uses_adjacent_op_tag() {
    let op = MetaOperation::Delete {
        key: Key::top_level(KeySegment::id("User", 9)),
    };
    let json = serde_json::to_value(&op).unwrap();
    assert_eq!(json["op"], "delete");
    assert!(json["data"]["key"].is_object());
}

#[test]
fn unrecognized_op_tag_deserializes_to_unknown() {
    let parsed: MetaOperation =
        serde_json::from_str(r#"{"op":"compact_shards"}"#).unwrap();
    assert_eq!(parsed, MetaOperation::Unknown);
}

#[test]
fn response_serde_round_trip() {
    let response = TransactionResponse::new(vec![
        OperationResult::with_entity(sample_entity()),
        OperationResult::default(),
    ]);
    let json = serde_json::to_string(&response).unwrap();
    let parsed: TransactionResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, response);
}
