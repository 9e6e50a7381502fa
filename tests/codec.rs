//! Payload codec tests: the JSON text discipline all three backends share.

#[macro_use]
extern crate proptest;

use proptest::prelude::{Strategy, prop};
use serde_json::{Value, json};
use statevault::codec;
use statevault::StoreError;

#[test]
fn absent_config_encodes_as_null_text() {
    assert_eq!(codec::encode_optional(None).unwrap(), "null");
}

#[test]
fn null_text_decodes_as_absent_config() {
    assert_eq!(codec::decode_optional("null", "config", "1").unwrap(), None);
}

#[test]
fn explicit_null_config_also_reads_back_as_absent() {
    // A caller-supplied JSON null and a missing config are indistinguishable
    // once stored; both mean "no config".
    let text = codec::encode_optional(Some(&Value::Null)).unwrap();
    assert_eq!(codec::decode_optional(&text, "config", "1").unwrap(), None);
}

#[test]
fn corrupt_text_is_a_deserialization_error() {
    let err = codec::decode("{not json", "state", "7").unwrap_err();
    match err {
        StoreError::Deserialization { column, id, .. } => {
            assert_eq!(column, "state");
            assert_eq!(id, "7");
        }
        other => panic!("expected Deserialization, got {other:?}"),
    }
}

#[test]
fn nested_payload_roundtrip() {
    let value = json!({
        "messages": [{"role": "user", "content": "héllo"}],
        "counts": {"a": 1, "b": [true, null, 2.5]}
    });
    let text = codec::encode(&value).unwrap();
    assert_eq!(codec::decode(&text, "state", "1").unwrap(), value);
}

/// Generate arbitrary JSON values: primitives at the leaves, arrays and
/// string-keyed objects above them.
fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        proptest::strategy::Just(Value::Null),
        proptest::prelude::any::<bool>().prop_map(Value::Bool),
        proptest::prelude::any::<i64>().prop_map(|n| json!(n)),
        (-1.0e9_f64..1.0e9_f64).prop_map(|f| json!(f)),
        "[a-zA-Z0-9 _-]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::hash_map("[a-z]{1,8}", inner, 0..6)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_any_json_state_roundtrips(value in json_value_strategy()) {
        let text = codec::encode(&value).unwrap();
        let decoded = codec::decode(&text, "state", "1").unwrap();
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn prop_any_json_config_roundtrips_unless_null(value in json_value_strategy()) {
        let text = codec::encode_optional(Some(&value)).unwrap();
        let decoded = codec::decode_optional(&text, "config", "1").unwrap();
        if value.is_null() {
            prop_assert_eq!(decoded, None);
        } else {
            prop_assert_eq!(decoded, Some(value));
        }
    }
}
