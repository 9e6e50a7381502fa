//! Data-model construction tests: payload capture and typed decode.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::json;
use statevault::{NamedCheckpoint, StoredCheckpoint, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct AgentScratchpad {
    step: u32,
    notes: Vec<String>,
}

#[test]
fn new_captures_typed_state_as_json() {
    let state = AgentScratchpad {
        step: 3,
        notes: vec!["visited".into()],
    };
    let checkpoint = NamedCheckpoint::new("a1", "typed", &state, 1_000).unwrap();
    assert_eq!(checkpoint.state, json!({"step": 3, "notes": ["visited"]}));
    assert_eq!(checkpoint.config, None);
}

#[test]
fn with_config_attaches_serialized_config() {
    let checkpoint = NamedCheckpoint::new("a1", "cfg", &json!({"x": 1}), 1_000)
        .unwrap()
        .with_config(&json!({"temperature": 0.2}))
        .unwrap();
    assert_eq!(checkpoint.config, Some(json!({"temperature": 0.2})));
}

#[test]
fn now_stamps_a_millisecond_timestamp() {
    let checkpoint = NamedCheckpoint::now("a1", "stamped", &json!({})).unwrap();
    // Sanity bound: later than 2020-01-01 in milliseconds.
    assert!(checkpoint.created_at > 1_577_836_800_000);
}

#[test]
fn unserializable_state_is_a_serialization_error() {
    // Maps with non-string keys cannot be represented as JSON objects.
    let mut state: HashMap<(u8, u8), u8> = HashMap::new();
    state.insert((1, 2), 3);
    let err = NamedCheckpoint::new("a1", "bad", &state, 1_000).unwrap_err();
    assert!(matches!(err, StoreError::Serialization { .. }));
}

#[test]
fn unserializable_config_is_a_serialization_error() {
    let mut config: HashMap<(u8, u8), u8> = HashMap::new();
    config.insert((1, 2), 3);
    let err = NamedCheckpoint::new("a1", "bad", &json!({}), 1_000)
        .unwrap()
        .with_config(&config)
        .unwrap_err();
    assert!(matches!(err, StoreError::Serialization { .. }));
}

#[test]
fn stored_checkpoint_decodes_typed_views() {
    let stored = StoredCheckpoint {
        id: "1".into(),
        agent_id: "a1".into(),
        name: "typed".into(),
        config: Some(json!({"temperature": 0.2})),
        state: json!({"step": 3, "notes": []}),
        created_at: 1_000,
    };

    let state: AgentScratchpad = stored.state_as().unwrap();
    assert_eq!(state.step, 3);

    #[derive(Deserialize)]
    struct Config {
        temperature: f64,
    }
    let config: Option<Config> = stored.config_as().unwrap();
    assert!((config.unwrap().temperature - 0.2).abs() < f64::EPSILON);
}

#[test]
fn typed_decode_mismatch_is_a_deserialization_error() {
    let stored = StoredCheckpoint {
        id: "1".into(),
        agent_id: "a1".into(),
        name: "mismatch".into(),
        config: None,
        state: json!("just a string"),
        created_at: 1_000,
    };
    let err = stored.state_as::<AgentScratchpad>().unwrap_err();
    assert!(matches!(
        err,
        StoreError::Deserialization { column: "state", .. }
    ));
}

#[test]
fn absent_config_decodes_to_none() {
    let stored = StoredCheckpoint {
        id: "1".into(),
        agent_id: "a1".into(),
        name: "bare".into(),
        config: None,
        state: json!({}),
        created_at: 1_000,
    };
    let config: Option<serde_json::Value> = stored.config_as().unwrap();
    assert_eq!(config, None);
}
