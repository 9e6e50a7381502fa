#![allow(dead_code)]

use serde_json::{Value, json};
use statevault::NamedCheckpoint;

/// A state snapshot with some nesting, arrays, and unicode to exercise the
/// payload codec.
pub fn sample_state() -> Value {
    json!({
        "step": 3,
        "messages": [
            {"role": "user", "content": "hello"},
            {"role": "assistant", "content": "hi, how can I help? ✓"}
        ],
        "scratchpad": {"notes": null, "visited": [1, 2, 3]}
    })
}

pub fn sample_config() -> Value {
    json!({"model": "small", "temperature": 0.2})
}

/// Payload without config, at a fixed timestamp.
pub fn named(agent_id: &str, name: &str, created_at: i64) -> NamedCheckpoint {
    NamedCheckpoint::new(agent_id, name, &sample_state(), created_at)
        .expect("sample state is serializable")
}

/// Payload with the sample config attached.
pub fn named_with_config(agent_id: &str, name: &str, created_at: i64) -> NamedCheckpoint {
    named(agent_id, name, created_at)
        .with_config(&sample_config())
        .expect("sample config is serializable")
}
