/*!
Data model for persisted checkpoints.

Three views of the same entity cross the storage boundary, chosen to avoid
transmitting redundant data:

- [`NamedCheckpoint`]: the write-side payload; carries no `id` because the
  backend has not assigned one yet.
- [`StoredCheckpoint`]: the full read-side record, with `state`/`config`
  deserialized back into JSON values.
- [`CheckpointListItem`]: the enumeration projection; deliberately has no
  payload fields so listing stays cheap.

`state` and `config` are opaque to the store: they are captured as
`serde_json::Value` here and encoded/decoded as JSON text by the
[`codec`](crate::codec) module. Identifiers are backend-assigned integers
normalized to `String` so callers never branch on backend kind.
*/

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, StoreError};

/// Write-side payload for [`store_checkpoint`](crate::store::CheckpointStore::store_checkpoint).
///
/// `created_at` is caller-supplied milliseconds since the Unix epoch; the
/// store never calls a clock.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use statevault::NamedCheckpoint;
///
/// let checkpoint = NamedCheckpoint::new("agent-7", "before-tool-call", &json!({"count": 1}), 1_000)
///     .unwrap()
///     .with_config(&json!({"temperature": 0.2}))
///     .unwrap();
///
/// assert_eq!(checkpoint.agent_id, "agent-7");
/// assert!(checkpoint.config.is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedCheckpoint {
    /// Owner/grouping key. Not unique, not a foreign key.
    pub agent_id: String,
    /// Caller-supplied label. Not unique.
    pub name: String,
    /// Optional opaque configuration snapshot.
    #[serde(default)]
    pub config: Option<Value>,
    /// Opaque state snapshot.
    pub state: Value,
    /// Milliseconds since the Unix epoch, supplied by the caller.
    pub created_at: i64,
}

impl NamedCheckpoint {
    /// Capture `state` from any serializable value.
    ///
    /// # Errors
    ///
    /// [`StoreError::Serialization`] when `state` cannot be represented as
    /// plain JSON (e.g. a map with non-string keys).
    pub fn new<S>(
        agent_id: impl Into<String>,
        name: impl Into<String>,
        state: &S,
        created_at: i64,
    ) -> Result<Self>
    where
        S: Serialize + ?Sized,
    {
        let state =
            serde_json::to_value(state).map_err(|source| StoreError::Serialization { source })?;
        Ok(Self {
            agent_id: agent_id.into(),
            name: name.into(),
            config: None,
            state,
            created_at,
        })
    }

    /// [`NamedCheckpoint::new`] stamped with the current wall-clock time.
    /// This is the only place the crate touches a clock, and it runs on the
    /// caller's side of the provider contract.
    pub fn now<S>(agent_id: impl Into<String>, name: impl Into<String>, state: &S) -> Result<Self>
    where
        S: Serialize + ?Sized,
    {
        Self::new(agent_id, name, state, Utc::now().timestamp_millis())
    }

    /// Attach a configuration snapshot.
    ///
    /// # Errors
    ///
    /// [`StoreError::Serialization`] when `config` cannot be represented as
    /// plain JSON.
    #[must_use = "with_config returns the updated checkpoint"]
    pub fn with_config<C>(mut self, config: &C) -> Result<Self>
    where
        C: Serialize + ?Sized,
    {
        let config =
            serde_json::to_value(config).map_err(|source| StoreError::Serialization { source })?;
        self.config = Some(config);
        Ok(self)
    }
}

/// Full read-side record returned by
/// [`retrieve_checkpoint`](crate::store::CheckpointStore::retrieve_checkpoint).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredCheckpoint {
    /// Backend-assigned surrogate key, normalized to text. Monotonically
    /// increasing per backend, never comparable across backends.
    pub id: String,
    pub agent_id: String,
    pub name: String,
    #[serde(default)]
    pub config: Option<Value>,
    pub state: Value,
    pub created_at: i64,
}

impl StoredCheckpoint {
    /// Decode `state` into a typed value.
    ///
    /// # Errors
    ///
    /// [`StoreError::Deserialization`] when the stored state does not match `T`.
    pub fn state_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T> {
        serde_json::from_value(self.state.clone()).map_err(|source| {
            StoreError::Deserialization {
                column: "state",
                id: self.id.clone(),
                source,
            }
        })
    }

    /// Decode `config` into a typed value, `None` when no config was stored.
    pub fn config_as<T: for<'de> Deserialize<'de>>(&self) -> Result<Option<T>> {
        match &self.config {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|source| StoreError::Deserialization {
                    column: "config",
                    id: self.id.clone(),
                    source,
                }),
        }
    }
}

/// Lightweight projection used for enumeration; carries no payload fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckpointListItem {
    pub id: String,
    pub agent_id: String,
    pub name: String,
    pub created_at: i64,
}
