/*!
SQLite Checkpoint Store

This module provides the `SqliteStore` async implementation of the
`CheckpointStore` trait against an embedded single-file database.

## Behavior

- Payloads are encoded/decoded through the shared codec (see `codec`), so
  SQLite applies the same JSON semantics as the client/server backends.
- `connect` creates the database file if it does not exist; the backing
  table is created by `ensure_schema`, not on connect.
- The backend-native key is SQLite's 64-bit rowid; it is rendered as text at
  the contract boundary.

## Design Goals

- Keep this module focused on database I/O; pure serialization lives in the
  codec module.
- One statement per operation: single-row autocommit insert, single-row
  primary-key lookup, one projection query for listing.

## Database Schema

```sql
CREATE TABLE IF NOT EXISTS AgentState (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    agentId   TEXT NOT NULL,
    name      TEXT NOT NULL,
    config    TEXT NOT NULL,
    state     TEXT NOT NULL,
    createdAt INTEGER NOT NULL
)
```
*/

use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use tracing::instrument;

use crate::checkpoint::{CheckpointListItem, NamedCheckpoint, StoredCheckpoint};
use crate::codec;
use crate::error::{Result, StoreError};
use crate::store::CheckpointStore;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS AgentState (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    agentId   TEXT NOT NULL,
    name      TEXT NOT NULL,
    config    TEXT NOT NULL,
    state     TEXT NOT NULL,
    createdAt INTEGER NOT NULL
)
"#;

/// SQLite-backed checkpoint store.
pub struct SqliteStore {
    /// Shared connection pool; owned exclusively by this store instance and
    /// released when the store is dropped.
    pool: Arc<SqlitePool>,
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore").finish()
    }
}

impl SqliteStore {
    /// Open (or create) the database file at `file_path`.
    ///
    /// Returns a configured `SqliteStore`; call
    /// [`ensure_schema`](CheckpointStore::ensure_schema) before first use.
    #[must_use = "store must be used to persist checkpoints"]
    #[instrument(skip(file_path))]
    pub async fn connect(file_path: &str) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(file_path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| StoreError::connectivity("connect", e))?;
        Ok(Self {
            pool: Arc::new(pool),
        })
    }
}

#[async_trait::async_trait]
impl CheckpointStore for SqliteStore {
    #[instrument(skip(self), err)]
    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE)
            .execute(&*self.pool)
            .await
            .map_err(|e| StoreError::Schema {
                message: format!("create AgentState: {e}"),
            })?;
        Ok(())
    }

    #[instrument(skip(self, checkpoint), err)]
    async fn store_checkpoint(&self, checkpoint: &NamedCheckpoint) -> Result<String> {
        let state_json = codec::encode(&checkpoint.state)?;
        let config_json = codec::encode_optional(checkpoint.config.as_ref())?;

        let result = sqlx::query(
            r#"
            INSERT INTO AgentState (agentId, name, config, state, createdAt)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&checkpoint.agent_id)
        .bind(&checkpoint.name)
        .bind(&config_json)
        .bind(&state_json)
        .bind(checkpoint.created_at)
        .execute(&*self.pool)
        .await
        .map_err(|e| StoreError::connectivity("insert checkpoint", e))?;

        Ok(result.last_insert_rowid().to_string())
    }

    #[instrument(skip(self), err)]
    async fn retrieve_checkpoint(&self, id: &str) -> Result<Option<StoredCheckpoint>> {
        // An id that never came from this backend cannot match a rowid.
        let key: i64 = match id.parse() {
            Ok(key) => key,
            Err(_) => return Ok(None),
        };

        let row_opt: Option<SqliteRow> = sqlx::query(
            r#"
            SELECT id, agentId, name, config, state, createdAt
            FROM AgentState
            WHERE id = ?1
            "#,
        )
        .bind(key)
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| StoreError::connectivity("select checkpoint", e))?;

        match row_opt {
            None => Ok(None),
            Some(row) => Ok(Some(row_to_checkpoint(&row)?)),
        }
    }

    #[instrument(skip(self), err)]
    async fn list_checkpoints(&self) -> Result<Vec<CheckpointListItem>> {
        let rows = sqlx::query(
            r#"
            SELECT id, agentId, name, createdAt
            FROM AgentState
            ORDER BY createdAt DESC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| StoreError::connectivity("list checkpoints", e))?;

        Ok(rows
            .into_iter()
            .map(|row| CheckpointListItem {
                id: row.get::<i64, _>("id").to_string(),
                agent_id: row.get("agentId"),
                name: row.get("name"),
                created_at: row.get("createdAt"),
            })
            .collect())
    }
}

/// Convert a full row into a `StoredCheckpoint`, decoding payload columns.
fn row_to_checkpoint(row: &SqliteRow) -> Result<StoredCheckpoint> {
    let id = row.get::<i64, _>("id").to_string();
    let config_text: String = row.get("config");
    let state_text: String = row.get("state");

    Ok(StoredCheckpoint {
        config: codec::decode_optional(&config_text, "config", &id)?,
        state: codec::decode(&state_text, "state", &id)?,
        agent_id: row.get("agentId"),
        name: row.get("name"),
        created_at: row.get("createdAt"),
        id,
    })
}
