/*!
The provider contract every backend implements.

One capability set, three concrete implementations selected by a tagged
configuration value. Callers hold a `Box<dyn CheckpointStore>` and never
branch on backend kind: identifiers are normalized to text, payloads cross
the boundary as JSON values, and listing order is identical everywhere.
*/

use async_trait::async_trait;

use crate::checkpoint::{CheckpointListItem, NamedCheckpoint, StoredCheckpoint};
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};

/// Append-only checkpoint storage against one relational backend.
///
/// Each operation is a single atomic statement against the backend's pool;
/// there is no session, no retry policy, and no cross-operation transaction.
/// The caller invokes [`ensure_schema`](CheckpointStore::ensure_schema) once
/// before first use.
#[async_trait]
pub trait CheckpointStore: Send + Sync {
    /// Idempotently create the backing table if it does not exist, using
    /// backend-native DDL. Safe to call repeatedly and concurrently with
    /// itself; never alters an existing table's shape. Failure is fatal to
    /// store initialization and propagates.
    async fn ensure_schema(&self) -> Result<()>;

    /// Insert one checkpoint row and return the backend-assigned primary key
    /// rendered as a string. Exactly one row is added; no other row is
    /// touched.
    async fn store_checkpoint(&self, checkpoint: &NamedCheckpoint) -> Result<String>;

    /// Look up a checkpoint by the exact identifier previously returned by
    /// [`store_checkpoint`](CheckpointStore::store_checkpoint). An id that
    /// does not parse as the backend's native key is "not found", not an
    /// error.
    async fn retrieve_checkpoint(&self, id: &str) -> Result<Option<StoredCheckpoint>>;

    /// All checkpoints as lightweight projections, ordered by `createdAt`
    /// descending. Never reads the payload columns.
    async fn list_checkpoints(&self) -> Result<Vec<CheckpointListItem>>;
}

/// Construct the store selected by `config`.
///
/// Validates the configuration, dials the backend, and returns the matching
/// implementation behind the common contract. Backends are compiled in by
/// cargo feature; a configuration naming a compiled-out backend fails with
/// [`StoreError::Config`](crate::error::StoreError::Config) rather than a
/// compile error at the call site.
///
/// # Examples
///
/// ```rust,no_run
/// use statevault::{CheckpointStore, StoreConfig, connect};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StoreConfig::Sqlite { file_path: "agent.db".into() };
/// let store = connect(&config).await?;
/// store.ensure_schema().await?;
/// # Ok(())
/// # }
/// ```
pub async fn connect(config: &StoreConfig) -> Result<Box<dyn CheckpointStore>> {
    config.validate()?;
    match config {
        #[cfg(feature = "sqlite")]
        StoreConfig::Sqlite { file_path } => Ok(Box::new(
            crate::backends::sqlite::SqliteStore::connect(file_path).await?,
        )),
        #[cfg(feature = "mysql")]
        StoreConfig::Mysql { connection_string } => Ok(Box::new(
            crate::backends::mysql::MySqlStore::connect(connection_string).await?,
        )),
        #[cfg(feature = "postgres")]
        StoreConfig::Postgres { connection_string } => Ok(Box::new(
            crate::backends::postgres::PostgresStore::connect(connection_string).await?,
        )),
        #[allow(unreachable_patterns)]
        other => Err(StoreError::Config {
            message: format!(
                "support for the `{}` backend was not compiled into this build",
                other.kind()
            ),
        }),
    }
}
