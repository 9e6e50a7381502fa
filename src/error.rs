//! Error taxonomy shared by every storage backend.
//!
//! Callers must be able to tell "no such checkpoint" (a quiet `Ok(None)`)
//! apart from "the store is broken" (a loud [`StoreError`]). Nothing in this
//! crate retries or downgrades an error internally.

use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced by [`CheckpointStore`](crate::store::CheckpointStore)
/// implementations and by payload/configuration construction.
#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    /// The backend is unreachable, rejected authentication, or failed while
    /// executing a statement.
    #[error("backend unreachable: {message}")]
    #[diagnostic(
        code(statevault::store::connectivity),
        help("Check that the database is running and the connection parameters are correct.")
    )]
    Connectivity { message: String },

    /// A checkpoint payload could not be encoded as JSON text. Raised before
    /// any statement executes; the operation has no side effect.
    #[error("checkpoint payload is not JSON-serializable: {source}")]
    #[diagnostic(
        code(statevault::store::serialization),
        help("state/config must be representable as plain JSON (string keys, finite numbers).")
    )]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Stored text failed to parse back as JSON. This indicates data
    /// corruption in the backing table, not a missing row.
    #[error("stored {column} of checkpoint {id} is not valid JSON: {source}")]
    #[diagnostic(
        code(statevault::store::deserialization),
        help("The row is corrupt; inspect the backing table directly.")
    )]
    Deserialization {
        column: &'static str,
        id: String,
        #[source]
        source: serde_json::Error,
    },

    /// Creating the backing table failed. Fatal to store initialization;
    /// every other operation assumes the table exists.
    #[error("schema creation failed: {message}")]
    #[diagnostic(code(statevault::store::schema))]
    Schema { message: String },

    /// The store configuration is invalid, or it names a backend this build
    /// was compiled without.
    #[error("invalid store configuration: {message}")]
    #[diagnostic(
        code(statevault::store::config),
        help("See StoreConfig for the accepted shapes and the crate features for enabled backends.")
    )]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Map a transport/query failure into [`StoreError::Connectivity`],
    /// prefixing the statement context the same way each backend does.
    pub(crate) fn connectivity(context: &str, err: impl std::fmt::Display) -> Self {
        StoreError::Connectivity {
            message: format!("{context}: {err}"),
        }
    }
}
