//! # Statevault: Durable Checkpoints for Agent State
//!
//! Statevault persists named **checkpoints** (opaque, JSON-serializable
//! snapshots of an agent's runtime state and configuration) to a relational
//! store, and lets them be listed and retrieved later. One provider
//! contract, three interchangeable backends: embedded SQLite, and
//! client/server MySQL and PostgreSQL, all driven through `sqlx`.
//!
//! ## Core Concepts
//!
//! - **[`NamedCheckpoint`]**: the write-side payload (`agent_id`, `name`,
//!   opaque `state`, optional `config`, caller-supplied `created_at`)
//! - **[`CheckpointStore`]**: the four-operation provider contract
//! - **[`StoreConfig`]**: tagged backend selection consumed by [`connect`]
//! - **[`StoreError`]**: the shared failure taxonomy; "no such checkpoint"
//!   is an `Ok(None)`, never an error
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use serde_json::json;
//! use statevault::{CheckpointStore, NamedCheckpoint, StoreConfig, connect};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = connect(&StoreConfig::Sqlite {
//!     file_path: "agent.db".into(),
//! })
//! .await?;
//! store.ensure_schema().await?;
//!
//! let id = store
//!     .store_checkpoint(
//!         &NamedCheckpoint::now("agent-7", "before-tool-call", &json!({"count": 1}))?,
//!     )
//!     .await?;
//!
//! let restored = store.retrieve_checkpoint(&id).await?.expect("just stored");
//! assert_eq!(restored.state, json!({"count": 1}));
//!
//! for item in store.list_checkpoints().await? {
//!     println!("{} {} @ {}", item.id, item.name, item.created_at);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Guide
//!
//! - [`checkpoint`] - Data model and payload capture
//! - [`codec`] - Centralized JSON text encoding for payload columns
//! - [`config`] - Backend configuration and validation
//! - [`store`] - The provider contract and backend selection
//! - [`backends`] - The three `CheckpointStore` implementations
//! - [`error`] - Error taxonomy

pub mod backends;
pub mod checkpoint;
pub mod codec;
pub mod config;
pub mod error;
pub mod store;

pub use checkpoint::{CheckpointListItem, NamedCheckpoint, StoredCheckpoint};
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use store::{CheckpointStore, connect};

#[cfg(feature = "mysql")]
pub use backends::mysql::MySqlStore;
#[cfg(feature = "postgres")]
pub use backends::postgres::PostgresStore;
#[cfg(feature = "sqlite")]
pub use backends::sqlite::SqliteStore;
