//! Backend implementations of the [`CheckpointStore`](crate::store::CheckpointStore)
//! contract. Each module is a leaf: there is no dependency chain between
//! backends, and all payload encoding goes through [`crate::codec`].

#[cfg(feature = "mysql")]
pub mod mysql;
#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;
