//! Storage gateway for the watchlist collection.
//!
//! Every database round trip in the service goes through [`MovieStore`].

mod sql;

#[cfg(test)]
mod memory;

use async_trait::async_trait;

pub use sql::SqlStore;

#[cfg(test)]
pub use memory::MemoryStore;

use crate::models::Movie;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),
    #[error("stored document {id} is not a JSON object")]
    Corrupt { id: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Persists `movie` under a freshly assigned id and returns that id.
    /// Any id already present on `movie` is ignored.
    async fn insert(&self, movie: &Movie) -> StoreResult<String>;

    /// Sets `watched` on the matching record. Returns the number of records
    /// matched; zero is not an error.
    async fn mark_watched(&self, id: &str) -> StoreResult<u64>;

    /// Removes the matching record. Returns the number removed; zero is not
    /// an error.
    async fn delete(&self, id: &str) -> StoreResult<u64>;

    async fn delete_all(&self) -> StoreResult<u64>;

    /// Every stored record, oldest first.
    async fn list_all(&self) -> StoreResult<Vec<Movie>>;
}
