// Storage layer for paintings

pub mod mongo;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::models::Painting;

pub use mongo::MongoPaintingStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to insert painting: {0}")]
    Insert(String),

    #[error("failed to read paintings: {0}")]
    Read(String),

    #[error("failed to decode painting document: {0}")]
    Decode(String),

    #[error("store returned a non-ObjectId identifier: {0}")]
    UnexpectedId(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence seam for the handlers.
///
/// Implementations must be safe to share across concurrently running
/// requests; no ordering is promised between a concurrent insert and
/// `find_all`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaintingStore: Send + Sync {
    /// Insert one painting and return the identifier the store assigned
    async fn insert(&self, painting: Painting) -> StorageResult<ObjectId>;

    /// Every stored painting in the store's natural order
    async fn find_all(&self) -> StorageResult<Vec<Painting>>;
}
