//! Persistence capabilities shared by every stored record type.
//!
//! Adapters implement the four capability traits for a concrete record;
//! application code asks for `Repository<T>` (or a single capability) and
//! stays independent of the storage backend.

use async_trait::async_trait;

/// A record that can be stored through a repository.
pub trait Record: Clone + Send + Sync + 'static {
    /// Surrogate key assigned by storage.
    type Id: Copy + Send + Sync + std::fmt::Display + 'static;

    /// The client-writable part of the record.
    type Draft: Send + 'static;

    fn id(&self) -> Self::Id;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait Creatable<T: Record>: Send + Sync {
    /// Inserts a new row. Storage assigns the id and both timestamps.
    async fn create(&self, draft: T::Draft) -> Result<T, RepositoryError>;
}

#[async_trait]
pub trait Readable<T: Record>: Send + Sync {
    /// Loads the live (not soft-deleted) record with `id`.
    async fn get_by_id(&self, id: T::Id) -> Result<T, RepositoryError>;
}

#[async_trait]
pub trait Updatable<T: Record>: Send + Sync {
    /// Overwrites the writable fields of the live record with `id`.
    async fn update(&self, id: T::Id, draft: T::Draft) -> Result<T, RepositoryError>;
}

#[async_trait]
pub trait Deletable<T: Record>: Send + Sync {
    /// Soft-deletes `record`. Deleting an already deleted row is not an error.
    async fn delete(&self, record: &T) -> Result<(), RepositoryError>;
}

pub trait Repository<T: Record>:
    Creatable<T> + Readable<T> + Updatable<T> + Deletable<T>
{
}

impl<T, R> Repository<T> for R
where
    T: Record,
    R: Creatable<T> + Readable<T> + Updatable<T> + Deletable<T>,
{
}
