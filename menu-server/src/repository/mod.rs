//! Repository Module
//!
//! Injectable storage seam between business logic and whatever holds
//! the data. The in-memory implementation stands in for a real store;
//! swapping it out must not touch the ordering logic.

mod memory;

pub use memory::InMemoryRepository;

use async_trait::async_trait;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Stale write rejected by optimistic concurrency check
    #[error("Stale write for {id}: expected version {expected}, current {current}")]
    Conflict { id: String, expected: u64, current: u64 },
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Stored entity with a stable string id
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// Common repository trait for basic CRUD
///
/// Plain `upsert` is last-writer-wins; callers that must not clobber
/// concurrent writes use the versioned variant and retry on
/// [`RepoError::Conflict`].
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Fetch one entity by id
    async fn get(&self, id: &str) -> Option<T>;

    /// Fetch one entity together with its current version, as a single
    /// atomic read. Record and version must come from the same point in
    /// time, otherwise a write landing between the two reads would slip
    /// past a later [`upsert_versioned`] check.
    async fn get_versioned(&self, id: &str) -> Option<(T, u64)>;

    /// Full snapshot in insertion order
    async fn list(&self) -> Vec<T>;

    /// Insert or replace (last-writer-wins); returns the new version
    async fn upsert(&self, entity: T) -> u64;

    /// Insert or replace only if the stored version still matches
    async fn upsert_versioned(&self, entity: T, expected: u64) -> RepoResult<u64>;

    /// Remove by id; false when absent
    async fn delete(&self, id: &str) -> bool;
}

impl Entity for shared::models::MenuItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for shared::order::Order {
    fn id(&self) -> &str {
        &self.id
    }
}
