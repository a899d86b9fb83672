//! In-memory repository
//!
//! A `RwLock<Vec<T>>` preserving insertion order, with per-record
//! version stamps. All writes are serialized by the lock, so the
//! versioned upsert gives a true compare-and-set.

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::RwLock;

use super::{Entity, RepoError, RepoResult, Repository};

/// Per-record version counter
///
/// Versions start at 1 on first insert and increment on every write.
/// A deleted record keeps its last version so a re-insert is still
/// distinguishable from the old record by version.
#[derive(Debug, Default)]
struct RecordVersions {
    versions: DashMap<String, u64>,
}

impl RecordVersions {
    fn increment(&self, id: &str) -> u64 {
        let mut entry = self.versions.entry(id.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    fn get(&self, id: &str) -> u64 {
        self.versions.get(id).map(|v| *v).unwrap_or(0)
    }
}

/// In-memory entity store
#[derive(Debug)]
pub struct InMemoryRepository<T: Entity> {
    records: RwLock<Vec<T>>,
    versions: RecordVersions,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            versions: RecordVersions::default(),
        }
    }

    /// Seed from a snapshot, replacing existing contents
    pub fn seed(&self, entities: Vec<T>) {
        let mut records = self.records.write();
        records.clear();
        for entity in entities {
            self.versions.increment(entity.id());
            records.push(entity);
        }
    }

    fn upsert_locked(&self, records: &mut Vec<T>, entity: T) -> u64 {
        let version = self.versions.increment(entity.id());
        match records.iter_mut().find(|r| r.id() == entity.id()) {
            Some(existing) => *existing = entity,
            None => records.push(entity),
        }
        version
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn get(&self, id: &str) -> Option<T> {
        self.records.read().iter().find(|r| r.id() == id).cloned()
    }

    async fn get_versioned(&self, id: &str) -> Option<(T, u64)> {
        // Writers mutate the version counter while holding the write
        // lock, so reading both under the read lock is consistent
        let records = self.records.read();
        let record = records.iter().find(|r| r.id() == id).cloned()?;
        Some((record, self.versions.get(id)))
    }

    async fn list(&self) -> Vec<T> {
        self.records.read().clone()
    }

    async fn upsert(&self, entity: T) -> u64 {
        let mut records = self.records.write();
        self.upsert_locked(&mut records, entity)
    }

    async fn upsert_versioned(&self, entity: T, expected: u64) -> RepoResult<u64> {
        let mut records = self.records.write();
        let current = self.versions.get(entity.id());
        if current != expected {
            return Err(RepoError::Conflict {
                id: entity.id().to_string(),
                expected,
                current,
            });
        }
        Ok(self.upsert_locked(&mut records, entity))
    }

    async fn delete(&self, id: &str) -> bool {
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|r| r.id() != id);
        before != records.len()
    }
}
