//! Generic insertion-ordered in-memory repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;
use docshelf_core::traits::{Mutation, Repository};

/// An entity with a stable primary key.
pub trait Keyed: Clone + Send + Sync + 'static {
    /// Primary key type.
    type Key: PartialEq + Send + Sync + std::fmt::Display + 'static;

    /// Entity name used in log lines and error messages.
    const ENTITY: &'static str;

    /// Return the primary key.
    fn key(&self) -> &Self::Key;
}

/// A `Vec`-backed repository guarded by a `tokio` read/write lock.
///
/// Entities keep their insertion order, which is the order
/// [`Repository::snapshot`] returns and therefore the tie-break order of
/// every stable sort performed on a snapshot.
#[derive(Debug)]
pub struct MemoryRepository<E> {
    rows: RwLock<Vec<E>>,
}

impl<E: Keyed> MemoryRepository<E> {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Create a repository pre-populated with `rows`.
    pub fn with_rows(rows: Vec<E>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }
}

impl<E: Keyed> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Keyed> Repository<E, E::Key> for MemoryRepository<E> {
    async fn find_by_id(&self, id: &E::Key) -> AppResult<Option<E>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.key() == id).cloned())
    }

    async fn snapshot(&self) -> AppResult<Vec<E>> {
        Ok(self.rows.read().await.clone())
    }

    async fn insert(&self, entity: E) -> AppResult<E> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|row| row.key() == entity.key()) {
            return Err(AppError::conflict(format!(
                "{} {} already exists",
                E::ENTITY,
                entity.key()
            )));
        }
        debug!(entity = E::ENTITY, id = %entity.key(), "Inserting row");
        rows.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: E) -> AppResult<E> {
        let mut rows = self.rows.write().await;
        let slot = rows
            .iter_mut()
            .find(|row| row.key() == entity.key())
            .ok_or_else(|| {
                AppError::not_found(format!("{} {} not found", E::ENTITY, entity.key()))
            })?;
        *slot = entity.clone();
        Ok(entity)
    }

    async fn modify(&self, id: &E::Key, change: Mutation<E>) -> AppResult<E> {
        let mut rows = self.rows.write().await;
        let slot = rows
            .iter_mut()
            .find(|row| row.key() == id)
            .ok_or_else(|| AppError::not_found(format!("{} {} not found", E::ENTITY, id)))?;
        let mut draft = slot.clone();
        change(&mut draft)?;
        *slot = draft.clone();
        Ok(draft)
    }

    async fn modify_all(&self, change: &(dyn for<'r> Fn(&'r mut E) -> bool + Send + Sync)) -> AppResult<u64> {
        let mut rows = self.rows.write().await;
        let mut changed = 0u64;
        for row in rows.iter_mut() {
            if change(row) {
                changed += 1;
            }
        }
        if changed > 0 {
            debug!(entity = E::ENTITY, rows = changed, "Modified rows");
        }
        Ok(changed)
    }

    async fn delete(&self, id: &E::Key) -> AppResult<bool> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.key() != id);
        let removed = rows.len() != before;
        if removed {
            debug!(entity = E::ENTITY, id = %id, "Deleted row");
        }
        Ok(removed)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.read().await.len() as u64)
    }
}
