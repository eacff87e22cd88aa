//! Generic repository trait for entity collections.

use async_trait::async_trait;

use crate::result::AppResult;

/// A change applied to one entity by [`Repository::modify`].
pub type Mutation<Entity> = Box<dyn FnOnce(&mut Entity) -> AppResult<()> + Send>;

/// Generic collection repository.
///
/// Services receive repositories as `Arc<dyn Repository<..>>` so the
/// backing store can be swapped without touching business logic. Reads
/// that feed the query engine go through [`Repository::snapshot`], which
/// hands out an owned copy; callers never observe later mutations.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Find an entity by its identifier.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// Return every entity, in insertion order.
    async fn snapshot(&self) -> AppResult<Vec<Entity>>;

    /// Append a new entity and return it.
    async fn insert(&self, entity: Entity) -> AppResult<Entity>;

    /// Replace an existing entity. Fails with `NotFound` if it is absent.
    async fn update(&self, entity: Entity) -> AppResult<Entity>;

    /// Read, change and write back one entity under a single write lock.
    ///
    /// `change` works on a copy; if it fails nothing is stored. Fails with
    /// `NotFound` if the entity is absent.
    async fn modify(&self, id: &Id, change: Mutation<Entity>) -> AppResult<Entity>;

    /// Apply `change` to every entity under a single write lock. Returns how
    /// many entities `change` reported as changed.
    async fn modify_all(
        &self,
        change: &(dyn for<'r> Fn(&'r mut Entity) -> bool + Send + Sync),
    ) -> AppResult<u64>;

    /// Remove an entity. Returns `true` if something was removed.
    async fn delete(&self, id: &Id) -> AppResult<bool>;

    /// Count stored entities.
    async fn count(&self) -> AppResult<u64>;
}
