//! Tag repository.

use docshelf_core::types::TagId;
use docshelf_entity::tag::Tag;

use super::memory::{Keyed, MemoryRepository};

impl Keyed for Tag {
    type Key = TagId;

    const ENTITY: &'static str = "Tag";

    fn key(&self) -> &TagId {
        &self.id
    }
}

/// In-memory store of tags.
pub type TagRepository = MemoryRepository<Tag>;
