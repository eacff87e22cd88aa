//! Document repository.

use docshelf_core::types::DocumentId;
use docshelf_entity::document::DocumentRecord;

use super::memory::{Keyed, MemoryRepository};

impl Keyed for DocumentRecord {
    type Key = DocumentId;

    const ENTITY: &'static str = "Document";

    fn key(&self) -> &DocumentId {
        &self.id
    }
}

/// In-memory store of document records.
pub type DocumentRepository = MemoryRepository<DocumentRecord>;
