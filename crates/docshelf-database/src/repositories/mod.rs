//! In-memory repository implementations.

pub mod document;
pub mod memory;
pub mod tag;

pub use document::DocumentRepository;
pub use memory::{Keyed, MemoryRepository};
pub use tag::TagRepository;
