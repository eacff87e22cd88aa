//! # docshelf-database
//!
//! Storage layer for DocShelf. Documents and tags live in in-memory
//! repositories implementing [`docshelf_core::traits::Repository`]; file
//! bytes live in a [`MemoryBlobStore`]. Nothing survives a restart.

pub mod blob;
pub mod repositories;
pub mod seed;

pub use blob::MemoryBlobStore;
pub use repositories::{DocumentRepository, MemoryRepository, TagRepository};
