//! Core traits defined in `docshelf-core` and implemented by other crates.

pub mod blob;
pub mod repository;

pub use blob::BlobStore;
pub use repository::{Mutation, Repository};
