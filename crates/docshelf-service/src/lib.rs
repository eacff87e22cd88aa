//! # docshelf-service
//!
//! Business logic for DocShelf. The [`query`] module holds the pure
//! document query engine; the service modules wrap it and the mutation
//! use cases (upload, update, trash, restore, purge, tag management).
//!
//! Services follow constructor injection: repositories and the blob store
//! are handed in as `Arc<dyn ..>` trait objects at construction time.

pub mod context;
pub mod document;
pub mod query;
pub mod tag;
pub mod validation;

use docshelf_core::traits::Repository;
use docshelf_core::types::{DocumentId, TagId};
use docshelf_entity::{DocumentRecord, Tag};

pub use context::RequestContext;
pub use document::{DocumentService, UploadService};
pub use query::{DocumentQuery, DocumentQueryEngine, QueryResult};
pub use tag::TagService;

/// Document repository as seen by the services.
pub type DocumentStore = dyn Repository<DocumentRecord, DocumentId>;

/// Tag repository as seen by the services.
pub type TagStore = dyn Repository<Tag, TagId>;
