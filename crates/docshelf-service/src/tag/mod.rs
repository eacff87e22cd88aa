//! Tag management: CRUD plus the cascades tags imply for documents.

pub mod service;

pub use service::{CreateTagRequest, TagService, UpdateTagRequest};
