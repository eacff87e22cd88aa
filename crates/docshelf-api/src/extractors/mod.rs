//! Custom Axum extractors.

pub mod actor;
pub mod list;
pub mod path;

pub use actor::Actor;
pub use list::ListDocumentsParams;
