//! # docshelf-entity
//!
//! Domain entity models for DocShelf. Every struct in this crate is a
//! stored record or a value object carried by one. All entities derive
//! `Debug`, `Clone`, `PartialEq`, `Serialize` and `Deserialize`, and
//! serialize with camelCase field names to match the HTTP wire format.

pub mod document;
pub mod tag;

pub use document::{DocumentRecord, FileFormat, FormatCategory};
pub use tag::{Tag, TagColor};
