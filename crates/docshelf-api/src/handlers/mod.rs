//! HTTP request handlers, one module per resource.

pub mod document;
pub mod health;
pub mod tag;
