//! The document query engine and its building blocks.
//!
//! [`DocumentQueryEngine`] turns an immutable snapshot of document records
//! plus a [`DocumentQuery`] into one page of results. It performs no I/O,
//! never mutates its input and never fails; see [`engine`] for the exact
//! pipeline.

pub mod engine;
pub mod highlight;
pub mod search;

pub use engine::{DocumentQuery, DocumentQueryEngine, QueryResult, Scope};
pub use highlight::{HighlightSegment, highlight};
pub use search::SearchTerms;
