//! Typed id parsing for path segments and request fields.

use std::str::FromStr;

use docshelf_core::error::AppError;
use docshelf_core::types::{DocumentId, TagId};

fn parse_id<T: FromStr>(what: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid {what} id: {raw}")))
}

/// Parses a document id from a path segment.
pub fn parse_document_id(raw: &str) -> Result<DocumentId, AppError> {
    parse_id("document", raw)
}

/// Parses a tag id from a path segment.
pub fn parse_tag_id(raw: &str) -> Result<TagId, AppError> {
    parse_id("tag", raw)
}

/// Parses a list of tag ids, failing on the first malformed one.
pub fn parse_tag_ids(raw: &[String]) -> Result<Vec<TagId>, AppError> {
    raw.iter().map(|s| parse_tag_id(s)).collect()
}
