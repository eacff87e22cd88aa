//! Request DTOs.

use serde::{Deserialize, Serialize};

use docshelf_core::error::AppError;
use docshelf_service::document::UpdateDocumentRequest;

use crate::extractors::path::parse_tag_ids;

pub use docshelf_service::tag::{CreateTagRequest, UpdateTagRequest};

/// `PATCH /api/files/{id}` body.
///
/// Tag ids arrive as strings so a malformed id yields a 400 with our
/// error body rather than a deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentBody {
    /// New file name.
    pub file_name: Option<String>,
    /// Replacement tag set.
    pub tag_ids: Option<Vec<String>>,
}

impl UpdateDocumentBody {
    /// Converts to the service request, validating tag ids.
    pub fn into_request(self) -> Result<UpdateDocumentRequest, AppError> {
        let tag_ids = match self.tag_ids {
            Some(raw) => Some(parse_tag_ids(&raw)?),
            None => None,
        };
        Ok(UpdateDocumentRequest {
            file_name: self.file_name,
            tag_ids,
        })
    }
}
