//! Response DTOs.

use serde::{Deserialize, Serialize};

use docshelf_core::format::format_file_size;
use docshelf_core::types::{Pagination, TagId};
use docshelf_entity::document::{DocumentRecord, FormatCategory};
use docshelf_service::query::{HighlightSegment, SearchTerms, highlight};

/// Standard single-object response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response data.
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wraps `data`.
    pub fn ok(data: T) -> Self {
        Self { data }
    }
}

/// A document as the client sees it: the stored record plus display helpers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    /// The stored record, flattened into this object.
    #[serde(flatten)]
    pub record: DocumentRecord,
    /// Human-readable size, e.g. `1.5 MB`.
    pub file_size_label: String,
    /// Coarse grouping of `fileFormat`, for client icons.
    pub file_category: FormatCategory,
    /// File name split around search hits; present only for searches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name_highlights: Option<Vec<HighlightSegment>>,
}

impl DocumentView {
    /// Builds a view without highlights.
    pub fn new(record: DocumentRecord) -> Self {
        Self {
            file_size_label: format_file_size(record.file_size),
            file_category: record.file_format.category(),
            file_name_highlights: None,
            record,
        }
    }

    /// Builds a view, highlighting `search` hits in the file name when the
    /// search has any tokens.
    pub fn with_search(record: DocumentRecord, search: Option<&str>) -> Self {
        let mut view = Self::new(record);
        if let Some(search) = search.filter(|s| !SearchTerms::parse(s).is_empty()) {
            view.file_name_highlights = Some(highlight(&view.record.file_name, search));
        }
        view
    }
}

/// `GET /api/files` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentListResponse {
    /// Documents on the requested page.
    pub data: Vec<DocumentView>,
    /// Pagination metadata.
    pub pagination: Pagination,
}

/// Result of deleting a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDeletedResponse {
    /// The deleted tag.
    pub id: TagId,
    /// How many documents the tag was removed from.
    pub affected_documents: u64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use docshelf_core::types::UserId;

    #[test]
    fn test_document_view_flattens_record() {
        let record = DocumentRecord::new("請求書.pdf", 1536, UserId::new());
        let json = serde_json::to_value(DocumentView::new(record)).unwrap();
        assert_eq!(json["fileName"], "請求書.pdf");
        assert_eq!(json["fileSizeLabel"], "1.5 KB");
        assert_eq!(json["fileCategory"], "document");
        assert!(json.get("fileNameHighlights").is_none());
        assert!(json.get("record").is_none());
    }

    #[test]
    fn test_document_view_highlights_only_for_searches() {
        let record = DocumentRecord::new("請求書.pdf", 1, UserId::new());
        assert!(
            DocumentView::with_search(record.clone(), Some("  "))
                .file_name_highlights
                .is_none()
        );

        let view = DocumentView::with_search(record, Some("請求"));
        let segments = view.file_name_highlights.unwrap();
        assert!(segments[0].matched);
        assert_eq!(segments[0].text, "請求");
    }
}
