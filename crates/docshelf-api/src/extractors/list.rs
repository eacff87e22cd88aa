//! Query-string parameters for `GET /api/files`.

use serde::{Deserialize, Serialize};

use docshelf_core::error::AppError;
use docshelf_core::types::{PageRequest, SortSpec};
use docshelf_service::query::{DocumentQuery, Scope};

use super::path::parse_tag_ids;

/// Raw list parameters.
///
/// Everything is taken as text so that unparseable values fall back to
/// defaults instead of rejecting the request. `tagIds` may repeat.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsParams {
    /// Free-text search.
    pub search: Option<String>,
    /// Required tags (repeated key).
    #[serde(default)]
    pub tag_ids: Vec<String>,
    /// 1-based page number.
    pub page: Option<String>,
    /// Page size.
    pub limit: Option<String>,
    /// `fileName`, `fileSize` or `uploadedAt`.
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    pub sort_order: Option<String>,
    /// `true` selects the trash.
    pub is_deleted: Option<String>,
}

impl ListDocumentsParams {
    /// Which side of the trash to list.
    pub fn scope(&self) -> Scope {
        match self.is_deleted.as_deref().map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Scope::Trashed,
            _ => Scope::Active,
        }
    }

    /// Builds the engine query. Only malformed tag ids are an error; page
    /// bounds are left for the engine to apply.
    pub fn to_query(&self) -> Result<DocumentQuery, AppError> {
        Ok(DocumentQuery {
            search: self.search.clone(),
            tag_ids: parse_tag_ids(&self.tag_ids)?,
            page: PageRequest {
                page: lenient_number(&self.page),
                limit: lenient_number(&self.limit),
            },
            sort: SortSpec::from_lenient(self.sort_by.as_deref(), self.sort_order.as_deref()),
        })
    }
}

/// Parses a non-negative number; anything else becomes 0, which the engine
/// coerces to the default.
fn lenient_number(raw: &Option<String>) -> u64 {
    raw.as_deref()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}
