//! Filter → sort → paginate pipeline over document snapshots.
//!
//! Stages run in a fixed order:
//!
//! 1. **Scope**: active records (`is_deleted == false`) or trashed ones,
//!    chosen by the operation ([`DocumentQueryEngine::list_active`] /
//!    [`DocumentQueryEngine::list_trashed`]), never by a query flag.
//! 2. **Search**: every whitespace-separated token must occur
//!    (case-insensitively) in the file name or in some tag name.
//! 3. **Tags**: the record must carry *all* requested tag ids.
//! 4. **Sort**: stable, so equal keys keep snapshot order.
//! 5. **Paginate**: `total` counts everything that survived stages 1-3;
//!    pages past the end are empty rather than an error.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use docshelf_core::config::QueryConfig;
use docshelf_core::types::{Page, PageRequest, Pagination, SortDirection, SortKey, SortSpec, TagId};
use docshelf_entity::document::DocumentRecord;

use super::search::SearchTerms;

/// One page of documents plus pagination metadata.
pub type QueryResult = Page<DocumentRecord>;

/// Which side of the trash a listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Documents not in the trash.
    Active,
    /// Documents in the trash.
    Trashed,
}

impl Scope {
    fn admits(self, record: &DocumentRecord) -> bool {
        match self {
            Self::Active => !record.is_deleted,
            Self::Trashed => record.is_deleted,
        }
    }
}

/// Listing parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentQuery {
    /// Free-text search; blank means no search filter.
    #[serde(default)]
    pub search: Option<String>,
    /// Tags a record must all carry; empty means no tag filter.
    #[serde(default)]
    pub tag_ids: Vec<TagId>,
    /// Requested page and page size.
    #[serde(default)]
    pub page: PageRequest,
    /// Ordering.
    #[serde(default)]
    pub sort: SortSpec,
}

impl DocumentQuery {
    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set the required tags.
    pub fn with_tags(mut self, tag_ids: impl IntoIterator<Item = TagId>) -> Self {
        self.tag_ids = tag_ids.into_iter().collect();
        self
    }

    /// Set page number and page size.
    pub fn with_page(mut self, page: u64, limit: u64) -> Self {
        self.page = PageRequest { page, limit };
        self
    }

    /// Set the ordering.
    pub fn with_sort(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort = SortSpec::new(key, direction);
        self
    }
}

/// Stateless query evaluator.
///
/// The only state is the page-size policy: a `limit` below 1 becomes
/// `default_limit`, a `limit` above `max_limit` is clamped, and a `page`
/// below 1 becomes 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentQueryEngine {
    default_limit: u64,
    max_limit: u64,
}

impl Default for DocumentQueryEngine {
    fn default() -> Self {
        Self::new(&QueryConfig::default())
    }
}

impl DocumentQueryEngine {
    /// Create an engine using the page-size bounds from configuration.
    pub fn new(config: &QueryConfig) -> Self {
        Self {
            default_limit: config.default_limit.max(1),
            max_limit: config.max_limit.max(1),
        }
    }

    /// List documents that are not in the trash.
    pub fn list_active(&self, records: &[DocumentRecord], query: &DocumentQuery) -> QueryResult {
        self.run(Scope::Active, records, query)
    }

    /// List documents that are in the trash. Search, tag filter, sort and
    /// pagination behave exactly as in [`Self::list_active`].
    pub fn list_trashed(&self, records: &[DocumentRecord], query: &DocumentQuery) -> QueryResult {
        self.run(Scope::Trashed, records, query)
    }

    /// Evaluate `query` against `records` within `scope`.
    pub fn run(&self, scope: Scope, records: &[DocumentRecord], query: &DocumentQuery) -> QueryResult {
        let page = self.normalize(query.page);
        let terms = SearchTerms::parse(query.search.as_deref().unwrap_or_default());

        let mut matched: Vec<&DocumentRecord> = records
            .iter()
            .filter(|r| scope.admits(r))
            .filter(|r| terms.matches(r))
            .filter(|r| query.tag_ids.iter().all(|id| r.has_tag(id)))
            .collect();

        // `sort_by` is stable; reversing the comparator (not the output)
        // keeps ties in snapshot order for descending sorts too.
        let SortSpec { key, direction } = query.sort;
        matched.sort_by(|a, b| {
            let ordering = compare(a, b, key);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let total = matched.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);
        let data = matched
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Page {
            data,
            pagination: Pagination::new(page, total),
        }
    }

    fn normalize(&self, page: PageRequest) -> PageRequest {
        PageRequest::bounded(page.page, page.limit, self.default_limit, self.max_limit)
    }
}

fn compare(a: &DocumentRecord, b: &DocumentRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::FileName => a.file_name.cmp(&b.file_name),
        SortKey::FileSize => a.file_size.cmp(&b.file_size),
        SortKey::UploadedAt => a
            .uploaded_at
            .timestamp_millis()
            .cmp(&b.uploaded_at.timestamp_millis()),
    }
}
