//! Demo data loaded at startup when `seed.enabled` is set.
//!
//! The collection mirrors what the front-end uses during development:
//! Japanese business documents spread over a few months, a handful of
//! tags, and one document already in the trash.

use bytes::Bytes;
use chrono::{DateTime, Duration, TimeZone, Utc};
use tracing::info;

use docshelf_core::result::AppResult;
use docshelf_core::traits::{BlobStore, Repository};
use docshelf_core::types::UserId;
use docshelf_entity::document::DocumentRecord;
use docshelf_entity::tag::{Tag, TagColor};

use crate::repositories::{DocumentRepository, TagRepository};

/// Tags and documents making up the demo data set.
#[derive(Debug, Clone)]
pub struct SeedData {
    /// Demo tags.
    pub tags: Vec<Tag>,
    /// Demo documents, one of them trashed.
    pub documents: Vec<DocumentRecord>,
}

/// Build the demo data set owned by `owner`.
pub fn demo_data(owner: UserId) -> SeedData {
    let base = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).single().unwrap_or_else(Utc::now);

    let tag = |name: &str, color: TagColor, day: i64| {
        let mut t = Tag::new(name, color, owner);
        t.created_at = base - Duration::days(30 - day);
        t.updated_at = t.created_at;
        t
    };
    let invoice = tag("請求書", TagColor::Primary, 0);
    let contract = tag("契約書", TagColor::Secondary, 1);
    let estimate = tag("見積書", TagColor::Info, 2);
    let important = tag("重要", TagColor::Error, 3);
    let client = tag("田中商事", TagColor::Success, 4);

    let doc = |name: &str, size: u64, uploaded: DateTime<Utc>, tags: Vec<Tag>| {
        let mut d = DocumentRecord::new(name, size, owner);
        d.uploaded_at = uploaded;
        d.set_tags(tags, uploaded);
        d
    };

    let mut trashed = doc(
        "旧_見積書_2023.pdf",
        98_304,
        base - Duration::days(20),
        vec![estimate.clone()],
    );
    trashed.soft_delete(base + Duration::days(5));

    let documents = vec![
        doc(
            "田中商事_請求書_202401.pdf",
            245_760,
            base,
            vec![invoice.clone(), client.clone()],
        ),
        doc(
            "田中商事_見積書.pdf",
            131_072,
            base + Duration::days(2),
            vec![estimate.clone(), client.clone()],
        ),
        doc(
            "業務委託契約書.docx",
            61_440,
            base + Duration::days(7),
            vec![contract.clone(), important.clone()],
        ),
        doc(
            "月次売上集計_2024Q1.xlsx",
            1_572_864,
            base + Duration::days(21),
            Vec::new(),
        ),
        doc(
            "請求書_B社_202402.pdf",
            204_800,
            base + Duration::days(28),
            vec![invoice.clone()],
        ),
        doc(
            "会議資料_新規案件.pptx",
            3_145_728,
            base + Duration::days(35),
            vec![important.clone()],
        ),
        doc("オフィス写真.jpg", 2_621_440, base + Duration::days(40), Vec::new()),
        trashed,
    ];

    SeedData {
        tags: vec![invoice, contract, estimate, important, client],
        documents,
    }
}

/// Load the demo data into the given stores. Each document gets a small
/// placeholder blob so downloads work.
pub async fn load(
    documents: &DocumentRepository,
    tags: &TagRepository,
    blobs: &dyn BlobStore,
    owner: UserId,
) -> AppResult<()> {
    let data = demo_data(owner);
    let (tag_count, doc_count) = (data.tags.len(), data.documents.len());

    for tag in data.tags {
        tags.insert(tag).await?;
    }
    for doc in data.documents {
        let placeholder = Bytes::from(format!("placeholder contents of {}", doc.file_name));
        blobs.put(&doc.id.to_string(), placeholder).await?;
        documents.insert(doc).await?;
    }

    info!(tags = tag_count, documents = doc_count, "Demo data loaded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::MemoryBlobStore;

    #[test]
    fn test_demo_data_respects_invariants() {
        let data = demo_data(UserId::new());
        assert_eq!(data.documents.iter().filter(|d| d.is_deleted).count(), 1);
        for doc in &data.documents {
            assert_eq!(doc.is_deleted, doc.deleted_at.is_some());
            let mut ids: Vec<_> = doc.tag_ids().collect();
            let before = ids.len();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), before);
        }
    }

    #[tokio::test]
    async fn test_load_populates_stores() {
        let documents = DocumentRepository::new();
        let tags = TagRepository::new();
        let blobs = MemoryBlobStore::new();
        load(&documents, &tags, &blobs, UserId::new()).await.unwrap();

        assert_eq!(tags.count().await.unwrap(), 5);
        assert_eq!(documents.count().await.unwrap(), 8);
        let first = &documents.snapshot().await.unwrap()[0];
        assert!(blobs.exists(&first.id.to_string()).await.unwrap());
    }
}
