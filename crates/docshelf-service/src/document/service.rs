//! Document listing, editing and trash lifecycle.

use std::sync::Arc;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use docshelf_core::config::UploadConfig;
use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;
use docshelf_core::traits::BlobStore;
use docshelf_core::types::{DocumentId, TagId};
use docshelf_entity::document::{DocumentRecord, FileFormat};
use docshelf_entity::document::format::extension_of;

use crate::DocumentStore;
use crate::context::RequestContext;
use crate::query::{DocumentQuery, DocumentQueryEngine, QueryResult};
use crate::tag::TagService;

/// Partial update of a document. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentRequest {
    /// New file name.
    pub file_name: Option<String>,
    /// Replacement tag set.
    pub tag_ids: Option<Vec<TagId>>,
}

/// File contents ready to be streamed back to a client.
#[derive(Debug, Clone)]
pub struct DocumentDownload {
    /// Name to suggest to the client.
    pub file_name: String,
    /// Content type.
    pub content_type: String,
    /// The bytes.
    pub data: Bytes,
}

/// Read and lifecycle operations on documents.
#[derive(Clone)]
pub struct DocumentService {
    /// Document repository.
    documents: Arc<DocumentStore>,
    /// File contents.
    blobs: Arc<dyn BlobStore>,
    /// Tag lookups for re-tagging.
    tags: Arc<TagService>,
    /// Listing pipeline.
    engine: DocumentQueryEngine,
    /// Extension allow-list, shared with uploads.
    upload: UploadConfig,
}

impl std::fmt::Debug for DocumentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentService")
            .field("blobs", &self.blobs.store_type())
            .field("engine", &self.engine)
            .finish()
    }
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(
        documents: Arc<DocumentStore>,
        blobs: Arc<dyn BlobStore>,
        tags: Arc<TagService>,
        engine: DocumentQueryEngine,
        upload: UploadConfig,
    ) -> Self {
        Self {
            documents,
            blobs,
            tags,
            engine,
            upload,
        }
    }

    /// Lists documents outside the trash.
    pub async fn list_active(&self, query: &DocumentQuery) -> AppResult<QueryResult> {
        let snapshot = self.documents.snapshot().await?;
        Ok(self.engine.list_active(&snapshot, query))
    }

    /// Lists documents in the trash.
    pub async fn list_trashed(&self, query: &DocumentQuery) -> AppResult<QueryResult> {
        let snapshot = self.documents.snapshot().await?;
        Ok(self.engine.list_trashed(&snapshot, query))
    }

    /// Gets a single document, trashed or not.
    pub async fn get(&self, id: DocumentId) -> AppResult<DocumentRecord> {
        self.documents
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))
    }

    /// Reads a document's contents.
    pub async fn download(&self, id: DocumentId) -> AppResult<DocumentDownload> {
        let doc = self.get(id).await?;
        let data = self.blobs.get(&blob_key(&doc.id)).await?;
        // The recorded type is only trusted when the name says nothing.
        let content_type = match (doc.file_format, doc.mime_type.as_deref()) {
            (FileFormat::Unknown, Some(mime)) => mime.to_string(),
            (format, _) => format.mime_type().to_string(),
        };

        Ok(DocumentDownload {
            file_name: doc.file_name,
            content_type,
            data,
        })
    }

    /// Renames and/or re-tags an active document.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: DocumentId,
        req: UpdateDocumentRequest,
    ) -> AppResult<DocumentRecord> {
        let current = self.get(id).await?;
        if current.is_deleted {
            return Err(trashed_conflict(id));
        }

        let name = match req.file_name {
            Some(raw) => {
                let name = validate_file_name(&raw)?;
                ensure_extension_allowed(&self.upload, &name)?;
                if name != current.file_name {
                    ensure_name_available(self.documents.as_ref(), &name, Some(id)).await?;
                }
                Some(name)
            }
            None => None,
        };
        let tags = match req.tag_ids {
            Some(tag_ids) => Some(self.tags.resolve(&tag_ids).await?),
            None => None,
        };

        let now = ctx.request_time;
        let doc = self
            .documents
            .modify(
                &id,
                Box::new(move |doc: &mut DocumentRecord| {
                    if doc.is_deleted {
                        return Err(trashed_conflict(doc.id));
                    }
                    if let Some(name) = name {
                        doc.rename(name, now);
                    }
                    if let Some(tags) = tags {
                        doc.set_tags(tags, now);
                    }
                    Ok(())
                }),
            )
            .await?;
        info!(document_id = %doc.id, user_id = %ctx.user_id, "Document updated");
        Ok(doc)
    }

    /// Moves an active document to the trash.
    pub async fn soft_delete(&self, ctx: &RequestContext, id: DocumentId) -> AppResult<DocumentRecord> {
        let now = ctx.request_time;
        let doc = self
            .documents
            .modify(
                &id,
                Box::new(move |doc: &mut DocumentRecord| {
                    if doc.is_deleted {
                        return Err(AppError::conflict(format!(
                            "Document {} is already in the trash",
                            doc.id
                        )));
                    }
                    doc.soft_delete(now);
                    Ok(())
                }),
            )
            .await?;
        info!(document_id = %doc.id, user_id = %ctx.user_id, "Document moved to trash");
        Ok(doc)
    }

    /// Takes a document out of the trash.
    ///
    /// Fails with Conflict if the document is not trashed, or if an active
    /// document has taken its name in the meantime.
    pub async fn restore(&self, ctx: &RequestContext, id: DocumentId) -> AppResult<DocumentRecord> {
        let current = self.get(id).await?;
        if !current.is_deleted {
            return Err(not_trashed_conflict(id));
        }
        ensure_name_available(self.documents.as_ref(), &current.file_name, Some(id)).await?;

        let doc = self
            .documents
            .modify(
                &id,
                Box::new(|doc: &mut DocumentRecord| {
                    if !doc.is_deleted {
                        return Err(not_trashed_conflict(doc.id));
                    }
                    doc.restore();
                    Ok(())
                }),
            )
            .await?;
        info!(document_id = %doc.id, user_id = %ctx.user_id, "Document restored");
        Ok(doc)
    }

    /// Removes a trashed document and its contents for good.
    pub async fn permanent_delete(&self, ctx: &RequestContext, id: DocumentId) -> AppResult<()> {
        let doc = self.get(id).await?;
        if !doc.is_deleted {
            return Err(AppError::conflict(format!(
                "Document {id} must be moved to the trash before it can be deleted permanently"
            )));
        }

        self.documents.delete(&id).await?;
        self.blobs.delete(&blob_key(&id)).await?;
        info!(document_id = %id, user_id = %ctx.user_id, "Document permanently deleted");
        Ok(())
    }
}

fn trashed_conflict(id: DocumentId) -> AppError {
    AppError::conflict(format!("Document {id} is in the trash and cannot be edited"))
}

fn not_trashed_conflict(id: DocumentId) -> AppError {
    AppError::conflict(format!("Document {id} is not in the trash"))
}

/// Blob-store key for a document's contents.
pub(crate) fn blob_key(id: &DocumentId) -> String {
    id.to_string()
}

/// Trim a file name and reject blank names or names with path separators.
pub(crate) fn validate_file_name(raw: &str) -> AppResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::validation("File name must not be empty"));
    }
    if name.contains(['/', '\\']) {
        return Err(AppError::validation(format!(
            "File name '{name}' must not contain path separators"
        )));
    }
    Ok(name.to_string())
}

/// Fail with Validation unless the name's extension is on the upload allow-list.
pub(crate) fn ensure_extension_allowed(config: &UploadConfig, file_name: &str) -> AppResult<()> {
    let extension = extension_of(file_name).unwrap_or_default();
    if config.is_extension_allowed(extension) {
        return Ok(());
    }
    Err(AppError::validation(format!(
        "File type '.{extension}' is not allowed (allowed: {})",
        config.allowed_extensions.join(", ")
    )))
}

/// Fail with Conflict if an active document other than `except` is named `name`.
///
/// Names compare case-sensitively; trashed documents never block a name.
pub(crate) async fn ensure_name_available(
    documents: &DocumentStore,
    name: &str,
    except: Option<DocumentId>,
) -> AppResult<()> {
    let taken = documents
        .snapshot()
        .await?
        .iter()
        .any(|d| !d.is_deleted && Some(d.id) != except && d.file_name == name);
    if taken {
        return Err(AppError::conflict(format!("A file named '{name}' already exists")));
    }
    Ok(())
}
