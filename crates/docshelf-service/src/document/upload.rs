//! Single-request file upload.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};

use docshelf_core::config::UploadConfig;
use docshelf_core::error::AppError;
use docshelf_core::format::format_file_size;
use docshelf_core::result::AppResult;
use docshelf_core::traits::BlobStore;
use docshelf_core::types::TagId;
use docshelf_entity::document::{DocumentRecord, FileFormat};

use super::service::{
    blob_key, ensure_extension_allowed, ensure_name_available, validate_file_name,
};
use crate::DocumentStore;
use crate::context::RequestContext;
use crate::tag::TagService;

/// An uploaded file as received by the HTTP layer.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Client-supplied file name; any directory part is dropped.
    pub file_name: String,
    /// Client-supplied content type.
    pub mime_type: Option<String>,
    /// File content bytes.
    pub data: Bytes,
    /// Tags to attach.
    pub tag_ids: Vec<TagId>,
}

/// Validates uploads, stores their bytes and records them.
#[derive(Clone)]
pub struct UploadService {
    /// Document repository.
    documents: Arc<DocumentStore>,
    /// File contents.
    blobs: Arc<dyn BlobStore>,
    /// Tag lookups.
    tags: Arc<TagService>,
    /// Size and extension limits.
    config: UploadConfig,
}

impl std::fmt::Debug for UploadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadService").finish()
    }
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(
        documents: Arc<DocumentStore>,
        blobs: Arc<dyn BlobStore>,
        tags: Arc<TagService>,
        config: UploadConfig,
    ) -> Self {
        Self {
            documents,
            blobs,
            tags,
            config,
        }
    }

    /// Uploads a file and returns the new record.
    ///
    /// Checks run cheapest first: name, extension, size, name collision,
    /// tags. Nothing is stored unless all of them pass.
    pub async fn upload(&self, ctx: &RequestContext, req: UploadRequest) -> AppResult<DocumentRecord> {
        let file_name = validate_file_name(base_name(&req.file_name))?;

        ensure_extension_allowed(&self.config, &file_name)?;

        let size = req.data.len() as u64;
        if size > self.config.max_file_size_bytes {
            return Err(AppError::payload_too_large(format!(
                "File size {} exceeds the limit of {}",
                format_file_size(size),
                format_file_size(self.config.max_file_size_bytes)
            )));
        }

        ensure_name_available(self.documents.as_ref(), &file_name, None).await?;
        let tags = self.tags.resolve(&req.tag_ids).await?;

        let mime_type = req.mime_type.filter(|m| !m.trim().is_empty());
        let mut doc = DocumentRecord::new(file_name, size, ctx.user_id);
        doc.file_format = FileFormat::detect(&doc.file_name, mime_type.as_deref());
        doc.mime_type = mime_type;
        doc.uploaded_at = ctx.request_time;
        doc.set_tags(tags, ctx.request_time);

        let key = blob_key(&doc.id);
        self.blobs.put(&key, req.data).await?;
        let doc = match self.documents.insert(doc).await {
            Ok(doc) => doc,
            Err(e) => {
                if let Err(cleanup) = self.blobs.delete(&key).await {
                    warn!(key = %key, error = %cleanup, "Failed to drop orphaned blob");
                }
                return Err(e);
            }
        };

        info!(
            document_id = %doc.id,
            file_name = %doc.file_name,
            size = doc.file_size,
            user_id = %ctx.user_id,
            "File uploaded"
        );
        Ok(doc)
    }
}

/// Last path component of a client-supplied name (browsers may send either separator).
fn base_name(raw: &str) -> &str {
    raw.rsplit(['/', '\\']).next().unwrap_or(raw)
}
