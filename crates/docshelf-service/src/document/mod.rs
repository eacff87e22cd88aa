//! Document services: listing and lifecycle, plus uploads.

pub mod service;
pub mod upload;

pub use service::{DocumentDownload, DocumentService, UpdateDocumentRequest};
pub use upload::{UploadRequest, UploadService};
