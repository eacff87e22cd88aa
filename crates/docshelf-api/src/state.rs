//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use docshelf_core::config::AppConfig;
use docshelf_service::document::{DocumentService, UploadService};
use docshelf_service::tag::TagService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Listing, editing and trash lifecycle.
    pub document_service: Arc<DocumentService>,
    /// File uploads.
    pub upload_service: Arc<UploadService>,
    /// Tag management.
    pub tag_service: Arc<TagService>,
}
