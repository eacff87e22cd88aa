//! # docshelf-api
//!
//! HTTP API layer for DocShelf built on Axum.
//!
//! Provides the REST endpoints for documents, trash and tags, middleware
//! (request logging, timeouts, CORS, compression), extractors, DTOs, and
//! the mapping from [`docshelf_core::AppError`] to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::ApiError;
pub use state::AppState;
