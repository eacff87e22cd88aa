//! Route definitions for the DocShelf HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Multipart framing allowance on top of the largest accepted file.
const MULTIPART_OVERHEAD_BYTES: u64 = 64 * 1024;

/// Build the Axum router with all routes, body limits and request logging.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .upload
        .max_file_size_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);
    let body_limit = usize::try_from(body_limit).unwrap_or(usize::MAX);

    let api_routes = Router::new()
        .merge(document_routes())
        .merge(tag_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::timeout::request_timeout,
        ))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Documents, trash and downloads
fn document_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/files",
            get(handlers::document::list_documents).post(handlers::document::upload_document),
        )
        .route(
            "/files/{id}",
            get(handlers::document::get_document)
                .patch(handlers::document::update_document)
                .delete(handlers::document::trash_document),
        )
        .route(
            "/files/{id}/download",
            get(handlers::document::download_document),
        )
        .route(
            "/files/{id}/restore",
            post(handlers::document::restore_document),
        )
        .route(
            "/files/{id}/permanent",
            delete(handlers::document::purge_document),
        )
}

/// Tag CRUD
fn tag_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tags",
            get(handlers::tag::list_tags).post(handlers::tag::create_tag),
        )
        .route(
            "/tags/{id}",
            get(handlers::tag::get_tag)
                .patch(handlers::tag::update_tag)
                .delete(handlers::tag::delete_tag),
        )
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
