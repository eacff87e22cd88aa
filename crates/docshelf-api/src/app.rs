//! Application builder: wires repositories, services, router and middleware.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use docshelf_core::config::AppConfig;
use docshelf_core::error::AppError;
use docshelf_core::types::UserId;
use docshelf_database::{DocumentRepository, MemoryBlobStore, TagRepository, seed};
use docshelf_service::document::{DocumentService, UploadService};
use docshelf_service::query::DocumentQueryEngine;
use docshelf_service::tag::TagService;

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(build_compression_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Creates the stores and services, loading demo data if enabled.
pub async fn build_state(config: AppConfig) -> Result<AppState, AppError> {
    let documents = Arc::new(DocumentRepository::new());
    let tags = Arc::new(TagRepository::new());
    let blobs = Arc::new(MemoryBlobStore::new());

    if config.seed.enabled {
        let owner = UserId::from_uuid(config.auth.default_user_id);
        seed::load(&documents, &tags, blobs.as_ref(), owner).await?;
    }

    let tag_service = Arc::new(TagService::new(tags.clone(), documents.clone()));
    let document_service = Arc::new(DocumentService::new(
        documents.clone(),
        blobs.clone(),
        Arc::clone(&tag_service),
        DocumentQueryEngine::new(&config.query),
        config.upload.clone(),
    ));
    let upload_service = Arc::new(UploadService::new(
        documents,
        blobs,
        Arc::clone(&tag_service),
        config.upload.clone(),
    ));

    Ok(AppState {
        config: Arc::new(config),
        document_service,
        upload_service,
        tag_service,
    })
}

/// Runs the DocShelf server until Ctrl+C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!("Starting DocShelf server...");

    let addr = config.server.bind_address();
    let state = build_state(config).await?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("DocShelf server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("DocShelf server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
