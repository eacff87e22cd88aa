//! Document listing, upload, download, edit and trash handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use axum_extra::extract::Query;
use axum_extra::extract::QueryRejection;
use bytes::Bytes;

use docshelf_core::error::AppError;
use docshelf_service::document::UploadRequest;
use docshelf_service::query::Scope;

use crate::dto::request::UpdateDocumentBody;
use crate::dto::response::{ApiResponse, DocumentListResponse, DocumentView};
use crate::error::ApiError;
use crate::extractors::path::{parse_document_id, parse_tag_ids};
use crate::extractors::{Actor, ListDocumentsParams};
use crate::state::AppState;

/// GET /api/files?search&tagIds&page&limit&sortBy&sortOrder&isDeleted
pub async fn list_documents(
    State(state): State<AppState>,
    params: Result<Query<ListDocumentsParams>, QueryRejection>,
) -> Result<Json<DocumentListResponse>, ApiError> {
    let Query(params) =
        params.map_err(|e| AppError::validation(format!("Invalid query string: {e}")))?;
    let query = params.to_query()?;

    let result = match params.scope() {
        Scope::Active => state.document_service.list_active(&query).await?,
        Scope::Trashed => state.document_service.list_trashed(&query).await?,
    };

    let search = query.search.as_deref();
    Ok(Json(DocumentListResponse {
        data: result
            .data
            .into_iter()
            .map(|record| DocumentView::with_search(record, search))
            .collect(),
        pagination: result.pagination,
    }))
}

/// POST /api/files (multipart: `file`, repeated or comma-separated `tagIds`)
pub async fn upload_document(
    State(state): State<AppState>,
    actor: Actor,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<DocumentView>>), ApiError> {
    let mut file: Option<(String, Option<String>, Bytes)> = None;
    let mut raw_tag_ids: Vec<String> = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let mime_type = field.content_type().map(str::to_string);
                let data = field.bytes().await?;
                file = Some((file_name, mime_type, data));
            }
            Some("tagIds") => {
                let text = field.text().await?;
                raw_tag_ids.extend(
                    text.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string),
                );
            }
            _ => {}
        }
    }

    let (file_name, mime_type, data) =
        file.ok_or_else(|| AppError::validation("Multipart field 'file' is required"))?;
    let request = UploadRequest {
        file_name,
        mime_type,
        data,
        tag_ids: parse_tag_ids(&raw_tag_ids)?,
    };

    let doc = state.upload_service.upload(&actor, request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(DocumentView::new(doc)))))
}

/// GET /api/files/{id}
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DocumentView>>, ApiError> {
    let doc = state.document_service.get(parse_document_id(&id)?).await?;
    Ok(Json(ApiResponse::ok(DocumentView::new(doc))))
}

/// GET /api/files/{id}/download
pub async fn download_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let download = state
        .document_service
        .download(parse_document_id(&id)?)
        .await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, download.content_type)
        .header(
            header::CONTENT_DISPOSITION,
            content_disposition(&download.file_name),
        )
        .header(header::CONTENT_LENGTH, download.data.len())
        .body(Body::from(download.data))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}

/// PATCH /api/files/{id}
pub async fn update_document(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<String>,
    payload: Result<Json<UpdateDocumentBody>, JsonRejection>,
) -> Result<Json<ApiResponse<DocumentView>>, ApiError> {
    let id = parse_document_id(&id)?;
    let Json(body) = payload?;
    let doc = state
        .document_service
        .update(&actor, id, body.into_request()?)
        .await?;
    Ok(Json(ApiResponse::ok(DocumentView::new(doc))))
}

/// DELETE /api/files/{id}
pub async fn trash_document(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DocumentView>>, ApiError> {
    let doc = state
        .document_service
        .soft_delete(&actor, parse_document_id(&id)?)
        .await?;
    Ok(Json(ApiResponse::ok(DocumentView::new(doc))))
}

/// POST /api/files/{id}/restore
pub async fn restore_document(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DocumentView>>, ApiError> {
    let doc = state
        .document_service
        .restore(&actor, parse_document_id(&id)?)
        .await?;
    Ok(Json(ApiResponse::ok(DocumentView::new(doc))))
}

/// DELETE /api/files/{id}/permanent
pub async fn purge_document(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .document_service
        .permanent_delete(&actor, parse_document_id(&id)?)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `attachment` disposition with an ASCII fallback and an RFC 5987 UTF-8 name.
fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let mut encoded = String::with_capacity(file_name.len() * 3);
    for byte in file_name.bytes() {
        if byte.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&byte) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }

    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}
