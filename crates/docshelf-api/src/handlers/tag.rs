//! Tag CRUD handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use docshelf_entity::tag::Tag;

use crate::dto::request::{CreateTagRequest, UpdateTagRequest};
use crate::dto::response::{ApiResponse, TagDeletedResponse};
use crate::error::ApiError;
use crate::extractors::Actor;
use crate::extractors::path::parse_tag_id;
use crate::state::AppState;

/// GET /api/tags
pub async fn list_tags(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Tag>>>, ApiError> {
    let tags = state.tag_service.list().await?;
    Ok(Json(ApiResponse::ok(tags)))
}

/// GET /api/tags/{id}
pub async fn get_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Tag>>, ApiError> {
    let tag = state.tag_service.get(parse_tag_id(&id)?).await?;
    Ok(Json(ApiResponse::ok(tag)))
}

/// POST /api/tags
pub async fn create_tag(
    State(state): State<AppState>,
    actor: Actor,
    payload: Result<Json<CreateTagRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Tag>>), ApiError> {
    let Json(req) = payload?;
    let tag = state.tag_service.create(&actor, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(tag))))
}

/// PATCH /api/tags/{id}
pub async fn update_tag(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTagRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Tag>>, ApiError> {
    let id = parse_tag_id(&id)?;
    let Json(req) = payload?;
    let tag = state.tag_service.update(&actor, id, req).await?;
    Ok(Json(ApiResponse::ok(tag)))
}

/// DELETE /api/tags/{id}
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<TagDeletedResponse>>, ApiError> {
    let id = parse_tag_id(&id)?;
    let affected_documents = state.tag_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(TagDeletedResponse {
        id,
        affected_documents,
    })))
}
