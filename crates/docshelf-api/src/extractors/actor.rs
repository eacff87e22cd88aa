//! `Actor` extractor: identifies the acting user for mutating requests.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use docshelf_core::error::AppError;
use docshelf_core::types::UserId;
use docshelf_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Header naming the acting user.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The acting user's request context.
///
/// Taken from the `X-User-Id` header when present, otherwise from
/// `auth.default_user_id`. A present but malformed header is a 400.
#[derive(Debug, Clone)]
pub struct Actor(pub RequestContext);

impl std::ops::Deref for Actor {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for Actor {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = match parts.headers.get(USER_ID_HEADER) {
            Some(value) => value
                .to_str()
                .ok()
                .and_then(|v| v.trim().parse::<UserId>().ok())
                .ok_or_else(|| AppError::validation("Invalid X-User-Id header"))?,
            None => UserId::from_uuid(state.config.auth.default_user_id),
        };

        Ok(Actor(RequestContext::new(user_id)))
    }
}
