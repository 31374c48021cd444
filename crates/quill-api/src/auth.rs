//! Request authentication.
//!
//! `AuthUser` is an axum extractor: adding it to a handler's
//! signature makes the route protected. It parses the
//! `Authorization: ApiKey <secret>` header (strictly, see
//! `quill_core::auth`) and resolves the key against the user
//! repository before the handler body runs.
//!
//! Failure statuses are asymmetric on purpose, matching long-standing
//! client expectations: a missing or malformed header is 401, while a
//! well-formed key that resolves to nobody is 404.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use quill_core::{parse_api_key, User, UserRepository, MSG_MALFORMED_AUTH_HEADER, MSG_USER_NOT_FOUND};

use crate::error::ApiError;
use crate::AppState;

/// The authenticated caller, resolved from the Authorization header.
pub struct AuthUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = match parts.headers.get(AUTHORIZATION) {
            None => None,
            Some(value) => Some(value.to_str().map_err(|_| {
                // Present but not valid ASCII: treat as malformed, not absent.
                ApiError::Unauthorized(MSG_MALFORMED_AUTH_HEADER.to_string())
            })?),
        };

        let api_key = parse_api_key(header)?;

        let user = state
            .db
            .users
            .find_by_api_key(api_key)
            .await?
            .ok_or_else(|| ApiError::NotFound(MSG_USER_NOT_FOUND.to_string()))?;

        Ok(AuthUser(user))
    }
}
