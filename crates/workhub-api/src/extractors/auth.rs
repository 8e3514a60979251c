//! `AuthUser` extractor — verifies the bearer token and re-reads the live
//! user row.
//!
//! The access token carries identity only. Platform role and account
//! status come from the database on every request, so a role change or
//! deactivation takes effect immediately rather than at token expiry.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use workhub_core::error::AppError;
use workhub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::invalid_token("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::invalid_token("Invalid Authorization header format"))?;

        let verified = state.jwt_decoder.verify_access(token)?;

        let user = state
            .user_repo
            .find_by_id(verified.user_id)
            .await
            .map_err(ApiError::from)?
            .filter(|u| u.active)
            .ok_or_else(|| AppError::invalid_token("Unknown or deactivated user"))?;

        Ok(AuthUser(RequestContext::new(
            user.id,
            user.email,
            user.platform_role,
        )))
    }
}
