//! `TenantScope` extractor — resolves the `{slug}` path segment to a live
//! tenant.
//!
//! Resolution fails closed with 404 for unknown, archived, and deleted
//! tenants alike.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::Deserialize;

use workhub_core::error::AppError;
use workhub_service::context::TenantContext;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct SlugParams {
    slug: String,
}

/// Extracted tenant scope available in tenant-scoped handlers.
#[derive(Debug, Clone)]
pub struct TenantScope(pub TenantContext);

impl std::ops::Deref for TenantScope {
    type Target = TenantContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for TenantScope {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<SlugParams>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::tenant_not_found())?;

        let ctx = state.tenant_resolver.resolve_slug(&params.slug).await?;
        Ok(TenantScope(ctx))
    }
}
