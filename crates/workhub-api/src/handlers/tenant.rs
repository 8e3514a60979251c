//! Tenant handlers — platform administration and member-visible lookup.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use validator::Validate;

use workhub_core::error::AppError;

use crate::dto::request::CreateTenantRequest;
use crate::dto::response::{MessageResponse, PageBody, TenantResponse};
use crate::error::ApiError;
use crate::extractors::{ActiveMember, AuthUser, PaginationParams, TenantScope};
use crate::state::AppState;

/// POST /api/tenants (platform admin)
pub async fn create_tenant(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateTenantRequest>,
) -> Result<(StatusCode, Json<TenantResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let tenant = state
        .tenant_service
        .create(&auth, &req.slug, &req.name, req.first_admin_id)
        .await?;

    Ok((StatusCode::CREATED, Json(tenant.into())))
}

/// GET /api/tenants (platform admin)
pub async fn list_tenants(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PageBody<TenantResponse>>, ApiError> {
    let page = state
        .tenant_service
        .list(&auth, &pagination.into_page_request())
        .await?;

    Ok(Json(PageBody::from_page(page, TenantResponse::from)))
}

/// GET /api/tenants/{slug} (any active member)
pub async fn get_tenant(
    State(state): State<AppState>,
    member: ActiveMember,
) -> Result<Json<TenantResponse>, ApiError> {
    let tenant = state.tenant_resolver.fetch(&member.tenant).await?;
    Ok(Json(tenant.into()))
}

/// POST /api/tenants/{slug}/archive (platform admin)
pub async fn archive_tenant(
    State(state): State<AppState>,
    auth: AuthUser,
    scope: TenantScope,
) -> Result<Json<MessageResponse>, ApiError> {
    state.tenant_service.archive(&auth, scope.tenant_id).await?;
    Ok(Json(MessageResponse {
        message: "Tenant archived".to_string(),
    }))
}

/// DELETE /api/tenants/{slug} (platform admin)
pub async fn delete_tenant(
    State(state): State<AppState>,
    auth: AuthUser,
    scope: TenantScope,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .tenant_service
        .soft_delete(&auth, scope.tenant_id)
        .await?;
    Ok(Json(MessageResponse {
        message: "Tenant deleted".to_string(),
    }))
}
