//! Member handlers — listing and role management within a tenant.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use crate::dto::request::ChangeRoleRequest;
use crate::dto::response::{MemberResponse, MessageResponse, PageBody};
use crate::error::ApiError;
use crate::extractors::{ActiveMember, PaginationParams, TenantAdmin};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MemberPathParams {
    #[allow(dead_code)]
    slug: String,
    user_id: Uuid,
}

/// GET /api/tenants/{slug}/members (any active member)
pub async fn list_members(
    State(state): State<AppState>,
    member: ActiveMember,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PageBody<MemberResponse>>, ApiError> {
    let page = state
        .membership_authority
        .list_members(member.tenant.tenant_id, &pagination.into_page_request())
        .await?;

    Ok(Json(PageBody::from_page(page, MemberResponse::from)))
}

/// PUT /api/tenants/{slug}/members/{user_id}/role (tenant admin)
pub async fn change_member_role(
    State(state): State<AppState>,
    admin: TenantAdmin,
    Path(params): Path<MemberPathParams>,
    Json(req): Json<ChangeRoleRequest>,
) -> Result<Json<MemberResponse>, ApiError> {
    let membership = state
        .membership_authority
        .change_role(&admin.user, admin.tenant.tenant_id, params.user_id, req.role)
        .await?;

    Ok(Json(membership.into()))
}

/// DELETE /api/tenants/{slug}/members/{user_id} (tenant admin)
pub async fn remove_member(
    State(state): State<AppState>,
    admin: TenantAdmin,
    Path(params): Path<MemberPathParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .membership_authority
        .remove(&admin.user, admin.tenant.tenant_id, params.user_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Member removed".to_string(),
    }))
}
