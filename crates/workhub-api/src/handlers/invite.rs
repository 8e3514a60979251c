//! Invite handlers — issue, list, revoke, accept.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use workhub_core::error::AppError;

use crate::dto::request::{AcceptInviteRequest, CreateInviteRequest, InviteListParams};
use crate::dto::response::{
    CreatedInviteResponse, InviteResponse, MemberResponse, MessageResponse, PageBody,
};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams, TenantAdmin, TenantScope};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct InvitePathParams {
    #[allow(dead_code)]
    slug: String,
    invite_id: Uuid,
}

/// POST /api/tenants/{slug}/invites (tenant admin)
pub async fn create_invite(
    State(state): State<AppState>,
    admin: TenantAdmin,
    Json(req): Json<CreateInviteRequest>,
) -> Result<(StatusCode, Json<CreatedInviteResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let created = state
        .invite_lifecycle
        .create(&admin.user, admin.tenant.tenant_id, &req.email, req.role)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedInviteResponse {
            invite: created.invite.into(),
            token: created.raw_token,
        }),
    ))
}

/// GET /api/tenants/{slug}/invites (tenant admin)
pub async fn list_invites(
    State(state): State<AppState>,
    admin: TenantAdmin,
    Query(filters): Query<InviteListParams>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PageBody<InviteResponse>>, ApiError> {
    let page = state
        .invite_lifecycle
        .list(
            admin.tenant.tenant_id,
            filters.status,
            &pagination.into_page_request(),
        )
        .await?;

    Ok(Json(PageBody::from_page(page, InviteResponse::from)))
}

/// DELETE /api/tenants/{slug}/invites/{invite_id} (tenant admin)
pub async fn revoke_invite(
    State(state): State<AppState>,
    admin: TenantAdmin,
    Path(params): Path<InvitePathParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .invite_lifecycle
        .revoke(&admin.user, admin.tenant.tenant_id, params.invite_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Invite revoked".to_string(),
    }))
}

/// POST /api/tenants/{slug}/invites/accept (any authenticated user)
///
/// The side door into a tenant: the caller has no membership yet and
/// presents the raw invite token instead.
pub async fn accept_invite(
    State(state): State<AppState>,
    auth: AuthUser,
    scope: TenantScope,
    Json(req): Json<AcceptInviteRequest>,
) -> Result<Json<MemberResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let membership = state
        .invite_lifecycle
        .accept(&auth, scope.tenant_id, &req.token)
        .await?;

    Ok(Json(membership.into()))
}
