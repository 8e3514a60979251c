//! Membership gate extractors — the authorize stage.
//!
//! Both extractors re-run the membership query at the point of use; the
//! answer is never cached from an earlier stage or an earlier request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use workhub_entity::membership::{Membership, TenantRole};
use workhub_service::context::{RequestContext, TenantContext};

use crate::error::ApiError;
use crate::state::AppState;

use super::auth::AuthUser;
use super::tenant::TenantScope;

/// An authenticated caller holding an active membership in the resolved
/// tenant.
#[derive(Debug, Clone)]
pub struct ActiveMember {
    /// Authenticate stage output.
    pub user: RequestContext,
    /// Resolve stage output.
    pub tenant: TenantContext,
    /// Authorize stage output: the caller's active membership.
    pub membership: Membership,
}

impl FromRequestParts<AppState> for ActiveMember {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;
        let TenantScope(tenant) = TenantScope::from_request_parts(parts, state).await?;

        let membership = state
            .membership_authority
            .require_membership(tenant.tenant_id, user.user_id)
            .await?;

        Ok(ActiveMember {
            user,
            tenant,
            membership,
        })
    }
}

/// An authenticated caller holding an active `tenant_admin` membership in
/// the resolved tenant.
#[derive(Debug, Clone)]
pub struct TenantAdmin {
    /// Authenticate stage output.
    pub user: RequestContext,
    /// Resolve stage output.
    pub tenant: TenantContext,
    /// Authorize stage output: the caller's admin membership.
    pub membership: Membership,
}

impl FromRequestParts<AppState> for TenantAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;
        let TenantScope(tenant) = TenantScope::from_request_parts(parts, state).await?;

        let membership = state
            .membership_authority
            .require_role(tenant.tenant_id, user.user_id, &[TenantRole::TenantAdmin])
            .await?;

        Ok(TenantAdmin {
            user,
            tenant,
            membership,
        })
    }
}
