//! Membership authority implementation.
//!
//! `get_active_membership` is the single RBAC primitive; every gate is
//! built on it and every gate re-queries at its point of use. Nothing is
//! cached across requests, so a demotion is effective on the member's
//! very next request.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use workhub_core::error::AppError;
use workhub_core::events::MembershipEvent;
use workhub_core::traits::AuditSink;
use workhub_core::types::pagination::{PageRequest, PageResponse};
use workhub_database::repositories::membership::MembershipRepository;
use workhub_entity::membership::{Membership, MembershipStatus, TenantRole};

use crate::context::RequestContext;

/// The tenant-level authorization decision function.
#[derive(Clone)]
pub struct MembershipAuthority {
    memberships: Arc<MembershipRepository>,
    audit: Arc<dyn AuditSink>,
}

impl std::fmt::Debug for MembershipAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MembershipAuthority").finish_non_exhaustive()
    }
}

impl MembershipAuthority {
    /// Creates a new membership authority.
    pub fn new(memberships: Arc<MembershipRepository>, audit: Arc<dyn AuditSink>) -> Self {
        Self { memberships, audit }
    }

    /// The RBAC primitive: the caller's active membership, or none.
    pub async fn get_active_membership(
        &self,
        tenant_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Membership>, AppError> {
        self.memberships.find_active(tenant_id, user_id).await
    }

    /// Gate: the user must hold an active membership.
    ///
    /// Fails with 403, not 404 — the tenant's existence was already
    /// established by the resolver, so there is nothing left to hide.
    pub async fn require_membership(
        &self,
        tenant_id: Uuid,
        user_id: Uuid,
    ) -> Result<Membership, AppError> {
        self.get_active_membership(tenant_id, user_id)
            .await?
            .ok_or_else(|| AppError::forbidden("Not a member of this tenant"))
    }

    /// Gate: the user must hold an active membership with one of the
    /// allowed roles. Re-fetches at the point of use.
    pub async fn require_role(
        &self,
        tenant_id: Uuid,
        user_id: Uuid,
        allowed: &[TenantRole],
    ) -> Result<Membership, AppError> {
        let membership = self.require_membership(tenant_id, user_id).await?;
        if !allowed.contains(&membership.role) {
            return Err(AppError::forbidden("Insufficient tenant role"));
        }
        Ok(membership)
    }

    /// List active members of a tenant.
    pub async fn list_members(
        &self,
        tenant_id: Uuid,
        page: &PageRequest,
    ) -> Result<PageResponse<Membership>, AppError> {
        self.memberships.find_active_by_tenant(tenant_id, page).await
    }

    /// Idempotently create or reactivate a membership with the given role
    /// and `active` status. Used by admin assignment and invite
    /// acceptance; the same `(tenant, user)` pair always lands on one row.
    pub async fn upsert_role(
        &self,
        ctx: &RequestContext,
        tenant_id: Uuid,
        user_id: Uuid,
        role: TenantRole,
    ) -> Result<Membership, AppError> {
        let membership = self
            .memberships
            .upsert_active(tenant_id, user_id, role)
            .await?
            .ok_or_else(last_admin_conflict)?;

        info!(
            tenant_id = %tenant_id,
            user_id = %user_id,
            role = %role,
            "Membership assigned"
        );
        self.audit
            .record(
                Some(ctx.user_id),
                Some(tenant_id),
                MembershipEvent::Assigned {
                    tenant_id,
                    user_id,
                    role: role.to_string(),
                    actor_id: ctx.user_id,
                }
                .into(),
            )
            .await;

        Ok(membership)
    }

    /// Change the role of an existing active member.
    pub async fn change_role(
        &self,
        ctx: &RequestContext,
        tenant_id: Uuid,
        user_id: Uuid,
        role: TenantRole,
    ) -> Result<Membership, AppError> {
        let updated = self.memberships.change_role(tenant_id, user_id, role).await?;

        let membership = match updated {
            Some(m) => m,
            None => {
                // The guarded update refused: either no active member, or
                // the change would strip the last active tenant admin.
                return match self.memberships.find_active(tenant_id, user_id).await? {
                    Some(_) => Err(last_admin_conflict()),
                    None => Err(AppError::not_found("Member not found")),
                };
            }
        };

        self.audit
            .record(
                Some(ctx.user_id),
                Some(tenant_id),
                MembershipEvent::RoleChanged {
                    tenant_id,
                    user_id,
                    role: role.to_string(),
                    actor_id: ctx.user_id,
                }
                .into(),
            )
            .await;

        Ok(membership)
    }

    /// Soft-remove a member. The membership row is kept with
    /// `status = removed`; it is never physically deleted.
    pub async fn remove(
        &self,
        ctx: &RequestContext,
        tenant_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), AppError> {
        let updated = self
            .memberships
            .set_status(tenant_id, user_id, MembershipStatus::Removed)
            .await?;

        if updated.is_none() {
            return match self.memberships.find_active(tenant_id, user_id).await? {
                Some(_) => Err(last_admin_conflict()),
                None => Err(AppError::not_found("Member not found")),
            };
        }

        info!(tenant_id = %tenant_id, user_id = %user_id, "Member removed");
        self.audit
            .record(
                Some(ctx.user_id),
                Some(tenant_id),
                MembershipEvent::Removed {
                    tenant_id,
                    user_id,
                    actor_id: ctx.user_id,
                }
                .into(),
            )
            .await;

        Ok(())
    }
}

fn last_admin_conflict() -> AppError {
    AppError::conflict("Cannot demote or remove the last active tenant admin")
}
