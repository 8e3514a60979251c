//! Invite lifecycle implementation.
//!
//! State machine: `pending → accepted | revoked | expired`, all terminal.
//! Expiry is swept lazily before listing and acceptance; correctness
//! depends only on never accepting past the expiry instant, not on sweep
//! timing.

use std::sync::Arc;

use chrono::Utc;
use rand::RngCore;
use tracing::info;
use uuid::Uuid;

use workhub_core::config::invite::InviteConfig;
use workhub_core::error::AppError;
use workhub_core::events::InviteEvent;
use workhub_core::traits::AuditSink;
use workhub_core::types::pagination::{PageRequest, PageResponse};
use workhub_auth::digest::sha256_hex;
use workhub_database::repositories::invite::InviteRepository;
use workhub_entity::invite::model::CreateInvite;
use workhub_entity::invite::{Invite, InviteStatus};
use workhub_entity::membership::{Membership, TenantRole};

use crate::context::RequestContext;
use crate::membership::MembershipAuthority;

/// A freshly created invite together with its raw token.
///
/// The raw token exists only in this value; it is shown to the inviter
/// once and cannot be recovered afterwards.
#[derive(Debug, Clone)]
pub struct CreatedInvite {
    /// The persisted invite.
    pub invite: Invite,
    /// The single-use raw token.
    pub raw_token: String,
}

/// Manages single-use tenant invitations.
#[derive(Clone)]
pub struct InviteLifecycle {
    invites: Arc<InviteRepository>,
    memberships: Arc<MembershipAuthority>,
    audit: Arc<dyn AuditSink>,
    config: InviteConfig,
}

impl std::fmt::Debug for InviteLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InviteLifecycle").finish_non_exhaustive()
    }
}

impl InviteLifecycle {
    /// Creates a new invite lifecycle service.
    pub fn new(
        invites: Arc<InviteRepository>,
        memberships: Arc<MembershipAuthority>,
        audit: Arc<dyn AuditSink>,
        config: InviteConfig,
    ) -> Self {
        Self {
            invites,
            memberships,
            audit,
            config,
        }
    }

    /// Issue an invite.
    ///
    /// At most one pending invite may exist per `(tenant, email)`; the
    /// storage constraint turns a concurrent duplicate into
    /// `DuplicateInvite`.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        tenant_id: Uuid,
        email: &str,
        role: TenantRole,
    ) -> Result<CreatedInvite, AppError> {
        let email = email.trim().to_ascii_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::validation("A valid email address is required"));
        }

        let raw_token = generate_invite_token();
        let expires_at = Utc::now() + chrono::Duration::hours(self.config.ttl_hours as i64);

        let invite = self
            .invites
            .create(&CreateInvite {
                tenant_id,
                email: email.clone(),
                role,
                token_hash: sha256_hex(&raw_token),
                expires_at,
                invited_by: ctx.user_id,
            })
            .await?;

        info!(tenant_id = %tenant_id, invite_id = %invite.id, "Invite created");
        self.audit
            .record(
                Some(ctx.user_id),
                Some(tenant_id),
                InviteEvent::Created {
                    tenant_id,
                    invite_id: invite.id,
                    email,
                    role: role.to_string(),
                    actor_id: ctx.user_id,
                }
                .into(),
            )
            .await;

        Ok(CreatedInvite { invite, raw_token })
    }

    /// List a tenant's invites, sweeping overdue pending rows first.
    pub async fn list(
        &self,
        tenant_id: Uuid,
        status: Option<InviteStatus>,
        page: &PageRequest,
    ) -> Result<PageResponse<Invite>, AppError> {
        self.invites.sweep_expired(tenant_id).await?;
        self.invites.find_by_tenant(tenant_id, status, page).await
    }

    /// Revoke a pending invite.
    ///
    /// Already accepted, expired, or revoked invites answer exactly like
    /// an unknown id, so the caller cannot probe invite state.
    pub async fn revoke(
        &self,
        ctx: &RequestContext,
        tenant_id: Uuid,
        invite_id: Uuid,
    ) -> Result<(), AppError> {
        self.invites.sweep_expired(tenant_id).await?;

        if !self.invites.mark_revoked(tenant_id, invite_id).await? {
            return Err(AppError::not_found("Invite not found"));
        }

        self.audit
            .record(
                Some(ctx.user_id),
                Some(tenant_id),
                InviteEvent::Revoked {
                    tenant_id,
                    invite_id,
                    actor_id: ctx.user_id,
                }
                .into(),
            )
            .await;

        Ok(())
    }

    /// Accept an invite by raw token.
    ///
    /// Absent, non-pending, and expired invites all fail with the same
    /// `InvalidInvite`. On success the membership authority materializes
    /// an active membership with the invite's role; if the accepter
    /// already holds an active membership the call is a no-op on it, so
    /// retries cannot duplicate or demote anything.
    pub async fn accept(
        &self,
        ctx: &RequestContext,
        tenant_id: Uuid,
        raw_token: &str,
    ) -> Result<Membership, AppError> {
        self.invites.sweep_expired(tenant_id).await?;

        let token_hash = sha256_hex(raw_token);
        let invite = self
            .invites
            .find_by_token_hash(tenant_id, &token_hash)
            .await?
            .ok_or_else(AppError::invalid_invite)?;

        let accepted = self
            .invites
            .mark_accepted(tenant_id, invite.id, ctx.user_id)
            .await?
            .ok_or_else(AppError::invalid_invite)?;

        let membership = match self
            .memberships
            .get_active_membership(tenant_id, ctx.user_id)
            .await?
        {
            Some(existing) => existing,
            None => {
                self.memberships
                    .upsert_role(ctx, tenant_id, ctx.user_id, accepted.role)
                    .await?
            }
        };

        info!(
            tenant_id = %tenant_id,
            invite_id = %accepted.id,
            user_id = %ctx.user_id,
            "Invite accepted"
        );
        self.audit
            .record(
                Some(ctx.user_id),
                Some(tenant_id),
                InviteEvent::Accepted {
                    tenant_id,
                    invite_id: accepted.id,
                    actor_id: ctx.user_id,
                }
                .into(),
            )
            .await;

        Ok(membership)
    }
}

/// Generate a high-entropy single-use invite token from the OS CSPRNG.
fn generate_invite_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_long_and_unique() {
        let a = generate_invite_token();
        let b = generate_invite_token();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
        assert!(a.bytes().all(|c| c.is_ascii_hexdigit()));
    }
}
