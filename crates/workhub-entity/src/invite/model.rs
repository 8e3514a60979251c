//! Invite entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::membership::TenantRole;

use super::status::InviteStatus;

/// A single-use invitation into a tenant.
///
/// Only the SHA-256 hash of the invite token is persisted; the raw token
/// is returned to the inviter exactly once and cannot be recovered.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Invite {
    /// Unique invite identifier.
    pub id: Uuid,
    /// The tenant the invite belongs to.
    pub tenant_id: Uuid,
    /// Invited email, lowercased.
    pub email: String,
    /// The tenant role the invite grants on acceptance.
    pub role: TenantRole,
    /// SHA-256 hex digest of the raw token.
    #[serde(skip_serializing)]
    pub token_hash: String,
    /// Lifecycle status.
    pub status: InviteStatus,
    /// When the invite stops being acceptable.
    pub expires_at: DateTime<Utc>,
    /// The user who issued the invite.
    pub invited_by: Uuid,
    /// The user who accepted it, once accepted.
    pub accepted_by: Option<Uuid>,
    /// When the invite was created.
    pub created_at: DateTime<Utc>,
    /// When the invite was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Invite {
    /// Whether the invite is past its expiry instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Whether the invite can still be accepted at `now`.
    pub fn is_acceptable_at(&self, now: DateTime<Utc>) -> bool {
        self.status == InviteStatus::Pending && !self.is_expired_at(now)
    }
}

/// Data required to create a new invite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvite {
    /// The tenant.
    pub tenant_id: Uuid,
    /// Invited email, already lowercased.
    pub email: String,
    /// Granted role.
    pub role: TenantRole,
    /// SHA-256 hex digest of the raw token.
    pub token_hash: String,
    /// Expiry instant.
    pub expires_at: DateTime<Utc>,
    /// The inviter.
    pub invited_by: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn invite(status: InviteStatus, expires_in: Duration) -> Invite {
        let now = Utc::now();
        Invite {
            id: Uuid::new_v4(),
            tenant_id: Uuid::new_v4(),
            email: "bob@example.com".into(),
            role: TenantRole::Member,
            token_hash: "deadbeef".into(),
            status,
            expires_at: now + expires_in,
            invited_by: Uuid::new_v4(),
            accepted_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn pending_unexpired_is_acceptable() {
        let inv = invite(InviteStatus::Pending, Duration::hours(1));
        assert!(inv.is_acceptable_at(Utc::now()));
    }

    #[test]
    fn expired_or_terminal_is_not_acceptable() {
        let now = Utc::now();
        assert!(!invite(InviteStatus::Pending, Duration::hours(-1)).is_acceptable_at(now));
        assert!(!invite(InviteStatus::Accepted, Duration::hours(1)).is_acceptable_at(now));
        assert!(!invite(InviteStatus::Revoked, Duration::hours(1)).is_acceptable_at(now));
        assert!(!invite(InviteStatus::Expired, Duration::hours(1)).is_acceptable_at(now));
    }
}
