//! Membership entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::TenantRole;
use super::status::MembershipStatus;

/// The join record granting a user a role inside a specific tenant.
///
/// `(tenant_id, user_id)` is unique: re-inviting or re-promoting mutates
/// the existing row, never creates a second one. Only `active` memberships
/// confer access, and removal is a soft transition that keeps the row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Membership {
    /// Unique row identifier.
    pub id: Uuid,
    /// The tenant.
    pub tenant_id: Uuid,
    /// The member.
    pub user_id: Uuid,
    /// The member's role within the tenant.
    pub role: TenantRole,
    /// Membership status.
    pub status: MembershipStatus,
    /// When the membership was created.
    pub created_at: DateTime<Utc>,
    /// When the membership was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Membership {
    /// Whether this membership currently confers access.
    pub fn is_active(&self) -> bool {
        self.status == MembershipStatus::Active
    }

    /// Whether this membership is an active tenant admin.
    pub fn is_active_admin(&self) -> bool {
        self.is_active() && self.role == TenantRole::TenantAdmin
    }
}
