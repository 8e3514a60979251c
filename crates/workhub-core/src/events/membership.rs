//! Membership-related domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to tenant memberships.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MembershipEvent {
    /// A membership was created or reactivated.
    Assigned {
        /// The tenant.
        tenant_id: Uuid,
        /// The member.
        user_id: Uuid,
        /// The assigned tenant role.
        role: String,
        /// Who performed the assignment.
        actor_id: Uuid,
    },
    /// A member's tenant role changed.
    RoleChanged {
        /// The tenant.
        tenant_id: Uuid,
        /// The member.
        user_id: Uuid,
        /// The new tenant role.
        role: String,
        /// Who performed the change.
        actor_id: Uuid,
    },
    /// A member was soft-removed from the tenant.
    Removed {
        /// The tenant.
        tenant_id: Uuid,
        /// The removed member.
        user_id: Uuid,
        /// Who performed the removal.
        actor_id: Uuid,
    },
}

impl MembershipEvent {
    /// Short machine-readable action name.
    pub fn action(&self) -> &'static str {
        match self {
            Self::Assigned { .. } => "membership.assigned",
            Self::RoleChanged { .. } => "membership.role_changed",
            Self::Removed { .. } => "membership.removed",
        }
    }
}
