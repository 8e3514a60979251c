//! Invite-related domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to tenant invitations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InviteEvent {
    /// An invite was issued.
    Created {
        /// The tenant.
        tenant_id: Uuid,
        /// The invite ID.
        invite_id: Uuid,
        /// The invited email (already lowercased).
        email: String,
        /// The role the invite grants.
        role: String,
        /// The inviter.
        actor_id: Uuid,
    },
    /// An invite was accepted and a membership materialized.
    Accepted {
        /// The tenant.
        tenant_id: Uuid,
        /// The invite ID.
        invite_id: Uuid,
        /// The accepting user.
        actor_id: Uuid,
    },
    /// A pending invite was revoked.
    Revoked {
        /// The tenant.
        tenant_id: Uuid,
        /// The invite ID.
        invite_id: Uuid,
        /// Who revoked it.
        actor_id: Uuid,
    },
}

impl InviteEvent {
    /// Short machine-readable action name.
    pub fn action(&self) -> &'static str {
        match self {
            Self::Created { .. } => "invite.created",
            Self::Accepted { .. } => "invite.accepted",
            Self::Revoked { .. } => "invite.revoked",
        }
    }
}
