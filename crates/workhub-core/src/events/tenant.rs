//! Tenant-related domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to tenant lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TenantEvent {
    /// A tenant was created.
    Created {
        /// The tenant.
        tenant_id: Uuid,
        /// The canonical slug.
        slug: String,
        /// Who created it.
        actor_id: Uuid,
    },
    /// A tenant was archived.
    Archived {
        /// The tenant.
        tenant_id: Uuid,
        /// Who archived it.
        actor_id: Uuid,
    },
    /// A tenant was soft-deleted.
    Deleted {
        /// The tenant.
        tenant_id: Uuid,
        /// Who deleted it.
        actor_id: Uuid,
    },
}

impl TenantEvent {
    /// Short machine-readable action name.
    pub fn action(&self) -> &'static str {
        match self {
            Self::Created { .. } => "tenant.created",
            Self::Archived { .. } => "tenant.archived",
            Self::Deleted { .. } => "tenant.deleted",
        }
    }
}
