//! Typed context values threaded through the request pipeline.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use workhub_entity::user::PlatformRole;

/// Output of the authenticate stage: who is calling.
///
/// Carries only identity facts established from the verified access token
/// and the live user row. Tenant-level authority is never cached here —
/// it is re-derived per request by the membership authority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's email.
    pub email: String,
    /// The user's platform role, read from the database for this request.
    pub platform_role: PlatformRole,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, email: String, platform_role: PlatformRole) -> Self {
        Self {
            user_id,
            email,
            platform_role,
        }
    }

    /// Returns whether the caller is a platform admin.
    pub fn is_platform_admin(&self) -> bool {
        self.platform_role == PlatformRole::PlatformAdmin
    }
}

/// Output of the resolve-tenant stage: which tenant the request targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantContext {
    /// The resolved tenant's ID.
    pub tenant_id: Uuid,
    /// The canonical slug.
    pub slug: String,
}

impl TenantContext {
    /// Creates a new tenant context.
    pub fn new(tenant_id: Uuid, slug: String) -> Self {
        Self { tenant_id, slug }
    }
}
