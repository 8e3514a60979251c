//! Dependent-record counting capability.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;

/// Counts records that depend on a tenant.
///
/// Used to decide soft-delete eligibility. The counter is always wired at
/// startup; a missing implementation is a configuration error, never a
/// runtime probe.
#[async_trait]
pub trait DependencyCounter: Send + Sync + 'static {
    /// Number of active memberships in the tenant.
    async fn count_memberships(&self, tenant_id: Uuid) -> AppResult<i64>;

    /// Number of pending invites in the tenant.
    async fn count_pending_invites(&self, tenant_id: Uuid) -> AppResult<i64>;
}
