//! SQL-backed dependency counter.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use workhub_core::error::{AppError, ErrorKind};
use workhub_core::result::AppResult;
use workhub_core::traits::DependencyCounter;

/// Counts tenant-dependent records straight from PostgreSQL.
///
/// Wired at startup wherever a [`DependencyCounter`] is required; there is
/// no runtime probing for optional collaborators.
#[derive(Debug, Clone)]
pub struct SqlDependencyCounter {
    pool: PgPool,
}

impl SqlDependencyCounter {
    /// Create a new counter over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DependencyCounter for SqlDependencyCounter {
    async fn count_memberships(&self, tenant_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM memberships WHERE tenant_id = $1 AND status = 'active'",
        )
        .bind(tenant_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count memberships", e))
    }

    async fn count_pending_invites(&self, tenant_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM invites WHERE tenant_id = $1 AND status = 'pending'",
        )
        .bind(tenant_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count pending invites", e)
        })
    }
}
