//! Membership repository implementation.
//!
//! `(tenant_id, user_id)` uniqueness is a database constraint; assignment
//! goes through `ON CONFLICT` upserts rather than check-then-insert, so
//! two concurrent assignments for the same user collapse onto one row.
//!
//! Demotions and removals are guarded in SQL: the statement refuses to
//! strip the last active tenant admin. The guard subquery takes `FOR
//! UPDATE` row locks on the tenant's active admin rows, which serializes
//! concurrent demotions within a tenant.

use sqlx::PgPool;
use uuid::Uuid;

use workhub_core::error::{AppError, ErrorKind};
use workhub_core::result::AppResult;
use workhub_core::types::pagination::{PageRequest, PageResponse};
use workhub_entity::membership::{Membership, MembershipStatus, TenantRole};

/// Repository for membership rows.
#[derive(Debug, Clone)]
pub struct MembershipRepository {
    pool: PgPool,
}

impl MembershipRepository {
    /// Create a new membership repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the membership row for `(tenant_id, user_id)` regardless of status.
    pub async fn find(&self, tenant_id: Uuid, user_id: Uuid) -> AppResult<Option<Membership>> {
        sqlx::query_as::<_, Membership>(
            "SELECT * FROM memberships WHERE tenant_id = $1 AND user_id = $2",
        )
        .bind(tenant_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find membership", e))
    }

    /// Find the active membership for `(tenant_id, user_id)`, if any.
    pub async fn find_active(
        &self,
        tenant_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<Membership>> {
        sqlx::query_as::<_, Membership>(
            "SELECT * FROM memberships \
             WHERE tenant_id = $1 AND user_id = $2 AND status = 'active'",
        )
        .bind(tenant_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find active membership", e)
        })
    }

    /// List active members of a tenant with pagination.
    pub async fn find_active_by_tenant(
        &self,
        tenant_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Membership>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM memberships WHERE tenant_id = $1 AND status = 'active'",
        )
        .bind(tenant_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count members", e))?;

        let members = sqlx::query_as::<_, Membership>(
            "SELECT * FROM memberships WHERE tenant_id = $1 AND status = 'active' \
             ORDER BY created_at ASC LIMIT $2 OFFSET $3",
        )
        .bind(tenant_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list members", e))?;

        Ok(PageResponse::new(
            members,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Count active memberships in a tenant.
    pub async fn count_active_by_tenant(&self, tenant_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM memberships WHERE tenant_id = $1 AND status = 'active'",
        )
        .bind(tenant_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count active members", e)
        })
    }

    /// Create or reactivate the membership for `(tenant_id, user_id)` with
    /// the given role and `active` status.
    ///
    /// Returns `None` when the row exists but the update was refused
    /// because it would demote the last active tenant admin.
    pub async fn upsert_active(
        &self,
        tenant_id: Uuid,
        user_id: Uuid,
        role: TenantRole,
    ) -> AppResult<Option<Membership>> {
        sqlx::query_as::<_, Membership>(
            "INSERT INTO memberships (tenant_id, user_id, role, status) \
             VALUES ($1, $2, $3, 'active') \
             ON CONFLICT (tenant_id, user_id) DO UPDATE \
             SET role = EXCLUDED.role, status = 'active', updated_at = NOW() \
             WHERE EXCLUDED.role = 'tenant_admin' \
                OR NOT (memberships.role = 'tenant_admin' AND memberships.status = 'active') \
                OR (SELECT COUNT(*) FROM (SELECT 1 FROM memberships m \
                      WHERE m.tenant_id = $1 AND m.role = 'tenant_admin' AND m.status = 'active' \
                      FOR UPDATE) admins) > 1 \
             RETURNING *",
        )
        .bind(tenant_id)
        .bind(user_id)
        .bind(role)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert membership", e))
    }

    /// Change the role of an active membership.
    ///
    /// Returns `None` when no active row matched or the change would
    /// demote the last active tenant admin; the caller disambiguates.
    pub async fn change_role(
        &self,
        tenant_id: Uuid,
        user_id: Uuid,
        role: TenantRole,
    ) -> AppResult<Option<Membership>> {
        sqlx::query_as::<_, Membership>(
            "UPDATE memberships SET role = $3, updated_at = NOW() \
             WHERE tenant_id = $1 AND user_id = $2 AND status = 'active' \
               AND ($3 = 'tenant_admin'::tenant_role \
                 OR role <> 'tenant_admin'::tenant_role \
                 OR (SELECT COUNT(*) FROM (SELECT 1 FROM memberships m \
                       WHERE m.tenant_id = $1 AND m.role = 'tenant_admin' AND m.status = 'active' \
                       FOR UPDATE) admins) > 1) \
             RETURNING *",
        )
        .bind(tenant_id)
        .bind(user_id)
        .bind(role)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to change membership role", e)
        })
    }

    /// Transition the status of an existing membership. Removal is soft;
    /// the row is never deleted.
    ///
    /// Returns `None` when no row matched or the transition would leave
    /// the tenant without an active tenant admin.
    pub async fn set_status(
        &self,
        tenant_id: Uuid,
        user_id: Uuid,
        status: MembershipStatus,
    ) -> AppResult<Option<Membership>> {
        sqlx::query_as::<_, Membership>(
            "UPDATE memberships SET status = $3, updated_at = NOW() \
             WHERE tenant_id = $1 AND user_id = $2 \
               AND ($3 = 'active'::membership_status \
                 OR NOT (role = 'tenant_admin' AND status = 'active') \
                 OR (SELECT COUNT(*) FROM (SELECT 1 FROM memberships m \
                       WHERE m.tenant_id = $1 AND m.role = 'tenant_admin' AND m.status = 'active' \
                       FOR UPDATE) admins) > 1) \
             RETURNING *",
        )
        .bind(tenant_id)
        .bind(user_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to set membership status", e)
        })
    }
}
