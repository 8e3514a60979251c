//! Invite repository implementation.
//!
//! The at-most-one-pending-invite rule per `(tenant_id, email)` is a
//! partial unique index, not an application-level check, so two
//! concurrent creates cannot both land. State transitions are
//! conditional UPDATEs on `status = 'pending'`; zero rows affected means
//! the invite was already terminal.

use sqlx::PgPool;
use uuid::Uuid;

use workhub_core::error::{AppError, ErrorKind};
use workhub_core::result::AppResult;
use workhub_core::types::pagination::{PageRequest, PageResponse};
use workhub_entity::invite::model::CreateInvite;
use workhub_entity::invite::{Invite, InviteStatus};

/// Repository for invite rows.
#[derive(Debug, Clone)]
pub struct InviteRepository {
    pool: PgPool,
}

impl InviteRepository {
    /// Create a new invite repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a pending invite.
    pub async fn create(&self, data: &CreateInvite) -> AppResult<Invite> {
        sqlx::query_as::<_, Invite>(
            "INSERT INTO invites (tenant_id, email, role, token_hash, expires_at, invited_by) \
             VALUES ($1, LOWER($2), $3, $4, $5, $6) RETURNING *",
        )
        .bind(data.tenant_id)
        .bind(&data.email)
        .bind(data.role)
        .bind(&data.token_hash)
        .bind(data.expires_at)
        .bind(data.invited_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("uq_invites_pending") =>
            {
                AppError::duplicate_invite()
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create invite", e),
        })
    }

    /// Find an invite within a tenant by its token hash.
    pub async fn find_by_token_hash(
        &self,
        tenant_id: Uuid,
        token_hash: &str,
    ) -> AppResult<Option<Invite>> {
        sqlx::query_as::<_, Invite>(
            "SELECT * FROM invites WHERE tenant_id = $1 AND token_hash = $2",
        )
        .bind(tenant_id)
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find invite by token", e)
        })
    }

    /// List a tenant's invites, optionally filtered by status.
    pub async fn find_by_tenant(
        &self,
        tenant_id: Uuid,
        status: Option<InviteStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Invite>> {
        let total: i64 = match status {
            Some(s) => {
                sqlx::query_scalar(
                    "SELECT COUNT(*) FROM invites WHERE tenant_id = $1 AND status = $2",
                )
                .bind(tenant_id)
                .bind(s)
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM invites WHERE tenant_id = $1")
                    .bind(tenant_id)
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count invites", e))?;

        let invites = match status {
            Some(s) => {
                sqlx::query_as::<_, Invite>(
                    "SELECT * FROM invites WHERE tenant_id = $1 AND status = $2 \
                     ORDER BY created_at DESC LIMIT $3 OFFSET $4",
                )
                .bind(tenant_id)
                .bind(s)
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Invite>(
                    "SELECT * FROM invites WHERE tenant_id = $1 \
                     ORDER BY created_at DESC LIMIT $2 OFFSET $3",
                )
                .bind(tenant_id)
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list invites", e))?;

        Ok(PageResponse::new(
            invites,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Transition a pending, unexpired invite to `accepted`.
    ///
    /// Returns `None` when the invite was not pending anymore (or never
    /// existed); the caller reports all such cases identically.
    pub async fn mark_accepted(
        &self,
        tenant_id: Uuid,
        invite_id: Uuid,
        accepted_by: Uuid,
    ) -> AppResult<Option<Invite>> {
        sqlx::query_as::<_, Invite>(
            "UPDATE invites \
             SET status = 'accepted', accepted_by = $3, updated_at = NOW() \
             WHERE id = $2 AND tenant_id = $1 AND status = 'pending' AND expires_at > NOW() \
             RETURNING *",
        )
        .bind(tenant_id)
        .bind(invite_id)
        .bind(accepted_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to accept invite", e))
    }

    /// Transition a pending invite to `revoked`. Returns `true` if a row
    /// changed.
    pub async fn mark_revoked(&self, tenant_id: Uuid, invite_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE invites SET status = 'revoked', updated_at = NOW() \
             WHERE id = $2 AND tenant_id = $1 AND status = 'pending'",
        )
        .bind(tenant_id)
        .bind(invite_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to revoke invite", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Lazily expire a tenant's overdue pending invites. Returns how many
    /// rows flipped.
    pub async fn sweep_expired(&self, tenant_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE invites SET status = 'expired', updated_at = NOW() \
             WHERE tenant_id = $1 AND status = 'pending' AND expires_at <= NOW()",
        )
        .bind(tenant_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to sweep invites", e))?;

        Ok(result.rows_affected())
    }

    /// Count pending invites in a tenant.
    pub async fn count_pending_by_tenant(&self, tenant_id: Uuid) -> AppResult<i64> {
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
