//! Refresh session repository implementation.
//!
//! Rotation is one conditional UPDATE keyed on `revoked_at IS NULL`. Two
//! concurrent refresh calls on the same session cannot both succeed: the
//! loser sees zero rows affected and is treated as a reuse signal by the
//! caller.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use workhub_core::error::{AppError, ErrorKind};
use workhub_core::result::AppResult;
use workhub_entity::session::RefreshSession;

/// Repository for refresh session rows.
#[derive(Debug, Clone)]
pub struct RefreshSessionRepository {
    pool: PgPool,
}

impl RefreshSessionRepository {
    /// Create a new refresh session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a session row for a user.
    ///
    /// The row is created with a placeholder hash before the refresh token
    /// exists, because the token embeds this row's id; the caller fills in
    /// the real hash right after minting.
    pub async fn create(
        &self,
        user_id: Uuid,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<RefreshSession> {
        sqlx::query_as::<_, RefreshSession>(
            "INSERT INTO refresh_sessions (user_id, token_hash, expires_at) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(user_id)
        .bind(token_hash)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))
    }

    /// Overwrite the token hash of an unrevoked session.
    pub async fn fill_token_hash(&self, id: Uuid, token_hash: &str) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE refresh_sessions SET token_hash = $2 \
             WHERE id = $1 AND revoked_at IS NULL",
        )
        .bind(id)
        .bind(token_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to store session token hash", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::internal("Session vanished before token storage"));
        }
        Ok(())
    }

    /// Find a usable session: right id, right owner, unrevoked, unexpired.
    pub async fn find_usable(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<RefreshSession>> {
        sqlx::query_as::<_, RefreshSession>(
            "SELECT * FROM refresh_sessions \
             WHERE id = $1 AND user_id = $2 AND revoked_at IS NULL AND expires_at > NOW()",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find session", e))
    }

    /// Rotate a session: overwrite hash and expiry, stamp `rotated_at`.
    ///
    /// Conditioned on `revoked_at IS NULL` so a session revoked between
    /// lookup and rotation loses. Returns `true` when the rotation took.
    pub async fn rotate(
        &self,
        id: Uuid,
        user_id: Uuid,
        new_hash: &str,
        new_expires_at: DateTime<Utc>,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE refresh_sessions \
             SET token_hash = $3, expires_at = $4, rotated_at = NOW() \
             WHERE id = $1 AND user_id = $2 AND revoked_at IS NULL AND expires_at > NOW()",
        )
        .bind(id)
        .bind(user_id)
        .bind(new_hash)
        .bind(new_expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to rotate session", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Revoke a single session. Idempotent.
    pub async fn revoke(&self, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE refresh_sessions SET revoked_at = NOW() \
             WHERE id = $1 AND user_id = $2 AND revoked_at IS NULL",
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to revoke session", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Revoke every unrevoked session of a user. Returns how many rows
    /// were revoked.
    pub async fn revoke_all_for_user(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE refresh_sessions SET revoked_at = NOW() \
             WHERE user_id = $1 AND revoked_at IS NULL",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to revoke user sessions", e)
        })?;

        Ok(result.rows_affected())
    }
}
