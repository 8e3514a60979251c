//! Audit log repository implementation.

use sqlx::PgPool;

use workhub_core::error::{AppError, ErrorKind};
use workhub_core::result::AppResult;
use workhub_entity::audit::model::{AuditLogEntry, CreateAuditLogEntry};

/// Repository for append-only audit log entries.
#[derive(Debug, Clone)]
pub struct AuditLogRepository {
    pool: PgPool,
}

impl AuditLogRepository {
    /// Create a new audit log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append an audit log entry.
    pub async fn create(&self, data: &CreateAuditLogEntry) -> AppResult<AuditLogEntry> {
        sqlx::query_as::<_, AuditLogEntry>(
            "INSERT INTO audit_log (actor_id, tenant_id, action, details) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.actor_id)
        .bind(data.tenant_id)
        .bind(&data.action)
        .bind(&data.details)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create audit entry", e))
    }
}
