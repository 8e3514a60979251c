//! Audit log entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An append-only audit record of a security-relevant transition.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditLogEntry {
    /// Unique entry identifier.
    pub id: Uuid,
    /// The acting user, when known.
    pub actor_id: Option<Uuid>,
    /// The tenant scope, when the action is tenant-scoped.
    pub tenant_id: Option<Uuid>,
    /// Machine-readable action name, e.g. `session.login`.
    pub action: String,
    /// Structured event payload.
    pub details: serde_json::Value,
    /// When the entry was recorded.
    pub created_at: DateTime<Utc>,
}

/// Data required to create an audit entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuditLogEntry {
    /// The acting user, when known.
    pub actor_id: Option<Uuid>,
    /// The tenant scope, when applicable.
    pub tenant_id: Option<Uuid>,
    /// Machine-readable action name.
    pub action: String,
    /// Structured event payload.
    pub details: serde_json::Value,
}
