//! Tenant entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An isolated customer organization.
///
/// All tenant-scoped data is partitioned by `id`. The slug is the canonical
/// routing key. Archived or soft-deleted tenants must be invisible to every
/// resolver query.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tenant {
    /// Unique tenant identifier.
    pub id: Uuid,
    /// Unique URL-safe slug, lowercase.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Whether the tenant is archived (invisible but retained).
    pub archived: bool,
    /// Soft-delete timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
    /// When the tenant was created.
    pub created_at: DateTime<Utc>,
    /// When the tenant was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Tenant {
    /// Whether the tenant should be visible to resolver queries.
    pub fn is_live(&self) -> bool {
        !self.archived && self.deleted_at.is_none()
    }
}

/// Data required to create a new tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTenant {
    /// Canonical slug, already normalized.
    pub slug: String,
    /// Display name.
    pub name: String,
}
