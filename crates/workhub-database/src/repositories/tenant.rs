//! Tenant repository implementation.
//!
//! Every lookup used for request routing filters on `archived = FALSE AND
//! deleted_at IS NULL`: an archived or soft-deleted tenant is
//! indistinguishable from one that never existed.

use sqlx::PgPool;
use uuid::Uuid;

use workhub_core::error::{AppError, ErrorKind};
use workhub_core::result::AppResult;
use workhub_core::types::pagination::{PageRequest, PageResponse};
use workhub_entity::tenant::model::CreateTenant;
use workhub_entity::tenant::Tenant;

/// Repository for tenant persistence and live-only lookups.
#[derive(Debug, Clone)]
pub struct TenantRepository {
    pool: PgPool,
}

impl TenantRepository {
    /// Create a new tenant repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a live tenant by slug.
    pub async fn find_live_by_slug(&self, slug: &str) -> AppResult<Option<Tenant>> {
        sqlx::query_as::<_, Tenant>(
            "SELECT * FROM tenants WHERE slug = $1 AND archived = FALSE AND deleted_at IS NULL",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find tenant by slug", e)
        })
    }

    /// Find a live tenant by id.
    pub async fn find_live_by_id(&self, id: Uuid) -> AppResult<Option<Tenant>> {
        sqlx::query_as::<_, Tenant>(
            "SELECT * FROM tenants WHERE id = $1 AND archived = FALSE AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find tenant by id", e))
    }

    /// List live tenants with pagination (platform admin view).
    pub async fn find_all_live(&self, page: &PageRequest) -> AppResult<PageResponse<Tenant>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tenants WHERE archived = FALSE AND deleted_at IS NULL",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count tenants", e))?;

        let tenants = sqlx::query_as::<_, Tenant>(
            "SELECT * FROM tenants WHERE archived = FALSE AND deleted_at IS NULL \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tenants", e))?;

        Ok(PageResponse::new(
            tenants,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new tenant.
    pub async fn create(&self, data: &CreateTenant) -> AppResult<Tenant> {
        sqlx::query_as::<_, Tenant>(
            "INSERT INTO tenants (slug, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.slug)
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("tenants_slug_key") =>
            {
                AppError::conflict(format!("Slug '{}' is already in use", data.slug))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create tenant", e),
        })
    }

    /// Archive a live tenant. Returns `true` if a row changed.
    pub async fn archive(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE tenants SET archived = TRUE, updated_at = NOW() \
             WHERE id = $1 AND archived = FALSE AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to archive tenant", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete a tenant. Returns `true` if a row changed.
    pub async fn soft_delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE tenants SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to soft-delete tenant", e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}
