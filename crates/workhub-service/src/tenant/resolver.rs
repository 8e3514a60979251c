//! Tenant resolver — maps a request-supplied identifier to a live tenant.
//!
//! Fails closed: an archived or soft-deleted tenant produces exactly the
//! same `TenantNotFound` as one that never existed, so an unauthorized
//! probe learns nothing about tenant state.

use std::sync::Arc;

use uuid::Uuid;

use workhub_core::error::AppError;
use workhub_database::repositories::tenant::TenantRepository;
use workhub_entity::tenant::{Tenant, normalize_slug};

use crate::context::TenantContext;

/// Resolves tenant identifiers supplied by request paths.
#[derive(Debug, Clone)]
pub struct TenantResolver {
    tenants: Arc<TenantRepository>,
}

impl TenantResolver {
    /// Creates a new resolver.
    pub fn new(tenants: Arc<TenantRepository>) -> Self {
        Self { tenants }
    }

    /// Resolve a slug from a request path to a live tenant.
    pub async fn resolve_slug(&self, raw_slug: &str) -> Result<TenantContext, AppError> {
        let slug = normalize_slug(raw_slug);
        let tenant = self
            .tenants
            .find_live_by_slug(&slug)
            .await?
            .ok_or_else(AppError::tenant_not_found)?;

        Ok(TenantContext::new(tenant.id, tenant.slug))
    }

    /// Resolve a tenant id to a live tenant.
    pub async fn resolve_id(&self, id: Uuid) -> Result<TenantContext, AppError> {
        let tenant = self
            .tenants
            .find_live_by_id(id)
            .await?
            .ok_or_else(AppError::tenant_not_found)?;

        Ok(TenantContext::new(tenant.id, tenant.slug))
    }

    /// Fetch the full live tenant record behind a context.
    pub async fn fetch(&self, ctx: &TenantContext) -> Result<Tenant, AppError> {
        self.tenants
            .find_live_by_id(ctx.tenant_id)
            .await?
            .ok_or_else(AppError::tenant_not_found)
    }
}
