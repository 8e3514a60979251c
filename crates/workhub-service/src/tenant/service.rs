//! Tenant administration — platform-admin gated lifecycle operations.

use std::sync::Arc;

use tracing::info;

use workhub_core::error::AppError;
use workhub_core::events::TenantEvent;
use workhub_core::traits::{AuditSink, DependencyCounter};
use workhub_core::types::pagination::{PageRequest, PageResponse};
use workhub_database::repositories::tenant::TenantRepository;
use workhub_entity::membership::TenantRole;
use workhub_entity::tenant::model::CreateTenant;
use workhub_entity::tenant::slug::validate_slug;
use workhub_entity::tenant::{Tenant, normalize_slug};

use crate::context::RequestContext;
use crate::membership::MembershipAuthority;

/// Platform-level tenant management.
#[derive(Clone)]
pub struct TenantService {
    tenants: Arc<TenantRepository>,
    memberships: Arc<MembershipAuthority>,
    dependencies: Arc<dyn DependencyCounter>,
    audit: Arc<dyn AuditSink>,
}

impl std::fmt::Debug for TenantService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantService").finish_non_exhaustive()
    }
}

impl TenantService {
    /// Creates a new tenant service.
    pub fn new(
        tenants: Arc<TenantRepository>,
        memberships: Arc<MembershipAuthority>,
        dependencies: Arc<dyn DependencyCounter>,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            tenants,
            memberships,
            dependencies,
            audit,
        }
    }

    /// Create a tenant. Platform admin only.
    ///
    /// When `first_admin` is set, that user is assigned as the tenant's
    /// first active tenant admin in the same call.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        slug: &str,
        name: &str,
        first_admin: Option<uuid::Uuid>,
    ) -> Result<Tenant, AppError> {
        self.require_platform_admin(ctx)?;

        let slug = normalize_slug(slug);
        validate_slug(&slug)?;

        let tenant = self
            .tenants
            .create(&CreateTenant {
                slug,
                name: name.to_string(),
            })
            .await?;

        if let Some(admin_id) = first_admin {
            self.memberships
                .upsert_role(ctx, tenant.id, admin_id, TenantRole::TenantAdmin)
                .await?;
        }

        info!(tenant_id = %tenant.id, slug = %tenant.slug, "Tenant created");
        self.audit
            .record(
                Some(ctx.user_id),
                Some(tenant.id),
                TenantEvent::Created {
                    tenant_id: tenant.id,
                    slug: tenant.slug.clone(),
                    actor_id: ctx.user_id,
                }
                .into(),
            )
            .await;

        Ok(tenant)
    }

    /// List live tenants. Platform admin only.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> Result<PageResponse<Tenant>, AppError> {
        self.require_platform_admin(ctx)?;
        self.tenants.find_all_live(page).await
    }

    /// Archive a live tenant. Platform admin only.
    ///
    /// Archived tenants vanish from resolution but keep all rows.
    pub async fn archive(&self, ctx: &RequestContext, tenant_id: uuid::Uuid) -> Result<(), AppError> {
        self.require_platform_admin(ctx)?;

        if !self.tenants.archive(tenant_id).await? {
            return Err(AppError::tenant_not_found());
        }

        self.audit
            .record(
                Some(ctx.user_id),
                Some(tenant_id),
                TenantEvent::Archived {
                    tenant_id,
                    actor_id: ctx.user_id,
                }
                .into(),
            )
            .await;

        Ok(())
    }

    /// Soft-delete a tenant. Platform admin only.
    ///
    /// Refused while active memberships or pending invites still point at
    /// the tenant; the dependency counter is consulted explicitly.
    pub async fn soft_delete(
        &self,
        ctx: &RequestContext,
        tenant_id: uuid::Uuid,
    ) -> Result<(), AppError> {
        self.require_platform_admin(ctx)?;

        let members = self.dependencies.count_memberships(tenant_id).await?;
        let invites = self.dependencies.count_pending_invites(tenant_id).await?;
        if members > 0 || invites > 0 {
            return Err(AppError::conflict(format!(
                "Tenant still has {members} active members and {invites} pending invites"
            )));
        }

        if !self.tenants.soft_delete(tenant_id).await? {
            return Err(AppError::tenant_not_found());
        }

        self.audit
            .record(
                Some(ctx.user_id),
                Some(tenant_id),
                TenantEvent::Deleted {
                    tenant_id,
                    actor_id: ctx.user_id,
                }
                .into(),
            )
            .await;

        Ok(())
    }

    fn require_platform_admin(&self, ctx: &RequestContext) -> Result<(), AppError> {
        if !ctx.is_platform_admin() {
            return Err(AppError::forbidden("Platform admin access required"));
        }
        Ok(())
    }
}
