//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use sqlx::PgPool;

use workhub_auth::jwt::JwtDecoder;
use workhub_auth::session::SessionAuthority;
use workhub_core::config::AppConfig;
use workhub_database::repositories::user::UserRepository;
use workhub_service::invite::InviteLifecycle;
use workhub_service::membership::MembershipAuthority;
use workhub_service::tenant::{TenantResolver, TenantService};
use workhub_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool (health checks).
    pub db_pool: PgPool,

    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Session lifecycle authority.
    pub session_authority: Arc<SessionAuthority>,

    /// User repository (live user re-reads during authentication).
    pub user_repo: Arc<UserRepository>,
    /// Tenant resolver.
    pub tenant_resolver: Arc<TenantResolver>,
    /// Tenant administration service.
    pub tenant_service: Arc<TenantService>,
    /// Membership authority.
    pub membership_authority: Arc<MembershipAuthority>,
    /// Invite lifecycle service.
    pub invite_lifecycle: Arc<InviteLifecycle>,
    /// User registration/profile service.
    pub user_service: Arc<UserService>,
}
