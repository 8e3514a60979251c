//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use workhub_core::types::pagination::PageResponse;
use workhub_entity::invite::Invite;
use workhub_entity::membership::Membership;
use workhub_entity::tenant::Tenant;
use workhub_entity::user::User;

/// Public user projection. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Email.
    pub email: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Platform role.
    pub platform_role: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            display_name: user.display_name,
            platform_role: user.platform_role.to_string(),
            created_at: user.created_at,
        }
    }
}

/// Login response. The refresh credential is set as an http-only cookie,
/// never in this body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token (bearer).
    pub access_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// User info.
    pub user: UserResponse,
}

/// Refresh response. The rotated refresh credential is set as an
/// http-only cookie, never in this body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// Fresh access token.
    pub access_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
}

/// Tenant projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantResponse {
    /// Tenant ID.
    pub id: Uuid,
    /// Canonical slug.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<Tenant> for TenantResponse {
    fn from(tenant: Tenant) -> Self {
        Self {
            id: tenant.id,
            slug: tenant.slug,
            name: tenant.name,
            created_at: tenant.created_at,
        }
    }
}

/// Membership projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    /// The member's user ID.
    pub user_id: Uuid,
    /// Tenant role.
    pub role: String,
    /// Membership status.
    pub status: String,
    /// When the membership was created.
    pub created_at: DateTime<Utc>,
}

impl From<Membership> for MemberResponse {
    fn from(m: Membership) -> Self {
        Self {
            user_id: m.user_id,
            role: m.role.to_string(),
            status: m.status.to_string(),
            created_at: m.created_at,
        }
    }
}

/// Invite projection. Never carries the token hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteResponse {
    /// Invite ID.
    pub id: Uuid,
    /// Invited email.
    pub email: String,
    /// Granted role.
    pub role: String,
    /// Lifecycle status.
    pub status: String,
    /// Expiry instant.
    pub expires_at: DateTime<Utc>,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<Invite> for InviteResponse {
    fn from(invite: Invite) -> Self {
        Self {
            id: invite.id,
            email: invite.email,
            role: invite.role.to_string(),
            status: invite.status.to_string(),
            expires_at: invite.expires_at,
            created_at: invite.created_at,
        }
    }
}

/// Response for a freshly created invite: carries the raw token exactly
/// once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedInviteResponse {
    /// The invite.
    #[serde(flatten)]
    pub invite: InviteResponse,
    /// The single-use raw token. Shown only here; it cannot be recovered.
    pub token: String,
}

/// Paginated list wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageBody<T: Serialize> {
    /// Items in this page.
    pub items: Vec<T>,
    /// Current page.
    pub page: u64,
    /// Items per page.
    pub page_size: u64,
    /// Total item count.
    pub total_items: u64,
    /// Total pages.
    pub total_pages: u64,
}

impl<T: Serialize> PageBody<T> {
    /// Build a page body from a domain page, mapping each item.
    pub fn from_page<S: Serialize>(page: PageResponse<S>, f: impl FnMut(S) -> T) -> Self {
        let mapped = page.map(f);
        Self {
            items: mapped.items,
            page: mapped.page,
            page_size: mapped.page_size,
            total_items: mapped.total_items,
            total_pages: mapped.total_pages,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Database status.
    pub database: String,
}
