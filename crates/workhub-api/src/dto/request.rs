//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Display name.
    pub display_name: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
///
/// The refresh credential normally travels in the http-only cookie; the
/// body field is a fallback for non-browser clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token, if not supplied via cookie.
    pub refresh_token: Option<String>,
}

/// Create tenant request (platform admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTenantRequest {
    /// Canonical slug.
    #[validate(length(min = 1, max = 63))]
    pub slug: String,
    /// Display name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Optional first tenant admin to assign on creation.
    pub first_admin_id: Option<uuid::Uuid>,
}

/// Create invite request (tenant admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateInviteRequest {
    /// Invitee email.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Granted tenant role.
    pub role: workhub_entity::membership::TenantRole,
}

/// Accept invite request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AcceptInviteRequest {
    /// The raw single-use invite token.
    #[validate(length(min = 1, message = "Token is required"))]
    pub token: String,
}

/// Change member role request (tenant admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRoleRequest {
    /// The new tenant role.
    pub role: workhub_entity::membership::TenantRole,
}

/// Invite listing filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InviteListParams {
    /// Filter by invite status.
    pub status: Option<workhub_entity::invite::InviteStatus>,
}
