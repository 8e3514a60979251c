//! User registration and profile service.

use std::sync::Arc;

use tracing::info;

use workhub_core::config::auth::AuthConfig;
use workhub_core::error::AppError;
use workhub_auth::password::PasswordHasher;
use workhub_database::repositories::user::UserRepository;
use workhub_entity::user::model::CreateUser;
use workhub_entity::user::{PlatformRole, User};

use crate::context::RequestContext;

/// Self-service user operations.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    config: AuthConfig,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<UserRepository>, hasher: Arc<PasswordHasher>, config: AuthConfig) -> Self {
        Self {
            users,
            hasher,
            config,
        }
    }

    /// Register a new user with the `user` platform role.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: Option<String>,
    ) -> Result<User, AppError> {
        let email = email.trim().to_ascii_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::validation("A valid email address is required"));
        }
        if password.len() < self.config.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.config.password_min_length
            )));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .users
            .create(&CreateUser {
                email,
                password_hash,
                display_name,
                platform_role: PlatformRole::User,
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Fetch the caller's own profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
