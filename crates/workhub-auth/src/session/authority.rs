//! Session authority — login, refresh-with-rotation, and logout flows.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use workhub_core::config::auth::AuthConfig;
use workhub_core::error::AppError;
use workhub_core::events::SessionEvent;
use workhub_core::traits::AuditSink;
use workhub_database::repositories::refresh_session::RefreshSessionRepository;
use workhub_database::repositories::user::UserRepository;
use workhub_entity::user::User;

use crate::digest::{constant_time_eq, sha256_hex};
use crate::jwt::{JwtDecoder, JwtEncoder};
use crate::password::PasswordHasher;

/// Placeholder hash stored between session-row creation and token minting.
/// The refresh token embeds the row id, so the row has to exist before the
/// token (and therefore its hash) can.
const PENDING_HASH: &str = "pending";

/// A baked argon2id hash of no known password. Login verifies against it
/// when the email is unknown so that the unknown-email and wrong-password
/// paths spend the same time in the hash.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$MDEyMzQ1Njc4OWFiY2RlZg$QUJDREVGR0hJSktMTU5PUFFSU1RVVldYWVphYmNkZWY";

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// Short-lived access token.
    pub access_token: String,
    /// Access token expiry.
    pub access_expires_at: DateTime<Utc>,
    /// Long-lived refresh token. Shown to the transport layer exactly
    /// once; only its hash is stored.
    pub refresh_token: String,
    /// Refresh token expiry.
    pub refresh_expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: User,
}

/// Result of a successful refresh rotation.
#[derive(Debug, Clone)]
pub struct RefreshResult {
    /// Fresh access token.
    pub access_token: String,
    /// Access token expiry.
    pub access_expires_at: DateTime<Utc>,
    /// Replacement refresh token for the same session.
    pub refresh_token: String,
    /// Refresh token expiry.
    pub refresh_expires_at: DateTime<Utc>,
}

/// Orchestrates the credential lifecycle over the token service and the
/// refresh session store.
#[derive(Clone)]
pub struct SessionAuthority {
    encoder: Arc<JwtEncoder>,
    decoder: Arc<JwtDecoder>,
    sessions: Arc<RefreshSessionRepository>,
    users: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    audit: Arc<dyn AuditSink>,
    config: AuthConfig,
}

impl std::fmt::Debug for SessionAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionAuthority").finish_non_exhaustive()
    }
}

impl SessionAuthority {
    /// Creates a new session authority with all required dependencies.
    pub fn new(
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        sessions: Arc<RefreshSessionRepository>,
        users: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        audit: Arc<dyn AuditSink>,
        config: AuthConfig,
    ) -> Self {
        Self {
            encoder,
            decoder,
            sessions,
            users,
            hasher,
            audit,
            config,
        }
    }

    /// Performs the login flow.
    ///
    /// Unknown email, wrong password, and deactivated account all fail
    /// with the same `InvalidCredentials` error and the same timing
    /// profile: the password is always run through argon2, against a
    /// dummy hash when no user matched.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let user = self.users.find_by_email(email).await?;

        let stored_hash = user
            .as_ref()
            .map(|u| u.password_hash.as_str())
            .unwrap_or(DUMMY_HASH);
        let password_valid = self.hasher.verify_password(password, stored_hash)?;

        let user = match user {
            Some(u) if password_valid && u.active => u,
            _ => return Err(AppError::invalid_credentials()),
        };

        // Create the session row first, then mint the refresh token that
        // names it, then replace the placeholder hash.
        let refresh_expires_at =
            Utc::now() + chrono::Duration::days(self.config.refresh_ttl_days as i64);
        let session = self
            .sessions
            .create(user.id, PENDING_HASH, refresh_expires_at)
            .await?;

        let (refresh_token, refresh_expires_at) =
            self.encoder.sign_refresh(user.id, session.id)?;
        self.sessions
            .fill_token_hash(session.id, &sha256_hex(&refresh_token))
            .await?;

        let (access_token, access_expires_at) =
            self.encoder.sign_access(user.id, &user.email)?;

        info!(user_id = %user.id, session_id = %session.id, "Login successful");
        self.audit
            .record(
                Some(user.id),
                None,
                SessionEvent::LoggedIn {
                    session_id: session.id,
                    user_id: user.id,
                }
                .into(),
            )
            .await;

        Ok(LoginResult {
            access_token,
            access_expires_at,
            refresh_token,
            refresh_expires_at,
            user,
        })
    }

    /// Rotates a refresh credential.
    ///
    /// Any presented token that does not match the live state of its
    /// session — unknown/revoked/expired session, stale hash, or a
    /// rotation lost to a concurrent call — is treated as evidence of
    /// reuse or theft: every session of the user is revoked before the
    /// caller sees `RefreshRejected`.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshResult, AppError> {
        // A token that does not even decode proves nothing about any
        // session, so it is rejected without the wide revocation.
        let presented = self
            .decoder
            .verify_refresh(refresh_token)
            .map_err(|_| AppError::refresh_rejected())?;

        let session = match self
            .sessions
            .find_usable(presented.session_id, presented.user_id)
            .await?
        {
            Some(s) => s,
            None => {
                return Err(self
                    .reject_as_reuse(presented.user_id, presented.session_id)
                    .await);
            }
        };

        if !constant_time_eq(&sha256_hex(refresh_token), &session.token_hash) {
            // A decodable token for a live session with a stale hash is
            // the replay-after-rotation case.
            return Err(self
                .reject_as_reuse(presented.user_id, presented.session_id)
                .await);
        }

        let user = self
            .users
            .find_by_id(presented.user_id)
            .await?
            .filter(|u| u.active)
            .ok_or_else(AppError::refresh_rejected)?;

        let (new_refresh, refresh_expires_at) =
            self.encoder.sign_refresh(user.id, session.id)?;
        let rotated = self
            .sessions
            .rotate(
                session.id,
                user.id,
                &sha256_hex(&new_refresh),
                refresh_expires_at,
            )
            .await?;

        if !rotated {
            // The conditional update lost to a concurrent revocation or
            // rotation; the loser is indistinguishable from a replay.
            return Err(self.reject_as_reuse(user.id, session.id).await);
        }

        let (access_token, access_expires_at) =
            self.encoder.sign_access(user.id, &user.email)?;

        self.audit
            .record(
                Some(user.id),
                None,
                SessionEvent::Rotated {
                    session_id: session.id,
                    user_id: user.id,
                }
                .into(),
            )
            .await;

        Ok(RefreshResult {
            access_token,
            access_expires_at,
            refresh_token: new_refresh,
            refresh_expires_at,
        })
    }

    /// Best-effort logout.
    ///
    /// Revokes the named session when the token decodes; never fails the
    /// caller, even for garbage or already-revoked credentials — the
    /// client discards its copy regardless.
    pub async fn logout(&self, refresh_token: &str) {
        let Ok(presented) = self.decoder.verify_refresh(refresh_token) else {
            return;
        };

        match self
            .sessions
            .revoke(presented.session_id, presented.user_id)
            .await
        {
            Ok(true) => {
                info!(
                    user_id = %presented.user_id,
                    session_id = %presented.session_id,
                    "Logout revoked session"
                );
                self.audit
                    .record(
                        Some(presented.user_id),
                        None,
                        SessionEvent::LoggedOut {
                            session_id: presented.session_id,
                            user_id: presented.user_id,
                        }
                        .into(),
                    )
                    .await;
            }
            Ok(false) => {}
            Err(e) => {
                warn!(error = %e, "Logout failed to revoke session");
            }
        }
    }

    /// Revokes every session of the user and returns the uniform
    /// `RefreshRejected` error.
    async fn reject_as_reuse(&self, user_id: Uuid, session_id: Uuid) -> AppError {
        match self.sessions.revoke_all_for_user(user_id).await {
            Ok(revoked) => {
                warn!(
                    user_id = %user_id,
                    session_id = %session_id,
                    revoked,
                    "Refresh reuse detected; revoked all sessions for user"
                );
                self.audit
                    .record(
                        Some(user_id),
                        None,
                        SessionEvent::ReuseDetected {
                            user_id,
                            session_id,
                            revoked,
                        }
                        .into(),
                    )
                    .await;
            }
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Failed to revoke sessions on reuse signal");
            }
        }
        AppError::refresh_rejected()
    }
}
