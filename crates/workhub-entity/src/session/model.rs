//! Refresh session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A server-side record backing one long-lived refresh credential.
///
/// One row per logical device/browser session. The row stores only the
/// SHA-256 hash of the *current* refresh token; rotation overwrites the
/// hash in place, so any older token no longer matches and its
/// presentation is treated as a reuse signal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RefreshSession {
    /// Unique session identifier, embedded in the refresh token claims.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// SHA-256 hex digest of the current refresh token.
    #[serde(skip_serializing)]
    pub token_hash: String,
    /// Absolute expiry.
    pub expires_at: DateTime<Utc>,
    /// Last successful rotation.
    pub rotated_at: Option<DateTime<Utc>>,
    /// Set on logout, reuse detection, or explicit invalidation.
    pub revoked_at: Option<DateTime<Utc>>,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
}

impl RefreshSession {
    /// Whether the session can still be rotated at `now`.
    pub fn is_usable_at(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && self.expires_at > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(revoked: bool, expires_in: Duration) -> RefreshSession {
        let now = Utc::now();
        RefreshSession {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            token_hash: "00".repeat(32),
            expires_at: now + expires_in,
            rotated_at: None,
            revoked_at: revoked.then_some(now),
            created_at: now,
        }
    }

    #[test]
    fn usable_iff_unrevoked_and_unexpired() {
        let now = Utc::now();
        assert!(session(false, Duration::days(1)).is_usable_at(now));
        assert!(!session(true, Duration::days(1)).is_usable_at(now));
        assert!(!session(false, Duration::seconds(-1)).is_usable_at(now));
    }
}
