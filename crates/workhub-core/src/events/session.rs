//! Session-related domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to refresh sessions and login flows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// A user logged in and a refresh session was created.
    LoggedIn {
        /// The session ID.
        session_id: Uuid,
        /// The user ID.
        user_id: Uuid,
    },
    /// A refresh credential was rotated.
    Rotated {
        /// The session ID.
        session_id: Uuid,
        /// The user ID.
        user_id: Uuid,
    },
    /// A user logged out and the session was revoked.
    LoggedOut {
        /// The session ID.
        session_id: Uuid,
        /// The user ID.
        user_id: Uuid,
    },
    /// A stale or unknown refresh credential was presented; every session
    /// of the user was revoked in response.
    ReuseDetected {
        /// The user whose sessions were revoked.
        user_id: Uuid,
        /// The session named by the presented credential.
        session_id: Uuid,
        /// How many sessions were revoked.
        revoked: u64,
    },
}

impl SessionEvent {
    /// Short machine-readable action name.
    pub fn action(&self) -> &'static str {
        match self {
            Self::LoggedIn { .. } => "session.login",
            Self::Rotated { .. } => "session.refresh",
            Self::LoggedOut { .. } => "session.logout",
            Self::ReuseDetected { .. } => "session.reuse_detected",
        }
    }
}
