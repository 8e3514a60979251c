//! Invite status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Invite lifecycle status.
///
/// `pending` is the only non-terminal state; the three terminal states are
/// never left once entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "invite_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InviteStatus {
    /// Awaiting acceptance.
    Pending,
    /// Accepted; a membership was materialized.
    Accepted,
    /// Revoked by a tenant admin.
    Revoked,
    /// Lapsed past its expiry.
    Expired,
}

impl InviteStatus {
    /// Whether this state admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Revoked => "revoked",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for InviteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pending_is_non_terminal() {
        assert!(!InviteStatus::Pending.is_terminal());
        assert!(InviteStatus::Accepted.is_terminal());
        assert!(InviteStatus::Revoked.is_terminal());
        assert!(InviteStatus::Expired.is_terminal());
    }
}
