//! Membership status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Membership lifecycle status.
///
/// `Removed` is terminal and soft: the row is retained for the audit
/// trail and is never physically deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "membership_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    /// Invited but not yet materialized into access.
    Invited,
    /// Confers access.
    Active,
    /// Soft-removed; confers nothing.
    Removed,
}

impl MembershipStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invited => "invited",
            Self::Active => "active",
            Self::Removed => "removed",
        }
    }
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
