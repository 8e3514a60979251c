//! Tenant role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Per-tenant roles derived from membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "tenant_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TenantRole {
    /// Full administrative control within the tenant.
    TenantAdmin,
    /// Regular member.
    Member,
}

impl TenantRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TenantAdmin => "tenant_admin",
            Self::Member => "member",
        }
    }
}

impl fmt::Display for TenantRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TenantRole {
    type Err = workhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tenant_admin" => Ok(Self::TenantAdmin),
            "member" => Ok(Self::Member),
            _ => Err(workhub_core::AppError::validation(format!(
                "Invalid tenant role: '{s}'. Expected one of: tenant_admin, member"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "tenant_admin".parse::<TenantRole>().unwrap(),
            TenantRole::TenantAdmin
        );
        assert_eq!("MEMBER".parse::<TenantRole>().unwrap(), TenantRole::Member);
        assert!("owner".parse::<TenantRole>().is_err());
    }
}
