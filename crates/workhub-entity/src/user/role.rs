//! Platform role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platform-wide roles, independent of tenant membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "platform_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PlatformRole {
    /// Regular user; tenant access comes only from memberships.
    User,
    /// Platform operator with cross-tenant administrative access.
    PlatformAdmin,
}

impl PlatformRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::PlatformAdmin => "platform_admin",
        }
    }
}

impl fmt::Display for PlatformRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlatformRole {
    type Err = workhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "platform_admin" => Ok(Self::PlatformAdmin),
            _ => Err(workhub_core::AppError::validation(format!(
                "Invalid platform role: '{s}'. Expected one of: user, platform_admin"
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
            "platform_admin".parse::<PlatformRole>().unwrap(),
            PlatformRole::PlatformAdmin
        );
        assert_eq!("USER".parse::<PlatformRole>().unwrap(), PlatformRole::User);
        assert!("root".parse::<PlatformRole>().is_err());
    }
}
