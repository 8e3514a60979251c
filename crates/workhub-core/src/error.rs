//! Unified application error types for Workhub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
///
/// Several kinds intentionally share an HTTP status at the boundary: the
/// kind records which internal rule fired, the boundary decides how much
/// of that is allowed to leak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found within the caller's scope.
    NotFound,
    /// Login failed. Covers both unknown email and wrong password.
    InvalidCredentials,
    /// A bearer token failed verification (signature, claims, or expiry).
    InvalidToken,
    /// A refresh credential was rejected (expired, revoked, or reused).
    RefreshRejected,
    /// The tenant does not exist, is archived, or is deleted. All three
    /// look identical to the caller.
    TenantNotFound,
    /// Authenticated, but no active membership or insufficient role.
    Forbidden,
    /// A pending invite already exists for this tenant and email.
    DuplicateInvite,
    /// An invite could not be accepted: absent, not pending, or expired.
    InvalidInvite,
    /// A state invariant would be violated (duplicate entry, last admin).
    Conflict,
    /// Input validation failed.
    Validation,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::InvalidCredentials => write!(f, "INVALID_CREDENTIALS"),
            Self::InvalidToken => write!(f, "INVALID_TOKEN"),
            Self::RefreshRejected => write!(f, "REFRESH_REJECTED"),
            Self::TenantNotFound => write!(f, "TENANT_NOT_FOUND"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::DuplicateInvite => write!(f, "DUPLICATE_INVITE"),
            Self::InvalidInvite => write!(f, "INVALID_INVITE"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout Workhub.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an invalid-credentials error with the uniform login message.
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorKind::InvalidCredentials, "Invalid email or password")
    }

    /// Create an invalid-token error.
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidToken, message)
    }

    /// Create a refresh-rejected error with the uniform refresh message.
    pub fn refresh_rejected() -> Self {
        Self::new(ErrorKind::RefreshRejected, "Refresh credential rejected")
    }

    /// Create a tenant-not-found error with the uniform tenant message.
    pub fn tenant_not_found() -> Self {
        Self::new(ErrorKind::TenantNotFound, "Tenant not found")
    }

    /// Create a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// Create a duplicate-invite error.
    pub fn duplicate_invite() -> Self {
        Self::new(
            ErrorKind::DuplicateInvite,
            "A pending invite already exists for this email",
        )
    }

    /// Create an invalid-invite error with the uniform invite message.
    pub fn invalid_invite() -> Self {
        Self::new(ErrorKind::InvalidInvite, "Invite is not valid")
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_messages_do_not_distinguish_causes() {
        // The same kind must produce the same message regardless of which
        // internal branch constructed it.
        assert_eq!(
            AppError::invalid_credentials().message,
            AppError::invalid_credentials().message
        );
        assert_eq!(
            AppError::tenant_not_found().message,
            AppError::tenant_not_found().message
        );
        assert_eq!(
            AppError::invalid_invite().message,
            AppError::invalid_invite().message
        );
    }

    #[test]
    fn display_includes_kind_and_message() {
        let err = AppError::conflict("cannot remove the last admin");
        assert_eq!(
            err.to_string(),
            "CONFLICT: cannot remove the last admin"
        );
    }
}
