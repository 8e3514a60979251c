//! Authentication and credential configuration.

use serde::{Deserialize, Serialize};

/// Authentication, token, and refresh-cookie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_days: u64,
    /// Minimum password length at registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Name of the http-only refresh cookie.
    #[serde(default = "default_cookie_name")]
    pub refresh_cookie_name: String,
    /// Path scope of the refresh cookie.
    #[serde(default = "default_cookie_path")]
    pub refresh_cookie_path: String,
    /// Whether the refresh cookie requires a secure transport.
    /// Disable only for local development over plain HTTP.
    #[serde(default = "default_cookie_secure")]
    pub refresh_cookie_secure: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            access_ttl_minutes: default_access_ttl(),
            refresh_ttl_days: default_refresh_ttl(),
            password_min_length: default_password_min(),
            refresh_cookie_name: default_cookie_name(),
            refresh_cookie_path: default_cookie_path(),
            refresh_cookie_secure: default_cookie_secure(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    14
}

fn default_password_min() -> usize {
    8
}

fn default_cookie_name() -> String {
    "workhub_refresh".to_string()
}

fn default_cookie_path() -> String {
    "/api/auth".to_string()
}

fn default_cookie_secure() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = AuthConfig::default();
        assert_eq!(cfg.access_ttl_minutes, 15);
        assert_eq!(cfg.refresh_ttl_days, 14);
        assert_eq!(cfg.refresh_cookie_path, "/api/auth");
        assert!(cfg.refresh_cookie_secure);
    }
}
