//! Tenant slug normalization and validation.

use workhub_core::AppError;

/// Maximum slug length.
const MAX_SLUG_LEN: usize = 63;

/// Normalize a slug as supplied by a request path: trim and lowercase.
///
/// Normalization is applied before every lookup so that `ACME` and
/// ` acme ` resolve to the same tenant.
pub fn normalize_slug(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Validate a slug for tenant creation.
///
/// Slugs are 1-63 characters of `[a-z0-9-]`, must not start or end with a
/// hyphen, and are expected to be pre-normalized.
pub fn validate_slug(slug: &str) -> Result<(), AppError> {
    if slug.is_empty() || slug.len() > MAX_SLUG_LEN {
        return Err(AppError::validation(format!(
            "Slug must be 1-{MAX_SLUG_LEN} characters"
        )));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(AppError::validation(
            "Slug must not start or end with a hyphen",
        ));
    }
    if !slug
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    {
        return Err(AppError::validation(
            "Slug may contain only lowercase letters, digits, and hyphens",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_slug("  ACME-Corp "), "acme-corp");
        assert_eq!(normalize_slug("acme"), "acme");
    }

    #[test]
    fn accepts_valid_slugs() {
        assert!(validate_slug("acme").is_ok());
        assert!(validate_slug("acme-corp-2").is_ok());
    }

    #[test]
    fn rejects_invalid_slugs() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug("-acme").is_err());
        assert!(validate_slug("acme-").is_err());
        assert!(validate_slug("Acme").is_err());
        assert!(validate_slug("acme corp").is_err());
        assert!(validate_slug(&"a".repeat(64)).is_err());
    }
}
