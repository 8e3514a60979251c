//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use uuid::Uuid;

use workhub_core::config::auth::AuthConfig;
use workhub_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Verified access token payload.
#[derive(Debug, Clone)]
pub struct AccessToken {
    /// The authenticated user.
    pub user_id: Uuid,
    /// The email claim.
    pub email: String,
}

/// Verified refresh token payload.
#[derive(Debug, Clone)]
pub struct RefreshToken {
    /// The owning user.
    pub user_id: Uuid,
    /// The refresh session the token belongs to.
    pub session_id: Uuid,
}

/// Validates JWT tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// Checks signature, expiry, token type, and the presence of the
    /// email claim. Every failure is the same `InvalidToken` kind.
    pub fn verify_access(&self, token: &str) -> Result<AccessToken, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenType::Access {
            return Err(AppError::invalid_token(
                "Invalid token type: expected access token",
            ));
        }

        let email = claims
            .email
            .ok_or_else(|| AppError::invalid_token("Access token missing email claim"))?;

        Ok(AccessToken {
            user_id: claims.sub,
            email,
        })
    }

    /// Decodes and validates a refresh token string.
    pub fn verify_refresh(&self, token: &str) -> Result<RefreshToken, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenType::Refresh {
            return Err(AppError::invalid_token(
                "Invalid token type: expected refresh token",
            ));
        }

        let session_id = claims
            .sid
            .ok_or_else(|| AppError::invalid_token("Refresh token missing session claim"))?;

        Ok(RefreshToken {
            user_id: claims.sub,
            session_id,
        })
    }

    /// Internal decode without type checking.
    fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::invalid_token("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::invalid_token("Invalid token signature")
                    }
                    _ => AppError::invalid_token("Invalid token"),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use workhub_core::error::ErrorKind;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".into(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn access_roundtrip() {
        let cfg = config();
        let encoder = JwtEncoder::new(&cfg);
        let decoder = JwtDecoder::new(&cfg);

        let user_id = Uuid::new_v4();
        let (token, _exp) = encoder.sign_access(user_id, "alice@example.com").unwrap();
        let verified = decoder.verify_access(&token).unwrap();
        assert_eq!(verified.user_id, user_id);
        assert_eq!(verified.email, "alice@example.com");
    }

    #[test]
    fn refresh_roundtrip() {
        let cfg = config();
        let encoder = JwtEncoder::new(&cfg);
        let decoder = JwtDecoder::new(&cfg);

        let user_id = Uuid::new_v4();
        let session_id = Uuid::new_v4();
        let (token, _exp) = encoder.sign_refresh(user_id, session_id).unwrap();
        let verified = decoder.verify_refresh(&token).unwrap();
        assert_eq!(verified.user_id, user_id);
        assert_eq!(verified.session_id, session_id);
    }

    #[test]
    fn token_types_do_not_cross() {
        let cfg = config();
        let encoder = JwtEncoder::new(&cfg);
        let decoder = JwtDecoder::new(&cfg);

        let (access, _) = encoder.sign_access(Uuid::new_v4(), "a@b.c").unwrap();
        let (refresh, _) = encoder.sign_refresh(Uuid::new_v4(), Uuid::new_v4()).unwrap();

        assert_eq!(
            decoder.verify_refresh(&access).unwrap_err().kind,
            ErrorKind::InvalidToken
        );
        assert_eq!(
            decoder.verify_access(&refresh).unwrap_err().kind,
            ErrorKind::InvalidToken
        );
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let encoder = JwtEncoder::new(&config());
        let other = AuthConfig {
            jwt_secret: "different-secret".into(),
            ..AuthConfig::default()
        };
        let decoder = JwtDecoder::new(&other);

        let (token, _) = encoder.sign_access(Uuid::new_v4(), "a@b.c").unwrap();
        let err = decoder.verify_access(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }

    #[test]
    fn expired_token_is_rejected() {
        let cfg = config();
        let decoder = JwtDecoder::new(&cfg);

        let now = Utc::now();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: Some("a@b.c".into()),
            sid: None,
            iat: now.timestamp() - 600,
            exp: now.timestamp() - 300,
            jti: Uuid::new_v4(),
            token_type: TokenType::Access,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = decoder.verify_access(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }

    #[test]
    fn garbage_is_rejected() {
        let decoder = JwtDecoder::new(&config());
        assert_eq!(
            decoder.verify_access("not-a-token").unwrap_err().kind,
            ErrorKind::InvalidToken
        );
    }
}
