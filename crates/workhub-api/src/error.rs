//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use workhub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Boundary wrapper turning an [`AppError`] into an HTTP response.
///
/// Handlers return `Result<_, ApiError>` so that `?` on any core
/// operation propagates straight to the wire mapping below.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, error_code) = match err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            ErrorKind::InvalidToken => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ErrorKind::RefreshRejected => (StatusCode::UNAUTHORIZED, "REFRESH_REJECTED"),
            ErrorKind::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ErrorKind::TenantNotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::InvalidInvite => (StatusCode::NOT_FOUND, "INVALID_INVITE"),
            ErrorKind::DuplicateInvite => (StatusCode::CONFLICT, "DUPLICATE_INVITE"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
            ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        // Internal detail never reaches the wire.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "Internal server error".to_string()
        } else {
            err.message
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn taxonomy_maps_to_expected_statuses() {
        assert_eq!(
            status_of(AppError::invalid_credentials()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::refresh_rejected()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::tenant_not_found()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_of(AppError::forbidden("no")), StatusCode::FORBIDDEN);
        assert_eq!(
            status_of(AppError::duplicate_invite()),
            StatusCode::CONFLICT
        );
        assert_eq!(status_of(AppError::invalid_invite()), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(AppError::conflict("last admin")),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(AppError::database("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_detail_is_not_leaked() {
        let resp = ApiError(AppError::database("connection string had password hunter2"))
            .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
