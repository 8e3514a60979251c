//! Auth handlers — register, login, refresh, logout, me.
//!
//! The refresh credential travels only in an http-only, path-scoped
//! cookie. It never appears in a response body or a log line.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use workhub_core::config::auth::AuthConfig;
use workhub_core::error::AppError;

use crate::dto::request::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::dto::response::{LoginResponse, MessageResponse, RefreshResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_service
        .register(&req.email, &req.password, req.display_name)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state
        .session_authority
        .login(&req.email, &req.password)
        .await?;

    let jar = jar.add(refresh_cookie(&state.config.auth, result.refresh_token));

    Ok((
        jar,
        Json(LoginResponse {
            access_token: result.access_token,
            access_expires_at: result.access_expires_at,
            user: result.user.into(),
        }),
    ))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<RefreshRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<RefreshResponse>), ApiError> {
    let presented = presented_refresh_token(&state.config.auth, &jar, body.ok().map(|Json(b)| b))
        .ok_or_else(AppError::refresh_rejected)?;

    let result = state.session_authority.refresh(&presented).await?;

    let jar = jar.add(refresh_cookie(&state.config.auth, result.refresh_token));

    Ok((
        jar,
        Json(RefreshResponse {
            access_token: result.access_token,
            access_expires_at: result.access_expires_at,
        }),
    ))
}

/// POST /api/auth/logout
///
/// Best-effort: always answers 200, with the cookie cleared, whatever the
/// presented credential looked like.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<RefreshRequest>, JsonRejection>,
) -> (CookieJar, Json<MessageResponse>) {
    if let Some(token) =
        presented_refresh_token(&state.config.auth, &jar, body.ok().map(|Json(b)| b))
    {
        state.session_authority.logout(&token).await;
    }

    let mut removal = Cookie::from(state.config.auth.refresh_cookie_name.clone());
    removal.set_path(state.config.auth.refresh_cookie_path.clone());
    let jar = jar.remove(removal);

    (
        jar,
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.get_profile(&auth).await?;
    Ok(Json(user.into()))
}

/// Builds the http-only refresh cookie.
fn refresh_cookie(config: &AuthConfig, token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(config.refresh_cookie_name.clone(), token);
    cookie.set_http_only(true);
    cookie.set_secure(config.refresh_cookie_secure);
    cookie.set_path(config.refresh_cookie_path.clone());
    cookie.set_same_site(SameSite::Lax);
    cookie
}

/// The refresh credential from the cookie, falling back to the request
/// body for non-browser clients.
fn presented_refresh_token(
    config: &AuthConfig,
    jar: &CookieJar,
    body: Option<RefreshRequest>,
) -> Option<String> {
    jar.get(&config.refresh_cookie_name)
        .map(|c| c.value().to_string())
        .or(body.and_then(|b| b.refresh_token))
}
