//! Route definitions for the Workhub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(tenant_routes())
        .merge(member_routes())
        .merge(invite_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, refresh, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Tenant lifecycle endpoints
fn tenant_routes() -> Router<AppState> {
    Router::new()
        .route("/tenants", post(handlers::tenant::create_tenant))
        .route("/tenants", get(handlers::tenant::list_tenants))
        .route("/tenants/{slug}", get(handlers::tenant::get_tenant))
        .route("/tenants/{slug}", delete(handlers::tenant::delete_tenant))
        .route(
            "/tenants/{slug}/archive",
            post(handlers::tenant::archive_tenant),
        )
}

/// Member management endpoints
fn member_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tenants/{slug}/members",
            get(handlers::member::list_members),
        )
        .route(
            "/tenants/{slug}/members/{user_id}/role",
            put(handlers::member::change_member_role),
        )
        .route(
            "/tenants/{slug}/members/{user_id}",
            delete(handlers::member::remove_member),
        )
}

/// Invite lifecycle endpoints
fn invite_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tenants/{slug}/invites",
            post(handlers::invite::create_invite),
        )
        .route(
            "/tenants/{slug}/invites",
            get(handlers::invite::list_invites),
        )
        .route(
            "/tenants/{slug}/invites/accept",
            post(handlers::invite::accept_invite),
        )
        .route(
            "/tenants/{slug}/invites/{invite_id}",
            delete(handlers::invite::revoke_invite),
        )
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<axum::http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
