//! Workhub Server — Multi-Tenant Workspace Platform
//!
//! Main entry point that wires all crates together and starts the server.
//! The database pool is created here exactly once and injected into every
//! repository and service.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use workhub_core::config::AppConfig;
use workhub_core::error::AppError;
use workhub_core::traits::{AuditSink, DependencyCounter};

#[tokio::main]
async fn main() {
    let env = std::env::var("WORKHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Workhub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = workhub_database::connection::DatabasePool::connect(&config.database).await?;
    let db_pool = db.into_pool();

    tracing::info!("Running database migrations...");
    workhub_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(workhub_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let tenant_repo = Arc::new(
        workhub_database::repositories::tenant::TenantRepository::new(db_pool.clone()),
    );
    let membership_repo = Arc::new(
        workhub_database::repositories::membership::MembershipRepository::new(db_pool.clone()),
    );
    let invite_repo = Arc::new(
        workhub_database::repositories::invite::InviteRepository::new(db_pool.clone()),
    );
    let session_repo = Arc::new(
        workhub_database::repositories::refresh_session::RefreshSessionRepository::new(
            db_pool.clone(),
        ),
    );
    let audit_repo = Arc::new(
        workhub_database::repositories::audit::AuditLogRepository::new(db_pool.clone()),
    );
    let dependency_counter: Arc<dyn DependencyCounter> = Arc::new(
        workhub_database::repositories::counter::SqlDependencyCounter::new(db_pool.clone()),
    );

    // ── Step 3: Audit sink ───────────────────────────────────────
    let audit: Arc<dyn AuditSink> = Arc::new(workhub_service::audit::AuditRecorder::new(
        Arc::clone(&audit_repo),
    ));

    // ── Step 4: Auth system ──────────────────────────────────────
    tracing::info!("Initializing authentication system...");
    let password_hasher = Arc::new(workhub_auth::password::PasswordHasher::new());
    let jwt_encoder = Arc::new(workhub_auth::jwt::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(workhub_auth::jwt::JwtDecoder::new(&config.auth));
    let session_authority = Arc::new(workhub_auth::session::SessionAuthority::new(
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
        Arc::clone(&session_repo),
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&audit),
        config.auth.clone(),
    ));

    // ── Step 5: Services ─────────────────────────────────────────
    tracing::info!("Initializing services...");
    let membership_authority = Arc::new(workhub_service::membership::MembershipAuthority::new(
        Arc::clone(&membership_repo),
        Arc::clone(&audit),
    ));
    let tenant_resolver = Arc::new(workhub_service::tenant::TenantResolver::new(Arc::clone(
        &tenant_repo,
    )));
    let tenant_service = Arc::new(workhub_service::tenant::TenantService::new(
        Arc::clone(&tenant_repo),
        Arc::clone(&membership_authority),
        Arc::clone(&dependency_counter),
        Arc::clone(&audit),
    ));
    let invite_lifecycle = Arc::new(workhub_service::invite::InviteLifecycle::new(
        Arc::clone(&invite_repo),
        Arc::clone(&membership_authority),
        Arc::clone(&audit),
        config.invite.clone(),
    ));
    let user_service = Arc::new(workhub_service::user::UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        config.auth.clone(),
    ));

    // ── Step 6: HTTP server ──────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = workhub_api::state::AppState {
        config: Arc::new(config),
        db_pool: db_pool.clone(),
        jwt_decoder,
        session_authority,
        user_repo,
        tenant_resolver,
        tenant_service,
        membership_authority,
        invite_lifecycle,
        user_service,
    };

    let app = workhub_api::router::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Workhub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Workhub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
