//! # workhub-api
//!
//! HTTP API layer for Workhub built on Axum.
//!
//! Authorization is an explicit three-stage pipeline expressed as
//! extractors with typed outputs: [`extractors::AuthUser`] authenticates,
//! [`extractors::TenantScope`] resolves the tenant, and
//! [`extractors::ActiveMember`] / [`extractors::TenantAdmin`] authorize.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
