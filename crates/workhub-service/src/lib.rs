//! # workhub-service
//!
//! Business logic services for Workhub. Each service orchestrates
//! repositories and the auth crate and emits audit events through the
//! fire-and-forget sink.
//!
//! The request pipeline is explicit: authentication produces a
//! [`context::RequestContext`], tenant resolution a
//! [`context::TenantContext`], and authorization a membership — each stage
//! a typed value, none of it implicit request state.

pub mod audit;
pub mod context;
pub mod invite;
pub mod membership;
pub mod tenant;
pub mod user;
