//! # workhub-entity
//!
//! Domain entity models for Workhub: users, tenants, memberships, invites,
//! refresh sessions, and audit log entries. Models derive `sqlx::FromRow`
//! and map enums onto PostgreSQL enum types.

pub mod audit;
pub mod invite;
pub mod membership;
pub mod session;
pub mod tenant;
pub mod user;
