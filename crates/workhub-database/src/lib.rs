//! # workhub-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for all Workhub entities.
//!
//! The pool is created once by the process entry point and injected into
//! every repository; nothing here keeps global connectivity state.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
