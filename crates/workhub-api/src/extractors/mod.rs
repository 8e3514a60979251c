//! Request extractors — the typed authorization pipeline.
//!
//! Stage outputs, in order: [`AuthUser`] (authenticate), [`TenantScope`]
//! (resolve tenant), [`ActiveMember`] / [`TenantAdmin`] (authorize). A
//! handler asking for `TenantAdmin` gets the whole chain, and each stage's
//! failure carries the status the stage owns: 401 before the tenant is
//! known, 404 while resolving it, 403 after it resolved.

pub mod auth;
pub mod member;
pub mod pagination;
pub mod tenant;

pub use auth::AuthUser;
pub use member::{ActiveMember, TenantAdmin};
pub use pagination::PaginationParams;
pub use tenant::TenantScope;
