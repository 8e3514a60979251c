//! Tenant entity.

pub mod model;
pub mod slug;

pub use model::{CreateTenant, Tenant};
pub use slug::normalize_slug;
