//! Membership authority — the RBAC decision point.

pub mod authority;

pub use authority::MembershipAuthority;
