//! Domain events emitted on security-relevant transitions.
//!
//! Events are handed to the audit sink fire-and-forget; they carry plain
//! identifiers rather than entity types so this crate stays dependency-free.

pub mod invite;
pub mod membership;
pub mod session;
pub mod tenant;

pub use invite::InviteEvent;
pub use membership::MembershipEvent;
pub use session::SessionEvent;
pub use tenant::TenantEvent;

use serde::{Deserialize, Serialize};

/// Any auditable domain event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DomainEvent {
    /// Session lifecycle event.
    Session(SessionEvent),
    /// Membership lifecycle event.
    Membership(MembershipEvent),
    /// Invite lifecycle event.
    Invite(InviteEvent),
    /// Tenant lifecycle event.
    Tenant(TenantEvent),
}

impl DomainEvent {
    /// Short machine-readable action name for audit records.
    pub fn action(&self) -> &'static str {
        match self {
            Self::Session(e) => e.action(),
            Self::Membership(e) => e.action(),
            Self::Invite(e) => e.action(),
            Self::Tenant(e) => e.action(),
        }
    }
}

impl From<SessionEvent> for DomainEvent {
    fn from(e: SessionEvent) -> Self {
        Self::Session(e)
    }
}

impl From<MembershipEvent> for DomainEvent {
    fn from(e: MembershipEvent) -> Self {
        Self::Membership(e)
    }
}

impl From<InviteEvent> for DomainEvent {
    fn from(e: InviteEvent) -> Self {
        Self::Invite(e)
    }
}

impl From<TenantEvent> for DomainEvent {
    fn from(e: TenantEvent) -> Self {
        Self::Tenant(e)
    }
}
