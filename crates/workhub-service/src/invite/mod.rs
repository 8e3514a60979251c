//! Invite lifecycle.

pub mod lifecycle;

pub use lifecycle::{CreatedInvite, InviteLifecycle};
