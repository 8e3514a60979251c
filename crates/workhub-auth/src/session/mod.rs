//! Session lifecycle.

pub mod authority;

pub use authority::{LoginResult, RefreshResult, SessionAuthority};
