//! # workhub-auth
//!
//! Credential machinery for Workhub: JWT access/refresh tokens, argon2id
//! password hashing, token digesting, and the session authority that
//! orchestrates login, refresh-with-rotation, reuse detection, and logout.

pub mod digest;
pub mod jwt;
pub mod password;
pub mod session;

pub use jwt::{JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use session::SessionAuthority;
