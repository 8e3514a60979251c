//! JWT token service: signing and verification of access and refresh
//! tokens.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{Claims, TokenType};
pub use decoder::{AccessToken, JwtDecoder, RefreshToken};
pub use encoder::JwtEncoder;
