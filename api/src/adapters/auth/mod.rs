//! Credential adapters
//!
//! Password hashing with argon2 and session tokens with jsonwebtoken.

pub mod argon2_hasher;
pub mod jwt_issuer;

pub use argon2_hasher::Argon2PasswordHasher;
pub use jwt_issuer::JwtTokenIssuer;
