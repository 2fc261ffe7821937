//! Credential ports
//!
//! Password digests and session tokens.

use crate::error::AuthError;

/// Access and refresh tokens issued on sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub access_ttl_secs: i64,
    pub refresh_ttl_secs: i64,
}

/// One-way password hashing
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> Result<String, AuthError>;

    /// False for a wrong password or an unparseable digest
    fn verify(&self, plaintext: &str, digest: &str) -> bool;
}

/// Signs and verifies session tokens
pub trait TokenIssuer: Send + Sync {
    /// Issue an access/refresh pair for `subject` (the user's email)
    fn issue(&self, subject: &str) -> Result<TokenPair, AuthError>;

    /// Verify an access token and return its subject
    fn verify_access(&self, token: &str) -> Result<String, AuthError>;
}
