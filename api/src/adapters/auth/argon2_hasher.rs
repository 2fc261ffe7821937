//! Argon2 password hashing

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::domain::ports::PasswordHasher;
use crate::error::AuthError;

/// Argon2id with the crate's default parameters, PHC string output
#[derive(Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        Ok(hash.to_string())
    }

    fn verify(&self, plaintext: &str, digest: &str) -> bool {
        let parsed = match PasswordHash::new(digest) {
            Ok(h) => h,
            Err(_) => return false,
        };

        self.argon2
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let hasher = Argon2PasswordHasher::new();
        let digest = hasher.hash("correct horse battery").unwrap();

        assert!(digest.starts_with("$argon2id$"));
        assert!(hasher.verify("correct horse battery", &digest));
        assert!(!hasher.verify("wrong password", &digest));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let hasher = Argon2PasswordHasher::new();
        assert_ne!(
            hasher.hash("password123").unwrap(),
            hasher.hash("password123").unwrap()
        );
    }

    #[test]
    fn garbage_digest_does_not_verify() {
        assert!(!Argon2PasswordHasher::new().verify("anything", "not-a-phc-string"));
    }
}
