//! JWT session tokens
//!
//! HS256 access and refresh tokens. Both carry the user's email as `sub`;
//! `token_type` keeps one from being used as the other.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ports::{TokenIssuer, TokenPair};
use crate::error::AuthError;

const ACCESS: &str = "access";
const REFRESH: &str = "refresh";

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
    /// Unique token id
    pub jti: String,
    /// "access" or "refresh"
    pub token_type: String,
}

/// jsonwebtoken implementation of TokenIssuer
pub struct JwtTokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl_secs: i64,
    refresh_ttl_secs: i64,
}

impl JwtTokenIssuer {
    pub fn new(secret: &str, access_ttl_secs: i64, refresh_ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl_secs,
            refresh_ttl_secs,
        }
    }

    fn generate(&self, subject: &str, token_type: &str, ttl_secs: i64) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_secs)).timestamp(),
            jti: Uuid::new_v4().to_string(),
            token_type: token_type.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::Token(e.to_string()))
    }

    /// Decode a token and check its signature, expiry and type
    pub fn validate(&self, token: &str, expected: &'static str) -> Result<Claims, AuthError> {
        let claims = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?
            .claims;

        if claims.token_type != expected {
            return Err(AuthError::WrongTokenType { expected });
        }
        Ok(claims)
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, subject: &str) -> Result<TokenPair, AuthError> {
        Ok(TokenPair {
            access_token: self.generate(subject, ACCESS, self.access_ttl_secs)?,
            refresh_token: self.generate(subject, REFRESH, self.refresh_ttl_secs)?,
            access_ttl_secs: self.access_ttl_secs,
            refresh_ttl_secs: self.refresh_ttl_secs,
        })
    }

    fn verify_access(&self, token: &str) -> Result<String, AuthError> {
        Ok(self.validate(token, ACCESS)?.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> JwtTokenIssuer {
        JwtTokenIssuer::new("test-secret", 900, 604_800)
    }

    #[test]
    fn access_token_roundtrip() {
        let tokens = issuer().issue("anna@example.com").unwrap();

        assert_eq!(
            issuer().verify_access(&tokens.access_token).unwrap(),
            "anna@example.com"
        );
        assert_eq!(tokens.access_ttl_secs, 900);
        assert_eq!(tokens.refresh_ttl_secs, 604_800);
    }

    #[test]
    fn refresh_token_is_not_an_access_token() {
        let tokens = issuer().issue("anna@example.com").unwrap();

        assert!(matches!(
            issuer().verify_access(&tokens.refresh_token),
            Err(AuthError::WrongTokenType { expected: "access" })
        ));
        let claims = issuer().validate(&tokens.refresh_token, REFRESH).unwrap();
        assert_eq!(claims.exp - claims.iat, 604_800);
    }

    #[test]
    fn other_secret_is_rejected() {
        let tokens = JwtTokenIssuer::new("other-secret", 900, 900)
            .issue("anna@example.com")
            .unwrap();

        assert!(matches!(
            issuer().verify_access(&tokens.access_token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Past the default 60 second leeway
        let expired = JwtTokenIssuer::new("test-secret", -120, -120)
            .issue("anna@example.com")
            .unwrap();

        assert!(issuer().verify_access(&expired.access_token).is_err());
    }
}
