use std::env;

use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 900;
const DEFAULT_REFRESH_TOKEN_TTL_SECS: i64 = 604_800;
const DEFAULT_DNS_RESOLVER_URL: &str = "https://cloudflare-dns.com/dns-query";
const DEFAULT_DNS_TIMEOUT_MS: u64 = 3000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// HMAC secret for session tokens
    pub jwt_secret: String,
    pub access_token_ttl_secs: i64,
    pub refresh_token_ttl_secs: i64,
    /// Mark session cookies `Secure`; turn off only for plain-http development
    pub cookie_secure: bool,
    /// DNS-over-HTTPS JSON endpoint used to check email domains
    pub dns_resolver_url: String,
    pub dns_timeout_ms: u64,
    /// Extra disposable domains, one per line
    pub disposable_domains_file: Option<String>,
    /// Allowed CORS origin; any origin when unset
    pub cors_allow_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            jwt_secret: required("JWT_SECRET")?,
            access_token_ttl_secs: parse_or(
                &lookup,
                "ACCESS_TOKEN_TTL_SECS",
                DEFAULT_ACCESS_TOKEN_TTL_SECS,
            )?,
            refresh_token_ttl_secs: parse_or(
                &lookup,
                "REFRESH_TOKEN_TTL_SECS",
                DEFAULT_REFRESH_TOKEN_TTL_SECS,
            )?,
            cookie_secure: parse_or(&lookup, "COOKIE_SECURE", true)?,
            dns_resolver_url: lookup("DNS_RESOLVER_URL")
                .unwrap_or_else(|| DEFAULT_DNS_RESOLVER_URL.to_string()),
            dns_timeout_ms: parse_or(&lookup, "DNS_TIMEOUT_MS", DEFAULT_DNS_TIMEOUT_MS)?,
            disposable_domains_file: lookup("DISPOSABLE_DOMAINS_FILE"),
            cors_allow_origin: lookup("CORS_ALLOW_ORIGIN"),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("DATABASE_URL", "postgres://localhost/cvhub"),
        ("JWT_SECRET", "secret"),
    ];

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(REQUIRED)).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.access_token_ttl_secs, 900);
        assert_eq!(config.refresh_token_ttl_secs, 604_800);
        assert!(config.cookie_secure);
        assert_eq!(config.dns_resolver_url, "https://cloudflare-dns.com/dns-query");
        assert_eq!(config.dns_timeout_ms, 3000);
        assert!(config.disposable_domains_file.is_none());
        assert!(config.cors_allow_origin.is_none());
    }

    #[test]
    fn overrides() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("PORT", "3000"),
            ("COOKIE_SECURE", "false"),
            ("DNS_TIMEOUT_MS", "250"),
            ("CORS_ALLOW_ORIGIN", "https://cvhub.example"),
        ]);

        let config = Config::from_lookup(lookup(&pairs)).unwrap();

        assert_eq!(config.port, 3000);
        assert!(!config.cookie_secure);
        assert_eq!(config.dns_timeout_ms, 250);
        assert_eq!(
            config.cors_allow_origin.as_deref(),
            Some("https://cvhub.example")
        );
    }

    #[test]
    fn missing_required_key() {
        let err = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://x")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
        assert_eq!(err.to_string(), "JWT_SECRET must be set");
    }

    #[test]
    fn blank_required_key_is_missing() {
        let err =
            Config::from_lookup(lookup(&[("DATABASE_URL", " "), ("JWT_SECRET", "s")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn invalid_number() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("PORT", "eighty"));

        assert_eq!(
            Config::from_lookup(lookup(&pairs)).unwrap_err(),
            ConfigError::Invalid {
                key: "PORT",
                value: "eighty".to_string()
            }
        );
    }
}
