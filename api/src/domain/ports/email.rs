//! Email check ports
//!
//! External lookups used by the registration validator.

use async_trait::async_trait;

use crate::error::EmailCheckError;

/// Answers whether an email domain exists (has MX or A records)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainResolver: Send + Sync {
    async fn domain_exists(&self, domain: &str) -> Result<bool, EmailCheckError>;
}

/// Known throwaway-inbox providers
#[cfg_attr(test, mockall::automock)]
pub trait DisposableEmailList: Send + Sync {
    /// `domain` is lowercase. Subdomains of a listed domain also match.
    fn is_disposable(&self, domain: &str) -> bool;
}
