//! DNS-over-HTTPS domain resolver
//!
//! Asks a JSON DoH endpoint (Cloudflare by default) for MX records, then A
//! records. A domain exists when either lookup returns an answer.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::ports::DomainResolver;
use crate::error::EmailCheckError;

/// DNS response code for a successful query
const RCODE_NOERROR: u32 = 0;
/// DNS response code for a name that does not exist
const RCODE_NXDOMAIN: u32 = 3;

/// Outcome of a single record lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookup {
    Found,
    NoRecords,
    NoSuchDomain,
}

#[derive(Debug, Deserialize)]
struct DohResponse {
    #[serde(rename = "Status")]
    status: u32,
    #[serde(rename = "Answer", default)]
    answer: Vec<serde_json::Value>,
}

impl DohResponse {
    fn lookup(&self) -> Result<Lookup, EmailCheckError> {
        match self.status {
            RCODE_NOERROR if self.answer.is_empty() => Ok(Lookup::NoRecords),
            RCODE_NOERROR => Ok(Lookup::Found),
            RCODE_NXDOMAIN => Ok(Lookup::NoSuchDomain),
            rcode => Err(EmailCheckError::Malformed(format!(
                "DNS response code {}",
                rcode
            ))),
        }
    }
}

/// DoH implementation of DomainResolver
pub struct DohDomainResolver {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl DohDomainResolver {
    pub fn new(base_url: String, timeout_ms: u64) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    fn query_url(&self, domain: &str, record_type: &str) -> String {
        format!(
            "{}?name={}&type={}",
            self.base_url,
            encode(domain),
            record_type
        )
    }

    async fn query(&self, domain: &str, record_type: &str) -> Result<Lookup, EmailCheckError> {
        let request = self
            .http
            .get(self.query_url(domain, record_type))
            .header(ACCEPT, "application/dns-json")
            .send();

        let response = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| EmailCheckError::Timeout(self.timeout.as_millis() as u64))??;

        let status = response.status();
        if !status.is_success() {
            return Err(EmailCheckError::Status(status.as_u16()));
        }

        let body: DohResponse = response
            .json()
            .await
            .map_err(|e| EmailCheckError::Malformed(e.to_string()))?;

        body.lookup()
    }
}

#[async_trait]
impl DomainResolver for DohDomainResolver {
    async fn domain_exists(&self, domain: &str) -> Result<bool, EmailCheckError> {
        match self.query(domain, "MX").await? {
            Lookup::Found => return Ok(true),
            Lookup::NoSuchDomain => return Ok(false),
            Lookup::NoRecords => {}
        }

        // No MX: mail falls back to the A record
        Ok(self.query(domain, "A").await? == Lookup::Found)
    }
}
