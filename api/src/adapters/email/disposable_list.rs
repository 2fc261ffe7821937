//! Disposable email domain list
//!
//! A built-in list of throwaway-inbox providers, optionally extended from a
//! file with one domain per line.

use std::collections::HashSet;
use std::path::Path;

use crate::domain::ports::DisposableEmailList;

const BUILTIN_DOMAINS: &[&str] = &[
    "10minutemail.com",
    "10minutemail.net",
    "dispostable.com",
    "emailondeck.com",
    "fakeinbox.com",
    "getnada.com",
    "guerrillamail.com",
    "guerrillamail.info",
    "guerrillamail.net",
    "guerrillamail.org",
    "maildrop.cc",
    "mailinator.com",
    "mailnesia.com",
    "mintemail.com",
    "mohmal.com",
    "sharklasers.com",
    "spamgourmet.com",
    "temp-mail.org",
    "tempmail.com",
    "tempmailo.com",
    "throwawaymail.com",
    "trashmail.com",
    "yopmail.com",
    "yopmail.net",
];

/// Set-backed implementation of DisposableEmailList
#[derive(Debug, Clone)]
pub struct StaticDisposableEmailList {
    domains: HashSet<String>,
}

impl StaticDisposableEmailList {
    /// The built-in providers only
    pub fn builtin() -> Self {
        Self {
            domains: BUILTIN_DOMAINS.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Built-in providers plus the domains listed in `path`
    pub fn with_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::builtin().extended(&text))
    }

    /// Add domains from text: one per line, `#` starts a comment
    pub fn extended(mut self, text: &str) -> Self {
        let extra = text
            .lines()
            .map(|line| line.split('#').next().unwrap_or_default().trim())
            .filter(|line| !line.is_empty())
            .map(|line| line.trim_start_matches('@').to_ascii_lowercase());
        self.domains.extend(extra);
        self
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }
}

impl DisposableEmailList for StaticDisposableEmailList {
    fn is_disposable(&self, domain: &str) -> bool {
        // mail.yopmail.com matches yopmail.com
        let mut candidate = domain;
        loop {
            if self.domains.contains(candidate) {
                return true;
            }
            match candidate.split_once('.') {
                Some((_, parent)) if parent.contains('.') => candidate = parent,
                _ => return false,
            }
        }
    }
}
