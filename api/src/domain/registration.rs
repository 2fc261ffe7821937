//! Registration rule pipeline
//!
//! Two independent chains, one for the email and one for the password. Each
//! chain stops at its first failure; both always run so the caller gets every
//! field error in one response.

use std::sync::{Arc, OnceLock};

use regex::Regex;
use thiserror::Error;

use crate::domain::entities::RegistrationRequest;
use crate::domain::ports::{DisposableEmailList, DomainResolver};
use crate::domain::ValidationErrors;

/// Minimum password length, in characters
pub const PASSWORD_MIN_LEN: usize = 8;

/// A single failed registration rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationViolation {
    #[error("enter a valid email address")]
    InvalidEmailFormat,

    #[error("the email domain does not exist")]
    NonexistentDomain,

    #[error("could not verify the email domain, try again later")]
    DomainUnverifiable,

    #[error("disposable email addresses are not allowed")]
    DisposableEmailRejected,

    #[error("password must be at least 8 characters")]
    PasswordTooShort,

    #[error("password is too simple — must not match the email or name")]
    PasswordTooSimple,
}

impl RegistrationViolation {
    /// Wire field the violation is reported under
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidEmailFormat
            | Self::NonexistentDomain
            | Self::DomainUnverifiable
            | Self::DisposableEmailRejected => "email",
            Self::PasswordTooShort | Self::PasswordTooSimple => "password",
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
        )
        .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Syntactic email check: a local part, a dotted domain without empty labels
/// and an alphabetic TLD of at least two letters
pub fn is_valid_email_format(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Lowercased domain part of an email address
pub fn email_domain(email: &str) -> Option<String> {
    email
        .rsplit_once('@')
        .map(|(_, domain)| domain.to_ascii_lowercase())
        .filter(|domain| !domain.is_empty())
}

/// Checks a registration request against the email and password rules
pub struct RegistrationValidator<DR: ?Sized, DL: ?Sized> {
    resolver: Arc<DR>,
    disposable: Arc<DL>,
}

impl<DR, DL> RegistrationValidator<DR, DL>
where
    DR: DomainResolver + ?Sized,
    DL: DisposableEmailList + ?Sized,
{
    pub fn new(resolver: Arc<DR>, disposable: Arc<DL>) -> Self {
        Self {
            resolver,
            disposable,
        }
    }

    /// Run both chains and collect their failures keyed by field
    pub async fn validate(&self, request: &RegistrationRequest) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if let Err(violation) = self.check_email(&request.email).await {
            errors.add(violation.field(), violation.to_string());
        }
        if let Err(violation) = check_password(request) {
            errors.add(violation.field(), violation.to_string());
        }

        errors
    }

    async fn check_email(&self, email: &str) -> Result<(), RegistrationViolation> {
        if !is_valid_email_format(email) {
            return Err(RegistrationViolation::InvalidEmailFormat);
        }
        let domain = email_domain(email).ok_or(RegistrationViolation::InvalidEmailFormat)?;

        match self.resolver.domain_exists(&domain).await {
            Ok(true) => {}
            Ok(false) => return Err(RegistrationViolation::NonexistentDomain),
            Err(e) => {
                tracing::warn!(domain = %domain, error = %e, "Email domain lookup failed");
                return Err(RegistrationViolation::DomainUnverifiable);
            }
        }

        if self.disposable.is_disposable(&domain) {
            return Err(RegistrationViolation::DisposableEmailRejected);
        }

        Ok(())
    }
}

/// Length first, then similarity to the user's identity
pub fn check_password(request: &RegistrationRequest) -> Result<(), RegistrationViolation> {
    let password = &request.password;

    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(RegistrationViolation::PasswordTooShort);
    }

    let lowered = password.to_lowercase();
    let matches_identity = [&request.email, &request.first_name, &request.last_name]
        .into_iter()
        .any(|value| !value.is_empty() && value.to_lowercase() == lowered);
    if matches_identity {
        return Err(RegistrationViolation::PasswordTooSimple);
    }

    Ok(())
}
