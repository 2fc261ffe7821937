//! Registration service
//!
//! Validates a sign-up, creates the candidate account and issues its session
//! tokens. Nothing is persisted and no tokens are issued unless every step
//! succeeds.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::entities::{NewUser, RegistrationRequest, Role, User};
use crate::domain::ports::{
    DisposableEmailList, DomainResolver, PasswordHasher, TokenIssuer, TokenPair, UserRepository,
};
use crate::domain::registration::RegistrationValidator;
use crate::domain::ValidationErrors;
use crate::error::{AppError, AuthError, DomainError};

/// Field message for an email that is already registered
pub const EMAIL_TAKEN: &str = "a user with this email already exists";

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Registration rejected: {0}")]
    Validation(ValidationErrors),

    #[error("{}", EMAIL_TAKEN)]
    Conflict,

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl From<RegistrationError> for AppError {
    fn from(e: RegistrationError) -> Self {
        match e {
            RegistrationError::Validation(errors) => AppError::Validation(errors),
            RegistrationError::Conflict => {
                let mut errors = ValidationErrors::new();
                errors.add("email", EMAIL_TAKEN);
                AppError::Conflict(errors)
            }
            RegistrationError::Domain(e) => AppError::Domain(e),
            RegistrationError::Auth(e) => AppError::Auth(e),
        }
    }
}

/// A freshly registered user with their session
#[derive(Debug)]
pub struct Registration {
    pub user: User,
    pub tokens: TokenPair,
}

/// Service for candidate sign-up
pub struct RegistrationService<U: ?Sized, DR: ?Sized, DL: ?Sized, H: ?Sized, T: ?Sized> {
    users: Arc<U>,
    validator: RegistrationValidator<DR, DL>,
    hasher: Arc<H>,
    tokens: Arc<T>,
}

impl<U, DR, DL, H, T> RegistrationService<U, DR, DL, H, T>
where
    U: UserRepository + ?Sized,
    DR: DomainResolver + ?Sized,
    DL: DisposableEmailList + ?Sized,
    H: PasswordHasher + ?Sized,
    T: TokenIssuer + ?Sized,
{
    pub fn new(
        users: Arc<U>,
        resolver: Arc<DR>,
        disposable: Arc<DL>,
        hasher: Arc<H>,
        tokens: Arc<T>,
    ) -> Self {
        Self {
            users,
            validator: RegistrationValidator::new(resolver, disposable),
            hasher,
            tokens,
        }
    }

    /// Register a new candidate
    ///
    /// 1. Normalize and validate the request
    /// 2. Reject an email that is already taken
    /// 3. Hash the password and create the user
    /// 4. Issue access and refresh tokens
    pub async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<Registration, RegistrationError> {
        let request = request.normalized();

        let errors = self.validator.validate(&request).await;
        if !errors.is_empty() {
            tracing::debug!(fields = %errors, "Registration rejected");
            return Err(RegistrationError::Validation(errors));
        }

        let email = request.email.to_lowercase();
        if self.users.exists_by_email(&email).await? {
            return Err(RegistrationError::Conflict);
        }

        let encrypted_password = self.hasher.hash(&request.password)?;
        let new_user = NewUser {
            email,
            encrypted_password,
            first_name: request.first_name,
            last_name: request.last_name,
            role: Role::Candidate,
        };

        // A concurrent sign-up can still win the unique index
        let user = match self.users.create(&new_user).await {
            Ok(user) => user,
            Err(DomainError::AlreadyExists(_)) => return Err(RegistrationError::Conflict),
            Err(e) => return Err(e.into()),
        };

        let tokens = self.tokens.issue(&user.email)?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(Registration { user, tokens })
    }
}
