//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    ContentId, MarketingContent, NewPricingPlan, NewUser, PricingPlan, PricingPlanId,
    Publication, User,
};
use crate::error::DomainError;

/// Repository for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email, compared case-insensitively
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Check whether a user with this email exists, compared case-insensitively
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Create a new user.
    ///
    /// Returns `DomainError::AlreadyExists` when the email is already taken.
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
}

/// Repository for PricingPlan entities
///
/// Callers pass fully computed plans; the repository never derives
/// `final_price` itself.
#[async_trait]
pub trait PricingPlanRepository: Send + Sync {
    /// List all plans ordered by id
    async fn list(&self) -> Result<Vec<PricingPlan>, DomainError>;

    async fn find_by_id(&self, id: PricingPlanId) -> Result<Option<PricingPlan>, DomainError>;

    async fn create(&self, plan: &NewPricingPlan) -> Result<PricingPlan, DomainError>;

    /// Overwrite a stored plan. `NotFound` if it no longer exists.
    async fn update(&self, plan: &PricingPlan) -> Result<PricingPlan, DomainError>;

    /// Delete a plan, returning whether anything was removed
    async fn delete(&self, id: PricingPlanId) -> Result<bool, DomainError>;
}

/// Repository for a marketing content type
#[async_trait]
pub trait ContentRepository<C: MarketingContent>: Send + Sync {
    /// List all records ordered by display order, then id
    async fn list(&self) -> Result<Vec<C>, DomainError>;

    async fn find_by_id(&self, id: ContentId) -> Result<Option<C>, DomainError>;

    async fn create(&self, draft: &C::Draft, publication: &Publication) -> Result<C, DomainError>;

    /// Overwrite a stored record, returning `None` if it does not exist
    async fn update(
        &self,
        id: ContentId,
        draft: &C::Draft,
        publication: &Publication,
    ) -> Result<Option<C>, DomainError>;

    /// Delete a record, returning whether anything was removed
    async fn delete(&self, id: ContentId) -> Result<bool, DomainError>;
}
